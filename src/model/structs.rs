use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Class name -> student names, as served by the web app.
///
/// Loaded once per existing-student session and read-only to the form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Roster(pub HashMap<String, Vec<String>>);

impl Roster {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Class names, alphabetically ordered.
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Students of one class, alphabetically ordered. Unknown class is empty.
    pub fn students_in(&self, kelas: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .0
            .get(kelas)
            .map(|v| v.iter().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }
}

/// The four user-toggled form modes. `NewStudent` registers a student,
/// the other three record a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Branch {
    NewStudent,
    #[default]
    SameDay,
    Arrears,
    Advance,
}

impl Branch {
    pub fn is_new_student(self) -> bool {
        self == Branch::NewStudent
    }

    /// Wire payment method, `None` in new-student mode.
    pub fn payment_method(self) -> Option<PaymentMethod> {
        match self {
            Branch::NewStudent => None,
            Branch::SameDay => Some(PaymentMethod::SameDay),
            Branch::Arrears => Some(PaymentMethod::Arrears),
            Branch::Advance => Some(PaymentMethod::Advance),
        }
    }
}

/// Payment method as sent to the web app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    SameDay,
    Arrears,
    Advance,
}

/// Same-day amount entry: the fixed weekly dues or a hand-typed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountMode {
    #[default]
    Fixed,
    Custom,
}

/// Raw input values, mutated exclusively by event handlers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pub kelas: String,
    pub nama: String,
    pub tanggal: String,
    /// Custom amount, digits only.
    pub jumlah: String,
    /// Repeat count for arrears/advance, as typed.
    pub count: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Transient banner shown under the form.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        StatusMessage {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}
