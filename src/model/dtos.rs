use serde::Serialize;

use super::structs::PaymentMethod;

/// JSON body of a submission, field names matching the web app's macro.
///
/// Only the fields of the active branch are serialized: same-day payments
/// carry `jumlah`, arrears/advance carry `count`, new-student registrations
/// carry neither.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub kelas: String,
    pub nama: String,
    pub is_new_student: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tanggal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jumlah: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl SubmissionPayload {
    /// Registration payload; payment fields stay empty.
    pub fn new_student(kelas: impl Into<String>, nama: impl Into<String>) -> Self {
        SubmissionPayload {
            kelas: kelas.into(),
            nama: nama.into(),
            is_new_student: true,
            payment_method: None,
            tanggal: None,
            jumlah: None,
            count: None,
        }
    }
}
