//! Form core - state, events and the pure reducer
//!
//! The form is modeled as an explicit state object with a reducer
//! `(state, event) -> effects`. Network and timer work never happens here;
//! the reducer returns [`Effect`]s for the host to execute, and their
//! completions come back as further [`FormEvent`]s. This keeps every
//! transition testable without a rendering environment.

use crate::model::dtos::SubmissionPayload;
use crate::model::structs::{AmountMode, Branch, FormData, Roster, StatusMessage};

pub mod validate;

/// Fixed weekly dues in rupiah.
pub const KAS_TETAP: u32 = 5_000;

/// Delay before a success banner clears itself.
pub const STATUS_CLEAR_DELAY_MS: u64 = 5_000;

/// Everything the user (or a completed effect) can do to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The form became active; kicks off the roster load.
    Started,
    ClassChanged(String),
    NameChanged(String),
    NameFieldFocused,
    NameSelected(String),
    OutsideClicked,
    DateChanged(String),
    AmountChanged(String),
    AmountModeChanged(AmountMode),
    CountChanged(String),
    BranchSelected(Branch),
    SubmitPressed,
    RosterLoaded { epoch: u64, roster: Roster },
    RosterFailed { epoch: u64, message: String },
    SubmitSucceeded { message: String },
    SubmitFailed { message: String },
    StatusClearElapsed { epoch: u64 },
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LoadRoster { epoch: u64 },
    Submit { payload: SubmissionPayload },
    ScheduleStatusClear { epoch: u64, delay_ms: u64 },
}

/// Complete form state. Epochs tag in-flight roster loads and the visible
/// status banner so that superseded completions are dropped instead of
/// overwriting newer state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub branch: Branch,
    pub amount_mode: AmountMode,
    pub data: FormData,
    pub roster: Roster,
    pub roster_loading: bool,
    pub dropdown_open: bool,
    pub submitting: bool,
    pub status: Option<StatusMessage>,
    roster_epoch: u64,
    status_epoch: u64,
}

impl FormState {
    /// Sorted class options for the class select.
    pub fn class_options(&self) -> Vec<&str> {
        self.roster.class_names()
    }

    /// Autocomplete entries for the name field: the selected class's
    /// students, case-insensitively filtered by the current input as a
    /// substring, alphabetically ordered.
    pub fn name_options(&self) -> Vec<&str> {
        if self.branch.is_new_student() || self.data.kelas.is_empty() {
            return Vec::new();
        }
        let names = self.roster.students_in(&self.data.kelas);
        if self.data.nama.is_empty() {
            return names;
        }
        let needle = self.data.nama.to_lowercase();
        names
            .into_iter()
            .filter(|n| n.to_lowercase().contains(&needle))
            .collect()
    }

    /// The submit control is disabled while a submission is in flight or
    /// the roster is still loading.
    pub fn submit_disabled(&self) -> bool {
        self.submitting || self.roster_loading
    }

    fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
        self.status_epoch += 1;
    }

    fn clear_status(&mut self) {
        if self.status.is_some() {
            self.status = None;
            self.status_epoch += 1;
        }
    }

    fn begin_roster_load(&mut self) -> Vec<Effect> {
        self.roster_epoch += 1;
        self.roster_loading = true;
        self.clear_status();
        vec![Effect::LoadRoster {
            epoch: self.roster_epoch,
        }]
    }

    fn switch_branch(&mut self, next: Branch) -> Vec<Effect> {
        if next == self.branch {
            return Vec::new();
        }
        let was_new = self.branch.is_new_student();
        self.clear_status();
        if was_new == next.is_new_student() {
            // Between payment branches only the branch-specific fields
            // reset; class, name and date stay meaningful.
            self.branch = next;
            self.data.jumlah.clear();
            self.data.count.clear();
            self.amount_mode = AmountMode::default();
            return Vec::new();
        }
        // Toggling registration mode resets the whole form.
        self.data = FormData::default();
        self.amount_mode = AmountMode::default();
        self.dropdown_open = false;
        self.branch = next;
        if was_new {
            self.begin_roster_load()
        } else {
            // Entering new-student mode: the loader must not run, and any
            // in-flight fetch is superseded.
            self.roster_epoch += 1;
            self.roster_loading = false;
            Vec::new()
        }
    }
}

pub fn reduce(state: &mut FormState, event: FormEvent) -> Vec<Effect> {
    match event {
        FormEvent::Started => state.begin_roster_load(),
        FormEvent::ClassChanged(kelas) => {
            state.clear_status();
            if !state.branch.is_new_student() && kelas != state.data.kelas {
                state.data.nama.clear();
            }
            state.data.kelas = kelas;
            Vec::new()
        }
        FormEvent::NameChanged(nama) => {
            state.clear_status();
            state.data.nama = nama;
            if !state.branch.is_new_student() {
                state.dropdown_open = true;
            }
            Vec::new()
        }
        FormEvent::NameFieldFocused => {
            if !state.branch.is_new_student() {
                state.dropdown_open = true;
            }
            Vec::new()
        }
        FormEvent::NameSelected(nama) => {
            state.data.nama = nama;
            state.dropdown_open = false;
            Vec::new()
        }
        FormEvent::OutsideClicked => {
            state.dropdown_open = false;
            Vec::new()
        }
        FormEvent::DateChanged(tanggal) => {
            state.clear_status();
            state.data.tanggal = tanggal;
            Vec::new()
        }
        FormEvent::AmountChanged(raw) => {
            state.clear_status();
            state.data.jumlah = raw.chars().filter(char::is_ascii_digit).collect();
            Vec::new()
        }
        FormEvent::AmountModeChanged(mode) => {
            state.clear_status();
            state.amount_mode = mode;
            if mode == AmountMode::Fixed {
                state.data.jumlah.clear();
            }
            Vec::new()
        }
        FormEvent::CountChanged(count) => {
            state.clear_status();
            state.data.count = count;
            Vec::new()
        }
        FormEvent::BranchSelected(branch) => state.switch_branch(branch),
        FormEvent::SubmitPressed => {
            if state.submit_disabled() {
                return Vec::new();
            }
            match validate::build_payload(state) {
                Ok(payload) => {
                    state.submitting = true;
                    state.clear_status();
                    vec![Effect::Submit { payload }]
                }
                Err(message) => {
                    state.set_status(StatusMessage::error(message));
                    Vec::new()
                }
            }
        }
        FormEvent::RosterLoaded { epoch, roster } => {
            if epoch == state.roster_epoch {
                state.roster = roster;
                state.roster_loading = false;
            }
            Vec::new()
        }
        FormEvent::RosterFailed { epoch, message } => {
            if epoch == state.roster_epoch {
                state.roster_loading = false;
                state.set_status(StatusMessage::error(format!(
                    "Gagal memuat data siswa: {message}"
                )));
            }
            Vec::new()
        }
        FormEvent::SubmitSucceeded { message } => {
            state.submitting = false;
            state.data = FormData::default();
            state.amount_mode = AmountMode::default();
            state.dropdown_open = false;
            state.set_status(StatusMessage::success(message));
            let mut effects = vec![Effect::ScheduleStatusClear {
                epoch: state.status_epoch,
                delay_ms: STATUS_CLEAR_DELAY_MS,
            }];
            if state.branch.is_new_student() {
                // Registration done; fall back to the payment form, which
                // needs the fresh roster.
                state.branch = Branch::default();
                effects.extend(state.begin_roster_load());
            }
            effects
        }
        FormEvent::SubmitFailed { message } => {
            state.submitting = false;
            state.set_status(StatusMessage::error(format!("Gagal: {message}")));
            Vec::new()
        }
        FormEvent::StatusClearElapsed { epoch } => {
            if epoch == state.status_epoch {
                state.status = None;
                state.status_epoch += 1;
            }
            Vec::new()
        }
    }
}
