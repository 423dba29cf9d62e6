//! Branch validation and payload building
//!
//! Every branch requires a class and a name. Same-day payments also need a
//! date and an amount (the fixed dues or a positive custom integer);
//! arrears/advance need a date and a positive repeat count. The error
//! variant is the user-facing banner text.

use super::{FormState, KAS_TETAP};
use crate::model::dtos::SubmissionPayload;
use crate::model::structs::{AmountMode, Branch};

/// Validate the state and derive the branch-specific payload, or the
/// message to show instead.
pub fn build_payload(state: &FormState) -> Result<SubmissionPayload, String> {
    let kelas = state.data.kelas.trim();
    let nama = state.data.nama.trim();
    if kelas.is_empty() {
        return Err("Kelas wajib diisi.".to_string());
    }
    if nama.is_empty() {
        return Err("Nama siswa wajib diisi.".to_string());
    }

    if state.branch.is_new_student() {
        return Ok(SubmissionPayload::new_student(kelas, nama));
    }

    let tanggal = state.data.tanggal.trim();
    if tanggal.is_empty() {
        return Err("Tanggal pembayaran wajib diisi.".to_string());
    }

    let mut payload = SubmissionPayload {
        kelas: kelas.to_string(),
        nama: nama.to_string(),
        is_new_student: false,
        payment_method: state.branch.payment_method(),
        tanggal: Some(tanggal.to_string()),
        jumlah: None,
        count: None,
    };

    match state.branch {
        Branch::SameDay => {
            let jumlah = match state.amount_mode {
                AmountMode::Fixed => KAS_TETAP.to_string(),
                AmountMode::Custom => match state.data.jumlah.trim().parse::<u32>() {
                    Ok(n) if n > 0 => n.to_string(),
                    _ => return Err("Jumlah kas harus angka lebih dari 0.".to_string()),
                },
            };
            payload.jumlah = Some(jumlah);
        }
        Branch::Arrears | Branch::Advance => match state.data.count.trim().parse::<u32>() {
            Ok(n) if n > 0 => payload.count = Some(n),
            _ => return Err("Jumlah minggu harus angka lebih dari 0.".to_string()),
        },
        // Handled by the early return above.
        Branch::NewStudent => {}
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::structs::PaymentMethod;
    use serde_json::json;

    fn payment_state(branch: Branch) -> FormState {
        let mut state = FormState {
            branch,
            ..FormState::default()
        };
        state.data.kelas = "X IPA 1".to_string();
        state.data.nama = "Budi".to_string();
        state.data.tanggal = "2026-08-25".to_string();
        state
    }

    #[test]
    fn empty_class_or_name_is_rejected() {
        let mut state = FormState::default();
        assert_eq!(build_payload(&state), Err("Kelas wajib diisi.".into()));
        state.data.kelas = "A".to_string();
        assert_eq!(build_payload(&state), Err("Nama siswa wajib diisi.".into()));
    }

    #[test]
    fn payment_requires_date() {
        let mut state = payment_state(Branch::SameDay);
        state.data.tanggal.clear();
        assert_eq!(
            build_payload(&state),
            Err("Tanggal pembayaran wajib diisi.".into())
        );
    }

    #[test]
    fn fixed_amount_uses_the_weekly_dues() {
        let payload = build_payload(&payment_state(Branch::SameDay)).unwrap();
        assert_eq!(payload.jumlah.as_deref(), Some("5000"));
        assert_eq!(payload.payment_method, Some(PaymentMethod::SameDay));
        assert_eq!(payload.count, None);
    }

    #[test]
    fn empty_custom_amount_is_rejected() {
        let mut state = payment_state(Branch::SameDay);
        state.amount_mode = AmountMode::Custom;
        assert_eq!(
            build_payload(&state),
            Err("Jumlah kas harus angka lebih dari 0.".into())
        );
        state.data.jumlah = "0".to_string();
        assert!(build_payload(&state).is_err());
        state.data.jumlah = "2000".to_string();
        assert_eq!(
            build_payload(&state).unwrap().jumlah.as_deref(),
            Some("2000")
        );
    }

    #[test]
    fn arrears_and_advance_require_positive_count() {
        for branch in [Branch::Arrears, Branch::Advance] {
            let mut state = payment_state(branch);
            assert!(build_payload(&state).is_err());
            state.data.count = "0".to_string();
            assert!(build_payload(&state).is_err());
            state.data.count = "abc".to_string();
            assert!(build_payload(&state).is_err());
            state.data.count = "3".to_string();
            let payload = build_payload(&state).unwrap();
            assert_eq!(payload.count, Some(3));
            assert_eq!(payload.jumlah, None);
        }
    }

    #[test]
    fn new_student_payload_carries_identity_only() {
        let mut state = FormState {
            branch: Branch::NewStudent,
            ..FormState::default()
        };
        state.data.kelas = "X IPA 1".to_string();
        state.data.nama = "Budi Hartono".to_string();
        let payload = build_payload(&state).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "kelas": "X IPA 1",
                "nama": "Budi Hartono",
                "isNewStudent": true,
            })
        );
    }

    #[test]
    fn same_day_wire_shape_omits_count() {
        let payload = build_payload(&payment_state(Branch::SameDay)).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "kelas": "X IPA 1",
                "nama": "Budi",
                "isNewStudent": false,
                "paymentMethod": "sameDay",
                "tanggal": "2026-08-25",
                "jumlah": "5000",
            })
        );
    }

    #[test]
    fn arrears_wire_shape_omits_amount() {
        let mut state = payment_state(Branch::Arrears);
        state.data.count = "2".to_string();
        let payload = build_payload(&state).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "kelas": "X IPA 1",
                "nama": "Budi",
                "isNewStudent": false,
                "paymentMethod": "arrears",
                "tanggal": "2026-08-25",
                "count": 2,
            })
        );
    }
}
