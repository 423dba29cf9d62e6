//! Application module - the data loader and the submitter
//!
//! Composes a transport ([`RequestApi`]) with the response conventions of
//! the spreadsheet macro: the roster arrives as a class-to-names object or
//! an `{ error }` body, and a submission only counts when the body says
//! `status: "success"`.

use crate::client::GENERIC_SERVER_ERROR;
use crate::error::{ErrorKind, Result};
use crate::interface::RequestApi;
use crate::model::dtos::SubmissionPayload;
use crate::model::structs::Roster;
use serde_json::Value;

#[cfg(feature = "no-wasm")]
pub mod native;

/// Interpret a roster body. `{ error }` replies are failures even on 2xx.
pub fn parse_roster(value: Value) -> Result<Roster> {
    if let Some(error) = value.get("error").and_then(Value::as_str) {
        return Err(ErrorKind::ServerError(error.to_string()).into());
    }
    Ok(serde_json::from_value(value)?)
}

/// Interpret a submission body: the server message on success, otherwise
/// an error built from its `message` field or the generic fallback.
pub fn interpret_submission(value: Value) -> Result<String> {
    if value["status"] == "success" {
        return Ok(value["message"].as_str().unwrap_or_default().to_string());
    }
    let message = value["message"]
        .as_str()
        .unwrap_or(GENERIC_SERVER_ERROR)
        .to_string();
    Err(ErrorKind::ServerError(message).into())
}

pub async fn load_roster<C: RequestApi>(client: &C) -> Result<Roster> {
    let resp = client.fetch_roster().await?;
    parse_roster(resp)
}

pub async fn submit_payment<C: RequestApi>(
    client: &C,
    payload: &SubmissionPayload,
) -> Result<String> {
    let resp = client.submit(payload).await?;
    interpret_submission(resp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roster_object_parses() {
        let roster = parse_roster(json!({"A": ["x", "y"], "B": ["z"]})).unwrap();
        assert_eq!(roster.students_in("A"), vec!["x", "y"]);
    }

    #[test]
    fn roster_error_body_fails() {
        let err = parse_roster(json!({"error": "Sheet tidak ditemukan"})).unwrap_err();
        assert_eq!(err.message(), "Sheet tidak ditemukan");
    }

    #[test]
    fn submission_success_yields_server_message() {
        let msg = interpret_submission(json!({"status": "success", "message": "OK"})).unwrap();
        assert_eq!(msg, "OK");
    }

    #[test]
    fn submission_without_success_status_fails_with_message() {
        let err = interpret_submission(json!({"message": "Nama tidak terdaftar"})).unwrap_err();
        assert_eq!(err.message(), "Nama tidak terdaftar");
    }

    #[test]
    fn submission_with_odd_shape_uses_fallback() {
        let err = interpret_submission(json!("ok")).unwrap_err();
        assert_eq!(err.message(), GENERIC_SERVER_ERROR);
    }
}
