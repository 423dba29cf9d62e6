//! Client module - transports for the roster/submission web app
//!
//! This module provides a unified interface for talking to the Apps Script
//! endpoint while supporting different implementations for WASM (gloo_net)
//! and no-WASM (reqwest) environments.

/// Production deployment of the spreadsheet macro.
pub const WEB_APP_URL: &str =
    "https://script.google.com/macros/s/AKfycbyAHiFKZ-akyO1E_rsWVaedmxlw9y-edVKtlSpP5OQXDN-ceM1uZRG9CqZLqjrJ2Oxq/exec";

/// Fallback text when a failing response carries no `message` field.
pub const GENERIC_SERVER_ERROR: &str = "Terjadi kesalahan dari server.";

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

use crate::error::{ErrorKind, Result};
use serde_json::Value;

/// Map an HTTP status plus body text to the macro's reply, shared by both
/// transports. A non-2xx response surfaces the body's `message` field when
/// parseable, else the generic fallback; a 2xx body must be valid JSON.
pub fn interpret_response(ok: bool, text: &str) -> Result<Value> {
    let json = serde_json::from_str::<Value>(text);
    if !ok {
        let message = json
            .ok()
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .unwrap_or(GENERIC_SERVER_ERROR)
            .to_string();
        return Err(ErrorKind::ServerError(message).into());
    }
    json.map_err(|_| ErrorKind::ParseError(format!("Invalid JSON response: {text}")).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_status_with_valid_json_parses() {
        let value = interpret_response(true, r#"{"status":"success","message":"OK"}"#).unwrap();
        assert_eq!(value, json!({"status": "success", "message": "OK"}));
    }

    #[test]
    fn ok_status_with_invalid_json_fails() {
        let err = interpret_response(true, "<html>maintenance</html>").unwrap_err();
        assert!(err.message().starts_with("Invalid JSON response:"));
    }

    #[test]
    fn failing_status_surfaces_the_body_message() {
        let err = interpret_response(false, r#"{"message":"Kuota penuh"}"#).unwrap_err();
        assert_eq!(err.message(), "Kuota penuh");
    }

    #[test]
    fn failing_status_without_message_uses_fallback() {
        let err = interpret_response(false, r#"{"status":"denied"}"#).unwrap_err();
        assert_eq!(err.message(), GENERIC_SERVER_ERROR);

        let err = interpret_response(false, "Bad Gateway").unwrap_err();
        assert_eq!(err.message(), GENERIC_SERVER_ERROR);
    }
}
