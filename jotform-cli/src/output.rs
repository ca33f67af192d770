// jotform-cli/src/output.rs
use serde::Serialize;

/// Standard JSON response envelope
#[derive(Debug, Serialize)]
pub struct Response<T> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorResponse>,
}

impl<T> Response<T> {
    pub fn ok(result: T) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(error: ErrorResponse) -> Response<()> {
        Response::<()> {
            ok: false,
            result: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    type_: &'static str,
    message: String,
}

impl ErrorResponse {
    pub fn safety_rejected(message: String) -> Self {
        Self {
            type_: "safety_rejected",
            message,
        }
    }

    pub fn invalid_input(message: String) -> Self {
        Self {
            type_: "invalid_input",
            message,
        }
    }

    pub fn api_error(message: String) -> Self {
        Self {
            type_: "api_error",
            message,
        }
    }
}

/// Exit codes for script and agent consumers
#[derive(Debug, Clone, Copy)]
pub enum ExitCode {
    Success = 0,
    TransientError = 1,
    PermanentError = 2,
    SafetyRejected = 3,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

// Print response to stdout
pub fn print_response<T: Serialize>(resp: &Response<T>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(resp)?);
    Ok(())
}

/// Print an API payload. JSON payloads are wrapped in the response
/// envelope; anything else (XML mode) is written out verbatim.
pub fn print_payload(payload: &[u8]) -> anyhow::Result<()> {
    match serde_json::from_slice::<serde_json::Value>(payload) {
        Ok(value) => print_response(&Response::ok(value)),
        Err(_) => {
            println!("{}", String::from_utf8_lossy(payload));
            Ok(())
        }
    }
}

/// Print a styled success message
pub fn print_success(message: &str) {
    let term = console::Term::stdout();
    let _ = term.write_str(&format!("{} {}\n", console::style("✓").green(), message));
}

/// Print a styled error message
pub fn print_error(message: &str) {
    let term = console::Term::stderr();
    let _ = term.write_str(&format!("{} {}\n", console::style("Error:").red(), message));
}

/// Reject a destructive operation that was not confirmed with --force.
/// Prints the envelope and exits.
pub fn reject_unforced(operation: &str) -> ! {
    let resp = Response::<()>::error(ErrorResponse::safety_rejected(format!(
        "--force flag is required to {operation}"
    )));
    let _ = print_response(&resp);
    std::process::exit(ExitCode::SafetyRejected.code());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_shape() {
        let resp = Response::ok(serde_json::json!({"id": "91234"}));
        let encoded = serde_json::to_string(&resp).unwrap();
        assert_eq!(encoded, r#"{"ok":true,"result":{"id":"91234"}}"#);
    }

    #[test]
    fn error_envelope_shape() {
        let resp = Response::<()>::error(ErrorResponse::invalid_input("bad filter".into()));
        let encoded = serde_json::to_string(&resp).unwrap();
        assert_eq!(
            encoded,
            r#"{"ok":false,"error":{"type":"invalid_input","message":"bad filter"}}"#
        );
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::SafetyRejected.code(), 3);
    }
}
