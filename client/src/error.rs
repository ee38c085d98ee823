use thiserror::Error;

/// Errors produced by CMDB operations.
///
/// The client never retries or reinterprets a failure. Callers inspect the
/// variant (or [`CmdbError::is_not_found`]) to decide what a failure means.
#[derive(Debug, Error)]
pub enum CmdbError {
    /// Connection failure, timeout, TLS error, or an unreadable body.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status with a body that is not a CMDB envelope.
    #[error("appliance returned HTTP {http_status}: {body}")]
    Status { http_status: u16, body: String },

    /// The appliance answered with an envelope whose `status` is not `success`.
    #[error("{}", format_api_error(.http_status, .error_code, .status))]
    Api {
        http_status: u16,
        error_code: Option<i64>,
        status: String,
    },

    /// Success status but the body is not valid JSON.
    #[error("failed to decode appliance response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Valid JSON that does not have the expected envelope shape.
    #[error("unexpected response shape: {0}")]
    Malformed(String),

    /// The object key cannot be sent as a single path segment.
    #[error("invalid object key {0:?}: keys must be non-empty and not `.` or `..`")]
    InvalidKey(String),

    /// The client could not be built from its configuration.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

pub type CmdbResult<T> = Result<T, CmdbError>;

impl CmdbError {
    /// True when the appliance reported that the addressed object does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            CmdbError::Api {
                http_status,
                error_code,
                ..
            } => *http_status == 404 || *error_code == Some(-3),
            CmdbError::Status { http_status, .. } => *http_status == 404,
            _ => false,
        }
    }

    /// The HTTP status reported by the appliance, if the request got that far.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            CmdbError::Api { http_status, .. } | CmdbError::Status { http_status, .. } => {
                Some(*http_status)
            }
            CmdbError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Human readable text for the appliance's well-known CLI error codes.
pub fn describe_error_code(code: i64) -> Option<&'static str> {
    let text = match code {
        -1 => "Invalid length of value.",
        -2 => "Index out of range.",
        -3 => "Entry not found.",
        -4 => "Maximum number of entries has been reached.",
        -5 => "A duplicate entry already exists.",
        -6 => "Failed memory allocation.",
        -7 => "Value conflicts with system settings.",
        -8 => "Invalid IP Address.",
        -9 => "Invalid IP Netmask.",
        -10 => "Invalid gateway address.",
        -15 => "Invalid value.",
        -23 => "Entry is used.",
        -651 => "Input value is invalid.",
        _ => return None,
    };
    Some(text)
}

fn format_api_error(http_status: &u16, error_code: &Option<i64>, status: &str) -> String {
    let mut msg = format!("appliance rejected request (HTTP {http_status}, status {status:?})");
    if let Some(code) = *error_code {
        msg.push_str(&format!(", error {code}"));
        if let Some(text) = describe_error_code(code) {
            msg.push_str(&format!(": {text}"));
        }
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_includes_description() {
        let err = CmdbError::Api {
            http_status: 500,
            error_code: Some(-5),
            status: "error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("HTTP 500"), "{msg}");
        assert!(msg.contains("error -5"), "{msg}");
        assert!(msg.contains("duplicate entry"), "{msg}");
    }

    #[test]
    fn test_api_error_message_unknown_code() {
        let err = CmdbError::Api {
            http_status: 400,
            error_code: Some(-9999),
            status: "error".to_string(),
        };
        assert!(err.to_string().ends_with("error -9999"));
    }

    #[test]
    fn test_not_found_detection() {
        let by_status = CmdbError::Api {
            http_status: 404,
            error_code: None,
            status: "error".to_string(),
        };
        assert!(by_status.is_not_found());

        let by_code = CmdbError::Api {
            http_status: 500,
            error_code: Some(-3),
            status: "error".to_string(),
        };
        assert!(by_code.is_not_found());

        let plain = CmdbError::Status {
            http_status: 404,
            body: "<html>".to_string(),
        };
        assert!(plain.is_not_found());

        let other = CmdbError::InvalidKey("..".to_string());
        assert!(!other.is_not_found());
        assert!(other.to_string().contains("\"..\""));

        let other = CmdbError::Malformed("x".to_string());
        assert!(!other.is_not_found());
        assert_eq!(other.http_status(), None);
    }

    #[test]
    fn test_describe_error_code() {
        assert_eq!(describe_error_code(-3), Some("Entry not found."));
        assert_eq!(describe_error_code(0), None);
    }
}
