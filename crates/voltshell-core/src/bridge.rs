//! Bridge contract exposed to hosted web content.
//!
//! Hosted content talks to the shell through a fixed, versioned set of named
//! operations. Calls arrive as JSON, are validated into a typed
//! [`BridgeCommand`] and answered with a [`BridgeReply`].
//!
//! # Wire Format
//!
//! ```json
//! { "version": 1, "id": 7, "call": { "op": "openExternalLink", "url": "https://example.com" } }
//! { "id": 7, "status": "ok" }
//! { "id": 8, "status": "error", "message": "Unsupported bridge version 2 (supported: 1)" }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::ports::HostError;

/// Version of the bridge contract implemented by this crate.
pub const BRIDGE_PROTOCOL_VERSION: u32 = 1;

/// URL schemes `openExternalLink` will hand to the host.
pub const EXTERNAL_LINK_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Errors produced while decoding or executing a bridge call.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The payload is not a valid bridge call.
    #[error("Malformed bridge call: {0}")]
    Malformed(String),

    /// The caller speaks a different contract version.
    #[error("Unsupported bridge version {requested} (supported: {supported})")]
    UnsupportedVersion { requested: u64, supported: u32 },

    /// An operation argument failed validation.
    #[error("Invalid argument for {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    /// The host facility behind the operation failed.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Envelope sent by hosted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeCall {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub call: BridgeRequest,
}

/// Operations callable from hosted content, as they appear on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum BridgeRequest {
    ShowToast { message: String },
    OpenExternalLink { url: String },
    GetDeviceInfo,
    CheckServerConnection,
}

impl BridgeRequest {
    /// Wire name of the operation.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::ShowToast { .. } => "showToast",
            Self::OpenExternalLink { .. } => "openExternalLink",
            Self::GetDeviceInfo => "getDeviceInfo",
            Self::CheckServerConnection => "checkServerConnection",
        }
    }

    /// Validate arguments and produce a typed command.
    pub fn validate(self) -> Result<BridgeCommand, BridgeError> {
        match self {
            Self::ShowToast { message } => {
                if message.trim().is_empty() {
                    return Err(BridgeError::InvalidArgument {
                        operation: "showToast",
                        reason: "message is empty".to_string(),
                    });
                }
                Ok(BridgeCommand::ShowToast(message))
            }
            Self::OpenExternalLink { url } => {
                let parsed = Url::parse(&url).map_err(|e| BridgeError::InvalidArgument {
                    operation: "openExternalLink",
                    reason: format!("{url}: {e}"),
                })?;
                if !EXTERNAL_LINK_SCHEMES.contains(&parsed.scheme()) {
                    return Err(BridgeError::InvalidArgument {
                        operation: "openExternalLink",
                        reason: format!("scheme '{}' is not allowed", parsed.scheme()),
                    });
                }
                Ok(BridgeCommand::OpenExternalLink(parsed))
            }
            Self::GetDeviceInfo => Ok(BridgeCommand::GetDeviceInfo),
            Self::CheckServerConnection => Ok(BridgeCommand::CheckServerConnection),
        }
    }
}

/// A validated bridge operation, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCommand {
    ShowToast(String),
    OpenExternalLink(Url),
    GetDeviceInfo,
    CheckServerConnection,
}

impl BridgeCommand {
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::ShowToast(_) => "showToast",
            Self::OpenExternalLink(_) => "openExternalLink",
            Self::GetDeviceInfo => "getDeviceInfo",
            Self::CheckServerConnection => "checkServerConnection",
        }
    }
}

/// A decoded call: the caller's id (when recoverable) and the command or error.
#[derive(Debug)]
pub struct BridgeInvocation {
    pub id: Option<u64>,
    pub command: Result<BridgeCommand, BridgeError>,
}

/// Decode and validate a raw JSON payload.
///
/// The version is checked before the operation so that calls from a newer
/// contract are reported as a version mismatch rather than an unknown op.
pub fn decode(payload: &str) -> BridgeInvocation {
    let value: serde_json::Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(e) => {
            return BridgeInvocation {
                id: None,
                command: Err(BridgeError::Malformed(e.to_string())),
            };
        }
    };

    let id = value.get("id").and_then(serde_json::Value::as_u64);
    let command = check_version(&value).and_then(|()| {
        serde_json::from_value::<BridgeCall>(value)
            .map_err(|e| BridgeError::Malformed(e.to_string()))
            .and_then(|call| call.call.validate())
    });

    BridgeInvocation { id, command }
}

fn check_version(value: &serde_json::Value) -> Result<(), BridgeError> {
    let requested = value
        .get("version")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| BridgeError::Malformed("missing numeric field `version`".to_string()))?;
    if requested != u64::from(BRIDGE_PROTOCOL_VERSION) {
        return Err(BridgeError::UnsupportedVersion {
            requested,
            supported: BRIDGE_PROTOCOL_VERSION,
        });
    }
    Ok(())
}

/// Answer sent back to hosted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BridgeReply {
    Ok {
        id: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Error {
        id: Option<u64>,
        message: String,
    },
}

impl BridgeReply {
    pub const fn done(id: Option<u64>) -> Self {
        Self::Ok { id, value: None }
    }

    pub const fn value(id: Option<u64>, value: String) -> Self {
        Self::Ok {
            id,
            value: Some(value),
        }
    }

    pub fn error(id: Option<u64>, error: &BridgeError) -> Self {
        Self::Error {
            id,
            message: error.to_string(),
        }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Serialize for delivery to hosted content.
    pub fn to_json(&self) -> String {
        // Only strings and integers inside; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{\"status\":\"error\"}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_show_toast() {
        let invocation =
            decode(r#"{"version":1,"id":3,"call":{"op":"showToast","message":"Saved"}}"#);
        assert_eq!(invocation.id, Some(3));
        assert_eq!(
            invocation.command.unwrap(),
            BridgeCommand::ShowToast("Saved".to_string())
        );
    }

    #[test]
    fn test_decode_unit_operations_without_id() {
        let invocation = decode(r#"{"version":1,"call":{"op":"getDeviceInfo"}}"#);
        assert_eq!(invocation.id, None);
        assert_eq!(invocation.command.unwrap(), BridgeCommand::GetDeviceInfo);

        let invocation = decode(r#"{"version":1,"call":{"op":"checkServerConnection"}}"#);
        assert_eq!(
            invocation.command.unwrap(),
            BridgeCommand::CheckServerConnection
        );
    }

    #[test]
    fn test_decode_rejects_other_versions_first() {
        let invocation = decode(r#"{"version":2,"id":9,"call":{"op":"takePicture"}}"#);
        assert_eq!(invocation.id, Some(9));
        assert!(matches!(
            invocation.command,
            Err(BridgeError::UnsupportedVersion {
                requested: 2,
                supported: 1
            })
        ));
    }

    #[test]
    fn test_decode_malformed_payloads() {
        assert!(matches!(
            decode("not json").command,
            Err(BridgeError::Malformed(_))
        ));
        assert!(matches!(
            decode(r#"{"call":{"op":"getDeviceInfo"}}"#).command,
            Err(BridgeError::Malformed(_))
        ));
        assert!(matches!(
            decode(r#"{"version":1,"call":{"op":"takePicture"}}"#).command,
            Err(BridgeError::Malformed(_))
        ));
    }

    #[test]
    fn test_open_external_link_validation() {
        let ok = BridgeRequest::OpenExternalLink {
            url: "https://voltbetta.example/care-guide".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(ok.operation(), "openExternalLink");

        let mailto = BridgeRequest::OpenExternalLink {
            url: "mailto:help@example.com".to_string(),
        };
        assert!(mailto.validate().is_ok());

        for bad in ["javascript:alert(1)", "file:///etc/passwd", "not a url"] {
            let result = BridgeRequest::OpenExternalLink {
                url: bad.to_string(),
            }
            .validate();
            assert!(
                matches!(result, Err(BridgeError::InvalidArgument { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_toast_rejected() {
        let result = BridgeRequest::ShowToast {
            message: "   ".to_string(),
        }
        .validate();
        assert!(matches!(
            result,
            Err(BridgeError::InvalidArgument {
                operation: "showToast",
                ..
            })
        ));
    }

    #[test]
    fn test_reply_wire_format() {
        let reply = BridgeReply::value(Some(4), "voltshell/0.1.0".to_string());
        let json = reply.to_json();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"value\":\"voltshell/0.1.0\""));

        let error = BridgeReply::error(
            Some(5),
            &BridgeError::Malformed("expected value".to_string()),
        );
        assert!(!error.is_ok());
        assert!(error.to_json().contains("\"status\":\"error\""));
        assert!(BridgeReply::done(None).is_ok());
    }

    #[test]
    fn test_request_serialization_uses_camel_case_ops() {
        let call = BridgeCall {
            version: BRIDGE_PROTOCOL_VERSION,
            id: Some(1),
            call: BridgeRequest::OpenExternalLink {
                url: "https://example.com".to_string(),
            },
        };
        let json = serde_json::to_string(&call).unwrap();
        assert!(json.contains("\"op\":\"openExternalLink\""));
        assert_eq!(call.call.operation(), "openExternalLink");
    }
}
