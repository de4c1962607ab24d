//! JSON-RPC error envelope sniffing
//!
//! Before two responses are compared, each is checked for an error envelope
//! so that methods one endpoint simply does not serve can be skipped instead
//! of reported as differences.

use serde::Deserialize;

/// The `error` member of a JSON-RPC response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcError {
    pub code: Option<i64>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<RpcError>,
}

/// Extract the error member of a response body, if any.
///
/// A body of `null`, an object without an `error` member, `"error": null`,
/// and error objects missing `code` or `message` all sniff cleanly as no
/// error. A body that is not valid JSON, or whose `error` member has an
/// irreconcilable shape, fails.
pub fn sniff_error(body: &[u8]) -> Result<Option<RpcError>, serde_json::Error> {
    let envelope: Option<ErrorEnvelope> = serde_json::from_slice(body)?;
    Ok(envelope.and_then(|envelope| envelope.error))
}

/// Default capability probe: does this error mean the method is not served?
///
/// Matches the message substring RPC servers commonly emit for unknown
/// methods ("the method foo does not exist/is not available"). Kept narrow
/// on purpose: errors like "execution reverted" are real responses and must
/// reach the comparison.
pub fn method_unsupported(error: &RpcError) -> bool {
    error
        .message
        .as_deref()
        .is_some_and(|message| message.contains("does not exist"))
}
