use crate::api::{GenerationRequest, Style};

/// Host pre-filled in the form.
pub const DEFAULT_HOST: &str = "localhost";

/// Splits comma-separated ignore text into trimmed, non-empty entries.
pub fn parse_ignore_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Builds the generation request from the raw form fields.
///
/// The host is passed through unvalidated.
pub fn compose_request(host: &str, style: Style, raw_ignore: &str) -> GenerationRequest {
    GenerationRequest {
        host: host.to_string(),
        style,
        ignore: parse_ignore_list(raw_ignore),
    }
}
