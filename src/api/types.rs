use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Output shaping mode understood by the backend.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// One group per role, each containing the host
    #[default]
    Group,
    /// A single host with the role list under its hostvars
    Hostvars,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Group => "group",
            Style::Hostvars => "hostvars",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Style::Group => Style::Hostvars,
            Style::Hostvars => Style::Group,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response from `GET /roles`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoleList {
    /// Missing and `null` both read as an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<String>,
    /// Total reported by the backend. Advisory only.
    #[serde(default)]
    pub count: Option<usize>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /generate/inventory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub host: String,
    pub style: Style,
    pub ignore: Vec<String>,
}

/// Response from `POST /generate/inventory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub filename: String,
    pub content: String,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
