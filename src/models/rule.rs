use serde::{ Deserialize, Serialize };
use std::fmt;

use crate::models::artifact::ArtifactKind;

/// Substrings that must and must not appear in an artifact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRule {
    #[serde(default)]
    pub required: Vec<String>,

    #[serde(default)]
    pub forbidden: Vec<String>,
}

impl ContentRule {
    pub fn new<R, F>(required: R, forbidden: F) -> Self
        where R: IntoIterator, R::Item: Into<String>, F: IntoIterator, F::Item: Into<String>
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            forbidden: forbidden.into_iter().map(Into::into).collect(),
        }
    }
}

/// Settings for the bookmarklet payload checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadRule {
    /// Script URI scheme the trimmed payload must start with
    pub prefix: String,

    /// Markers accepted verbatim in the encoded payload
    pub raw_markers: Vec<String>,

    /// Marker searched for after percent-decoding
    pub decoded_marker: String,
}

impl Default for PayloadRule {
    fn default() -> Self {
        Self {
            prefix: "javascript:".to_string(),
            raw_markers: vec![
                "document.createElement('style')".to_string(),
                "appendChild(s)".to_string()
            ],
            decoded_marker: "document.createElement('style')".to_string(),
        }
    }
}

/// A check scheduled against one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckRule {
    Existence,
    ContentMatch(ContentRule),
    PayloadPrefix(String),
    InjectionLogic(PayloadRule),
}

impl CheckRule {
    pub fn kind(&self) -> RuleKind {
        match self {
            CheckRule::Existence => RuleKind::Existence,
            CheckRule::ContentMatch(_) => RuleKind::ContentMatch,
            CheckRule::PayloadPrefix(_) => RuleKind::PayloadPrefix,
            CheckRule::InjectionLogic(_) => RuleKind::InjectionLogic,
        }
    }
}

impl fmt::Display for CheckRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckRule::Existence => write!(f, "exists and is non-empty"),
            CheckRule::ContentMatch(rule) =>
                write!(f, "contains {:?}, excludes {:?}", rule.required, rule.forbidden),
            CheckRule::PayloadPrefix(prefix) => write!(f, "starts with {:?}", prefix),
            CheckRule::InjectionLogic(rule) =>
                write!(
                    f,
                    "has injection logic ({:?} raw, or {:?} decoded)",
                    rule.raw_markers,
                    rule.decoded_marker
                ),
        }
    }
}

/// Identity of a rule in a check result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Existence,
    ContentMatch,
    PayloadPrefix,
    InjectionLogic,
}

/// A rule bound to the artifact it is applied to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledCheck {
    pub artifact: ArtifactKind,
    pub rule: CheckRule,
}
