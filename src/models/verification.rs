use serde::Serialize;
use std::fmt;

use crate::errors::{ CheckError, RecoverableError };
use crate::models::artifact::ArtifactKind;
use crate::models::rule::RuleKind;

/// Outcome of applying one rule to one artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub rule: RuleKind,
    pub artifact: ArtifactKind,
    pub passed: bool,
    pub message: String,
    pub violations: Vec<CheckError>,
}

impl CheckResult {
    pub fn pass(rule: RuleKind, artifact: ArtifactKind, message: impl Into<String>) -> Self {
        Self {
            rule,
            artifact,
            passed: true,
            message: message.into(),
            violations: Vec::new(),
        }
    }

    pub fn fail(
        rule: RuleKind,
        artifact: ArtifactKind,
        message: impl Into<String>,
        violations: Vec<CheckError>
    ) -> Self {
        Self {
            rule,
            artifact,
            passed: false,
            message: message.into(),
            violations,
        }
    }

    /// True when a violation means no further checks can run
    pub fn is_gating_failure(&self) -> bool {
        self.violations.iter().any(|violation| !violation.is_recoverable())
    }
}

/// Where the injection marker was located in the bookmarklet payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSearch {
    /// Found verbatim in the encoded text; the marker that matched
    FoundRaw(String),
    /// Found only after percent-decoding
    FoundDecoded,
    NotFound,
}

/// Aggregate of every check result of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationOutcome {
    pub results: Vec<CheckResult>,

    /// Set when a gating failure stopped the run early
    pub halted: bool,
}

impl VerificationOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// AND of every recorded result
    pub fn passed(&self) -> bool {
        self.results.iter().all(|result| result.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|result| !result.passed)
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.failures().count();
        if failed == 0 {
            write!(f, "Passed ({} checks)", self.results.len())
        } else {
            write!(f, "Failed ({} of {} checks)", failed, self.results.len())?;
            if self.halted {
                write!(f, ", halted")?;
            }
            Ok(())
        }
    }
}
