use crate::models::artifact::ArtifactSet;
use crate::models::rule::ScheduledCheck;
use crate::models::verification::VerificationOutcome;

/// Trait for verifying a set of build artifacts against a rule plan
pub trait VerificationEngine {
    /// The checks `verify` applies, in evaluation order
    fn schedule(&self) -> Vec<ScheduledCheck>;

    /// Apply every scheduled check to the artifacts.
    ///
    /// Check failures are recorded in the outcome rather than returned as
    /// errors. A gating failure marks the outcome halted and skips the
    /// remaining checks.
    fn verify(&self, artifacts: &ArtifactSet) -> VerificationOutcome;
}
