pub mod artifact;
pub mod rule;
pub mod verification;

// Re-export common model types
pub use artifact::{ ArtifactKind, ArtifactRef, ArtifactSet };
pub use rule::{ CheckRule, ContentRule, PayloadRule, RuleKind, ScheduledCheck };
pub use verification::{ CheckResult, PayloadSearch, VerificationOutcome };
