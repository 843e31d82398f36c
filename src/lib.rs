pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ ArtifactFiles, HarnessConfig };
pub use errors::{ CheckError, HarnessError, HarnessResult, RecoverableError };
pub use implementations::locator::ArtifactLocator;
pub use implementations::verifier::BuildVerifier;
pub use models::{
    artifact::{ ArtifactKind, ArtifactRef, ArtifactSet },
    rule::{ CheckRule, ContentRule, PayloadRule, RuleKind, ScheduledCheck },
    verification::{ CheckResult, PayloadSearch, VerificationOutcome },
};
pub use traits::VerificationEngine;
