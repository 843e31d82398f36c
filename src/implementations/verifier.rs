use log::{ info, warn };

use crate::config::HarnessConfig;
use crate::implementations::checks::{
    check_content,
    check_existence,
    check_injection_logic,
    check_payload_prefix,
    read_artifact,
};
use crate::implementations::locator::ArtifactLocator;
use crate::models::artifact::{ ArtifactKind, ArtifactRef, ArtifactSet };
use crate::models::rule::{ CheckRule, ContentRule, RuleKind, ScheduledCheck };
use crate::models::verification::{ CheckResult, PayloadSearch, VerificationOutcome };
use crate::traits::verification_engine::VerificationEngine;

/// Rule engine for the installer, bookmarklet and standalone outputs
#[derive(Debug, Clone)]
pub struct BuildVerifier {
    config: HarnessConfig,
}

impl BuildVerifier {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn locator(&self) -> ArtifactLocator {
        ArtifactLocator::new(self.config.dist_dir.clone(), self.config.files.clone())
    }

    /// Locate the artifacts under the configured directory and verify them
    pub fn run(&self) -> VerificationOutcome {
        let artifacts = self.locator().locate();
        info!("Verifying build output in {}", self.config.dist_dir.display());
        self.verify(&artifacts)
    }

    fn existence_result(&self, artifact: &ArtifactRef) -> CheckResult {
        match check_existence(artifact) {
            Ok(_) =>
                CheckResult::pass(
                    RuleKind::Existence,
                    artifact.kind(),
                    format!("FOUND: {}", artifact.kind().description())
                ),
            Err(e) => CheckResult::fail(RuleKind::Existence, artifact.kind(), e.to_string(), vec![e]),
        }
    }

    /// Read the artifact, recording a gating failure when that is impossible
    fn read_or_halt(&self, artifact: &ArtifactRef, outcome: &mut VerificationOutcome) -> Option<String> {
        match read_artifact(artifact) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Halting: {}", e);
                outcome.record(
                    CheckResult::fail(RuleKind::ContentMatch, artifact.kind(), e.to_string(), vec![e])
                );
                outcome.halt();
                None
            }
        }
    }

    fn content_result(&self, artifact: &ArtifactRef, text: &str, rule: &ContentRule) -> CheckResult {
        let file = artifact.file_name();
        let violations = check_content(&file, text, rule);
        if violations.is_empty() {
            CheckResult::pass(RuleKind::ContentMatch, artifact.kind(), format!("CONTENT VERIFIED: {}", file))
        } else {
            CheckResult::fail(
                RuleKind::ContentMatch,
                artifact.kind(),
                format!("CONTENT CHECK FAILED: {} ({} violations)", file, violations.len()),
                violations
            )
        }
    }

    fn prefix_result(&self, artifact: &ArtifactRef, text: &str) -> CheckResult {
        let prefix = &self.config.payload.prefix;
        match check_payload_prefix(text, prefix) {
            Ok(()) =>
                CheckResult::pass(
                    RuleKind::PayloadPrefix,
                    artifact.kind(),
                    format!("PAYLOAD PREFIX: {} starts with '{}'", artifact.file_name(), prefix)
                ),
            Err(e) => CheckResult::fail(RuleKind::PayloadPrefix, artifact.kind(), e.to_string(), vec![e]),
        }
    }

    fn injection_result(&self, artifact: &ArtifactRef, text: &str) -> CheckResult {
        match check_injection_logic(&artifact.file_name(), text, &self.config.payload) {
            Ok(PayloadSearch::FoundRaw(marker)) =>
                CheckResult::pass(
                    RuleKind::InjectionLogic,
                    artifact.kind(),
                    format!("CSS Injection logic confirmed (raw marker '{}')", marker)
                ),
            Ok(_) =>
                CheckResult::pass(
                    RuleKind::InjectionLogic,
                    artifact.kind(),
                    "CSS Injection logic confirmed (decoded payload)"
                ),
            Err(e) => CheckResult::fail(RuleKind::InjectionLogic, artifact.kind(), e.to_string(), vec![e]),
        }
    }
}

impl VerificationEngine for BuildVerifier {
    fn schedule(&self) -> Vec<ScheduledCheck> {
        let check = |artifact, rule| ScheduledCheck { artifact, rule };
        vec![
            check(ArtifactKind::Installer, CheckRule::Existence),
            check(ArtifactKind::Bookmarklet, CheckRule::Existence),
            check(ArtifactKind::Standalone, CheckRule::Existence),
            check(ArtifactKind::Bookmarklet, CheckRule::PayloadPrefix(self.config.payload.prefix.clone())),
            check(ArtifactKind::Bookmarklet, CheckRule::ContentMatch(self.config.bookmarklet.clone())),
            check(ArtifactKind::Bookmarklet, CheckRule::InjectionLogic(self.config.payload.clone())),
            check(ArtifactKind::Installer, CheckRule::ContentMatch(self.config.installer.clone()))
        ]
    }

    fn verify(&self, artifacts: &ArtifactSet) -> VerificationOutcome {
        let mut outcome = VerificationOutcome::new();

        // Every artifact is probed so the report lists all missing files at once.
        for artifact in artifacts.iter() {
            outcome.record(self.existence_result(artifact));
        }
        if outcome.results.iter().any(CheckResult::is_gating_failure) {
            warn!("Existence gate failed, skipping content checks");
            outcome.halt();
            return outcome;
        }

        let bookmarklet = &artifacts.bookmarklet;
        let Some(payload) = self.read_or_halt(bookmarklet, &mut outcome) else {
            return outcome;
        };
        outcome.record(self.prefix_result(bookmarklet, &payload));
        outcome.record(self.content_result(bookmarklet, &payload, &self.config.bookmarklet));
        outcome.record(self.injection_result(bookmarklet, &payload));

        let installer = &artifacts.installer;
        let Some(page) = self.read_or_halt(installer, &mut outcome) else {
            return outcome;
        };
        outcome.record(self.content_result(installer, &page, &self.config.installer));

        info!("Verification finished: {}", outcome);
        outcome
    }
}
