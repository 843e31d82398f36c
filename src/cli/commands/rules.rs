use anyhow::Result;
use serde_json::json;

use kantine_buildcheck::{ BuildVerifier, HarnessConfig, VerificationEngine };

use crate::cli::ui;
use crate::cli::OutputFormat;

/// List the scheduled checks without touching the build output
pub fn execute(config: HarnessConfig, format: OutputFormat) -> Result<()> {
    let verifier = BuildVerifier::new(config);
    let schedule = verifier.schedule();

    match format {
        OutputFormat::Text => {
            ui::print_header("Scheduled Checks");
            for artifact in verifier.locator().locate().iter() {
                ui::print_info(&format!("{}: {}", artifact.name(), artifact.path().display()));
            }
            for (index, check) in schedule.iter().enumerate() {
                ui::print_scheduled_check(index, check);
            }
        }
        OutputFormat::Json => {
            let checks: Vec<_> = schedule
                .iter()
                .map(|check| json!({ "artifact": check.artifact, "rule": check.rule.kind(), "description": check.rule.to_string() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&checks)?);
        }
    }

    Ok(())
}
