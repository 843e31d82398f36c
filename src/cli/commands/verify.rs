use anyhow::Result;
use chrono::{ DateTime, Utc };
use serde::Serialize;

use kantine_buildcheck::{ BuildVerifier, CheckResult, HarnessConfig, VerificationOutcome };

use crate::cli::ui;
use crate::cli::OutputFormat;

/// Machine-readable form of a verification run
#[derive(Serialize)]
struct VerificationReport<'a> {
    generated_at: DateTime<Utc>,
    dist_dir: String,
    passed: bool,
    halted: bool,
    results: &'a [CheckResult],
}

/// Build verification command; returns whether every check passed
pub fn execute(config: HarnessConfig, format: OutputFormat) -> Result<bool> {
    let verifier = BuildVerifier::new(config);

    if format == OutputFormat::Text {
        ui::print_header("Running Build Tests");
    }

    let outcome = verifier.run();

    match format {
        OutputFormat::Text => ui::print_outcome(&outcome),
        OutputFormat::Json => print_report(&verifier, &outcome)?,
    }

    Ok(outcome.passed())
}

fn print_report(verifier: &BuildVerifier, outcome: &VerificationOutcome) -> Result<()> {
    let report = VerificationReport {
        generated_at: Utc::now(),
        dist_dir: verifier.config().dist_dir.display().to_string(),
        passed: outcome.passed(),
        halted: outcome.halted,
        results: &outcome.results,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
