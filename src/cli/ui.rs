use colored::*;

use kantine_buildcheck::{ CheckResult, ScheduledCheck, VerificationOutcome };

/// Print a section header
pub fn print_header(title: &str) {
    println!("{}", format!("=== {} ===", title).bold());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "🎉".green().bold(), message.green().bold());
}

/// Print one check result, followed by its individual violations
pub fn print_check_result(result: &CheckResult) {
    if result.passed {
        println!("✅ {}", result.message);
        return;
    }

    println!("❌ {}", result.message.red());
    // Single-violation results already carry the violation as their message.
    for violation in result.violations.iter().filter(|v| v.to_string() != result.message) {
        println!("   ❌ {}", violation);
    }
}

/// Print every result of a run and the closing summary
pub fn print_outcome(outcome: &VerificationOutcome) {
    for result in &outcome.results {
        print_check_result(result);
    }

    if outcome.passed() {
        print_success("ALL CHECKS PASSED");
    } else {
        print_error(&format!("Verification {}", outcome));
    }
}

/// Print a scheduled check
pub fn print_scheduled_check(index: usize, check: &ScheduledCheck) {
    println!("{:>2}. {:<12} {}", index + 1, check.artifact.name(), check.rule);
}
