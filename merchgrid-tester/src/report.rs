use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Outcome of one check over one catalog file.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub catalog: String,
    pub check: String,
    pub passed: bool,
    pub findings: Vec<String>,
    #[serde(skip)]
    pub duration: Duration,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    passed: usize,
    failed: usize,
    duration_ms: u128,
    results: &'a [CheckResult],
}

/// Write the human-readable summary.
///
/// # Errors
/// Returns an error if the writer fails.
pub fn write_console_report(
    out: &mut dyn Write,
    results: &[CheckResult],
    total_duration: Duration,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Catalog Check Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "========================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = total - passed;

    writeln!(out, "Total checks: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", failed.to_string().red())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{status} {} [{}] ({:?})",
            result.check.bold(),
            result.catalog,
            result.duration
        )?;
        for finding in &result.findings {
            writeln!(out, "     • {}", finding.red())?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Write the machine-readable report.
///
/// # Errors
/// Returns an error if serialization or the writer fails.
pub fn write_json_report(
    out: &mut dyn Write,
    results: &[CheckResult],
    total_duration: Duration,
) -> anyhow::Result<()> {
    let passed = results.iter().filter(|r| r.passed).count();
    let report = JsonReport {
        total: results.len(),
        passed,
        failed: results.len() - passed,
        duration_ms: total_duration.as_millis(),
        results,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
