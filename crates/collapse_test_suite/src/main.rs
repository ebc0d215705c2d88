//! Scenario Runner
//!
//! Command-line tool for running the collapsing header scenarios.
//!
//! Usage:
//!   collapse-scenarios              # Run all scenarios
//!   collapse-scenarios --filter foo # Run scenarios matching "foo"
//!   collapse-scenarios --list       # List all scenarios
//!   collapse-scenarios --header-height 300
//!
//! Scenario expectations are derived from the header height, which must lie
//! within 140..=760.

use anyhow::Result;
use clap::Parser;
use collapse_test_suite::harness::ScenarioHarness;
use collapse_test_suite::{scenarios, TestRunner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "collapse-scenarios", about = "Run collapsing header scenarios")]
struct Args {
    /// List all scenarios and exit
    #[arg(long)]
    list: bool,

    /// Only run scenarios whose name or category contains this pattern
    #[arg(long)]
    filter: Option<String>,

    /// Expanded header height used by every scenario
    #[arg(long, default_value_t = 200.0, value_parser = parse_header_height)]
    header_height: f32,
}

/// Scenarios scroll by fixed steps of up to 61pt inside the collapse range,
/// and long-content scenarios need the range to fit in half of 1400pt
const HEADER_HEIGHT_RANGE: std::ops::RangeInclusive<f32> = 140.0..=760.0;

fn parse_header_height(value: &str) -> std::result::Result<f32, String> {
    let height: f32 = value.parse().map_err(|e| format!("{}", e))?;
    if !HEADER_HEIGHT_RANGE.contains(&height) {
        return Err(format!(
            "header height must be within {}..={}",
            HEADER_HEIGHT_RANGE.start(),
            HEADER_HEIGHT_RANGE.end()
        ));
    }
    Ok(height)
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if args.list {
        println!("Available scenario suites:");
        for suite in scenarios::all_suites() {
            println!("\n  {}:", suite.name);
            for case in &suite.cases {
                println!("    - {}", case.name);
            }
        }
        return Ok(());
    }

    println!("╔══════════════════════════════════════════╗");
    println!("║      COLLAPSING HEADER SCENARIOS         ║");
    println!("╚══════════════════════════════════════════╝\n");

    let harness = ScenarioHarness {
        header_height: args.header_height,
        ..ScenarioHarness::default()
    };
    let mut runner = TestRunner::with_harness(harness);

    for suite in scenarios::all_suites() {
        runner.add_suite(suite);
    }

    if let Some(ref pattern) = args.filter {
        println!("Running scenarios matching: {}\n", pattern);
        runner.filter(pattern);
    }

    let result = runner.run();
    result.print_summary();

    if result.all_passed() {
        println!("\nAll scenarios passed!");
        Ok(())
    } else {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_height_range() {
        assert_eq!(parse_header_height("300"), Ok(300.0));
        assert!(parse_header_height("100").is_err());
        assert!(parse_header_height("900").is_err());
        assert!(parse_header_height("tall").is_err());
    }
}
