use collapse_test_suite::harness::{ScenarioHarness, TestResult};
use collapse_test_suite::{scenarios, RunResult, TestRunner};

fn run_all(harness: ScenarioHarness) -> RunResult {
    let mut runner = TestRunner::with_harness(harness);
    for suite in scenarios::all_suites() {
        runner.add_suite(suite);
    }
    runner.run()
}

fn failures(result: &RunResult) -> Vec<String> {
    result
        .results
        .iter()
        .filter_map(|run| match &run.result {
            TestResult::Failed { reason } => {
                Some(format!("{}::{}: {}", run.category, run.name, reason))
            }
            TestResult::Passed => None,
        })
        .collect()
}

#[test]
fn all_scenarios_pass() {
    let result = run_all(ScenarioHarness::new());
    let failed = failures(&result);
    assert!(failed.is_empty(), "failed scenarios:\n{}", failed.join("\n"));
    assert_eq!(result.total(), 23);
}

#[test]
fn all_scenarios_pass_with_taller_header() {
    let result = run_all(ScenarioHarness {
        header_height: 300.0,
        ..ScenarioHarness::default()
    });
    let failed = failures(&result);
    assert!(failed.is_empty(), "failed scenarios at 300pt:\n{}", failed.join("\n"));
}

#[test]
fn filter_narrows_to_one_suite() {
    let mut runner = TestRunner::new();
    for suite in scenarios::all_suites() {
        runner.add_suite(suite);
    }
    runner.filter("overscroll");
    let result = runner.run();

    assert!(result.total() > 0);
    assert!(result.results.iter().all(|r| r.category == "overscroll"));
}
