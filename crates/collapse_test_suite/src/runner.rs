//! Scenario runner
//!
//! Collects suites, applies the name filter and tallies outcomes.

use crate::harness::{ScenarioContext, ScenarioHarness, TestResult};

type ScenarioFn = Box<dyn FnOnce(&mut ScenarioContext) -> anyhow::Result<()> + Send>;

/// A named scenario within a suite
pub struct TestCase {
    pub name: String,
    pub category: String,
    pub test_fn: ScenarioFn,
}

/// Outcome of one scenario
pub struct TestRun {
    pub name: String,
    pub category: String,
    pub result: TestResult,
}

/// Scenarios sharing a category
pub struct TestSuite {
    pub name: String,
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cases: Vec::new(),
        }
    }

    pub fn add<F>(&mut self, name: &str, test_fn: F) -> &mut Self
    where
        F: FnOnce(&mut ScenarioContext) -> anyhow::Result<()> + Send + 'static,
    {
        self.cases.push(TestCase {
            name: name.to_string(),
            category: self.name.clone(),
            test_fn: Box::new(test_fn),
        });
        self
    }
}

/// Runs suites against one harness configuration
#[derive(Default)]
pub struct TestRunner {
    harness: ScenarioHarness,
    suites: Vec<TestSuite>,
    /// Substring matched against scenario name or category
    filter: Option<String>,
}

impl TestRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner whose contexts use `harness` dimensions
    pub fn with_harness(harness: ScenarioHarness) -> Self {
        Self {
            harness,
            ..Self::default()
        }
    }

    pub fn add_suite(&mut self, suite: TestSuite) -> &mut Self {
        self.suites.push(suite);
        self
    }

    pub fn filter(&mut self, pattern: &str) -> &mut Self {
        self.filter = Some(pattern.to_string());
        self
    }

    fn selected(&self, case: &TestCase) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |p| case.name.contains(p) || case.category.contains(p))
    }

    /// Run every selected scenario, draining the added suites
    pub fn run(&mut self) -> RunResult {
        let mut results = Vec::new();
        let suites = std::mem::take(&mut self.suites);

        for suite in suites {
            tracing::info!("Running suite: {}", suite.name);

            for case in suite.cases {
                if !self.selected(&case) {
                    continue;
                }
                let full_name = format!("{}::{}", case.category, case.name);
                let result = self.harness.run(&full_name, case.test_fn);

                match &result {
                    TestResult::Passed => tracing::info!("  ✓ {}", case.name),
                    TestResult::Failed { reason } => {
                        tracing::error!("  ✗ {}: {}", case.name, reason)
                    }
                }

                results.push(TestRun {
                    name: case.name,
                    category: case.category,
                    result,
                });
            }
        }

        RunResult { results }
    }
}

/// Outcomes of a run, in execution order
pub struct RunResult {
    pub results: Vec<TestRun>,
}

impl RunResult {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.result.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn print_summary(&self) {
        println!("\n╔══════════════════════════════════════════╗");
        println!("║         SCENARIO RESULTS SUMMARY         ║");
        println!("╠══════════════════════════════════════════╣");
        println!("║  Passed:  {:>5}                          ║", self.passed());
        println!("║  Failed:  {:>5}                          ║", self.failed());
        println!("║  Total:   {:>5}                          ║", self.total());
        println!("╚══════════════════════════════════════════╝");

        for run in &self.results {
            if let TestResult::Failed { reason } = &run.result {
                println!("  ✗ {}::{} - {}", run.category, run.name, reason);
            }
        }
    }
}
