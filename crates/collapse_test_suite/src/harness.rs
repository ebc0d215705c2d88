//! Scenario harness
//!
//! Provides the fixture every scenario runs in:
//! - A headless host with a header view at the root
//! - A scroll view with configurable viewport and content heights
//! - Helpers for scrolling and comparing values

use anyhow::{bail, Result};
use collapse_core::headless::{HeadlessHost, HeadlessScrollView, ViewId};
use collapse_core::{CollapseConfig, CollapsingHeader, Rect, TickOutcome, ViewHost};

/// Tolerance for comparing interpolated values
pub const EPSILON: f32 = 1e-4;

/// Result of a scenario
#[derive(Debug)]
pub enum TestResult {
    /// Scenario passed
    Passed,
    /// Scenario failed with a reason
    Failed { reason: String },
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestResult::Passed)
    }
}

/// Context for a single scenario
pub struct ScenarioContext {
    /// Headless view graph
    pub host: HeadlessHost,
    /// Scroll view driving the header
    pub scroll: HeadlessScrollView,
    /// Header view (root of the graph)
    pub header_view: ViewId,
    /// Scenario name
    pub name: String,
}

impl ScenarioContext {
    /// Create a context with a header of `header_height` over a scroll view
    pub fn new(name: &str, header_height: f32, viewport_height: f32, content_height: f32) -> Self {
        let mut host = HeadlessHost::new();
        let header_view = host.add_root(Rect::new(0.0, 0.0, 375.0, header_height));
        Self {
            host,
            scroll: HeadlessScrollView::new(viewport_height, content_height),
            header_view,
            name: name.to_string(),
        }
    }

    /// Collapsing header over this context's header view
    pub fn header(&self) -> CollapsingHeader<HeadlessHost> {
        CollapsingHeader::new(&self.host, self.header_view)
    }

    /// Collapsing header with explicit configuration
    pub fn header_with(&self, config: CollapseConfig) -> CollapsingHeader<HeadlessHost> {
        CollapsingHeader::with_config(&self.host, self.header_view, config)
    }

    /// Expanded height of the header view
    pub fn header_height(&self) -> f32 {
        self.host.frame(self.header_view).height()
    }

    /// Collapse range of a default-configured header
    pub fn max_offset(&self) -> f32 {
        self.header_height() - CollapseConfig::default().minimum_header_height
    }

    /// Scroll offset at which a default-configured header reaches `ratio`
    pub fn offset_at(&self, ratio: f32) -> f32 {
        self.max_offset() * ratio
    }

    /// Move the scroll view to `y` and deliver one scroll notification
    pub fn scroll_to(&mut self, header: &mut CollapsingHeader<HeadlessHost>, y: f32) -> TickOutcome {
        self.scroll.set_offset(y);
        header.collapse_with_scroll(&mut self.host, &mut self.scroll)
    }

    /// Deliver notifications from `from` to `to` in steps of `step`
    pub fn sweep(
        &mut self,
        header: &mut CollapsingHeader<HeadlessHost>,
        from: f32,
        to: f32,
        step: f32,
    ) -> Vec<TickOutcome> {
        let mut outcomes = Vec::new();
        let step = if to >= from { step.abs() } else { -step.abs() };
        let mut y = from;
        loop {
            outcomes.push(self.scroll_to(header, y));
            if (step > 0.0 && y >= to) || (step < 0.0 && y <= to) {
                break;
            }
            y = if step > 0.0 {
                (y + step).min(to)
            } else {
                (y + step).max(to)
            };
        }
        outcomes
    }
}

/// Fail unless `actual` is within [`EPSILON`] of `expected`
pub fn expect_close(what: &str, actual: f32, expected: f32) -> Result<()> {
    if (actual - expected).abs() > EPSILON {
        bail!("{}: expected {}, got {}", what, expected, actual);
    }
    Ok(())
}

/// Scenario harness
pub struct ScenarioHarness {
    /// Expanded header height for new contexts
    pub header_height: f32,
    /// Viewport height for new contexts
    pub viewport_height: f32,
    /// Content height for new contexts
    pub content_height: f32,
}

impl Default for ScenarioHarness {
    fn default() -> Self {
        Self {
            header_height: 200.0,
            viewport_height: 600.0,
            content_height: 2000.0,
        }
    }
}

impl ScenarioHarness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a scenario in a fresh context
    pub fn run<F>(&self, name: &str, test_fn: F) -> TestResult
    where
        F: FnOnce(&mut ScenarioContext) -> Result<()>,
    {
        let mut ctx = ScenarioContext::new(
            name,
            self.header_height,
            self.viewport_height,
            self.content_height,
        );
        match test_fn(&mut ctx) {
            Ok(()) => TestResult::Passed,
            Err(e) => TestResult::Failed {
                reason: format!("{:#}", e),
            },
        }
    }
}
