//! Overscroll scenarios
//!
//! Short content: bottom inset padding or skipped ticks

use anyhow::ensure;
use collapse_core::headless::ViewStyle;
use collapse_core::prelude::*;
use collapse_core::Rect;

use crate::harness::expect_close;
use crate::runner::TestSuite;

/// Create the overscroll suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("overscroll");

    // 100pt of scrollable content can't cover the collapse range: pad the
    // difference to twice the range
    suite.add("pads_short_content", |ctx| {
        ctx.scroll.set_content_height(700.0);
        let max = ctx.max_offset();
        let mut header = ctx.header();
        ensure!(header.always_collapse(), "always_collapse should default on");

        let outcome = ctx.scroll_to(&mut header, 40.0);
        ensure!(outcome == TickOutcome::Interpolated { offset: 40.0 }, "got {:?}", outcome);
        expect_close("bottom inset", ctx.scroll.content_inset().bottom, 2.0 * max - 100.0)
    });

    // With padding off the tick is skipped and the offset is not recorded
    suite.add("aborts_without_padding", |ctx| {
        ctx.scroll.set_content_height(700.0);
        let subtitle = ctx.host.add_view(ctx.header_view, Rect::ZERO, ViewStyle::default());

        let mut header = ctx.header();
        header.set_always_collapse(false);
        header.add_fade_out_element(subtitle, 1.0);
        let layouts = ctx.host.layout_requests();

        let outcome = ctx.scroll_to(&mut header, 40.0);
        ensure!(outcome == TickOutcome::Aborted, "got {:?}", outcome);
        expect_close("alpha", ctx.host.opacity(subtitle), 1.0)?;
        expect_close("header y", ctx.host.frame(ctx.header_view).y(), 0.0)?;
        expect_close("bottom inset", ctx.scroll.content_inset().bottom, 0.0)?;
        expect_close("last offset", header.last_offset(), 0.0)?;
        ensure!(ctx.host.layout_requests() == layouts, "layout requested on aborted tick");
        Ok(())
    });

    // Long content never touches the inset
    suite.add("long_content_untouched", |ctx| {
        let past = ctx.max_offset() + 160.0;
        let mut header = ctx.header();
        ctx.sweep(&mut header, 0.0, past, 30.0);
        expect_close("bottom inset", ctx.scroll.content_inset().bottom, 0.0)
    });

    // Viewport height is read once; a later resize doesn't change the guard
    suite.add("viewport_captured_once", |ctx| {
        let mut header = ctx.header();
        ctx.scroll_to(&mut header, 10.0);
        ctx.scroll.set_viewport_height(1950.0);
        ctx.scroll_to(&mut header, 20.0);

        ensure!(
            header.state().scroll_viewport_height() == Some(600.0),
            "viewport {:?}",
            header.state().scroll_viewport_height()
        );
        expect_close("bottom inset", ctx.scroll.content_inset().bottom, 0.0)
    });

    suite
}
