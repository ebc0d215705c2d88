//! Fade scenarios
//!
//! Fade-out ratios and fade-in elements appearing after full collapse

use anyhow::ensure;
use collapse_core::headless::ViewStyle;
use collapse_core::prelude::*;
use collapse_core::Rect;

use crate::harness::expect_close;
use crate::runner::TestSuite;

/// Create the fade suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("fade");

    // Ratio 1.0 reaches zero exactly at full collapse
    suite.add("fade_out_full_range", |ctx| {
        let subtitle = ctx.host.add_view(ctx.header_view, Rect::ZERO, ViewStyle::default());
        let mut header = ctx.header();
        ensure!(header.add_fade_out_element(subtitle, 1.0), "ratio 1.0 rejected");

        let (quarter, past) = (ctx.offset_at(0.25), ctx.max_offset() + 160.0);
        ctx.scroll_to(&mut header, quarter);
        expect_close("alpha at r=0.25", ctx.host.opacity(subtitle), 0.75)?;
        ctx.scroll_to(&mut header, past);
        expect_close("alpha at r=1", ctx.host.opacity(subtitle), 0.0)
    });

    // Ratio 0.5 is gone half way and keeps going negative
    suite.add("fade_out_half_range", |ctx| {
        let subtitle = ctx.host.add_view(ctx.header_view, Rect::ZERO, ViewStyle::default());
        let mut header = ctx.header();
        ensure!(header.add_fade_out_element(subtitle, 0.5), "ratio 0.5 rejected");

        let (half, most) = (ctx.offset_at(0.5), ctx.offset_at(0.8));
        ctx.scroll_to(&mut header, half);
        expect_close("alpha at r=0.5", ctx.host.opacity(subtitle), 0.0)?;
        ctx.scroll_to(&mut header, most);
        expect_close("alpha at r=0.8", ctx.host.opacity(subtitle), -0.6)
    });

    // Out-of-range ratios register nothing
    suite.add("fade_out_rejects_bounds", |ctx| {
        let subtitle = ctx.host.add_view(ctx.header_view, Rect::ZERO, ViewStyle::default());
        let mut header = ctx.header();

        ensure!(!header.add_fade_out_element(subtitle, 1.5), "1.5 accepted");
        ensure!(!header.add_fade_out_element(subtitle, -0.1), "-0.1 accepted");
        ensure!(header.fade_out_count() == 0, "elements registered");

        let half = ctx.offset_at(0.5);
        ctx.scroll_to(&mut header, half);
        expect_close("alpha untouched", ctx.host.opacity(subtitle), 1.0)
    });

    // Fade-in stays hidden until the header has fully collapsed
    suite.add("fade_in_after_collapse", |ctx| {
        let compact = ctx.host.add_view(ctx.header_view, Rect::ZERO, ViewStyle::default());
        let mut header = ctx.header();
        header.add_fade_in_element(&mut ctx.host, compact);
        expect_close("alpha at registration", ctx.host.opacity(compact), 0.0)?;

        let max = ctx.max_offset();
        for y in [max * 0.15, max * 0.5, max - 1.0] {
            ctx.scroll_to(&mut header, y);
            expect_close(&format!("alpha at y {}", y), ctx.host.opacity(compact), 0.0)?;
        }

        let y = max + 110.0;
        ctx.scroll_to(&mut header, y);
        let rate = CollapseConfig::default().fade_in_rate;
        expect_close(&format!("alpha at y {}", y), ctx.host.opacity(compact), y * rate)
    });

    // Clamping is opt-in
    suite.add("fade_in_clamp", |ctx| {
        let y = ctx.max_offset() + 460.0;
        let rate = CollapseConfig::default().fade_in_rate;
        let loose = ctx.host.add_view(ctx.header_view, Rect::ZERO, ViewStyle::default());
        let mut header = ctx.header();
        header.add_fade_in_element(&mut ctx.host, loose);
        ctx.scroll_to(&mut header, y);
        ensure!(y * rate > 1.0, "offset {} too small to overshoot", y);
        expect_close("unclamped", ctx.host.opacity(loose), y * rate)?;

        let clamped = ctx.host.add_view(ctx.header_view, Rect::ZERO, ViewStyle::default());
        let mut header = ctx.header_with(CollapseConfig::default().with_clamped_fade_in(true));
        header.add_fade_in_element(&mut ctx.host, clamped);
        ctx.scroll_to(&mut header, y);
        expect_close("clamped", ctx.host.opacity(clamped), 1.0)
    });

    suite
}
