//! Collapse scenarios
//!
//! Ratio mapping, baseline restoration, snap-once and rubber-band behavior

use anyhow::ensure;
use collapse_core::headless::ViewStyle;
use collapse_core::prelude::*;
use collapse_core::Rect;

use crate::harness::expect_close;
use crate::runner::TestSuite;

/// Create the collapse suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("collapse");

    // Half the collapse range is half way
    suite.add("half_way_height", |ctx| {
        let avatar = ctx.host.add_view(
            ctx.header_view,
            Rect::new(16.0, 40.0, 80.0, 80.0),
            ViewStyle::default(),
        );
        let height = ctx.host.size(avatar, LayoutAttribute::Height, 80.0);

        let mut header = ctx.header();
        ensure!(header.max_offset() == ctx.max_offset(), "max offset {}", header.max_offset());
        header.add_transforming_element(&ctx.host, avatar, [Transform::new(Attribute::Height, -40.0)])?;

        let half = ctx.offset_at(0.5);
        ctx.scroll_to(&mut header, half);
        expect_close("collapse ratio", header.collapse_ratio(), 0.5)?;
        expect_close("height constant", ctx.host.constraint_constant(height)?, 60.0)
    });

    // Every direct attribute hits its target at full collapse and its
    // baseline again after returning to the top
    suite.add("endpoints_exact", |ctx| {
        let card = ctx.host.add_view(
            ctx.header_view,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ViewStyle {
                opacity: 0.9,
                corner_radius: 12.0,
                shadow_radius: 8.0,
                shadow_opacity: 0.3,
            },
        );

        let mut header = ctx.header();
        let id = header.add_transforming_element(
            &ctx.host,
            card,
            [
                Transform::new(Attribute::Alpha, -0.4),
                Transform::new(Attribute::CornerRadius, -12.0),
                Transform::new(Attribute::ShadowRadius, 4.0),
                Transform::new(Attribute::ShadowOpacity, -0.3),
            ],
        )?;

        let past = ctx.max_offset() + 260.0;
        ctx.sweep(&mut header, 0.0, past, 25.0);
        ensure!(header.is_collapsed(), "header should be collapsed");
        for t in header.transforms(id).unwrap_or_default() {
            let actual = collapse_core::accessor::read_attribute(&ctx.host, card, t.attribute);
            expect_close(&format!("{:?} collapsed", t.attribute), actual, t.original_value + t.target_delta)?;
        }

        ctx.sweep(&mut header, past, -30.0, 25.0);
        for t in header.transforms(id).unwrap_or_default() {
            let actual = collapse_core::accessor::read_attribute(&ctx.host, card, t.attribute);
            expect_close(&format!("{:?} expanded", t.attribute), actual, t.original_value)?;
        }
        Ok(())
    });

    // Past full collapse the header is written once, then left alone
    suite.add("snap_once", |ctx| {
        let max = ctx.max_offset();
        let mut header = ctx.header();
        ctx.scroll_to(&mut header, max * 0.85);

        let snap = ctx.scroll_to(&mut header, max + 40.0);
        ensure!(
            snap == TickOutcome::Interpolated { offset: max },
            "expected snap to {}, got {:?}",
            max,
            snap
        );
        for y in [max + 60.0, max + 120.0, max + 760.0] {
            let outcome = ctx.scroll_to(&mut header, y);
            ensure!(outcome == TickOutcome::Unchanged, "y {} gave {:?}", y, outcome);
        }
        expect_close("header y", ctx.host.frame(ctx.header_view).y(), -max)
    });

    // Pulling past the top restores the expanded state exactly once
    suite.add("rubber_band", |ctx| {
        let mut header = ctx.header();
        ctx.scroll_to(&mut header, 45.0);

        let outcome = ctx.scroll_to(&mut header, -15.0);
        ensure!(outcome == TickOutcome::Interpolated { offset: 0.0 }, "got {:?}", outcome);
        let outcome = ctx.scroll_to(&mut header, -30.0);
        ensure!(outcome == TickOutcome::Unchanged, "got {:?}", outcome);
        expect_close("header y", ctx.host.frame(ctx.header_view).y(), 0.0)
    });

    // Header constraints follow the live offset
    suite.add("collapsing_constraints", |ctx| {
        let screen = ctx.host.add_root(Rect::new(0.0, 0.0, 375.0, 812.0));
        let top = ctx.host.pin(screen, ctx.header_view, LayoutAttribute::Top, LayoutAttribute::Top, 0.0);

        let mut header = ctx.header();
        header.set_collapsing_constraint(&ctx.host, top)?;

        ctx.scroll_to(&mut header, 33.0);
        expect_close("top constant", ctx.host.constraint_constant(top)?, -33.0)?;
        let max = ctx.max_offset();
        ctx.scroll_to(&mut header, max + 360.0);
        expect_close("top constant", ctx.host.constraint_constant(top)?, -max)
    });

    // Repeating an offset changes nothing
    suite.add("idempotent_ticks", |ctx| {
        let card = ctx.host.add_view(ctx.header_view, Rect::ZERO, ViewStyle::default());
        let mut header = ctx.header();
        header.add_transforming_element(&ctx.host, card, [Transform::new(Attribute::CornerRadius, 9.0)])?;

        ctx.scroll_to(&mut header, 61.0);
        let first = ctx.host.corner_radius(card);
        ctx.scroll_to(&mut header, 61.0);
        ensure!(first == ctx.host.corner_radius(card), "values drifted");
        Ok(())
    });

    // Ratio never leaves [0, 1] across a full sweep
    suite.add("ratio_bounds", |ctx| {
        let end = ctx.max_offset() + 260.0;
        let mut header = ctx.header();
        let mut y = -50.0;
        while y < end {
            ctx.scroll_to(&mut header, y);
            let r = header.collapse_ratio();
            ensure!((0.0..=1.0).contains(&r), "ratio {} at y {}", r, y);
            y += 7.0;
        }
        Ok(())
    });

    suite
}
