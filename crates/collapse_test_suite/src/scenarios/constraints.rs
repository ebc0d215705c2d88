//! Constraint scenarios
//!
//! Directional signs for position transforms and missing roles

use anyhow::ensure;
use collapse_core::headless::{HeadlessError, ViewStyle};
use collapse_core::prelude::*;
use collapse_core::Rect;

use crate::harness::expect_close;
use crate::runner::TestSuite;

/// Create the constraints suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("constraints");

    // Leading grows, trailing shrinks
    suite.add("horizontal_signs", |ctx| {
        let title = ctx.host.add_view(ctx.header_view, Rect::new(20.0, 0.0, 335.0, 30.0), ViewStyle::default());
        let leading = ctx.host.pin(ctx.header_view, title, LayoutAttribute::Leading, LayoutAttribute::Leading, 20.0);
        let leading_margin =
            ctx.host.pin(ctx.header_view, title, LayoutAttribute::LeadingMargin, LayoutAttribute::LeadingMargin, 8.0);
        let trailing = ctx.host.pin(ctx.header_view, title, LayoutAttribute::Trailing, LayoutAttribute::Trailing, 20.0);

        let mut header = ctx.header();
        header.add_transforming_element(&ctx.host, title, [Transform::new(Attribute::X, 40.0)])?;
        let half = ctx.offset_at(0.5);
        ctx.scroll_to(&mut header, half);

        expect_close("leading", ctx.host.constraint_constant(leading)?, 40.0)?;
        expect_close("leading margin", ctx.host.constraint_constant(leading_margin)?, 28.0)?;
        expect_close("trailing", ctx.host.constraint_constant(trailing)?, 0.0)
    });

    // Top grows, bottom shrinks
    suite.add("vertical_signs", |ctx| {
        let title = ctx.host.add_view(ctx.header_view, Rect::new(0.0, 100.0, 375.0, 40.0), ViewStyle::default());
        let top = ctx.host.pin(ctx.header_view, title, LayoutAttribute::TopMargin, LayoutAttribute::TopMargin, 100.0);
        let bottom =
            ctx.host.pin(ctx.header_view, title, LayoutAttribute::BottomMargin, LayoutAttribute::BottomMargin, 60.0);

        let mut header = ctx.header();
        header.add_transforming_element(&ctx.host, title, [Transform::new(Attribute::Y, -30.0)])?;
        let past = ctx.max_offset() + 160.0;
        ctx.sweep(&mut header, 0.0, past, 20.0);

        expect_close("top margin", ctx.host.constraint_constant(top)?, 70.0)?;
        expect_close("bottom margin", ctx.host.constraint_constant(bottom)?, 90.0)
    });

    // Width only on the element itself; no height constraint means no-op
    suite.add("size_without_role", |ctx| {
        let avatar = ctx.host.add_view(ctx.header_view, Rect::new(0.0, 0.0, 64.0, 64.0), ViewStyle::default());
        let width = ctx.host.size(avatar, LayoutAttribute::Width, 64.0);

        let mut header = ctx.header();
        let id = header.add_transforming_element(
            &ctx.host,
            avatar,
            [
                Transform::new(Attribute::Width, -32.0),
                Transform::new(Attribute::Height, -32.0),
            ],
        )?;
        ensure!(
            header.captured_roles(id) == Some(vec![ConstraintRole::Width]),
            "roles {:?}",
            header.captured_roles(id)
        );

        let max = ctx.max_offset();
        ctx.scroll_to(&mut header, max);
        expect_close("width", ctx.host.constraint_constant(width)?, 32.0)
    });

    // A broken view graph surfaces the host's own error
    suite.add("host_error_propagates", |ctx| {
        let title = ctx.host.add_view(ctx.header_view, Rect::ZERO, ViewStyle::default());
        ctx.host.detach_constraints(ctx.header_view);

        let mut header = ctx.header();
        let result = header.add_transforming_element(&ctx.host, title, [Transform::new(Attribute::Y, 4.0)]);
        ensure!(
            matches!(result, Err(HeadlessError::ConstraintsUnavailable(_))),
            "got {:?}",
            result.map(|_| ())
        );
        ensure!(header.transforming_count() == 0, "element registered");
        Ok(())
    });

    suite
}
