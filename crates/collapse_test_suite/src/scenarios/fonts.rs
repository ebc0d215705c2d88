//! Font scenarios
//!
//! Font size transforms on every text-bearing element kind

use anyhow::{ensure, Context};
use collapse_core::prelude::*;
use collapse_core::Rect;

use crate::harness::expect_close;
use crate::runner::TestSuite;

/// Create the fonts suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("fonts");

    suite.add("every_kind_shrinks", |ctx| {
        let frame = Rect::new(0.0, 0.0, 200.0, 30.0);
        let label = ctx.host.add_label(ctx.header_view, frame, "Avenir Next", 28.0);
        let button = ctx.host.add_button(ctx.header_view, frame, "Avenir Next", 18.0);
        let field = ctx.host.add_text_field(ctx.header_view, frame, "Menlo", 16.0);
        let area = ctx.host.add_text_area(ctx.header_view, frame, "Menlo", 14.0);

        let mut header = ctx.header();
        for view in [label, button, field, area] {
            header.add_transforming_element(&ctx.host, view, [Transform::new(Attribute::FontSize, -10.0)])?;
        }
        let half = ctx.offset_at(0.5);
        ctx.scroll_to(&mut header, half);

        for (view, expected, family) in [
            (label, 23.0, "Avenir Next"),
            (button, 13.0, "Avenir Next"),
            (field, 11.0, "Menlo"),
            (area, 9.0, "Menlo"),
        ] {
            let font = ctx.host.font(view).context("font missing")?;
            expect_close(&format!("{:?} size", ctx.host.element_kind(view)), font.size, expected)?;
            ensure!(font.family == family, "family changed to {}", font.family);
        }
        Ok(())
    });

    // Plain views have no font: baseline 0, writes skipped
    suite.add("plain_view_ignored", |ctx| {
        let plain = ctx.host.add_view(ctx.header_view, Rect::ZERO, Default::default());
        let mut header = ctx.header();
        let id = header.add_transforming_element(&ctx.host, plain, [Transform::new(Attribute::FontSize, 6.0)])?;

        let baseline = header.transforms(id).map(|t| t[0].original_value);
        ensure!(baseline == Some(0.0), "baseline {:?}", baseline);
        let half = ctx.offset_at(0.5);
        ctx.scroll_to(&mut header, half);
        ensure!(ctx.host.font(plain).is_none(), "plain view gained a font");
        Ok(())
    });

    // Curves are recorded but interpolation stays linear
    suite.add("curve_recorded_linear", |ctx| {
        let label = ctx.host.add_label(ctx.header_view, Rect::ZERO, "Avenir", 20.0);
        let mut header = ctx.header();
        let id = header.add_transforming_element(
            &ctx.host,
            label,
            [Transform::new(Attribute::FontSize, -8.0).with_curve(TransformCurve::EaseOut)],
        )?;
        ensure!(
            header.transforms(id).map(|t| t[0].curve) == Some(TransformCurve::EaseOut),
            "curve lost"
        );

        let quarter = ctx.offset_at(0.25);
        ctx.scroll_to(&mut header, quarter);
        let size = ctx.host.font(label).context("font missing")?.size;
        expect_close("linear quarter", size, 18.0)
    });

    suite
}
