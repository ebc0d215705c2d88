//! Header collapse state
//!
//! Pure bookkeeping for the scroll handler: the header's fixed height, the
//! collapse range, the lazily captured viewport height and the previous
//! offset. Every decision the scroll handler makes about *whether* and *where*
//! to interpolate lives here so it can be tested without a host.

use crate::config::DEFAULT_MINIMUM_HEADER_HEIGHT;

/// Result of the short-content check at the start of a tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverscrollGuard {
    /// Enough content to collapse by scrolling
    Proceed,
    /// Pad the content's bottom inset by this amount, then continue
    PadBottom(f32),
    /// Skip the whole tick
    Abort,
}

/// Collapse range and scroll history for one header
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCollapseState {
    header_height: f32,
    minimum_header_height: f32,
    max_offset: f32,
    scroll_viewport_height: Option<f32>,
    last_offset: f32,
}

impl HeaderCollapseState {
    /// Create state for a header of `header_height` with the default minimum
    pub fn new(header_height: f32) -> Self {
        let mut state = Self {
            header_height,
            minimum_header_height: 0.0,
            max_offset: 0.0,
            scroll_viewport_height: None,
            last_offset: 0.0,
        };
        state.set_minimum_header_height(DEFAULT_MINIMUM_HEADER_HEIGHT);
        state
    }

    /// Change the collapsed height and recompute the collapse range
    pub fn set_minimum_header_height(&mut self, height: f32) {
        self.minimum_header_height = height;
        self.max_offset = self.header_height - height;
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    pub fn minimum_header_height(&self) -> f32 {
        self.minimum_header_height
    }

    /// Offset at which the header is fully collapsed
    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    pub fn last_offset(&self) -> f32 {
        self.last_offset
    }

    /// Viewport height captured on the first tick, if any
    pub fn scroll_viewport_height(&self) -> Option<f32> {
        self.scroll_viewport_height
    }

    /// Capture the viewport height once; later calls return the first value
    pub fn capture_viewport_height(&mut self, height: f32) -> f32 {
        *self.scroll_viewport_height.get_or_insert(height)
    }

    /// Collapse ratio for a target offset
    ///
    /// Callers only pass offsets in `[0, max_offset]`, so the result is in
    /// `[0, 1]`. With an empty range the only offset is 0, which maps to 0.
    pub fn ratio_for(&self, offset: f32) -> f32 {
        if self.max_offset > 0.0 {
            offset / self.max_offset
        } else {
            0.0
        }
    }

    /// Whether the header is still taller than its minimum at offset `y`
    pub fn is_expanded_at(&self, y: f32) -> bool {
        self.header_height - y > self.minimum_header_height
    }

    /// Short-content check
    ///
    /// The header needs `max_offset` of travel; when half of the scrollable
    /// height can't provide it, either pad the bottom inset so the user can
    /// keep scrolling or give up on this tick.
    pub fn overscroll_guard(&self, scrollable_height: f32, always_collapse: bool) -> OverscrollGuard {
        if scrollable_height / 2.0 < self.max_offset {
            if always_collapse {
                OverscrollGuard::PadBottom(2.0 * self.max_offset - scrollable_height)
            } else {
                OverscrollGuard::Abort
            }
        } else {
            OverscrollGuard::Proceed
        }
    }

    /// Offset to interpolate at for raw offset `y`, if any
    ///
    /// Inside the collapse range this is `y` itself. Crossing into full
    /// collapse snaps to `max_offset` once, on the transition tick only.
    /// Rubber-banding back past the top snaps to `0`.
    pub fn target_offset(&self, y: f32) -> Option<f32> {
        if y > 0.0 {
            if self.is_expanded_at(y) {
                Some(y)
            } else if self.is_expanded_at(self.last_offset) {
                Some(self.max_offset)
            } else {
                None
            }
        } else if self.last_offset > 0.0 {
            Some(0.0)
        } else {
            None
        }
    }

    /// Opacity for fade-in elements at raw offset `y`
    pub fn fade_in_opacity(&self, y: f32, rate: f32, clamp: bool) -> f32 {
        if self.is_expanded_at(y) {
            return 0.0;
        }
        let opacity = y * rate;
        if clamp {
            opacity.clamp(0.0, 1.0)
        } else {
            opacity
        }
    }

    /// Record the offset of a completed tick
    pub fn commit_offset(&mut self, y: f32) {
        self.last_offset = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> HeaderCollapseState {
        HeaderCollapseState::new(200.0)
    }

    #[test]
    fn test_default_range() {
        let s = state();
        assert_eq!(s.minimum_header_height(), 60.0);
        assert_eq!(s.max_offset(), 140.0);
        assert_eq!(s.last_offset(), 0.0);
        assert_eq!(s.scroll_viewport_height(), None);
    }

    #[test]
    fn test_minimum_height_recomputes_range() {
        let mut s = state();
        s.set_minimum_header_height(100.0);
        assert_eq!(s.max_offset(), 100.0);
        assert_eq!(s.header_height(), 200.0);
    }

    #[test]
    fn test_ratio_stays_in_unit_range() {
        let s = state();
        let mut o = 0.0;
        while o <= s.max_offset() {
            let r = s.ratio_for(o);
            assert!((0.0..=1.0).contains(&r), "offset {} gave ratio {}", o, r);
            o += 3.5;
        }
        assert_eq!(s.ratio_for(70.0), 0.5);
        assert_eq!(s.ratio_for(s.max_offset()), 1.0);
    }

    #[test]
    fn test_empty_range_ratio() {
        let mut s = state();
        s.set_minimum_header_height(200.0);
        assert_eq!(s.ratio_for(0.0), 0.0);
        // Nothing to interpolate: every positive offset is already collapsed
        assert!(!s.is_expanded_at(0.0));
        assert_eq!(s.target_offset(10.0), None);
        s.commit_offset(10.0);
        assert_eq!(s.target_offset(30.0), None);
    }

    #[test]
    fn test_viewport_height_captured_once() {
        let mut s = state();
        assert_eq!(s.capture_viewport_height(500.0), 500.0);
        assert_eq!(s.capture_viewport_height(320.0), 500.0);
        assert_eq!(s.scroll_viewport_height(), Some(500.0));
    }

    #[test]
    fn test_guard_pads_short_content() {
        let s = state();
        assert_eq!(s.overscroll_guard(100.0, true), OverscrollGuard::PadBottom(180.0));
        assert_eq!(s.overscroll_guard(100.0, false), OverscrollGuard::Abort);
        assert_eq!(s.overscroll_guard(280.0, false), OverscrollGuard::Proceed);
        assert_eq!(s.overscroll_guard(1000.0, true), OverscrollGuard::Proceed);
    }

    #[test]
    fn test_target_inside_range() {
        let s = state();
        assert_eq!(s.target_offset(70.0), Some(70.0));
        assert_eq!(s.target_offset(0.0), None);
    }

    #[test]
    fn test_snap_to_collapsed_once() {
        let mut s = state();
        s.commit_offset(120.0);
        assert_eq!(s.target_offset(150.0), Some(140.0));

        s.commit_offset(150.0);
        assert_eq!(s.target_offset(180.0), None);
    }

    #[test]
    fn test_exact_boundary_counts_as_collapsed() {
        let mut s = state();
        s.commit_offset(100.0);
        // 200 - 140 == 60 is not strictly greater than the minimum
        assert_eq!(s.target_offset(140.0), Some(140.0));
    }

    #[test]
    fn test_rubber_band_snaps_to_expanded() {
        let mut s = state();
        s.commit_offset(30.0);
        assert_eq!(s.target_offset(-12.0), Some(0.0));
        assert_eq!(s.target_offset(0.0), Some(0.0));

        s.commit_offset(-12.0);
        assert_eq!(s.target_offset(-20.0), None);
    }

    #[test]
    fn test_fade_in_hidden_until_collapsed() {
        let s = state();
        assert_eq!(s.fade_in_opacity(100.0, 0.003, false), 0.0);
        assert!((s.fade_in_opacity(200.0, 0.003, false) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_fade_in_clamp_is_opt_in() {
        let s = state();
        assert!((s.fade_in_opacity(500.0, 0.003, false) - 1.5).abs() < 1e-6);
        assert_eq!(s.fade_in_opacity(500.0, 0.003, true), 1.0);
    }
}
