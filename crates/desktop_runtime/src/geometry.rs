//! Normalized window geometry: clamping into the unit square and minimum-size enforcement.

use crate::model::WindowRect;

/// Smallest normalized width/height a window may have.
pub const MIN_WINDOW_SIZE: f64 = 0.1;
/// Rect covering the whole viewport.
pub const FULL_RECT: WindowRect = WindowRect::new(0.0, 0.0, 1.0, 1.0);

/// Clamps a rect so it has at least the minimum size and lies fully inside the unit square.
///
/// Total for any finite input. NaN fields are not supported.
pub fn clamp_rect(rect: WindowRect) -> WindowRect {
    let w = rect.w.clamp(MIN_WINDOW_SIZE, 1.0);
    let h = rect.h.clamp(MIN_WINDOW_SIZE, 1.0);
    WindowRect {
        x: rect.x.clamp(0.0, 1.0 - w),
        y: rect.y.clamp(0.0, 1.0 - h),
        w,
        h,
    }
}

/// Whether a rect already satisfies the containment and minimum-size invariant.
pub fn is_contained(rect: WindowRect) -> bool {
    rect.x >= 0.0
        && rect.y >= 0.0
        && rect.w >= MIN_WINDOW_SIZE
        && rect.h >= MIN_WINDOW_SIZE
        && rect.x + rect.w <= 1.0 + f64::EPSILON
        && rect.y + rect.h <= 1.0 + f64::EPSILON
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn undersized_rect_grows_to_minimum() {
        let clamped = clamp_rect(WindowRect::new(0.0, 0.0, 0.05, 0.05));
        assert_eq!(clamped, WindowRect::new(0.0, 0.0, 0.1, 0.1));
    }

    #[test]
    fn oversized_rect_shrinks_to_viewport() {
        let clamped = clamp_rect(WindowRect::new(-0.4, 0.3, 3.0, 1.5));
        assert_eq!(clamped, FULL_RECT);
    }

    #[test]
    fn rect_past_right_and_bottom_edges_is_pulled_back() {
        let clamped = clamp_rect(WindowRect::new(0.8, 0.95, 0.5, 0.25));
        assert_eq!(clamped, WindowRect::new(0.5, 0.75, 0.5, 0.25));
        assert!(is_contained(clamped));
    }

    #[test]
    fn negative_origin_is_pinned_to_zero() {
        let clamped = clamp_rect(WindowRect::new(-0.2, -1.0, 0.3, 0.3));
        assert_eq!(clamped, WindowRect::new(0.0, 0.0, 0.3, 0.3));
    }

    #[test]
    fn clamp_is_idempotent() {
        let samples = [
            WindowRect::new(0.2, 0.2, 0.5, 0.5),
            WindowRect::new(-3.0, 7.0, 0.0, -1.0),
            WindowRect::new(0.95, 0.95, 0.95, 0.95),
            WindowRect::new(0.5, -0.5, 2.0, 0.01),
            WindowRect::new(1.0, 1.0, 1.0, 1.0),
        ];
        for rect in samples {
            let once = clamp_rect(rect);
            assert_eq!(clamp_rect(once), once, "input {rect:?}");
            assert!(is_contained(once), "input {rect:?}");
        }
    }

    #[test]
    fn valid_rect_is_left_untouched() {
        let rect = WindowRect::new(0.25, 0.1, 0.4, 0.7);
        assert_eq!(clamp_rect(rect), rect);
    }
}
