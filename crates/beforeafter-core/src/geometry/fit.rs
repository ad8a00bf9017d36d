//! Normalization, scale-to-fit, and canvas layout for two-image composition.

use super::{Axis, Size};

/// Resize targets that give both images the same extent across `axis`.
///
/// The shared extent is the smaller of the two inputs, so neither image is
/// upscaled across the axis. Each image keeps its own aspect ratio; its extent
/// along the axis is `floor(shared * along / across)`, never less than 1.
pub fn normalize(first: Size, second: Size, axis: Axis) -> (Size, Size) {
    let shared = axis.across(first).min(axis.across(second));
    (
        fit_across(first, shared, axis),
        fit_across(second, shared, axis),
    )
}

fn fit_across(size: Size, shared: u32, axis: Axis) -> Size {
    let along =
        u64::from(shared) * u64::from(axis.along(size)) / u64::from(axis.across(size).max(1));
    axis.size((along as u32).max(1), shared)
}

/// Uniformly shrink a normalized pair whose combined extent exceeds `max_extent`.
///
/// Returns `None` when the pair already fits. Otherwise every dimension is
/// multiplied by `max_extent / total` and floored (minimum 1). The cross-axis
/// extent is scaled once and shared by both images so their edges line up.
///
/// The returned sizes are targets for resizing the already-normalized
/// images, not the original sources.
pub fn scale_to_fit(
    first: Size,
    second: Size,
    axis: Axis,
    max_extent: u32,
) -> Option<(Size, Size)> {
    let total = u64::from(axis.along(first)) + u64::from(axis.along(second));
    if total <= u64::from(max_extent) {
        return None;
    }

    let scale = f64::from(max_extent) / total as f64;
    let across = scaled(axis.across(first).max(axis.across(second)), scale);

    Some((
        axis.size(scaled(axis.along(first), scale), across),
        axis.size(scaled(axis.along(second), scale), across),
    ))
}

fn scaled(value: u32, scale: f64) -> u32 {
    ((f64::from(value) * scale) as u32).max(1)
}

/// Canvas holding both images: summed along `axis`, largest across it.
pub fn canvas_size(first: Size, second: Size, axis: Axis) -> Size {
    axis.size(
        axis.along(first) + axis.along(second),
        axis.across(first).max(axis.across(second)),
    )
}

/// Top-left position of the second image: directly after the first along `axis`.
pub fn paste_origin(first: Size, axis: Axis) -> (u32, u32) {
    match axis {
        Axis::Horizontal => (first.width, 0),
        Axis::Vertical => (0, first.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_horizontal_uses_min_height() {
        let (a, b) = normalize(Size::new(1000, 800), Size::new(800, 600), Axis::Horizontal);
        assert_eq!(a, Size::new(750, 600));
        assert_eq!(b, Size::new(800, 600));
    }

    #[test]
    fn test_normalize_vertical_uses_min_width() {
        let (a, b) = normalize(Size::new(1000, 800), Size::new(800, 600), Axis::Vertical);
        assert_eq!(a, Size::new(800, 640));
        assert_eq!(b, Size::new(800, 600));
    }

    #[test]
    fn test_normalize_truncates() {
        // 400 * 1001 / 700 = 572.57
        // 400 * 333 / 400 = 333
        let (a, b) = normalize(Size::new(1001, 700), Size::new(333, 400), Axis::Horizontal);
        assert_eq!(a, Size::new(572, 400));
        assert_eq!(b, Size::new(333, 400));
    }

    #[test]
    fn test_normalize_extreme_aspect_keeps_one_pixel() {
        let (a, _) = normalize(Size::new(1, 5000), Size::new(100, 10), Axis::Horizontal);
        assert_eq!(a, Size::new(1, 10));
    }

    #[test]
    fn test_scale_to_fit_comparison_scenario() {
        let before = Size::new(800, 600);
        let after = Size::new(800, 600);

        let (a, b) = normalize(before, after, Axis::Horizontal);
        let (a, b) = scale_to_fit(a, b, Axis::Horizontal, 1200).unwrap();

        assert_eq!(a, Size::new(600, 450));
        assert_eq!(b, Size::new(600, 450));
        assert_eq!(canvas_size(a, b, Axis::Horizontal), Size::new(1200, 450));
    }

    #[test]
    fn test_scale_to_fit_not_needed() {
        let a = Size::new(600, 400);
        let b = Size::new(600, 400);
        assert_eq!(scale_to_fit(a, b, Axis::Horizontal, 1200), None);
        assert_eq!(scale_to_fit(a, b, Axis::Vertical, 800), None);
    }

    #[test]
    fn test_scale_to_fit_vertical() {
        let a = Size::new(800, 600);
        let b = Size::new(800, 1000);
        let (a, b) = scale_to_fit(a, b, Axis::Vertical, 1200).unwrap();

        // scale = 0.75
        assert_eq!(a, Size::new(600, 450));
        assert_eq!(b, Size::new(600, 750));
        assert_eq!(canvas_size(a, b, Axis::Vertical), Size::new(600, 1200));
    }

    #[test]
    fn test_canvas_size_uses_max_across() {
        let canvas = canvas_size(Size::new(100, 50), Size::new(200, 80), Axis::Horizontal);
        assert_eq!(canvas, Size::new(300, 80));

        let canvas = canvas_size(Size::new(100, 50), Size::new(200, 80), Axis::Vertical);
        assert_eq!(canvas, Size::new(200, 130));
    }

    #[test]
    fn test_paste_origin() {
        let first = Size::new(640, 480);
        assert_eq!(paste_origin(first, Axis::Horizontal), (640, 0));
        assert_eq!(paste_origin(first, Axis::Vertical), (0, 480));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
