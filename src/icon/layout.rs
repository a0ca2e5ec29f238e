//! The icon's drawing plan: ordered instruction records derived from a profile.
//!
//! All coordinates are truncated proportions of the canvas size, so the
//! layout scales with the profile and stays independently testable. The plan
//! holds no pixel data; executing it is the renderer's job.

use palette::Srgb;

use super::profile::IconProfile;

// ============================================================================
// DrawOp
// ============================================================================

/// One drawing instruction in the icon plan.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Row-by-row linear gradient over the whole canvas.
    VerticalGradient { top: Srgb<u8>, bottom: Srgb<u8> },

    /// Solid filled circle.
    FilledCircle {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Srgb<u8>,
    },

    /// Solid axis-aligned rectangle.
    FilledRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Srgb<u8>,
    },

    /// Solid filled polygon.
    FilledPolygon {
        points: Vec<(i32, i32)>,
        color: Srgb<u8>,
    },

    /// Semi-transparent circle composited over the flattened result.
    SoftHighlight {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Srgb<u8>,
        alpha: u8,
    },
}

// ============================================================================
// Draw plan
// ============================================================================

/// Builds the fixed drawing sequence for the apple icon.
///
/// The sequence is: background gradient, white plate circle, the two apple
/// lobes, the top indent, the stem, the leaf, and finally the shine
/// highlight. Order matters; later operations paint over earlier ones.
pub fn build_draw_plan(profile: &IconProfile) -> Vec<DrawOp> {
    let size = profile.size as i32;
    let scale = profile.size as f64;

    // Background plate: centered circle spanning three quarters of the canvas.
    let plate_diameter = (scale * 0.75) as i32;
    let plate_offset = (size - plate_diameter) / 2;
    let plate_center = plate_offset + plate_diameter / 2;

    // Apple body: two overlapping lobes below the vertical center.
    let apple_cx = size / 2;
    let apple_cy = (scale * 0.52) as i32;
    let apple_width = (scale * 0.35) as i32;
    let lobe_offset = (apple_width as f64 * 0.22) as i32;
    let lobe_radius = (apple_width as f64 * 0.4) as i32;
    let left_lobe_cx = apple_cx - lobe_offset;
    let right_lobe_cx = apple_cx + lobe_offset;

    // Top indent cut into the apple body.
    let indent_cy = apple_cy - (lobe_radius as f64 * 0.85) as i32;
    let indent_radius = (lobe_radius as f64 * 0.25) as i32;

    // Stem sits just above the apple body.
    let stem_width = (scale * 0.018) as i32;
    let stem_height = (scale * 0.08) as i32;
    let stem_x = apple_cx - stem_width / 2;
    let stem_y = apple_cy - (lobe_radius as f64 * 0.95) as i32 - stem_height;

    // Leaf grows off the stem's right edge.
    let leaf_base_x = stem_x + stem_width;
    let leaf = vec![
        (leaf_base_x, stem_y + (stem_height as f64 * 0.3) as i32),
        (
            leaf_base_x + (scale * 0.05) as i32,
            stem_y + (stem_height as f64 * 0.15) as i32,
        ),
        (
            leaf_base_x + (scale * 0.08) as i32,
            stem_y + (stem_height as f64 * 0.5) as i32,
        ),
        (
            leaf_base_x + (scale * 0.04) as i32,
            stem_y + (stem_height as f64 * 0.6) as i32,
        ),
    ];

    // Shine highlight on the upper-left of the left lobe.
    let shine_radius = (lobe_radius as f64 * 0.3) as i32;
    let shine_cx = left_lobe_cx - (lobe_radius as f64 * 0.3) as i32;
    let shine_cy = apple_cy - (lobe_radius as f64 * 0.4) as i32;

    vec![
        DrawOp::VerticalGradient {
            top: profile.background_top.into(),
            bottom: profile.background_bottom.into(),
        },
        DrawOp::FilledCircle {
            cx: plate_center,
            cy: plate_center,
            radius: plate_diameter / 2,
            color: profile.plate.into(),
        },
        DrawOp::FilledCircle {
            cx: left_lobe_cx,
            cy: apple_cy,
            radius: lobe_radius,
            color: profile.apple.into(),
        },
        DrawOp::FilledCircle {
            cx: right_lobe_cx,
            cy: apple_cy,
            radius: lobe_radius,
            color: profile.apple.into(),
        },
        DrawOp::FilledCircle {
            cx: apple_cx,
            cy: indent_cy,
            radius: indent_radius,
            color: profile.plate.into(),
        },
        DrawOp::FilledRect {
            x: stem_x,
            y: stem_y,
            width: stem_width,
            height: stem_height,
            color: profile.stem.into(),
        },
        DrawOp::FilledPolygon {
            points: leaf,
            color: profile.leaf.into(),
        },
        DrawOp::SoftHighlight {
            cx: shine_cx,
            cy: shine_cy,
            radius: shine_radius,
            color: profile.shine.into(),
            alpha: profile.shine_alpha,
        },
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_at(size: u32) -> Vec<DrawOp> {
        build_draw_plan(&IconProfile::default().with_size(size))
    }

    #[test]
    fn plan_has_fixed_sequence() {
        let plan = plan_at(1024);
        assert_eq!(plan.len(), 8);
        assert!(matches!(plan[0], DrawOp::VerticalGradient { .. }));
        assert!(matches!(plan[5], DrawOp::FilledRect { .. }));
        assert!(matches!(plan[6], DrawOp::FilledPolygon { .. }));
        assert!(matches!(plan[7], DrawOp::SoftHighlight { .. }));
    }

    #[test]
    fn plate_is_centered_three_quarters() {
        let plan = plan_at(1024);
        match &plan[1] {
            DrawOp::FilledCircle { cx, cy, radius, .. } => {
                assert_eq!((*cx, *cy), (512, 512));
                assert_eq!(*radius, 384);
            }
            other => panic!("expected plate circle, got {other:?}"),
        }
    }

    #[test]
    fn apple_lobes_at_documented_geometry() {
        let plan = plan_at(1024);
        let (left, right) = (&plan[2], &plan[3]);
        match (left, right) {
            (
                DrawOp::FilledCircle { cx: lx, cy: ly, radius: lr, .. },
                DrawOp::FilledCircle { cx: rx, cy: ry, radius: rr, .. },
            ) => {
                assert_eq!((*lx, *ly, *lr), (434, 532, 143));
                assert_eq!((*rx, *ry, *rr), (590, 532, 143));
            }
            other => panic!("expected lobe circles, got {other:?}"),
        }
    }

    #[test]
    fn stem_and_shine_at_documented_geometry() {
        let plan = plan_at(1024);
        match &plan[5] {
            DrawOp::FilledRect { x, y, width, height, .. } => {
                assert_eq!((*x, *y, *width, *height), (503, 316, 18, 81));
            }
            other => panic!("expected stem rect, got {other:?}"),
        }
        match &plan[7] {
            DrawOp::SoftHighlight { cx, cy, radius, alpha, .. } => {
                assert_eq!((*cx, *cy, *radius), (392, 475, 42));
                assert_eq!(*alpha, 100);
            }
            other => panic!("expected shine highlight, got {other:?}"),
        }
    }

    #[test]
    fn leaf_has_four_vertices_off_the_stem() {
        let plan = plan_at(1024);
        match &plan[6] {
            DrawOp::FilledPolygon { points, .. } => {
                assert_eq!(points.len(), 4);
                assert_eq!(points[0], (521, 340));
                assert_eq!(points[1], (572, 328));
                assert_eq!(points[2], (602, 356));
                assert_eq!(points[3], (561, 364));
            }
            other => panic!("expected leaf polygon, got {other:?}"),
        }
    }

    #[test]
    fn geometry_scales_with_size() {
        let plan = plan_at(512);
        match &plan[1] {
            DrawOp::FilledCircle { cx, cy, radius, .. } => {
                assert_eq!((*cx, *cy), (256, 256));
                assert_eq!(*radius, 192);
            }
            other => panic!("expected plate circle, got {other:?}"),
        }
    }

    #[test]
    fn plan_is_a_pure_function_of_the_profile() {
        assert_eq!(plan_at(1024), plan_at(1024));
        assert_ne!(plan_at(1024), plan_at(512));
    }
}
