//! Eyeshadow: four stacked gradient passes per eyelid.
//!
//! The lower passes multiply a base shade into the lid; the upper passes
//! overlay progressively lighter variants so the shadow keeps depth instead
//! of reading as a flat patch.

use crate::color::Rgb8;
use crate::frame::Frame;
use crate::geometry;
use crate::landmarks::FaceDetection;
use crate::paint::{self, BlendMode};

const PASSES: u32 = 4;
/// Vertical rise per pass; upper passes sit closer to the brow.
const PASS_RISE: f32 = 3.0;
/// Offset of the first pass above the eye top.
const BASE_LIFT: f32 = 5.0;

pub(crate) fn apply(frame: &mut Frame, detection: &FaceDetection, color: Rgb8, alpha: f32) {
    let regions = geometry::eyelid_regions(&detection.landmarks);
    if regions.is_empty() {
        tracing::debug!("eyeshadow skipped: no eyelid regions derivable");
        return;
    }

    for lid in regions {
        for pass in 0..PASSES {
            let pass_alpha = alpha * (0.9 - pass as f32 * 0.15);
            let cy = lid.anchor_y - pass as f32 * PASS_RISE - BASE_LIFT;
            let rx = lid.width * (1.0 - pass as f32 * 0.1);
            let ry = lid.height * (0.8 - pass as f32 * 0.1);

            let mode = if pass < 2 {
                BlendMode::Multiply
            } else {
                BlendMode::Overlay
            };
            let (pass_color, stops): (Rgb8, &[(f32, f32)]) = match pass {
                // Base shadow: deep center, long falloff.
                0 => (color, &[(0.0, 1.0), (0.4, 0.8), (0.8, 0.3), (1.0, 0.0)]),
                // Blending pass: slightly lifted shade.
                1 => (color.shift(20, 15, 10), &[(0.0, 0.6), (0.6, 0.4), (1.0, 0.0)]),
                // Highlight passes: light variant, faint.
                _ => (color.shift(40, 30, 20), &[(0.0, 0.3), (1.0, 0.0)]),
            };

            paint::fill_radial_gradient(
                frame, lid.center_x, cy, rx, ry, pass_color, stops, pass_alpha, mode, None,
            );
        }
    }
}
