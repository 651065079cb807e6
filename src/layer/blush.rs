//! Blush: stacked radial gradients on each cheek.

use crate::color::Rgb8;
use crate::frame::Frame;
use crate::geometry;
use crate::landmarks::FaceDetection;
use crate::paint::{self, BlendMode};

/// Number of stacked passes per cheek.
const PASSES: u32 = 3;
/// Base gradient radius; shrinks per pass.
const BASE_RADIUS: f32 = 30.0;
const RADIUS_STEP: f32 = 5.0;
/// Cheek gradients are slightly flattened ellipses.
const ASPECT: f32 = 0.8;
/// Gradient stops: full color at the center, half at 60%, transparent edge.
const STOPS: [(f32, f32); 3] = [(0.0, 1.0), (0.6, 0.5), (1.0, 0.0)];

pub(crate) fn apply(frame: &mut Frame, detection: &FaceDetection, color: Rgb8, alpha: f32) {
    let anchors = geometry::cheek_anchors(&detection.landmarks);
    if anchors.is_empty() {
        tracing::debug!("blush skipped: no cheek anchors derivable");
        return;
    }

    for cheek in anchors {
        for pass in 0..PASSES {
            let pass_alpha = alpha * (0.8 - pass as f32 * 0.2);
            let radius = BASE_RADIUS - pass as f32 * RADIUS_STEP;
            // The innermost pass multiplies into the skin; the rest tint over it.
            let mode = if pass == 0 {
                BlendMode::Multiply
            } else {
                BlendMode::SourceOver
            };
            paint::fill_radial_gradient(
                frame,
                cheek.x,
                cheek.y,
                radius,
                radius * ASPECT,
                color,
                &STOPS,
                pass_alpha,
                mode,
                None,
            );
        }
    }
}
