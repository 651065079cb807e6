//! Lipstick: layered fills clipped strictly to the mouth contour.
//!
//! Clipping to the landmark polygon (rather than any gradient radius)
//! guarantees color never bleeds outside the lip boundary regardless of
//! mouth shape. A final low-alpha screen pass adds a gloss shine on the
//! upper lip; it is clipped to the mouth as well so surrounding pixels
//! stay untouched.

use crate::color::Rgb8;
use crate::frame::Frame;
use crate::geometry;
use crate::landmarks::FaceDetection;
use crate::paint::{self, BlendMode};

const PASSES: u32 = 3;
/// Shine gradient radii (slightly wide, very flat).
const SHINE_RX: f32 = 12.0;
const SHINE_RY: f32 = 4.0;

pub(crate) fn apply(frame: &mut Frame, detection: &FaceDetection, color: Rgb8, alpha: f32) {
    let Some(mouth) = geometry::mouth_polygon(&detection.landmarks) else {
        tracing::debug!("lipstick skipped: mouth contour unavailable");
        return;
    };
    let mouth = mouth.to_vec();

    for pass in 0..PASSES {
        let pass_alpha = alpha * (0.9 - pass as f32 * 0.2);
        let (pass_color, pass_alpha, mode) = match pass {
            // Base color, multiplied into the lip texture.
            0 => (color, pass_alpha, BlendMode::Multiply),
            // Depth: darkened variant, overlay.
            1 => (color.shift(-30, -20, -15), pass_alpha * 0.6, BlendMode::Overlay),
            // Highlight: lightened variant, screen.
            _ => (color.shift(50, 30, 20), pass_alpha * 0.4, BlendMode::Screen),
        };
        paint::fill_polygon(frame, &mouth, pass_color, pass_alpha, mode);
    }

    // Gloss shine on the upper lip.
    if let Some(shine) = geometry::upper_lip_midpoint(&detection.landmarks) {
        paint::fill_radial_gradient(
            frame,
            shine.x,
            shine.y,
            SHINE_RX,
            SHINE_RY,
            Rgb8::new(255, 255, 255),
            &[(0.0, 0.4), (1.0, 0.0)],
            alpha * 0.3,
            BlendMode::Screen,
            Some(&mouth),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FaceBox, PointF};
    use crate::geometry::point_in_polygon;
    use crate::landmarks::LandmarkSet;
    use image::RgbaImage;

    fn skin_frame() -> Frame {
        let mut img = RgbaImage::new(200, 200);
        for px in img.pixels_mut() {
            px.0 = [200, 170, 150, 255];
        }
        Frame::new(img)
    }

    /// A 20-point mouth contour: 12 outer points on an ellipse around
    /// (100, 150), then 8 inner points.
    fn mouth_contour() -> Vec<PointF> {
        let outer = (0..12).map(|i| {
            let angle = i as f32 / 12.0 * std::f32::consts::TAU;
            PointF::new(100.0 + 25.0 * angle.cos(), 150.0 + 10.0 * angle.sin())
        });
        let inner = (0..8).map(|i| {
            let angle = i as f32 / 8.0 * std::f32::consts::TAU;
            PointF::new(100.0 + 15.0 * angle.cos(), 150.0 + 5.0 * angle.sin())
        });
        outer.chain(inner).collect()
    }

    fn detection_with_mouth() -> FaceDetection {
        FaceDetection {
            face_box: FaceBox::new(40.0, 60.0, 120.0, 130.0),
            landmarks: LandmarkSet {
                mouth: mouth_contour(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn paints_only_inside_the_mouth() {
        let mut frame = skin_frame();
        let before = frame.clone();
        let det = detection_with_mouth();
        apply(&mut frame, &det, Rgb8::parse_hex("#DC143C"), 0.6);

        let mouth = mouth_contour();
        let mut changed_inside = 0u32;
        for y in 0..200 {
            for x in 0..200 {
                let fx = x as f32 + 0.5;
                let fy = y as f32 + 0.5;
                let was = before.data.get_pixel(x, y);
                let now = frame.data.get_pixel(x, y);
                if point_in_polygon(fx, fy, &mouth) {
                    if was != now {
                        changed_inside += 1;
                    }
                } else {
                    assert_eq!(was, now, "pixel outside mouth changed at ({x}, {y})");
                }
            }
        }
        assert!(changed_inside > 100, "lip interior should be repainted");
    }

    #[test]
    fn red_lipstick_shifts_red_dominance() {
        let mut frame = skin_frame();
        let det = detection_with_mouth();
        apply(&mut frame, &det, Rgb8::parse_hex("#DC143C"), 0.6 * 0.6);

        let px = frame.data.get_pixel(100, 150).0;
        let before = [200u8, 170, 150];
        // Red channel loses the least; green/blue are pulled down harder.
        let dr = before[0] as i32 - px[0] as i32;
        let dg = before[1] as i32 - px[1] as i32;
        assert!(dg > dr, "green should drop more than red: {px:?}");
    }

    #[test]
    fn skipped_without_mouth_points() {
        let mut frame = skin_frame();
        let before = frame.clone();
        let det = FaceDetection {
            face_box: FaceBox::default(),
            landmarks: LandmarkSet::default(),
        };
        apply(&mut frame, &det, Rgb8::parse_hex("#DC143C"), 0.6);
        assert_eq!(frame.data, before.data);
    }
}
