//! Contour: stroked polylines along each cheekbone.

use crate::color::Rgb8;
use crate::frame::Frame;
use crate::geometry;
use crate::landmarks::FaceDetection;
use crate::paint::{self, BlendMode};

/// Stroke width in pixels at full resolution.
const STROKE_WIDTH: f32 = 8.0;

pub(crate) fn apply(frame: &mut Frame, detection: &FaceDetection, color: Rgb8, alpha: f32) {
    let lines = geometry::cheekbone_lines(&detection.landmarks);
    if lines.is_empty() {
        tracing::debug!("contour skipped: jaw outline too short");
        return;
    }
    for line in lines {
        paint::stroke_polyline(frame, &line, STROKE_WIDTH, color, alpha, BlendMode::SourceOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FaceBox, PointF};
    use crate::landmarks::LandmarkSet;
    use image::RgbaImage;

    #[test]
    fn strokes_both_cheekbones() {
        let mut img = RgbaImage::new(200, 200);
        for px in img.pixels_mut() {
            px.0 = [220, 200, 190, 255];
        }
        let mut frame = Frame::new(img);
        let before = frame.clone();

        // Jaw arcs down the sides of the face.
        let jaw: Vec<PointF> = (0..17)
            .map(|i| {
                let t = i as f32 / 16.0;
                PointF::new(30.0 + t * 140.0, 120.0 + (t * std::f32::consts::PI).sin() * 50.0)
            })
            .collect();
        let det = FaceDetection {
            face_box: FaceBox::new(20.0, 20.0, 160.0, 170.0),
            landmarks: LandmarkSet {
                jaw_outline: jaw.clone(),
                ..Default::default()
            },
        };
        apply(&mut frame, &det, Rgb8::parse_hex("#A0825B"), 0.3);

        // A point on the lifted left cheekbone segment changed.
        let probe = PointF::new(jaw[2].x, jaw[2].y - geometry::CONTOUR_LIFT_PX);
        assert_ne!(
            frame.data.get_pixel(probe.x as u32, probe.y as u32),
            before.data.get_pixel(probe.x as u32, probe.y as u32)
        );
        // Far corner untouched.
        assert_eq!(frame.data.get_pixel(5, 5), before.data.get_pixel(5, 5));
    }

    #[test]
    fn short_jaw_is_skipped() {
        let mut frame = Frame::new(RgbaImage::new(50, 50));
        let before = frame.clone();
        let det = FaceDetection {
            face_box: FaceBox::default(),
            landmarks: LandmarkSet {
                jaw_outline: vec![PointF::new(10.0, 10.0); 3],
                ..Default::default()
            },
        };
        apply(&mut frame, &det, Rgb8::parse_hex("#A0825B"), 0.3);
        assert_eq!(frame.data, before.data);
    }
}
