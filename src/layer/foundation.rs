//! Foundation: a single multiply-blended ellipse over the face oval.
//!
//! Base/corrective rather than a color statement, so one pass at a low
//! weight is enough.

use crate::color::Rgb8;
use crate::frame::Frame;
use crate::geometry;
use crate::landmarks::FaceDetection;
use crate::paint::{self, BlendMode};

pub(crate) fn apply(frame: &mut Frame, detection: &FaceDetection, color: Rgb8, alpha: f32) {
    let oval = geometry::face_oval(&detection.face_box);
    paint::fill_ellipse(
        frame,
        oval.cx,
        oval.cy,
        oval.rx,
        oval.ry,
        color,
        alpha,
        BlendMode::Multiply,
    );
}
