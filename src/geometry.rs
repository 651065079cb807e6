//! Region geometry: derives draw regions from facial landmarks.
//!
//! Each makeup category targets a geometric region computed from the
//! landmark groups. Every derivation returns `Option` (or an empty vec)
//! when the required points are missing, so partial detection skips the
//! affected region without disturbing the others.

use crate::frame::{FaceBox, PointF};
use crate::landmarks::LandmarkSet;

/// Upward bias applied to cheek anchors so blush sits mid-cheek rather
/// than on the jawline (pixels at full resolution).
pub const CHEEK_LIFT_PX: f32 = 10.0;
/// Vertical pad added above the eye-to-brow distance for the eyeshadow
/// region.
pub const EYELID_PAD_PX: f32 = 15.0;
/// Eyeshadow region width as a fraction of the eye width.
pub const EYELID_WIDTH_RATIO: f32 = 0.9;
/// Foundation ellipse radii as fractions of the face box; intentionally
/// smaller than the box so the region approximates a face oval.
pub const FOUNDATION_RX_RATIO: f32 = 0.45;
pub const FOUNDATION_RY_RATIO: f32 = 0.5;
/// Upward bias for contour strokes so they trace the cheekbone, not the
/// jaw edge itself.
pub const CONTOUR_LIFT_PX: f32 = 10.0;

// Jaw-outline vertices that pair with the eye outer corners for the
// cheek anchors (68-landmark indexing).
const LEFT_CHEEK_JAW: usize = 2;
const RIGHT_CHEEK_JAW: usize = 14;
// Jaw-outline index ranges traced by the contour strokes.
const LEFT_CHEEKBONE: std::ops::Range<usize> = 1..4;
const RIGHT_CHEEKBONE: std::ops::Range<usize> = 13..16;
// Mouth points forming the upper-lip curve, used to anchor the gloss shine.
const UPPER_LIP: std::ops::Range<usize> = 12..16;

/// An axis-aligned ellipse in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
}

/// The eyeshadow target for one eye: anchored at the eye top, spanning
/// most of the eye width and reaching up toward the brow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyelidRegion {
    /// Horizontal midpoint of the eye.
    pub center_x: f32,
    /// Topmost y of the eye (the region extends upward from here).
    pub anchor_y: f32,
    pub width: f32,
    pub height: f32,
}

/// Cheek anchor points (up to two, left then right), lifted above the
/// jaw/eye midpoint by [`CHEEK_LIFT_PX`].
pub fn cheek_anchors(lm: &LandmarkSet) -> Vec<PointF> {
    let mut anchors = Vec::with_capacity(2);

    if lm.jaw_outline.len() > LEFT_CHEEK_JAW && lm.left_eye.len() >= 4 {
        let jaw = lm.jaw_outline[LEFT_CHEEK_JAW];
        anchors.push(PointF::new(
            (jaw.x + lm.left_eye[0].x) / 2.0,
            (jaw.y + lm.left_eye[3].y) / 2.0 - CHEEK_LIFT_PX,
        ));
    }
    if lm.jaw_outline.len() > RIGHT_CHEEK_JAW && lm.right_eye.len() >= 4 {
        let jaw = lm.jaw_outline[RIGHT_CHEEK_JAW];
        anchors.push(PointF::new(
            (jaw.x + lm.right_eye[3].x) / 2.0,
            (jaw.y + lm.right_eye[3].y) / 2.0 - CHEEK_LIFT_PX,
        ));
    }
    anchors
}

/// Eyelid regions (up to two) derived from each eye/eyebrow pair.
pub fn eyelid_regions(lm: &LandmarkSet) -> Vec<EyelidRegion> {
    let pairs = [
        (&lm.left_eye, &lm.left_eyebrow),
        (&lm.right_eye, &lm.right_eyebrow),
    ];
    pairs
        .into_iter()
        .filter_map(|(eye, brow)| eyelid_region(eye, brow))
        .collect()
}

fn eyelid_region(eye: &[PointF], brow: &[PointF]) -> Option<EyelidRegion> {
    if eye.is_empty() || brow.is_empty() {
        return None;
    }
    let eye_left = min_coord(eye, |p| p.x);
    let eye_right = max_coord(eye, |p| p.x);
    let eye_top = min_coord(eye, |p| p.y);
    let brow_top = min_coord(brow, |p| p.y);

    Some(EyelidRegion {
        center_x: (eye_left + eye_right) / 2.0,
        anchor_y: eye_top,
        width: (eye_right - eye_left) * EYELID_WIDTH_RATIO,
        height: (eye_top - brow_top).abs() + EYELID_PAD_PX,
    })
}

/// The full mouth contour as a closed clip polygon.
///
/// Requires at least three points to enclose any area.
pub fn mouth_polygon(lm: &LandmarkSet) -> Option<&[PointF]> {
    (lm.mouth.len() >= 3).then_some(lm.mouth.as_slice())
}

/// Center of the upper-lip curve, nudged up slightly; anchors the lip
/// gloss shine.
pub fn upper_lip_midpoint(lm: &LandmarkSet) -> Option<PointF> {
    let points = lm.mouth.get(UPPER_LIP)?;
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f32;
    let cx = points.iter().map(|p| p.x).sum::<f32>() / n;
    let cy = points.iter().map(|p| p.y).sum::<f32>() / n;
    Some(PointF::new(cx, cy - 2.0))
}

/// Foundation ellipse: centered on the face box, slightly inset so it
/// reads as a face oval rather than a rectangle.
pub fn face_oval(face_box: &FaceBox) -> Ellipse {
    let center = face_box.center();
    Ellipse {
        cx: center.x,
        cy: center.y,
        rx: face_box.width * FOUNDATION_RX_RATIO,
        ry: face_box.height * FOUNDATION_RY_RATIO,
    }
}

/// Contour polylines: short jaw sub-segments near each cheekbone, lifted
/// by [`CONTOUR_LIFT_PX`]. Segments with fewer than three points are
/// dropped.
pub fn cheekbone_lines(lm: &LandmarkSet) -> Vec<Vec<PointF>> {
    [LEFT_CHEEKBONE, RIGHT_CHEEKBONE]
        .into_iter()
        .filter_map(|range| {
            let seg = lm.jaw_outline.get(range)?;
            if seg.len() < 3 {
                return None;
            }
            Some(
                seg.iter()
                    .map(|p| PointF::new(p.x, p.y - CONTOUR_LIFT_PX))
                    .collect(),
            )
        })
        .collect()
}

/// Nonzero-winding point-in-polygon test.
///
/// The mouth contour carries both the outer and inner lip loops; nonzero
/// winding fills them as solid lips (the canvas default), where an even-odd
/// rule would punch a hole between them.
pub fn point_in_polygon(x: f32, y: f32, polygon: &[PointF]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    // Cross product sign: which side of edge a->b the point lies on.
    let side = |a: PointF, b: PointF| (b.x - a.x) * (y - a.y) - (x - a.x) * (b.y - a.y);

    let mut winding = 0i32;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if a.y <= y {
            if b.y > y && side(a, b) > 0.0 {
                winding += 1;
            }
        } else if b.y <= y && side(a, b) < 0.0 {
            winding -= 1;
        }
    }
    winding != 0
}

fn min_coord(points: &[PointF], f: impl Fn(&PointF) -> f32) -> f32 {
    points.iter().map(&f).fold(f32::INFINITY, f32::min)
}

fn max_coord(points: &[PointF], f: impl Fn(&PointF) -> f32) -> f32 {
    points.iter().map(&f).fold(f32::NEG_INFINITY, f32::max)
}
