//! Facial landmark types and the landmark provider contract.
//!
//! The provider is an opaque, asynchronous capability: given a frame it
//! returns a face box and named landmark groups in the frame's pixel space,
//! or `None` when no face is found. All groups in one [`LandmarkSet`] come
//! from the same detection pass over the same frame and are never mixed
//! across frames.

use crate::error::TryOnError;
use crate::frame::{FaceBox, Frame, PointF};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Expected point count for the jaw outline group.
pub const JAW_OUTLINE_POINTS: usize = 17;
/// Expected point count for each eye group.
pub const EYE_POINTS: usize = 6;
/// Expected point count for each eyebrow group.
pub const EYEBROW_POINTS: usize = 5;
/// Expected point count for the mouth group (outer + inner contour).
pub const MOUTH_POINTS: usize = 20;

/// Named, ordered landmark groups for one detected face.
///
/// Groups may be shorter than their expected counts when detection is
/// partial; region geometry then skips the affected makeup regions
/// silently instead of failing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkSet {
    pub jaw_outline: Vec<PointF>,
    pub left_eye: Vec<PointF>,
    pub right_eye: Vec<PointF>,
    pub left_eyebrow: Vec<PointF>,
    pub right_eyebrow: Vec<PointF>,
    pub mouth: Vec<PointF>,
}

impl LandmarkSet {
    /// True when every group carries its full expected point count.
    pub fn is_complete(&self) -> bool {
        self.jaw_outline.len() == JAW_OUTLINE_POINTS
            && self.left_eye.len() == EYE_POINTS
            && self.right_eye.len() == EYE_POINTS
            && self.left_eyebrow.len() == EYEBROW_POINTS
            && self.right_eyebrow.len() == EYEBROW_POINTS
            && self.mouth.len() == MOUTH_POINTS
    }
}

/// One detection pass: a face bounding box and its landmark set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceDetection {
    pub face_box: FaceBox,
    pub landmarks: LandmarkSet,
}

/// External contract for facial landmark detection.
///
/// Implementations typically wrap an ML model. Detection is asynchronous;
/// `Ok(None)` means the pass ran but found no face, which is a valid result
/// and distinct from a load/infrastructure failure.
pub trait LandmarkProvider {
    /// One-time, idempotent model initialization.
    ///
    /// Sessions await this before every detect; implementations memoize the
    /// load so only the first call does work. The default is a no-op for
    /// providers with nothing to load.
    fn ensure_loaded(&self) -> impl Future<Output = Result<(), TryOnError>> + Send {
        std::future::ready(Ok(()))
    }

    /// Runs one detection pass over the frame.
    fn detect(
        &self,
        frame: &Frame,
    ) -> impl Future<Output = Result<Option<FaceDetection>, TryOnError>> + Send;
}
