//! Try-on session: owns the frames and drives the compositing pipeline.
//!
//! A session moves through `Idle → Detecting → Ready | Error`. Every color
//! or intensity change repaints the composited frame from the untouched
//! original, so rendering is always a pure function of
//! (original, detection, colors, intensity); there is no incremental or
//! cached rendering.

use crate::color::Rgb8;
use crate::error::TryOnError;
use crate::frame::Frame;
use crate::landmarks::{FaceDetection, LandmarkProvider};
use crate::layer::Category;
use crate::profile::{LookProfile, MakeupColors};

/// Lifecycle state of a try-on session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No image loaded yet.
    Idle,
    /// A detection pass is in flight for the loaded image.
    Detecting,
    /// Landmarks resolved (possibly to "no face"); the preview is live.
    Ready,
    /// Model load or image decode failed; retry is user-initiated.
    Error,
}

/// Interactive virtual try-on over one photo.
///
/// The session exclusively owns its drawing surface; it is single-threaded
/// and must not be shared across threads without external synchronization.
///
/// # Example
///
/// ```no_run
/// use tryon_renderer::{Category, TryOnSession};
///
/// # async fn demo(provider: impl tryon_renderer::LandmarkProvider, photo: &[u8]) -> Result<(), tryon_renderer::TryOnError> {
/// let mut session = TryOnSession::new();
/// session.load_image(&provider, photo).await?;
/// session.set_color(Category::Lipstick, "#DC143C")?;
/// session.set_intensity(60)?;
/// let png = session.export_png()?;
/// # Ok(())
/// # }
/// ```
pub struct TryOnSession {
    state: SessionState,
    /// The untouched source photo. Never painted on.
    original: Option<Frame>,
    /// The composited preview, repainted in full on every change.
    composited: Option<Frame>,
    detection: Option<FaceDetection>,
    colors: MakeupColors,
    intensity: u8,
    error: Option<String>,
    /// Raw bytes of an image that failed to decode. A decode failure is
    /// fatal until new bytes arrive, so `retry` re-attempts these bytes
    /// instead of falling back to a previously loaded image.
    failed_decode: Option<Vec<u8>>,
    /// Request generation: a detection result from a superseded
    /// `load_image` call must not overwrite newer session state.
    generation: u64,
}

/// Default global intensity (percent).
pub const DEFAULT_INTENSITY: u8 = 70;

impl Default for TryOnSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TryOnSession {
    /// Creates an idle session with no colors selected.
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            original: None,
            composited: None,
            detection: None,
            colors: MakeupColors::new(),
            intensity: DEFAULT_INTENSITY,
            error: None,
            failed_decode: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The current composited preview frame, if one exists.
    pub fn frame(&self) -> Option<&Frame> {
        self.composited.as_ref()
    }

    /// Human-readable message for the `Error` state.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The detection for the current image; `None` in non-ready states or
    /// when no face was found.
    pub fn detection(&self) -> Option<&FaceDetection> {
        self.detection.as_ref()
    }

    pub fn colors(&self) -> &MakeupColors {
        &self.colors
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Loads and decodes a new image, then runs landmark detection on it.
    ///
    /// On success the session is `Ready`, with geometry if a face was
    /// found, without if not (the preview then shows the photo unmodified).
    /// Decode and provider failures move the session to `Error`. A result
    /// arriving after a newer `load_image` call is discarded.
    pub async fn load_image<P: LandmarkProvider>(
        &mut self,
        provider: &P,
        bytes: &[u8],
    ) -> Result<(), TryOnError> {
        let frame = match Frame::decode(bytes) {
            Ok(frame) => frame,
            Err(err) => {
                self.failed_decode = Some(bytes.to_vec());
                self.fail(err.to_string());
                return Err(err);
            }
        };
        tracing::info!(width = frame.width(), height = frame.height(), "image loaded");
        self.original = Some(frame);
        self.detection = None;
        self.composited = None;
        self.error = None;
        self.failed_decode = None;
        self.detect(provider).await
    }

    /// Re-attempts the input stored by a failed attempt.
    ///
    /// Valid in the `Error` state only (elsewhere it is `NotReady`). When
    /// the failure was an image decode, the same bytes are decoded again;
    /// a corrupt input therefore stays in `Error` until new bytes arrive,
    /// and an older successfully loaded image is never resurrected.
    pub async fn retry<P: LandmarkProvider>(&mut self, provider: &P) -> Result<(), TryOnError> {
        if self.state != SessionState::Error {
            return Err(TryOnError::NotReady(self.state));
        }
        if let Some(bytes) = self.failed_decode.take() {
            match Frame::decode(&bytes) {
                Ok(frame) => {
                    self.original = Some(frame);
                    self.detection = None;
                    self.composited = None;
                }
                Err(err) => {
                    self.failed_decode = Some(bytes);
                    self.fail(err.to_string());
                    return Err(err);
                }
            }
        }
        if self.original.is_none() {
            return Err(TryOnError::NoImage);
        }
        self.error = None;
        self.detect(provider).await
    }

    async fn detect<P: LandmarkProvider>(&mut self, provider: &P) -> Result<(), TryOnError> {
        self.state = SessionState::Detecting;
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;

        // `original` is always set by the callers above.
        let Some(original) = self.original.as_ref() else {
            return Err(TryOnError::NoImage);
        };

        let result = async {
            provider.ensure_loaded().await?;
            provider.detect(original).await
        }
        .await;

        if generation != self.generation {
            tracing::debug!(generation, "stale detection result discarded");
            return Ok(());
        }

        match result {
            Ok(detection) => {
                match &detection {
                    Some(det) => tracing::info!(
                        face_box = ?det.face_box,
                        complete = det.landmarks.is_complete(),
                        "face detected"
                    ),
                    None => tracing::info!("no face detected; preview shows unmodified photo"),
                }
                self.detection = detection;
                self.state = SessionState::Ready;
                self.recomposite();
                Ok(())
            }
            Err(err) => {
                let err = match err {
                    TryOnError::ModelLoad(msg) => TryOnError::ModelLoad(msg),
                    other => TryOnError::ModelLoad(other.to_string()),
                };
                self.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Sets one category's color and recomposites. Ready state only.
    ///
    /// The color string is parsed fail-soft: a malformed value renders with
    /// the fixed fallback color rather than erroring.
    pub fn set_color(&mut self, category: Category, hex: &str) -> Result<(), TryOnError> {
        self.ensure_ready()?;
        self.colors = self.colors.clone().with(category, hex);
        self.recomposite();
        Ok(())
    }

    /// Replaces the whole color selection (e.g. applying a preset) and
    /// recomposites. Ready state only.
    pub fn set_colors(&mut self, colors: MakeupColors) -> Result<(), TryOnError> {
        self.ensure_ready()?;
        self.colors = colors;
        self.recomposite();
        Ok(())
    }

    /// Sets the global intensity (clamped to 100) and recomposites. Ready
    /// state only.
    pub fn set_intensity(&mut self, value: u8) -> Result<(), TryOnError> {
        self.ensure_ready()?;
        self.intensity = value.min(100);
        self.recomposite();
        Ok(())
    }

    /// Repaints the original photo with no makeup layers.
    ///
    /// Visual-only: color and intensity selections are kept, and the next
    /// `set_color`/`set_intensity` call reapplies them.
    pub fn reset(&mut self) -> Result<(), TryOnError> {
        self.ensure_ready()?;
        // Ready state implies a loaded original.
        self.composited = self.original.clone();
        Ok(())
    }

    /// Encodes the current composited frame as PNG. Ready state only;
    /// does not mutate the session.
    pub fn export_png(&self) -> Result<Vec<u8>, TryOnError> {
        if self.state != SessionState::Ready {
            return Err(TryOnError::NotReady(self.state));
        }
        let frame = self.composited.as_ref().ok_or(TryOnError::NoImage)?;
        frame.encode_png()
    }

    /// Applies a serialized look (colors + intensity) and recomposites.
    /// Ready state only.
    pub fn apply_profile(&mut self, profile: &LookProfile) -> Result<(), TryOnError> {
        self.ensure_ready()?;
        self.colors = profile.colors.clone();
        self.intensity = profile.intensity.min(100);
        self.recomposite();
        Ok(())
    }

    /// Exports the current selections as a serializable look.
    pub fn export_profile(&self) -> LookProfile {
        LookProfile {
            colors: self.colors.clone(),
            intensity: self.intensity,
        }
    }

    fn ensure_ready(&self) -> Result<(), TryOnError> {
        if self.state == SessionState::Ready {
            Ok(())
        } else {
            Err(TryOnError::NotReady(self.state))
        }
    }

    fn fail(&mut self, message: String) {
        tracing::warn!(%message, "session entered error state");
        self.error = Some(message);
        self.state = SessionState::Error;
    }

    /// Full repaint: clone the original, then apply every selected category
    /// in the fixed compositing order. With no detection the preview is the
    /// unmodified photo regardless of selections.
    fn recomposite(&mut self) {
        let Some(original) = self.original.as_ref() else {
            return;
        };
        let mut frame = original.clone();

        if let Some(detection) = self.detection.as_ref() {
            for category in Category::APPLY_ORDER {
                if let Some(hex) = self.colors.get(category) {
                    let color = Rgb8::parse_hex(hex);
                    category.apply(&mut frame, detection, color, self.intensity);
                }
            }
            tracing::debug!(
                intensity = self.intensity,
                categories = self.colors.len(),
                "recomposited frame"
            );
        }

        self.composited = Some(frame);
    }
}
