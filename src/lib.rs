//! tryon-renderer: virtual makeup try-on compositing library
//!
//! This crate renders synthetic makeup onto a photo using detected facial
//! landmarks: layered, alpha-blended, color-adjusted overlays positioned
//! and shaped from landmark geometry, with interactive intensity control
//! and non-destructive reset.
//!
//! The pieces:
//!
//! - [`LandmarkProvider`]: external detection capability; returns a face
//!   box and named landmark groups, or `None` when no face is found.
//! - [`geometry`]: derives each category's draw region (cheek anchors,
//!   eyelid ellipses, the mouth clip polygon, the face oval, cheekbone
//!   strokes) from the landmarks.
//! - [`Category`]: the closed set of makeup categories, each compositing
//!   a stack of blended paint passes.
//! - [`TryOnSession`]: owns the original photo and the composited
//!   preview, and recomposites in full on every color/intensity change.
//!
//! # Example
//!
//! ```no_run
//! use tryon_renderer::{Category, LOOK_PRESETS, TryOnSession};
//!
//! # async fn demo(provider: impl tryon_renderer::LandmarkProvider, photo: &[u8]) -> Result<(), tryon_renderer::TryOnError> {
//! let mut session = TryOnSession::new();
//! session.load_image(&provider, photo).await?;
//!
//! // Apply a curated preset, then tweak.
//! session.set_colors(LOOK_PRESETS[3].colors())?;
//! session.set_color(Category::Lipstick, "#DC143C")?;
//! session.set_intensity(60)?;
//!
//! let png = session.export_png()?;
//! # Ok(())
//! # }
//! ```

mod color;
mod error;
mod frame;
pub mod geometry;
mod landmarks;
mod layer;
mod paint;
mod profile;
mod session;

pub use color::{FALLBACK_COLOR, Rgb8};
pub use error::TryOnError;
pub use frame::{FaceBox, Frame, PointF};
pub use landmarks::{
    EYE_POINTS, EYEBROW_POINTS, FaceDetection, JAW_OUTLINE_POINTS, LandmarkProvider, LandmarkSet,
    MOUTH_POINTS,
};
pub use layer::Category;
pub use profile::{LOOK_PRESETS, LookPreset, LookProfile, MakeupColors, PresetTone, Product};
pub use session::{DEFAULT_INTENSITY, SessionState, TryOnSession};
