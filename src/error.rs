//! Error types for the try-on pipeline.

use crate::session::SessionState;
use thiserror::Error;

/// Errors surfaced by the try-on session and its collaborators.
///
/// A detection pass that finds zero faces is *not* an error; it produces a
/// `Ready` session with no geometry. Likewise, malformed color strings never
/// error; they fall back to a fixed default color.
#[derive(Error, Debug)]
pub enum TryOnError {
    /// The landmark provider's models could not be loaded or the provider
    /// infrastructure is unavailable. Fatal to the session until retried.
    #[error("failed to load landmark models: {0}")]
    ModelLoad(String),

    /// The supplied image could not be decoded. Fatal until a new image is
    /// supplied.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The composited frame could not be encoded for export.
    #[error("failed to encode composited frame: {0}")]
    ImageEncode(image::ImageError),

    /// An operation that needs a loaded image was called before one exists.
    #[error("no image loaded")]
    NoImage,

    /// An operation valid only in the `Ready` state was called elsewhere.
    #[error("session is not ready (current state: {0:?})")]
    NotReady(SessionState),
}
