//! Frame and coordinate types for the try-on surface.
//!
//! A [`Frame`] wraps the RGBA pixel buffer that makeup layers paint onto.
//! All landmark and region coordinates live in the frame's pixel space.

use crate::error::TryOnError;
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// A 2D point in image pixel coordinates.
///
/// Landmark points are immutable once produced by the landmark provider.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Midpoint between this point and another.
    pub fn midpoint(&self, other: &PointF) -> PointF {
        PointF::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Axis-aligned bounding rectangle of a detected face.
///
/// Used for sizing the foundation ellipse. Lifecycle is tied 1:1 to the
/// landmark set it was detected with.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FaceBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FaceBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Center point of the box.
    pub fn center(&self) -> PointF {
        PointF::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// An RGBA drawing surface holding one frame of the try-on preview.
///
/// The session owns two frames: the untouched original and the composited
/// preview. Layers mutate a frame in place; re-applying a layer to an
/// already-painted frame compounds, so callers always repaint from a fresh
/// clone of the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The pixel data in RGBA format.
    pub data: RgbaImage,
}

impl Frame {
    /// Wraps an existing RGBA buffer.
    pub fn new(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Decodes a frame from raw bytes in any raster format the `image`
    /// crate supports (JPEG, PNG, ...).
    pub fn decode(bytes: &[u8]) -> Result<Self, TryOnError> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self { data: img })
    }

    /// Encodes the frame as PNG bytes for download/export.
    pub fn encode_png(&self) -> Result<Vec<u8>, TryOnError> {
        let mut out = Cursor::new(Vec::new());
        self.data
            .write_to(&mut out, image::ImageFormat::Png)
            .map_err(TryOnError::ImageEncode)?;
        Ok(out.into_inner())
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_midpoint() {
        let a = PointF::new(10.0, 20.0);
        let b = PointF::new(30.0, 40.0);
        let m = a.midpoint(&b);
        assert_eq!(m, PointF::new(20.0, 30.0));
    }

    #[test]
    fn face_box_center() {
        let b = FaceBox::new(10.0, 20.0, 100.0, 200.0);
        assert_eq!(b.center(), PointF::new(60.0, 120.0));
    }

    #[test]
    fn png_round_trip() {
        let mut img = RgbaImage::new(8, 8);
        for pixel in img.pixels_mut() {
            pixel.0 = [200, 100, 50, 255];
        }
        let frame = Frame::new(img);

        let png = frame.encode_png().unwrap();
        let decoded = Frame::decode(&png).unwrap();
        assert_eq!(decoded.data, frame.data);
    }

    #[test]
    fn decode_garbage_fails() {
        let err = Frame::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, TryOnError::ImageDecode(_)));
    }
}
