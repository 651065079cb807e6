//! Makeup layer infrastructure.
//!
//! Each makeup category composites one or more stacked, alpha-blended paint
//! passes onto the frame, with per-pass blend modes and color variants to
//! approximate the translucency of physical makeup. Categories are a closed
//! set so dispatch is exhaustive; no stringly-typed switching.
//!
//! Passes mutate the frame in place. Applying a category twice compounds,
//! so the session always repaints from a clone of the original frame.

pub mod blush;
pub mod contour;
pub mod eyeshadow;
pub mod foundation;
pub mod lipstick;

use crate::color::Rgb8;
use crate::frame::Frame;
use crate::landmarks::FaceDetection;
use serde::{Deserialize, Serialize};

/// A makeup category.
///
/// The fixed per-category alpha weight reflects real-world opacity:
/// foundation is subtle, lipstick is bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Foundation,
    Contour,
    Blush,
    Eyeshadow,
    Lipstick,
}

impl Category {
    /// Compositing order, base layers first. Later, visually dominant
    /// categories must not be obscured by earlier ones.
    pub const APPLY_ORDER: [Category; 5] = [
        Category::Foundation,
        Category::Contour,
        Category::Blush,
        Category::Eyeshadow,
        Category::Lipstick,
    ];

    /// Alpha ceiling applied on top of the global intensity.
    pub fn weight(self) -> f32 {
        match self {
            Category::Foundation => 0.2,
            Category::Contour => 0.3,
            Category::Blush => 0.4,
            Category::Eyeshadow => 0.5,
            Category::Lipstick => 0.6,
        }
    }

    /// Default swatch used when a product carries no explicit color.
    pub fn default_color(self) -> &'static str {
        match self {
            Category::Foundation => "#D4A574",
            Category::Contour => "#A0825B",
            Category::Blush => "#E8B4B8",
            Category::Eyeshadow => "#B8860B",
            Category::Lipstick => "#C19A6B",
        }
    }

    /// Parses an external category name (case-insensitive). `"lip gloss"`
    /// maps to lipstick; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Category> {
        match name.to_ascii_lowercase().as_str() {
            "foundation" => Some(Category::Foundation),
            "contour" => Some(Category::Contour),
            "blush" => Some(Category::Blush),
            "eyeshadow" => Some(Category::Eyeshadow),
            "lipstick" | "lip gloss" => Some(Category::Lipstick),
            _ => None,
        }
    }

    /// Composites this category onto the frame.
    ///
    /// `intensity` is the global [0, 100] scalar; the effective alpha for
    /// the category's passes is `(intensity / 100) × weight`. Regions whose
    /// landmarks are missing are skipped silently.
    pub(crate) fn apply(
        self,
        frame: &mut Frame,
        detection: &FaceDetection,
        color: Rgb8,
        intensity: u8,
    ) {
        let alpha = f32::from(intensity.min(100)) / 100.0 * self.weight();
        if alpha <= 0.0 {
            return;
        }
        match self {
            Category::Foundation => foundation::apply(frame, detection, color, alpha),
            Category::Contour => contour::apply(frame, detection, color, alpha),
            Category::Blush => blush::apply(frame, detection, color, alpha),
            Category::Eyeshadow => eyeshadow::apply(frame, detection, color, alpha),
            Category::Lipstick => lipstick::apply(frame, detection, color, alpha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_order_is_fixed() {
        assert_eq!(
            Category::APPLY_ORDER,
            [
                Category::Foundation,
                Category::Contour,
                Category::Blush,
                Category::Eyeshadow,
                Category::Lipstick,
            ]
        );
    }

    #[test]
    fn weights_match_real_world_opacity() {
        assert_eq!(Category::Foundation.weight(), 0.2);
        assert_eq!(Category::Lipstick.weight(), 0.6);
        assert_eq!(Category::Contour.weight(), 0.3);
        assert_eq!(Category::Blush.weight(), 0.4);
        assert_eq!(Category::Eyeshadow.weight(), 0.5);
    }

    #[test]
    fn name_parsing() {
        assert_eq!(Category::from_name("Lipstick"), Some(Category::Lipstick));
        assert_eq!(Category::from_name("lip gloss"), Some(Category::Lipstick));
        assert_eq!(Category::from_name("EYESHADOW"), Some(Category::Eyeshadow));
        assert_eq!(Category::from_name("mascara"), None);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Category::Blush).unwrap(), "\"blush\"");
        let c: Category = serde_json::from_str("\"lipstick\"").unwrap();
        assert_eq!(c, Category::Lipstick);
    }
}
