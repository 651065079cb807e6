//! Makeup selections, serializable looks, and product color fallbacks.
//!
//! A [`LookProfile`] captures the session's color/intensity selections in a
//! JSON-friendly shape for saving looks or sending them between frontend
//! and backend processes.
//!
//! # Example
//!
//! ```
//! use tryon_renderer::{Category, LookProfile, MakeupColors};
//!
//! let profile = LookProfile {
//!     colors: MakeupColors::new()
//!         .with(Category::Lipstick, "#DC143C")
//!         .with(Category::Blush, "#F08080"),
//!     intensity: 60,
//! };
//! let json = profile.to_json().unwrap();
//! let restored = LookProfile::from_json(&json).unwrap();
//! assert_eq!(restored.intensity, 60);
//! ```

use crate::color::FALLBACK_COLOR;
use crate::layer::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The per-category color selection.
///
/// Replaced wholesale whenever the user changes a preset or a single color;
/// the replacement is atomic, so there are no partial-update races.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MakeupColors(BTreeMap<Category, String>);

impl MakeupColors {
    /// No colors selected; nothing renders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with one category's color set (builder style).
    pub fn with(mut self, category: Category, hex: impl Into<String>) -> Self {
        self.0.insert(category, hex.into());
        self
    }

    /// Returns a copy with one category cleared.
    pub fn without(mut self, category: Category) -> Self {
        self.0.remove(&category);
        self
    }

    pub fn get(&self, category: Category) -> Option<&str> {
        self.0.get(&category).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates selections in the fixed compositing order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        Category::APPLY_ORDER
            .into_iter()
            .filter_map(|c| self.get(c).map(|hex| (c, hex)))
    }
}

/// Serializable snapshot of a look: colors plus global intensity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookProfile {
    #[serde(default)]
    pub colors: MakeupColors,
    #[serde(default = "default_intensity")]
    pub intensity: u8,
}

fn default_intensity() -> u8 {
    crate::session::DEFAULT_INTENSITY
}

impl Default for LookProfile {
    fn default() -> Self {
        Self {
            colors: MakeupColors::new(),
            intensity: default_intensity(),
        }
    }
}

impl LookProfile {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Tone grouping for the built-in presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetTone {
    Natural,
    Glam,
    Bold,
}

/// A named, curated color combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub eyeshadow: &'static str,
    pub lipstick: &'static str,
    pub blush: &'static str,
    pub tone: PresetTone,
}

impl LookPreset {
    /// The preset's colors as a wholesale selection replacement.
    pub fn colors(&self) -> MakeupColors {
        MakeupColors::new()
            .with(Category::Eyeshadow, self.eyeshadow)
            .with(Category::Lipstick, self.lipstick)
            .with(Category::Blush, self.blush)
    }
}

/// The built-in look presets.
pub const LOOK_PRESETS: [LookPreset; 6] = [
    LookPreset {
        id: "natural-1",
        name: "Soft Natural",
        description: "Everyday natural look",
        eyeshadow: "#D2B48C",
        lipstick: "#C19A6B",
        blush: "#F5C6CB",
        tone: PresetTone::Natural,
    },
    LookPreset {
        id: "natural-2",
        name: "Fresh Glow",
        description: "Dewy and fresh",
        eyeshadow: "#E6D3A3",
        lipstick: "#E8B4B8",
        blush: "#FFB6C1",
        tone: PresetTone::Natural,
    },
    LookPreset {
        id: "glam-1",
        name: "Golden Hour",
        description: "Warm golden tones",
        eyeshadow: "#DAA520",
        lipstick: "#CD853F",
        blush: "#DDA0DD",
        tone: PresetTone::Glam,
    },
    LookPreset {
        id: "glam-2",
        name: "Rose Gold",
        description: "Romantic rose gold",
        eyeshadow: "#E75480",
        lipstick: "#DC143C",
        blush: "#F08080",
        tone: PresetTone::Glam,
    },
    LookPreset {
        id: "bold-1",
        name: "Dramatic Red",
        description: "Classic red lips",
        eyeshadow: "#8B4513",
        lipstick: "#DC143C",
        blush: "#FF6347",
        tone: PresetTone::Bold,
    },
    LookPreset {
        id: "bold-2",
        name: "Purple Power",
        description: "Bold purple statement",
        eyeshadow: "#9370DB",
        lipstick: "#8B008B",
        blush: "#DA70D6",
        tone: PresetTone::Bold,
    },
];

/// An external catalog product. Informational only; the compositor needs
/// just its color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub shade: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swatch_color: Option<String>,
}

impl Product {
    /// The color to render for this product: its swatch if set, else the
    /// category's default, else the global fallback color.
    pub fn render_color(&self) -> String {
        if let Some(swatch) = &self.swatch_color {
            return swatch.clone();
        }
        match Category::from_name(&self.category) {
            Some(category) => category.default_color().to_string(),
            None => format!(
                "#{:02X}{:02X}{:02X}",
                FALLBACK_COLOR.r, FALLBACK_COLOR.g, FALLBACK_COLOR.b
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_replace_wholesale() {
        let a = MakeupColors::new().with(Category::Blush, "#E8B4B8");
        let b = a.clone().with(Category::Lipstick, "#DC143C");

        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
        assert_eq!(b.get(Category::Blush), Some("#E8B4B8"));
        assert_eq!(b.clone().without(Category::Blush).len(), 1);
    }

    #[test]
    fn iter_follows_apply_order() {
        let colors = MakeupColors::new()
            .with(Category::Lipstick, "#DC143C")
            .with(Category::Foundation, "#D4A574")
            .with(Category::Blush, "#E8B4B8");
        let order: Vec<Category> = colors.iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![Category::Foundation, Category::Blush, Category::Lipstick]
        );
    }

    #[test]
    fn profile_json_round_trip() {
        let profile = LookProfile {
            colors: MakeupColors::new().with(Category::Eyeshadow, "#9370DB"),
            intensity: 40,
        };
        let json = profile.to_json().unwrap();
        assert!(json.contains("\"eyeshadow\""));
        assert_eq!(LookProfile::from_json(&json).unwrap(), profile);
    }

    #[test]
    fn profile_defaults_when_fields_missing() {
        let profile = LookProfile::from_json("{}").unwrap();
        assert!(profile.colors.is_empty());
        assert_eq!(profile.intensity, crate::session::DEFAULT_INTENSITY);
    }

    #[test]
    fn presets_cover_three_tones() {
        assert!(LOOK_PRESETS.iter().any(|p| p.tone == PresetTone::Natural));
        assert!(LOOK_PRESETS.iter().any(|p| p.tone == PresetTone::Glam));
        assert!(LOOK_PRESETS.iter().any(|p| p.tone == PresetTone::Bold));

        let rose = LOOK_PRESETS.iter().find(|p| p.id == "glam-2").unwrap();
        let colors = rose.colors();
        assert_eq!(colors.get(Category::Lipstick), Some("#DC143C"));
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn product_color_fallback_chain() {
        let mut product = Product {
            id: "p1".into(),
            brand: "Test".into(),
            name: "Velvet Matte".into(),
            shade: "Crimson".into(),
            category: "lipstick".into(),
            swatch_color: Some("#AA0000".into()),
        };
        assert_eq!(product.render_color(), "#AA0000");

        product.swatch_color = None;
        assert_eq!(product.render_color(), Category::Lipstick.default_color());

        product.category = "mystery".into();
        assert_eq!(product.render_color(), "#FF69B4");
    }
}
