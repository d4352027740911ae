use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GlassError;
use crate::rigid_body::Material;

use super::color::{Rgb, Rgba, WHITE};

/// Named visual/physical preset for a pane
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlassType {
    #[default]
    Normal,
    Thick,
    Tinted,
}

const NORMAL_PALETTE: [Rgb; 5] = [
    Rgb::new(137, 207, 240), // baby blue
    Rgb::new(173, 216, 230), // light blue
    Rgb::new(176, 224, 230), // powder blue
    Rgb::new(135, 206, 235), // sky blue
    Rgb::new(135, 206, 250), // light sky blue
];

const TINTED_PALETTE: [Rgb; 5] = [
    Rgb::new(46, 204, 113),  // green
    Rgb::new(52, 152, 219),  // blue
    Rgb::new(155, 89, 182),  // purple
    Rgb::new(241, 196, 15),  // yellow
    Rgb::new(230, 126, 34),  // orange
];

const THICK_PALETTE: [Rgb; 3] = [
    Rgb::new(127, 140, 141), // slate grey
    Rgb::new(52, 73, 94),    // dark slate
    Rgb::new(44, 62, 80),    // midnight slate
];

/// How the intact pane is painted
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaneStyle {
    /// Top-left to bottom-right gradient stops
    pub gradient: [Rgba; 2],
    /// Alpha of the corner highlight triangle
    pub reflection_opacity: f32,
    /// Inset border glow (thick glass only)
    pub border_glow: Option<Rgba>,
}

impl GlassType {
    pub const ALL: [GlassType; 3] = [GlassType::Normal, GlassType::Thick, GlassType::Tinted];

    pub fn as_str(self) -> &'static str {
        match self {
            GlassType::Normal => "normal",
            GlassType::Thick => "thick",
            GlassType::Tinted => "tinted",
        }
    }

    /// Shard size multiplier
    pub fn size_factor(self) -> f32 {
        match self {
            GlassType::Thick => 1.5,
            _ => 1.0,
        }
    }

    /// Thick glass is heavier and bounces less
    pub fn material(self) -> Material {
        match self {
            GlassType::Thick => Material { restitution: 0.2, density: 0.002, friction: 0.2 },
            _ => Material { restitution: 0.3, density: 0.001, friction: 0.2 },
        }
    }

    pub fn palette(self) -> &'static [Rgb] {
        match self {
            GlassType::Normal => &NORMAL_PALETTE,
            GlassType::Thick => &THICK_PALETTE,
            GlassType::Tinted => &TINTED_PALETTE,
        }
    }

    /// Alpha a freshly broken shard color carries
    pub fn palette_alpha(self) -> f32 {
        match self {
            GlassType::Thick => 0.8,
            _ => 0.7,
        }
    }

    pub fn pane_style(self) -> PaneStyle {
        match self {
            GlassType::Normal => PaneStyle {
                gradient: [
                    WHITE.with_alpha(0.15),
                    Rgb::new(137, 207, 240).with_alpha(0.25),
                ],
                reflection_opacity: 0.15,
                border_glow: None,
            },
            GlassType::Tinted => PaneStyle {
                gradient: [
                    Rgb::new(46, 204, 113).with_alpha(0.3),
                    Rgb::new(52, 152, 219).with_alpha(0.4),
                ],
                reflection_opacity: 0.2,
                border_glow: None,
            },
            GlassType::Thick => PaneStyle {
                gradient: [
                    Rgb::new(52, 73, 94).with_alpha(0.4),
                    Rgb::new(44, 62, 80).with_alpha(0.5),
                ],
                reflection_opacity: 0.1,
                border_glow: Some(WHITE.with_alpha(0.1)),
            },
        }
    }
}

impl FromStr for GlassType {
    type Err = GlassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(GlassType::Normal),
            "thick" => Ok(GlassType::Thick),
            "tinted" => Ok(GlassType::Tinted),
            other => Err(GlassError::UnknownGlassType(other.to_string())),
        }
    }
}

impl fmt::Display for GlassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_only() {
        for t in GlassType::ALL {
            assert_eq!(t.as_str().parse::<GlassType>().unwrap(), t);
        }
        assert!(matches!(
            "frosted".parse::<GlassType>(),
            Err(GlassError::UnknownGlassType(ref s)) if s == "frosted"
        ));
        assert!("Normal".parse::<GlassType>().is_err());
    }

    #[test]
    fn palettes_and_materials_per_type() {
        assert_eq!(GlassType::Normal.palette().len(), 5);
        assert_eq!(GlassType::Tinted.palette().len(), 5);
        assert_eq!(GlassType::Thick.palette().len(), 3);

        let thick = GlassType::Thick.material();
        let normal = GlassType::Normal.material();
        assert!(thick.density > normal.density);
        assert!(thick.restitution < normal.restitution);
        assert_eq!(GlassType::Tinted.material(), normal);

        assert_eq!(GlassType::Thick.palette_alpha(), 0.8);
        assert_eq!(GlassType::Tinted.palette_alpha(), 0.7);
    }

    #[test]
    fn only_thick_has_border_glow() {
        assert!(GlassType::Thick.pane_style().border_glow.is_some());
        assert!(GlassType::Normal.pane_style().border_glow.is_none());
        assert!(GlassType::Tinted.pane_style().border_glow.is_none());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&GlassType::Tinted).unwrap(), "\"tinted\"");
        let t: GlassType = serde_json::from_str("\"thick\"").unwrap();
        assert_eq!(t, GlassType::Thick);
    }
}
