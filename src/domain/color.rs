/// Opaque RGB triple. Opacity is kept next to it and only folded in when a
/// CSS color string is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const WHITE: Rgb = Rgb::new(255, 255, 255);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba { rgb: self, alpha }
    }

    /// `rgba(r, g, b, a)` with `a` clamped to [0, 1] and printed with 2 decimals
    pub fn css(&self, opacity: f32) -> String {
        format!(
            "rgba({}, {}, {}, {:.2})",
            self.r,
            self.g,
            self.b,
            opacity.clamp(0.0, 1.0)
        )
    }
}

/// RGB plus alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub fn css(&self) -> String {
        self.rgb.css(self.alpha)
    }

    /// Same color at a different alpha
    pub fn at(&self, alpha: f32) -> Rgba {
        Rgba { rgb: self.rgb, alpha }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formats_two_decimals_and_clamps() {
        let c = Rgb::new(137, 207, 240);
        assert_eq!(c.css(0.7), "rgba(137, 207, 240, 0.70)");
        assert_eq!(c.css(0.99971), "rgba(137, 207, 240, 1.00)");
        assert_eq!(c.css(-0.2), "rgba(137, 207, 240, 0.00)");
        assert_eq!(WHITE.with_alpha(1.5).css(), "rgba(255, 255, 255, 1.00)");
    }

    #[test]
    fn at_keeps_rgb() {
        let c = Rgb::new(1, 2, 3).with_alpha(0.8);
        let faded = c.at(0.25);
        assert_eq!(faded.rgb, c.rgb);
        assert_eq!(faded.css(), "rgba(1, 2, 3, 0.25)");
    }
}
