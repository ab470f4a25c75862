use serde::{Deserialize, Serialize};

/// An RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Hue/saturation/value representation; hue in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to hue/saturation/value. Hue of an achromatic color is 0.
    pub fn to_hsv(&self) -> Hsv {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let h = if delta < 1e-12 {
            0.0
        } else if max == self.r {
            60.0 * (((self.g - self.b) / delta).rem_euclid(6.0))
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        };
        let s = if max < 1e-12 { 0.0 } else { delta / max };
        Hsv { h, s, v: max }
    }

    /// Convert from hue/saturation/value, preserving alpha = 1.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let h = hsv.h.rem_euclid(360.0);
        let c = hsv.v * hsv.s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = hsv.v - c;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self::rgb(r + m, g + m, b + m)
    }

    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            r: self.r + t * (other.r - self.r),
            g: self.g + t * (other.g - self.g),
            b: self.b + t * (other.b - self.b),
            a: self.a + t * (other.a - self.a),
        }
    }

    pub fn clamped(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Relative luminance with Rec. 709 weights.
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert!((Color::RED.to_hsv().h - 0.0).abs() < 1e-12);
        assert!((Color::GREEN.to_hsv().h - 120.0).abs() < 1e-12);
        assert!((Color::BLUE.to_hsv().h - 240.0).abs() < 1e-12);
    }

    #[test]
    fn test_achromatic() {
        let hsv = Color::rgb(0.5, 0.5, 0.5).to_hsv();
        assert!((hsv.h).abs() < 1e-12);
        assert!((hsv.s).abs() < 1e-12);
        assert!((hsv.v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_hsv_round_trip() {
        let samples = [
            Color::rgb(0.2, 0.4, 0.8),
            Color::rgb(0.9, 0.1, 0.3),
            Color::rgb(0.0, 1.0, 1.0),
            Color::rgb(0.33, 0.33, 0.34),
        ];
        for c in samples {
            let back = Color::from_hsv(c.to_hsv());
            assert!((back.r - c.r).abs() < 1e-12, "r mismatch for {c:?}");
            assert!((back.g - c.g).abs() < 1e-12, "g mismatch for {c:?}");
            assert!((back.b - c.b).abs() < 1e-12, "b mismatch for {c:?}");
        }
    }

    #[test]
    fn test_hue_wraps() {
        let c = Color::from_hsv(Hsv {
            h: 480.0,
            s: 1.0,
            v: 1.0,
        });
        // 480 degrees is 120: pure green.
        assert!((c.g - 1.0).abs() < 1e-12);
        assert!(c.r.abs() < 1e-12);
    }

    #[test]
    fn test_lerp_and_luminance() {
        let mid = Color::BLACK.lerp(&Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-12);
        assert!((Color::WHITE.luminance() - 1.0).abs() < 1e-12);
        assert!(Color::GREEN.luminance() > Color::BLUE.luminance());
    }
}
