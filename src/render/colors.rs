//! Colour math for the built-in paint routines.
//!
//! Backends receive plain [`Rgb`] values; `to_hex` gives a CSS string that
//! Canvas 2D accepts directly.

use serde::{Deserialize, Serialize};

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a hex string (with or without #).
    /// Returns None if the format is invalid.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Convert to CSS hex string (#RRGGBB).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Add per-channel amounts, saturating at 255.
    pub fn offset(self, dr: u8, dg: u8, db: u8) -> Self {
        Self {
            r: self.r.saturating_add(dr),
            g: self.g.saturating_add(dg),
            b: self.b.saturating_add(db),
        }
    }

    /// Add the same amount to every channel, saturating at 255.
    pub fn brighten(self, amount: u8) -> Self {
        self.offset(amount, amount, amount)
    }

    /// Move `num / den` of the way toward `target`, truncating toward `self`.
    pub fn mix(self, target: Rgb, num: i32, den: i32) -> Self {
        Self {
            r: Self::mix_component(self.r, target.r, num, den),
            g: Self::mix_component(self.g, target.g, num, den),
            b: Self::mix_component(self.b, target.b, num, den),
        }
    }

    fn mix_component(from: u8, to: u8, num: i32, den: i32) -> u8 {
        let from = i32::from(from);
        let mixed = from + (i32::from(to) - from) * num / den.max(1);
        u8::try_from(mixed.clamp(0, 255)).unwrap_or(u8::MAX)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        assert_eq!(Rgb::from_hex("#316AC5"), Some(Rgb::new(49, 106, 197)));
        assert_eq!(Rgb::from_hex("316ac5").unwrap().to_hex(), "#316AC5");
        assert_eq!(Rgb::from_hex("#31"), None);
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(Rgb::new(250, 10, 200).brighten(20), Rgb::new(255, 30, 220));
        assert_eq!(
            Rgb::new(249, 177, 25).offset(5, 20, 60),
            Rgb::new(254, 197, 85)
        );
    }

    #[test]
    fn test_mix_truncates() {
        let bg = Rgb::new(235, 234, 219);
        let grid = Rgb::new(199, 197, 178);
        // 235 + (199 - 235) * 2 / 3 = 235 - 24
        assert_eq!(bg.mix(grid, 2, 3), Rgb::new(211, 210, 192));
        assert_eq!(bg.mix(grid, 1, 3), Rgb::new(223, 222, 206));
    }
}
