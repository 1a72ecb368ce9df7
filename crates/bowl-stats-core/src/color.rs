//! Fallback display colors for bowlers without a hex code

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest 24-bit RGB value
const MAX_RGB: u32 = 0xFF_FFFF;

/// Source of `#rrggbb` colors for bowlers missing from the metadata sheet
pub trait ColorSource {
    fn next_color(&mut self) -> String;
}

/// Uniformly random colors over the full RGB space
///
/// Colors from an entropy-seeded source differ between runs; use
/// [`RandomColors::seeded`] for reproducible output.
#[derive(Debug, Clone)]
pub struct RandomColors<R = StdRng> {
    rng: R,
}

impl RandomColors<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomColors<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> String {
        format_hex(self.rng.random_range(0..=MAX_RGB))
    }
}

/// Format a 24-bit value as a lowercase `#rrggbb` code
pub fn format_hex(rgb: u32) -> String {
    format!("#{:06x}", rgb & MAX_RGB)
}

/// Whether a string is a lowercase `#rrggbb` code
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(0), "#000000");
        assert_eq!(format_hex(0xFF0000), "#ff0000");
        assert_eq!(format_hex(0x0a0b0c), "#0a0b0c");
        assert_eq!(format_hex(MAX_RGB), "#ffffff");
    }

    #[test]
    fn test_random_colors_are_valid() {
        let mut colors = RandomColors::from_entropy();
        for _ in 0..200 {
            let color = colors.next_color();
            assert!(is_hex_color(&color), "bad color {}", color);
        }
    }

    #[test]
    fn test_seeded_colors_are_reproducible() {
        let mut a = RandomColors::seeded(42);
        let mut b = RandomColors::seeded(42);
        let first: Vec<String> = (0..5).map(|_| a.next_color()).collect();
        let second: Vec<String> = (0..5).map(|_| b.next_color()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#a1b2c3"));
        assert!(!is_hex_color("#A1B2C3"));
        assert!(!is_hex_color("a1b2c3"));
        assert!(!is_hex_color("#a1b2c"));
        assert!(!is_hex_color("#a1b2cg"));
    }
}
