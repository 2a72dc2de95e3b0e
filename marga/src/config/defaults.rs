//! Serde default value functions.

/// Pixel intensity of traversable map cells
pub fn free_value() -> u8 {
    254
}

/// Pixel intensity painted on explored cells
pub fn explored_value() -> u8 {
    230
}
