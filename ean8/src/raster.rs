//! Rasterizes a validated code into a pixel grid.

use crate::bitmap::PixelGrid;
use crate::code::Ean8;
use crate::patterns::{
    pattern_bit, DIGIT_MODULES, END_GUARD_START, GUARD, LEFT_PATTERNS, LEFT_START, MODULE_COUNT,
    RIGHT_PATTERNS, RIGHT_START, SEPARATOR, SEPARATOR_START,
};

/// Rasterization scale: quiet-zone margin in pixels, module width in
/// pixels per module, and bar height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub margin: usize,
    pub module_width: usize,
    pub bar_height: usize,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            margin: 4,
            module_width: 3,
            bar_height: 50,
        }
    }
}

/// Expand a code into its 67-module bit sequence:
/// guard, 4 left-table digits, separator, 4 right-table digits, guard.
pub fn module_bits(code: &Ean8) -> [u8; MODULE_COUNT] {
    let digits = code.digits();
    let mut bits = [0u8; MODULE_COUNT];

    bits[..LEFT_START].copy_from_slice(&GUARD);
    bits[SEPARATOR_START..RIGHT_START].copy_from_slice(&SEPARATOR);
    bits[END_GUARD_START..].copy_from_slice(&GUARD);

    for (pos, bit) in bits[LEFT_START..SEPARATOR_START].iter_mut().enumerate() {
        let digit = digits[pos / DIGIT_MODULES] as usize;
        *bit = pattern_bit(LEFT_PATTERNS[digit], pos % DIGIT_MODULES);
    }
    for (pos, bit) in bits[RIGHT_START..END_GUARD_START].iter_mut().enumerate() {
        let digit = digits[pos / DIGIT_MODULES + 4] as usize;
        *bit = pattern_bit(RIGHT_PATTERNS[digit], pos % DIGIT_MODULES);
    }

    bits
}

/// Rasterize a code at the given geometry.
///
/// The grid is `67 * module_width + 2 * margin` wide and
/// `bar_height + 2 * margin` tall; the margin band is light, and every
/// pixel of the bar band takes the bit of the module it falls in.
///
/// # Panics
///
/// Panics if `module_width` or `bar_height` is zero.
pub fn rasterize(code: &Ean8, geometry: Geometry) -> PixelGrid {
    let Geometry { margin, module_width, bar_height } = geometry;
    assert!(module_width >= 1);
    assert!(bar_height >= 1);

    let width = MODULE_COUNT * module_width + 2 * margin;
    let height = bar_height + 2 * margin;
    let bits = module_bits(code);

    let mut grid = PixelGrid::new(width, height);
    for y in margin..height - margin {
        for x in margin..width - margin {
            grid.set(x, y, bits[(x - margin) / module_width]);
        }
    }
    grid
}
