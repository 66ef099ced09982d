//! Fixed bit patterns of the EAN-8 symbol.
//!
//! A symbol is 67 modules wide: a `101` guard, four left-half digits of 7
//! modules each, the `01010` center separator, four right-half digits, and
//! a closing `101` guard. The two digit tables are wire-format constants
//! shared by the rasterizer and the scanner; they must never diverge.

/// Total symbol width in modules.
pub const MODULE_COUNT: usize = 67;

/// Modules per encoded digit.
pub const DIGIT_MODULES: usize = 7;

/// Module offset of the first left-half digit.
pub const LEFT_START: usize = 3;

/// Module offset of the center separator.
pub const SEPARATOR_START: usize = 31;

/// Module offset of the first right-half digit.
pub const RIGHT_START: usize = 36;

/// Module offset of the closing guard.
pub const END_GUARD_START: usize = 64;

/// Start/end guard, dark-light-dark.
pub const GUARD: [u8; 3] = [1, 0, 1];

/// Center separator between the digit halves.
pub const SEPARATOR: [u8; 5] = [0, 1, 0, 1, 0];

/// Left-half (L-code) patterns for digits 0-9, most significant bit first.
pub const LEFT_PATTERNS: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011,
    0b0110001, 0b0101111, 0b0111011, 0b0110111, 0b0001011,
];

/// Right-half (R-code) patterns for digits 0-9, most significant bit first.
pub const RIGHT_PATTERNS: [u8; 10] = [
    0b1110010, 0b1100110, 0b1101100, 0b1000010, 0b1011100,
    0b1001110, 0b1010000, 0b1000100, 0b1001000, 0b1110100,
];

/// Extract bit `index` (0 = leftmost module) of a 7-bit digit pattern.
#[inline]
pub fn pattern_bit(pattern: u8, index: usize) -> u8 {
    (pattern >> (DIGIT_MODULES - 1 - index)) & 1
}

/// Find the digit whose pattern exactly matches `bits`, if any.
pub fn lookup(table: &[u8; 10], bits: u8) -> Option<u8> {
    table.iter().position(|&p| p == bits).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_disjoint_per_digit() {
        // Within each table every digit has a unique pattern, so an exact
        // match identifies exactly one digit.
        for table in [&LEFT_PATTERNS, &RIGHT_PATTERNS] {
            for i in 0..10 {
                for j in 0..10 {
                    if i != j {
                        assert_ne!(table[i], table[j]);
                    }
                }
            }
        }
    }

    #[test]
    fn right_patterns_are_left_complements() {
        // R-code is the bitwise complement of L-code over 7 bits.
        for d in 0..10 {
            assert_eq!(RIGHT_PATTERNS[d], !LEFT_PATTERNS[d] & 0x7f);
        }
    }

    #[test]
    fn pattern_bit_reads_msb_first() {
        // Digit 0 left pattern is 0001101.
        let p = LEFT_PATTERNS[0];
        let bits: Vec<u8> = (0..7).map(|i| pattern_bit(p, i)).collect();
        assert_eq!(bits, [0, 0, 0, 1, 1, 0, 1]);
    }

    #[test]
    fn lookup_finds_every_digit() {
        for d in 0..10u8 {
            assert_eq!(lookup(&LEFT_PATTERNS, LEFT_PATTERNS[d as usize]), Some(d));
            assert_eq!(lookup(&RIGHT_PATTERNS, RIGHT_PATTERNS[d as usize]), Some(d));
        }
        assert_eq!(lookup(&LEFT_PATTERNS, 0b1111111), None);
    }

    #[test]
    fn layout_offsets_cover_67_modules() {
        assert_eq!(LEFT_START, GUARD.len());
        assert_eq!(SEPARATOR_START, LEFT_START + 4 * DIGIT_MODULES);
        assert_eq!(RIGHT_START, SEPARATOR_START + SEPARATOR.len());
        assert_eq!(END_GUARD_START, RIGHT_START + 4 * DIGIT_MODULES);
        assert_eq!(MODULE_COUNT, END_GUARD_START + GUARD.len());
    }
}
