//! Scans a pixel grid for an EAN-8 symbol.
//!
//! Single pass: detect the top quiet-zone margin, majority-vote one
//! horizontal scanline into 67 module bits, check the guard and separator
//! markers, then map each 7-bit group to a digit. Unrecognized groups
//! become per-digit sentinels rather than aborting the decode.

use std::fmt;

use crate::bitmap::PixelGrid;
use crate::error::ScanError;
use crate::patterns::{
    lookup, DIGIT_MODULES, END_GUARD_START, GUARD, LEFT_PATTERNS, LEFT_START, MODULE_COUNT,
    RIGHT_PATTERNS, RIGHT_START, SEPARATOR, SEPARATOR_START,
};

/// Outcome of a structurally valid scan.
///
/// `digits[i]` is `None` when group `i` matched no table entry; the rest
/// of the sequence still decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub digits: [Option<u8>; 8],
    /// Detected quiet-zone margin in rows.
    pub margin: usize,
    /// Module width in pixels, from ceiling division of the usable width.
    pub module_width: usize,
}

impl ScanResult {
    /// Whether every digit group matched a table entry.
    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }
}

impl fmt::Display for ScanResult {
    /// The digit string, with `?` standing in for unrecognized groups.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            match d {
                Some(d) => write!(f, "{d}")?,
                None => write!(f, "?")?,
            }
        }
        Ok(())
    }
}

/// Count the consecutive leading rows with no dark pixel.
///
/// Returns `height` when the whole image is blank.
pub fn top_margin(grid: &PixelGrid) -> usize {
    (0..grid.height)
        .find(|&y| grid.row(y).iter().any(|&p| p != 0))
        .unwrap_or(grid.height)
}

/// Scan a grid for an EAN-8 symbol.
///
/// The module width is derived from the detected top margin on the
/// assumption that the left quiet zone is the same size; an asymmetric
/// margin mis-samples and typically fails the structure check.
pub fn scan(grid: &PixelGrid) -> Result<ScanResult, ScanError> {
    let margin = top_margin(grid);
    if margin >= grid.height {
        return Err(ScanError::NoMargin);
    }

    let row = margin + grid.height / 2;
    if 2 * margin >= grid.width || row >= grid.height {
        return Err(ScanError::BadMargin {
            margin,
            width: grid.width,
            height: grid.height,
        });
    }

    let usable = grid.width - 2 * margin;
    let module_width = usable.div_ceil(MODULE_COUNT);
    let bits = sample_modules(grid, row, margin, module_width);

    if bits[..LEFT_START] != GUARD
        || bits[END_GUARD_START..] != GUARD
        || bits[SEPARATOR_START..RIGHT_START] != SEPARATOR
    {
        return Err(ScanError::InvalidStructure);
    }

    let mut digits = [None; 8];
    for group in 0..4 {
        let offset = LEFT_START + group * DIGIT_MODULES;
        digits[group] = lookup(&LEFT_PATTERNS, pack_group(&bits, offset));
    }
    for group in 0..4 {
        let offset = RIGHT_START + group * DIGIT_MODULES;
        digits[group + 4] = lookup(&RIGHT_PATTERNS, pack_group(&bits, offset));
    }

    Ok(ScanResult { digits, margin, module_width })
}

/// Pack the 7 module bits starting at `offset` into a u8, most
/// significant bit first, matching the digit-table encoding.
fn pack_group(bits: &[u8; MODULE_COUNT], offset: usize) -> u8 {
    bits[offset..offset + DIGIT_MODULES]
        .iter()
        .fold(0, |acc, &b| (acc << 1) | b)
}

/// Majority-vote each of the 67 modules along one scanline.
///
/// Dark wins only on a strict majority; an exact tie reads as light. The
/// ceiling-divided module width can push the last modules past the right
/// edge, so only in-bounds columns are counted.
fn sample_modules(
    grid: &PixelGrid,
    row: usize,
    margin: usize,
    module_width: usize,
) -> [u8; MODULE_COUNT] {
    let pixels = grid.row(row);
    let mut bits = [0u8; MODULE_COUNT];
    for (i, bit) in bits.iter_mut().enumerate() {
        let start = margin + i * module_width;
        let mut dark = 0usize;
        let mut light = 0usize;
        for x in start..start + module_width {
            match pixels.get(x).copied() {
                Some(0) => light += 1,
                Some(_) => dark += 1,
                None => break,
            }
        }
        *bit = u8::from(dark > light);
    }
    bits
}
