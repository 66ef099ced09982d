use thiserror::Error;

/// Failures while parsing the plain PBM container.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("not a plain PBM file: expected magic token \"P1\"")]
    BadMagic,

    #[error("missing or non-positive image dimensions")]
    BadDimensions,

    #[error("pixel data ended early: expected {expected} samples, got {got}")]
    Truncated { expected: usize, got: usize },

    #[error("failed to read bitmap stream")]
    Io(#[from] std::io::Error),
}

/// Failures while validating an EAN-8 identifier string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("an EAN-8 code has exactly 8 digits, got {0} characters")]
    WrongLength(usize),

    #[error("non-digit character '{0}' in code")]
    NonDigit(char),

    #[error("checksum mismatch: expected check digit {expected}, found {found}")]
    BadChecksum { expected: u8, found: u8 },
}

/// Failures while scanning a pixel grid for a symbol.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("no symbol found: every row of the image is blank")]
    NoMargin,

    #[error("margin {margin} leaves no scannable area in a {width}x{height} image")]
    BadMargin {
        margin: usize,
        width: usize,
        height: usize,
    },

    #[error("guard or separator bars do not match the EAN-8 structure")]
    InvalidStructure,
}

/// Umbrella error for the parse-then-scan decode pipeline.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Scan(#[from] ScanError),
}
