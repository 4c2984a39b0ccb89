use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("Invalid hex digit {0:?} in color")]
    HexDigit(char),

    #[error("Invalid hex color length: {0} (expected 3 or 6 digits)")]
    HexLength(usize),

    #[error("Chromaticity ({x}, {y}) is outside the CIE diagram")]
    Chromaticity { x: f32, y: f32 },

    #[error("Brightness {0} exceeds 254")]
    Brightness(u8),
}

pub type ColorResult<T> = Result<T, ColorError>;
