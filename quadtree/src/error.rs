use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidRegionDims { width: f32, height: f32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidRegionDims { width, height } => {
                write!(
                    f,
                    "region width/height must be finite and non-negative (width: {}, height: {})",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
