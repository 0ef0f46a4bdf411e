/// Result type for color detection
pub type DetectResult<T> = Result<T, DetectError>;

/// Error types raised inside the detection pipeline.
///
/// None of these reach callers of [`crate::detect_colors`]; they are turned
/// into the fallback result at the boundary.
#[derive(Debug)]
pub enum DetectError {
    Decode(image::ImageError),
    Io(std::io::Error),
    InvalidOptions(String),
}

impl std::fmt::Display for DetectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectError::Decode(e) => write!(f, "Decode failed: {}", e),
            DetectError::Io(e) => write!(f, "I/O error: {}", e),
            DetectError::InvalidOptions(msg) => write!(f, "Invalid options: {}", msg),
        }
    }
}

impl std::error::Error for DetectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DetectError::Decode(e) => Some(e),
            DetectError::Io(e) => Some(e),
            DetectError::InvalidOptions(_) => None,
        }
    }
}

impl From<image::ImageError> for DetectError {
    fn from(error: image::ImageError) -> Self {
        DetectError::Decode(error)
    }
}

impl From<std::io::Error> for DetectError {
    fn from(error: std::io::Error) -> Self {
        DetectError::Io(error)
    }
}
