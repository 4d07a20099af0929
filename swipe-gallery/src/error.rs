/// Error type for gallery content handling
#[derive(Debug)]
pub enum GalleryError {
    /// The provider returned no usable images
    EmptyGallery,
    /// Content could not be parsed
    Parse(serde_json::Error),
}

impl std::fmt::Display for GalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::EmptyGallery => write!(f, "Gallery has no images"),
            GalleryError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for GalleryError {}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::Parse(err)
    }
}
