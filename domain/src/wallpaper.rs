use std::fmt;
use uuid::Uuid;

use crate::options::{OutputFormat, ProcessingOptions};
use crate::resolution::{Orientation, Resolution};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct ProcessingRequest {
    pub id: RequestId,
    pub image: Vec<u8>,
    pub options: ProcessingOptions,
}

impl ProcessingRequest {
    pub fn new(id: RequestId, image: Vec<u8>, options: ProcessingOptions) -> Self {
        Self { id, image, options }
    }
}

impl fmt::Debug for ProcessingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessingRequest")
            .field("id", &self.id)
            .field("image_bytes", &self.image.len())
            .field("options", &self.options)
            .finish()
    }
}

#[derive(Clone)]
pub struct ProcessedWallpaper {
    pub bytes: Vec<u8>,
    pub format: OutputFormat,
    pub orientation: Orientation,
    pub resolution: Resolution,
}

impl ProcessedWallpaper {
    pub fn file_name(&self) -> String {
        self.format.download_file_name()
    }
}

impl fmt::Debug for ProcessedWallpaper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessedWallpaper")
            .field("bytes", &self.bytes.len())
            .field("format", &self.format)
            .field("orientation", &self.orientation)
            .field("resolution", &self.resolution)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_request_id_is_a_fresh_v4_uuid() {
        let first = RequestId::new();
        let second = RequestId::new();

        assert_ne!(first, second);
        assert_eq!(first.0.get_version_num(), 4);
        assert_eq!(Uuid::parse_str(&first.to_string()).unwrap(), first.0);
    }
}
