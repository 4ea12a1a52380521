//! Video versus image classification of a tile container.

use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};

use crate::page::descendants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    Image,
}

impl ContentKind {
    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, ContentKind::Video)
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Video => write!(f, "video"),
            ContentKind::Image => write!(f, "image"),
        }
    }
}

/// A container is a video when it holds a descendant matching `marker`.
///
/// The host page marks video covers with an AVIF `<source>`; photo
/// carousels have none. Without a marker everything is an image.
#[must_use]
pub fn classify(container: ElementRef<'_>, marker: Option<&Selector>) -> ContentKind {
    match marker {
        Some(marker) if descendants(container, marker).next().is_some() => ContentKind::Video,
        _ => ContentKind::Image,
    }
}
