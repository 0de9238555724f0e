use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SlideshowError;

/// One entry of the slideshow: an image to show and the video that plays alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlideItem {
    pub image_url: String,
    pub video_id: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl SlideItem {
    pub fn new(image_url: &str, video_id: &str, title: Option<&str>) -> Self {
        Self {
            image_url: image_url.to_string(),
            video_id: video_id.to_string(),
            title: title.map(str::to_string),
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    slides: Vec<SlideItem>,
}

/// Fixed, non-empty, ordered list of slides. Never changes after construction.
#[derive(Debug, Clone)]
pub struct SlideRegistry {
    slides: Vec<SlideItem>,
}

impl SlideRegistry {
    pub fn new(slides: Vec<SlideItem>) -> Result<Self, SlideshowError> {
        if slides.is_empty() {
            return Err(SlideshowError::EmptyRegistry);
        }
        Ok(Self { slides })
    }

    pub fn builtin() -> Self {
        Self {
            slides: vec![
                SlideItem::new(
                    "https://th.bing.com/th/id/OIP.BntIdzuijYlsS3tTsCKdsAHaEK?cb=iwc2&rs=1&pid=ImgDetMain",
                    "Rvnbs7zUXbE",
                    Some("Music 1"),
                ),
                SlideItem::new(
                    "https://images.unsplash.com/photo-1511379938547-c1f69419868d?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
                    "A2tXABSntNA",
                    Some("Music 2"),
                ),
                SlideItem::new(
                    "https://images.unsplash.com/photo-1507838153414-b4b713384a76?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
                    "XMAjVGRCcs8",
                    Some("Music 3"),
                ),
            ],
        }
    }

    pub fn from_manifest_str(raw: &str, path: &Path) -> Result<Self, SlideshowError> {
        let manifest: Manifest = toml::from_str(raw).map_err(|source| SlideshowError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(manifest.slides)
    }

    pub fn load_manifest(path: &Path) -> Result<Self, SlideshowError> {
        let raw = fs::read_to_string(path).map_err(|source| SlideshowError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_manifest_str(&raw, path)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Index is taken modulo the registry length.
    pub fn get(&self, index: usize) -> &SlideItem {
        &self.slides[index % self.slides.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideItem> {
        self.slides.iter()
    }
}
