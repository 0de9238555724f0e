use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::error::SlideshowError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Local(PathBuf),
}

impl ImageSource {
    pub fn parse(reference: &str) -> Self {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            ImageSource::Remote(reference.to_string())
        } else {
            ImageSource::Local(PathBuf::from(reference))
        }
    }
}

/// Raw image bytes plus the extension hint raylib needs to decode them.
pub struct ImageBytes {
    pub data: Vec<u8>,
    pub extension: String,
}

pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    pub fn new() -> Result<Self, SlideshowError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| SlideshowError::ImageFetch {
                url: String::new(),
                source,
            })?;
        Ok(Self { client })
    }

    pub fn fetch(&self, source: &ImageSource) -> Result<ImageBytes, SlideshowError> {
        match source {
            ImageSource::Remote(url) => self.fetch_remote(url),
            ImageSource::Local(path) => read_local(path),
        }
    }

    fn fetch_remote(&self, url: &str) -> Result<ImageBytes, SlideshowError> {
        let to_error = |source| SlideshowError::ImageFetch {
            url: url.to_string(),
            source,
        };
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(to_error)?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let data = response.bytes().map_err(to_error)?.to_vec();
        let extension = content_type
            .as_deref()
            .and_then(extension_for_content_type)
            .or_else(|| extension_from_url(url))
            .unwrap_or_else(|| "jpg".to_string());
        debug!("fetched {} ({} bytes, .{})", url, data.len(), extension);
        Ok(ImageBytes { data, extension })
    }
}

fn read_local(path: &Path) -> Result<ImageBytes, SlideshowError> {
    let data = fs::read(path).map_err(|source| SlideshowError::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    Ok(ImageBytes { data, extension })
}

pub fn extension_for_content_type(content_type: &str) -> Option<String> {
    let mime = content_type.split(';').next()?.trim().to_lowercase();
    let ext = match mime.as_str() {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/bmp" => "bmp",
        _ => return None,
    };
    Some(ext.to_string())
}

pub fn extension_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next()?;
    let name = path.rsplit('/').next()?;
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.to_lowercase();
    match ext.as_str() {
        "png" | "jpg" | "jpeg" | "bmp" | "gif" => Some(ext),
        _ => None,
    }
}

/// EXIF orientation tag, 1 (upright) when absent or unreadable.
pub fn exif_orientation(bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!("no EXIF data: {}", e);
            1
        }
    }
}

// --- Decode Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    fetcher: &ImageFetcher,
    reference: &str,
) -> Result<Texture2D, SlideshowError> {
    let bytes = fetcher.fetch(&ImageSource::parse(reference))?;

    // EXIF only works reliably for JPEG
    let orientation = match bytes.extension.as_str() {
        "jpg" | "jpeg" => exif_orientation(&bytes.data),
        _ => 1,
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", bytes.extension), &bytes.data)
        .map_err(|e| SlideshowError::ImageDecode {
            reference: reference.to_string(),
            message: e.to_string(),
        })?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise. Flips are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| SlideshowError::Texture {
            reference: reference.to_string(),
            message: e.to_string(),
        })
}

/// One texture slot per slide; `None` where the image could not be loaded.
pub fn load_slide_textures<'a>(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    references: impl Iterator<Item = &'a str>,
) -> Vec<Option<Texture2D>> {
    let fetcher = match ImageFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            warn!("image loading disabled: {}", e);
            return references.map(|_| None).collect();
        }
    };

    references
        .map(|reference| match load_texture(rl, thread, &fetcher, reference) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!("{}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_remote_and_local_references() {
        assert_eq!(
            ImageSource::parse("https://images.unsplash.com/photo-1?w=1350"),
            ImageSource::Remote("https://images.unsplash.com/photo-1?w=1350".to_string())
        );
        assert_eq!(
            ImageSource::parse("photos/cover.jpg"),
            ImageSource::Local(PathBuf::from("photos/cover.jpg"))
        );
    }

    #[test]
    fn content_type_maps_to_extension() {
        assert_eq!(extension_for_content_type("image/png"), Some("png".to_string()));
        assert_eq!(extension_for_content_type("image/jpeg; charset=binary"), Some("jpg".to_string()));
        assert_eq!(extension_for_content_type("text/html"), None);
    }

    #[test]
    fn url_extension_ignores_query_string() {
        assert_eq!(extension_from_url("https://example.com/a/b.PNG?x=1.gif"), Some("png".to_string()));
        assert_eq!(extension_from_url("https://th.bing.com/th/id/OIP.BntIdzuijYlsS3tTsCKdsAHaEK?cb=iwc2"), None);
    }

    #[test]
    fn orientation_defaults_to_upright_on_garbage() {
        assert_eq!(exif_orientation(b"not an image"), 1);
    }

    #[test]
    fn reads_local_file_with_lowercase_extension() {
        let path = std::env::temp_dir().join(format!("music_slideshow_image_{}.PNG", std::process::id()));
        fs::write(&path, [1u8, 2, 3]).expect("write image");

        let bytes = read_local(&path).expect("read image");
        assert_eq!(bytes.data, vec![1, 2, 3]);
        assert_eq!(bytes.extension, "png");

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn missing_local_file_is_read_error() {
        let result = read_local(Path::new("/nonexistent/music_slideshow/cover.jpg"));
        assert!(matches!(result, Err(SlideshowError::ImageRead { .. })));
    }
}
