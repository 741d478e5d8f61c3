use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

pub const PHOTOS_DIR: &str = "Photos";
pub const VIDEOS_DIR: &str = "Video";
pub const LOGOS_DIR: &str = "logo";

const PHOTO_EXTENSIONS: &[&str] = &["webp", "jpg", "jpeg", "png"];

const PRIMARY_HERO_PHOTO: &str = "2021-06-11.jpg";

// (hero key, fragment of the photo's file name)
const HERO_PHOTO_FRAGMENTS: &[(&str, &str)] = &[
    ("videography", "538717162_18072926039041691"),
    ("editing", "539845125_18072926048041691"),
    ("services", "542241122_18073520282041691"),
];

const LOGO_FILES: &[(&str, &str)] = &[
    ("full", "full_logo.png"),
    ("fullBlack", "full_logo_black.png"),
    ("short", "short_logo.png"),
    ("altBlack", "png black.png"),
];

/// Everything the site shows from the studio's asset folder, as public URLs.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaLibrary {
    pub photos: Vec<String>,
    pub videos: Vec<String>,
    pub hero_images: BTreeMap<String, String>,
    pub logos: BTreeMap<String, String>,
}

impl MediaLibrary {
    /// Missing folders are treated as empty; only unreadable ones are errors.
    pub fn scan(media_dir: &Path, url_prefix: &str) -> io::Result<Self> {
        let photo_names = list_files(&media_dir.join(PHOTOS_DIR), is_photo)?;
        let video_names = list_files(&media_dir.join(VIDEOS_DIR), is_video)?;
        let logo_names = list_files(&media_dir.join(LOGOS_DIR), is_photo)?;

        let url_for = |dir: &str, name: &str| {
            format!("{}/{}/{}", url_prefix.trim_end_matches('/'), dir, name)
        };

        let mut hero_images = BTreeMap::new();
        let primary = photo_names
            .iter()
            .find(|name| name.as_str() == PRIMARY_HERO_PHOTO)
            .map(|name| url_for(PHOTOS_DIR, name))
            .unwrap_or_default();
        hero_images.insert("photography".to_string(), primary);
        for (key, fragment) in HERO_PHOTO_FRAGMENTS {
            let url = photo_names
                .iter()
                .find(|name| name.contains(fragment))
                .map(|name| url_for(PHOTOS_DIR, name))
                .unwrap_or_default();
            hero_images.insert(key.to_string(), url);
        }

        let logos = LOGO_FILES
            .iter()
            .filter(|(_, file)| logo_names.iter().any(|name| name == *file))
            .map(|(key, file)| (key.to_string(), url_for(LOGOS_DIR, file)))
            .collect();

        let library = Self {
            photos: photo_names.iter().map(|n| url_for(PHOTOS_DIR, n)).collect(),
            videos: video_names.iter().map(|n| url_for(VIDEOS_DIR, n)).collect(),
            hero_images,
            logos,
        };

        tracing::info!(
            "Media library loaded: {} photos, {} videos, {} logos",
            library.photos.len(),
            library.videos.len(),
            library.logos.len()
        );
        Ok(library)
    }

    pub fn hero_image(&self, key: &str) -> &str {
        self.hero_images.get(key).map(String::as_str).unwrap_or("")
    }
}

fn is_photo(path: &Path) -> bool {
    let ext_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| PHOTO_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false);
    ext_ok
        && mime_guess::from_path(path)
            .first()
            .map(|m| m.type_().as_str() == "image")
            .unwrap_or(false)
}

fn is_video(path: &Path) -> bool {
    mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str() == "video/mp4")
        .unwrap_or(false)
}

fn list_files(dir: &Path, keep: fn(&Path) -> bool) -> io::Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("Media folder {} not found, skipping", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !keep(&path) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}
