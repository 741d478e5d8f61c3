use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CaptionTone {
    #[default]
    Cinematic,
    Romantic,
    Fun,
    Professional,
}

impl CaptionTone {
    /// In the order the buttons are shown.
    pub const ALL: [CaptionTone; 4] = [
        CaptionTone::Cinematic,
        CaptionTone::Romantic,
        CaptionTone::Fun,
        CaptionTone::Professional,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CaptionTone::Cinematic => "Cinematic",
            CaptionTone::Romantic => "Romantic",
            CaptionTone::Fun => "Fun",
            CaptionTone::Professional => "Professional",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaptionTone::Cinematic => "cinematic",
            CaptionTone::Romantic => "romantic",
            CaptionTone::Fun => "fun",
            CaptionTone::Professional => "professional",
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CaptionRequest {
    pub image_context: String,
    pub tone: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CaptionResponse {
    pub caption: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaLibrary {
    pub photos: Vec<String>,
    pub videos: Vec<String>,
    pub hero_images: HashMap<String, String>,
    pub logos: HashMap<String, String>,
}

impl MediaLibrary {
    pub fn hero_image(&self, key: &str) -> String {
        self.hero_images.get(key).cloned().unwrap_or_default()
    }

    pub fn logo(&self, key: &str) -> Option<String> {
        self.logos.get(key).filter(|url| !url.is_empty()).cloned()
    }
}
