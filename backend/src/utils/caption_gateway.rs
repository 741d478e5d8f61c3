use std::fmt;
use std::sync::Arc;

use crate::api::gemini::TextGenerator;

pub const EMPTY_CAPTION_FALLBACK: &str = "Could not generate caption.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Professional,
    Fun,
    Cinematic,
    Romantic,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Fun, Tone::Cinematic, Tone::Romantic];

    /// Unknown values land on `Professional` instead of failing.
    pub fn from_str_lossy(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "fun" => Tone::Fun,
            "cinematic" => Tone::Cinematic,
            "romantic" => Tone::Romantic,
            "professional" => Tone::Professional,
            other => {
                tracing::debug!("Unrecognized caption tone '{}', using professional", other);
                Tone::Professional
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Fun => "fun",
            Tone::Cinematic => "cinematic",
            Tone::Romantic => "romantic",
        }
    }

    pub fn mock_caption(&self) -> &'static str {
        match self {
            Tone::Romantic => "In the whispers of the wind, love found its eternal home. ✨ #ForeverYours #NextImage",
            Tone::Cinematic => "Shadows and light dancing in a symphony of emotion. A moment frozen in time. 🎬",
            Tone::Fun => "Caught in the act of being awesome! Can we rewind this moment? 😄 #PartyVibes",
            Tone::Professional => "Excellence in every frame. Elevating your visual identity. 📸",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptionRequest {
    pub image_context: String,
    pub tone: Tone,
}

impl CaptionRequest {
    pub fn new(image_context: impl Into<String>, tone: Tone) -> Self {
        Self {
            image_context: image_context.into(),
            tone,
        }
    }
}

pub fn build_caption_prompt(request: &CaptionRequest) -> String {
    format!(
        "You are a professional social media manager for a high-end photography studio named 'Next Image Lipu Photography'.\n\
         Generate a short, engaging Instagram caption for a photo with the following context: \"{}\".\n\
         The tone should be: {}.\n\
         Include relevant hashtags.",
        request.image_context, request.tone
    )
}

/// Turns a context + tone into a caption. Never fails: every problem ends in a mock caption.
pub struct CaptionGateway {
    generator: Option<Arc<dyn TextGenerator>>,
    model: String,
}

impl CaptionGateway {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    pub fn mock_only() -> Self {
        Self::new(None, crate::config::app_config::DEFAULT_GEMINI_MODEL)
    }

    pub fn is_live(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn generate_caption(&self, request: &CaptionRequest) -> String {
        let generator = match &self.generator {
            Some(generator) => generator,
            None => {
                tracing::warn!("Gemini API key missing, using mock caption for tone {}", request.tone);
                return request.tone.mock_caption().to_string();
            }
        };

        let prompt = build_caption_prompt(request);
        match generator.generate_text(&self.model, &prompt).await {
            Ok(text) if text.is_empty() => {
                tracing::warn!("Gemini returned an empty caption");
                EMPTY_CAPTION_FALLBACK.to_string()
            }
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Gemini API error: {}", e);
                request.tone.mock_caption().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::gemini::{GeminiError, MockTextGenerator};

    fn live_gateway(mock: MockTextGenerator) -> CaptionGateway {
        CaptionGateway::new(Some(Arc::new(mock)), "gemini-2.5-flash")
    }

    #[test]
    fn tone_parsing_is_permissive() {
        assert_eq!(Tone::from_str_lossy("Romantic"), Tone::Romantic);
        assert_eq!(Tone::from_str_lossy(" cinematic "), Tone::Cinematic);
        assert_eq!(Tone::from_str_lossy("fun"), Tone::Fun);
        assert_eq!(Tone::from_str_lossy("moody"), Tone::Professional);
        assert_eq!(Tone::from_str_lossy(""), Tone::Professional);
    }

    #[test]
    fn every_tone_has_a_distinct_mock() {
        let mut captions: Vec<&str> = Tone::ALL.iter().map(|t| t.mock_caption()).collect();
        captions.sort();
        captions.dedup();
        assert_eq!(captions.len(), 4);
    }

    #[test]
    fn prompt_embeds_context_and_tone() {
        let prompt = build_caption_prompt(&CaptionRequest::new("Bride smiling at sunset", Tone::Romantic));
        assert!(prompt.contains("\"Bride smiling at sunset\""));
        assert!(prompt.contains("The tone should be: romantic."));
        assert!(prompt.contains("hashtags"));
    }

    #[tokio::test]
    async fn no_credential_returns_romantic_mock_exactly() {
        let gateway = CaptionGateway::mock_only();
        let caption = gateway
            .generate_caption(&CaptionRequest::new("", Tone::Romantic))
            .await;
        assert_eq!(
            caption,
            "In the whispers of the wind, love found its eternal home. ✨ #ForeverYours #NextImage"
        );
    }

    #[tokio::test]
    async fn no_credential_unknown_tone_returns_professional_mock() {
        let gateway = CaptionGateway::mock_only();
        let request = CaptionRequest::new("studio portrait", Tone::from_str_lossy("grungy"));
        assert_eq!(
            gateway.generate_caption(&request).await,
            "Excellence in every frame. Elevating your visual identity. 📸"
        );
    }

    #[tokio::test]
    async fn mock_path_is_deterministic() {
        let gateway = CaptionGateway::mock_only();
        let request = CaptionRequest::new("birthday party", Tone::Fun);
        let first = gateway.generate_caption(&request).await;
        let second = gateway.generate_caption(&request).await;
        assert_eq!(first, second);
        assert!(!gateway.is_live());
    }

    #[tokio::test]
    async fn remote_text_is_returned_as_is() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate_text()
            .withf(|model, prompt| model.contains("gemini-2.5-flash") && prompt.contains("red lehenga"))
            .times(1)
            .returning(|_, _| Ok("Red, gold and forever. #NextImage".to_string()));

        let gateway = live_gateway(mock);
        let caption = gateway
            .generate_caption(&CaptionRequest::new("bride in red lehenga", Tone::Cinematic))
            .await;
        assert_eq!(caption, "Red, gold and forever. #NextImage");
    }

    #[tokio::test]
    async fn empty_remote_text_becomes_placeholder() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate_text()
            .times(1)
            .returning(|_, _| Ok(String::new()));

        let gateway = live_gateway(mock);
        let caption = gateway
            .generate_caption(&CaptionRequest::new("sunset", Tone::Fun))
            .await;
        assert_eq!(caption, "Could not generate caption.");
    }

    #[tokio::test]
    async fn remote_failure_falls_back_to_same_mock_as_missing_key() {
        for tone in Tone::ALL {
            let mut mock = MockTextGenerator::new();
            mock.expect_generate_text().times(1).returning(|_, _| {
                Err(GeminiError::Api {
                    status: 503,
                    message: "overloaded".to_string(),
                })
            });

            let request = CaptionRequest::new("engagement shoot", tone);
            let live = live_gateway(mock).generate_caption(&request).await;
            let offline = CaptionGateway::mock_only().generate_caption(&request).await;
            assert_eq!(live, offline);
        }
    }
}
