use serde::{Deserialize, Serialize};

use crate::utils::caption_gateway::{CaptionRequest, Tone};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionRequestBody {
    pub image_context: String,
    // free string on the wire, unknown values become professional
    #[serde(default)]
    pub tone: String,
}

impl CaptionRequestBody {
    pub fn into_request(self) -> CaptionRequest {
        CaptionRequest::new(self.image_context, Tone::from_str_lossy(&self.tone))
    }
}

#[derive(Debug, Serialize)]
pub struct CaptionResponse {
    pub caption: String,
}
