use crate::error::WhiskError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequestBody {
    pub client_context: ClientContext,
    pub seed: u32,
    pub image_model_settings: ImageModelSettings,
    pub user_instruction: String,
    pub recipe_media_inputs: Vec<RecipeMediaInput>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContext {
    pub workflow_id: String,
    pub tool: String,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageModelSettings {
    pub image_model: String,
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "IMAGE_ASPECT_RATIO_SQUARE")]
    Square,
    #[serde(rename = "IMAGE_ASPECT_RATIO_PORTRAIT")]
    Portrait,
    #[default]
    #[serde(rename = "IMAGE_ASPECT_RATIO_LANDSCAPE")]
    Landscape,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "IMAGE_ASPECT_RATIO_SQUARE",
            AspectRatio::Portrait => "IMAGE_ASPECT_RATIO_PORTRAIT",
            AspectRatio::Landscape => "IMAGE_ASPECT_RATIO_LANDSCAPE",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = WhiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" | "1:1" | "image_aspect_ratio_square" => Ok(AspectRatio::Square),
            "portrait" | "9:16" | "image_aspect_ratio_portrait" => Ok(AspectRatio::Portrait),
            "landscape" | "16:9" | "image_aspect_ratio_landscape" => Ok(AspectRatio::Landscape),
            other => Err(WhiskError::InvalidArgument(format!(
                "unknown aspect ratio '{}', expected square, portrait or landscape",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMediaInput {
    pub caption: String,
    pub media_input: MediaInput,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInput {
    pub media_category: MediaCategory,
    pub media_generation_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaCategory {
    #[serde(rename = "MEDIA_CATEGORY_SUBJECT")]
    Subject,
    #[serde(rename = "MEDIA_CATEGORY_SCENE")]
    Scene,
    #[serde(rename = "MEDIA_CATEGORY_STYLE")]
    Style,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeApiResponse {
    #[serde(default)]
    pub image_panels: Vec<ImagePanel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePanel {
    pub prompt: Option<String>,
    #[serde(default)]
    pub generated_images: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub encoded_image: String,
    pub seed: Option<u32>,
    pub media_generation_id: Option<String>,
    pub prompt: Option<String>,
    pub image_model: Option<String>,
    pub aspect_ratio: Option<String>,
}

/// `{"error": {"code": 500, "message": "...", "status": "INTERNAL"}}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

impl From<ApiErrorBody> for WhiskError {
    fn from(body: ApiErrorBody) -> Self {
        WhiskError::Api {
            code: body.code,
            message: body.message,
            status: body.status,
        }
    }
}
