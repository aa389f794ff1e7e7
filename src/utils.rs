use crate::cli::{parse_args, RecipeArgs};
use crate::config::WhiskConfig;
use crate::constants::{
    CLIENT_TOOL, HTTP_INTERNAL_SERVER_ERROR, WHISK_ORIGIN, WHISK_REFERER, WHISK_USER_AGENT,
};
use crate::error::{Result, WhiskError};
use crate::recipe::{
    ApiErrorEnvelope, ClientContext, ImageModelSettings, RecipeApiResponse, RecipeRequestBody,
};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT},
    Client,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use uuid::Uuid;

pub fn build_headers(token: &str) -> Result<HeaderMap> {
    let token = token.trim();
    if token.is_empty() {
        return Err(WhiskError::MissingToken);
    }

    let mut headers = HeaderMap::new();
    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token))?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ORIGIN, HeaderValue::from_static(WHISK_ORIGIN));
    headers.insert(REFERER, HeaderValue::from_static(WHISK_REFERER));
    headers.insert(USER_AGENT, HeaderValue::from_static(WHISK_USER_AGENT));
    Ok(headers)
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

pub fn new_session_id() -> String {
    format!(";{}", chrono::Utc::now().timestamp_millis())
}

pub fn build_recipe_request(args: &RecipeArgs) -> RecipeRequestBody {
    RecipeRequestBody {
        client_context: ClientContext {
            workflow_id: Uuid::new_v4().to_string(),
            tool: CLIENT_TOOL.to_string(),
            session_id: new_session_id(),
        },
        seed: args.seed.unwrap_or_else(rand::random::<u32>),
        image_model_settings: ImageModelSettings {
            image_model: args.image_model.clone(),
            aspect_ratio: args.aspect_ratio,
        },
        user_instruction: args.instruction.clone(),
        recipe_media_inputs: args.media_inputs.clone(),
    }
}

/// Top-level keys of the serialized payload, sorted.
pub fn payload_keys(request_body: &RecipeRequestBody) -> Vec<String> {
    match serde_json::to_value(request_body) {
        Ok(serde_json::Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Extra context logged for internal server errors; empty for any other failure.
pub fn failure_diagnostics(
    error: &WhiskError,
    api_url: &str,
    request_body: &RecipeRequestBody,
) -> Vec<String> {
    if error.code() != Some(HTTP_INTERNAL_SERVER_ERROR) {
        return Vec::new();
    }

    vec![
        format!("Request URL: {}", api_url),
        format!("Payload keys: {:?}", payload_keys(request_body)),
        format!(
            "Aspect ratio: {}",
            request_body.image_model_settings.aspect_ratio
        ),
    ]
}

pub fn log_request_failure(error: &WhiskError, api_url: &str, request_body: &RecipeRequestBody) {
    log::error!("Recipe request failed: {}", error);
    for line in failure_diagnostics(error, api_url, request_body) {
        log::error!("{}", line);
    }
}

/// Turns a raw response body into either the recipe result or the API's error envelope.
pub fn parse_recipe_body(status: reqwest::StatusCode, body: &str) -> Result<RecipeApiResponse> {
    if !status.is_success() {
        return match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => Err(envelope.error.into()),
            Err(_) => Err(WhiskError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.to_string(),
            }),
        };
    }

    let value: serde_json::Value = serde_json::from_str(body)?;
    if value.get("error").is_some() {
        let envelope: ApiErrorEnvelope = serde_json::from_value(value)?;
        return Err(envelope.error.into());
    }

    Ok(serde_json::from_value(value)?)
}

pub async fn make_whisk_request(
    client: &Client,
    api_url: &str,
    token: &str,
    request_body: &RecipeRequestBody,
) -> Result<RecipeApiResponse> {
    let headers = build_headers(token)?;
    log::info!(
        "Sending recipe request to {} (aspect ratio {}, {} media inputs)",
        api_url,
        request_body.image_model_settings.aspect_ratio,
        request_body.recipe_media_inputs.len()
    );
    log::debug!(
        "Request headers: {:?}",
        headers
            .iter()
            .filter(|(name, _)| *name != AUTHORIZATION)
            .collect::<Vec<_>>()
    );

    let spinner = create_spinner("cyan", "Whisking up your images...".to_string());
    let sent = client
        .post(api_url)
        .headers(headers)
        .json(request_body)
        .send()
        .await;
    let result = match sent {
        Ok(response) => {
            let status = response.status();
            match response.text().await {
                Ok(body) => parse_recipe_body(status, &body),
                Err(e) => Err(e.into()),
            }
        }
        Err(e) => Err(e.into()),
    };
    spinner.finish_and_clear();

    if let Err(e) = &result {
        log_request_failure(e, api_url, request_body);
    }
    result
}

/// Accepts plain base64 or a `data:<mime>;base64,` URL.
pub fn decode_image(encoded: &str) -> Result<Vec<u8>> {
    let data = match encoded.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => encoded,
    };
    Ok(base64::decode(data.trim())?)
}

pub fn process_recipe_response(
    api_response: &RecipeApiResponse,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let total: usize = api_response
        .image_panels
        .iter()
        .map(|panel| panel.generated_images.len())
        .sum();
    if total == 0 {
        return Err(WhiskError::EmptyResponse);
    }

    fs::create_dir_all(output_dir)?;

    let mut saved = Vec::with_capacity(total);
    for (panel_index, panel) in api_response.image_panels.iter().enumerate() {
        for (image_index, image) in panel.generated_images.iter().enumerate() {
            let bytes = decode_image(&image.encoded_image)?;
            let file_name = format!(
                "whisk_{}_{}_{}.png",
                panel_index,
                image_index,
                image.seed.unwrap_or(0)
            );
            let path = output_dir.join(file_name);
            fs::write(&path, bytes)?;
            log::debug!(
                "Wrote {} (media {}, model {}, aspect {})",
                path.display(),
                image.media_generation_id.as_deref().unwrap_or("-"),
                image.image_model.as_deref().unwrap_or("-"),
                image.aspect_ratio.as_deref().unwrap_or("-")
            );
            if let Some(prompt) = image.prompt.as_deref().or(panel.prompt.as_deref()) {
                log::info!("Rewritten prompt: {}", prompt);
            }
            saved.push(path);
        }
    }

    Ok(saved)
}

pub async fn process_command(
    client: &Client,
    config: &WhiskConfig,
    args: &[String],
) -> Result<Vec<PathBuf>> {
    let recipe_args = parse_args(args)?;
    let token = config.token()?;
    let request_body = build_recipe_request(&recipe_args);

    let api_response = make_whisk_request(client, &config.api_url, token, &request_body).await?;

    let output_dir = recipe_args
        .output_dir
        .as_deref()
        .unwrap_or(config.output_dir.as_path());
    let saved = process_recipe_response(&api_response, output_dir)?;
    for path in &saved {
        println!("{} {}", "Saved image:".green().bold(), path.display());
    }
    Ok(saved)
}
