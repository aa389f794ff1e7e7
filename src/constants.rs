pub const WHISK_API_URL: &str = "https://aisandbox-pa.googleapis.com/v1/whisk:runImageRecipe";
pub const WHISK_ORIGIN: &str = "https://labs.google";
pub const WHISK_REFERER: &str = "https://labs.google/";
pub const WHISK_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
pub const DEFAULT_IMAGE_MODEL: &str = "R2I";
pub const CLIENT_TOOL: &str = "BACKBONE";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_OUTPUT_DIR: &str = ".";

pub const ENV_BEARER_TOKEN: &str = "WHISK_BEARER_TOKEN";
pub const ENV_API_URL: &str = "WHISK_API_URL";
pub const ENV_OUTPUT_DIR: &str = "WHISK_OUTPUT_DIR";
pub const ENV_TIMEOUT_SECS: &str = "WHISK_TIMEOUT_SECS";

pub const HTTP_INTERNAL_SERVER_ERROR: i64 = 500;
pub const STATUS_INTERNAL: &str = "INTERNAL";
