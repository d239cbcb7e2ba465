// Defaults for the chat-completion endpoint, overridable from the environment
// (or a .env file loaded by the binaries) and then from CLI flags.

use std::env;

/// OpenRouter-compatible chat-completion endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// Generation parameters sent with every request.
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 500;

/// Request timeout in seconds; 0 waits forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Delay between characters when printing replies.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 30;

lazy_static::lazy_static! {
    pub static ref API_URL: String = env::var("CONTAINER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    pub static ref API_KEY: String = env::var("CONTAINER_API_KEY").unwrap_or_default();
    pub static ref MODEL: String = env::var("CONTAINER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
}
