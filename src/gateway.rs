//! Conversation with the remote chat-completion endpoint.
//!
//! A [`ChatGateway`] owns one transcript. Each user message is annotated with
//! whatever the resolver knows about the location it mentions before the whole
//! transcript is posted.

use std::fmt::Write as _;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::catalog::Catalog;
use crate::constants;
use crate::resolver::{self, DEFAULT_NEARBY_LIMIT};

pub const SYSTEM_PROMPT: &str = r#"You are a helpful Container/Bottle Finder Assistant for Perth, Western Australia.

You help people find cans, bottles, and containers in high-pollution areas around Perth for the Containers for Change program (10¢ per container).

KEY RESPONSIBILITIES:
1. When asked about specific locations, provide detailed information about where to find containers
2. Give specific areas within locations (e.g., "at Cottesloe Beach, check near the pavilion, north end near groyne")
3. Mention peak times when containers are most abundant
4. Suggest nearby collection points for cashing in containers
5. Provide practical tips for container collection

RESPONSE STYLE:
- Be enthusiastic and helpful
- Use emojis appropriately (🥤🗑️💰📍⏰)
- Give specific, actionable advice
- Keep responses concise but informative
- Always mention the 10¢ refund value

IMPORTANT: You have access to real location data. When someone asks about a specific place, provide detailed local knowledge. Only answer questions about containers and Containers for Change. For example, don't respond to math equations, but do respond to Containers for Change related arithmetic, e.g. "If I have 100 containers, how much money can I make cashing them in at an exchange point?""#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Endpoint and generation settings.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// `None` waits for the endpoint indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: constants::API_URL.clone(),
            api_key: constants::API_KEY.clone(),
            model: constants::MODEL.clone(),
            temperature: constants::TEMPERATURE,
            max_tokens: constants::MAX_TOKENS,
            timeout: Some(Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS)),
        }
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API Error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// The line shown to the user in place of a reply.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { .. } => format!("❌ {}", self),
            _ => format!("❌ Error: {}", self),
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: String,
}

/// Builds the location block appended to a user message, or `None` when the
/// message does not mention a known place.
pub fn location_context(catalog: &Catalog, user_text: &str) -> Option<String> {
    let location = resolver::find_location(catalog, user_text)?;

    // Writing into a String cannot fail.
    let mut context = String::new();
    let _ = writeln!(context);
    let _ = writeln!(context, "📍 LOCATION FOUND: {}", location.name);
    let _ = writeln!(context, "Litter Density: {}/10", location.density);
    let _ = writeln!(context, "Peak Times: {}", location.peak_times);
    let _ = writeln!(context, "Container Types: {}", location.container_types);
    if let Some(areas) = location.specific_areas {
        let _ = writeln!(context, "Specific Areas: {}", areas);
    }

    let _ = writeln!(context);
    let _ = writeln!(context, "💰 NEARBY COLLECTION POINTS:");
    let nearby = resolver::nearest_collection_points(catalog, &location.coords, DEFAULT_NEARBY_LIMIT);
    for (i, near) in nearby.iter().enumerate() {
        let _ = writeln!(
            context,
            "{}. {} ({}) - {}",
            i + 1,
            near.point.name,
            near.point.category.slug(),
            near.point.hours
        );
    }

    Some(context)
}

/// Returns the text actually sent for `user_text`: the message itself, plus
/// the location block when there is one.
pub fn annotate(catalog: &Catalog, user_text: &str) -> String {
    match location_context(catalog, user_text) {
        Some(context) => format!("{}\n\n[LOCATION DATA:{}]", user_text, context),
        None => user_text.to_string(),
    }
}

pub struct ChatGateway {
    config: GatewayConfig,
    client: Client,
    catalog: Catalog,
    transcript: Vec<ChatMessage>,
}

impl ChatGateway {
    pub fn new(config: GatewayConfig, catalog: Catalog) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        if config.api_key.is_empty() {
            warn!("No API key configured; requests will be sent without credentials");
        }
        info!(api_url = %config.api_url, model = %config.model, "Chat gateway ready");

        Ok(Self {
            config,
            client,
            catalog,
            transcript: vec![ChatMessage::new(Role::System, SYSTEM_PROMPT)],
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every message exchanged so far, starting with the system prompt.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Sends a message and returns the reply, or a printable error line.
    ///
    /// The user message is recorded even when the request fails.
    pub async fn send(&mut self, user_text: &str) -> String {
        match self.try_send(user_text).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "Chat request failed");
                e.user_message()
            }
        }
    }

    #[instrument(skip(self, user_text), fields(history = self.transcript.len()))]
    pub async fn try_send(&mut self, user_text: &str) -> Result<String, GatewayError> {
        let content = annotate(&self.catalog, user_text);
        if content.len() != user_text.len() {
            debug!("Attached location data to user message");
        }
        self.transcript.push(ChatMessage::new(Role::User, content));

        let payload = ChatCompletionRequest {
            model: &self.config.model,
            messages: &self.transcript,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        let reply = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::MalformedResponse("response has no choices".to_string()))?;

        debug!(reply_len = reply.len(), "Received assistant reply");
        self.transcript.push(ChatMessage::new(Role::Assistant, reply.clone()));
        Ok(reply)
    }
}
