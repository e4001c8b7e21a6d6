//! Decorative animation loading.
//!
//! The meter can show a Lottie animation fetched once at startup. Loading is
//! best effort: the UI calls [`load_animation`] explicitly, keeps whatever it
//! gets, and simply renders no animation on `None`.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Security animation shown next to the meter.
pub const DEFAULT_ANIMATION_URL: &str =
    "https://assets10.lottiefiles.com/packages/lf20_jcikwtux.json";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum AnimationError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    #[error("Failed to parse animation JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Animation descriptor is not a JSON object")]
    NotAnObject,
}

/// Where to fetch the animation from and how long to wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ANIMATION_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AnimationConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A Lottie animation descriptor, kept as raw JSON for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    descriptor: Value,
}

impl Animation {
    /// Wraps a descriptor. Fails unless `descriptor` is a JSON object.
    pub fn from_value(descriptor: Value) -> Result<Self, AnimationError> {
        if !descriptor.is_object() {
            return Err(AnimationError::NotAnObject);
        }
        Ok(Self { descriptor })
    }

    pub fn descriptor(&self) -> &Value {
        &self.descriptor
    }

    pub fn into_descriptor(self) -> Value {
        self.descriptor
    }

    pub fn width(&self) -> Option<u64> {
        self.descriptor.get("w").and_then(Value::as_u64)
    }

    pub fn height(&self) -> Option<u64> {
        self.descriptor.get("h").and_then(Value::as_u64)
    }

    pub fn frame_rate(&self) -> Option<f64> {
        self.descriptor.get("fr").and_then(Value::as_f64)
    }
}

/// Fetches animation descriptors over HTTP. No retries.
#[derive(Debug, Clone)]
pub struct AnimationLoader {
    client: reqwest::Client,
    config: AnimationConfig,
}

impl AnimationLoader {
    pub fn new(config: AnimationConfig) -> Result<Self, AnimationError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Uses a prebuilt client. The configured timeout still applies per request.
    pub fn with_client(client: reqwest::Client, config: AnimationConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Performs one GET and parses the body.
    pub async fn try_load(&self) -> Result<Animation, AnimationError> {
        let response = self
            .client
            .get(&self.config.url)
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnimationError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let descriptor: Value = serde_json::from_slice(&body)?;
        Animation::from_value(descriptor)
    }

    /// Like [`try_load`](Self::try_load), but any failure becomes `None`.
    pub async fn load(&self) -> Option<Animation> {
        match self.try_load().await {
            Ok(animation) => {
                #[cfg(feature = "tracing")]
                tracing::info!("Animation loaded from {}", self.config.url);
                Some(animation)
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Animation unavailable from {}: {}", self.config.url, _e);
                None
            }
        }
    }
}

/// One-shot startup fetch, called once by the UI shell.
///
/// # Arguments
/// * `config` - URL and timeout to use
///
/// # Returns
/// - `Some(animation)` if the descriptor was fetched and parsed
/// - `None` on any failure, which the UI renders as "no animation"
pub async fn load_animation(config: &AnimationConfig) -> Option<Animation> {
    match AnimationLoader::new(config.clone()) {
        Ok(loader) => loader.load().await,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Animation loader could not be built: {}", _e);
            None
        }
    }
}
