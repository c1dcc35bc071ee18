//! Embedder-supplied widget configuration

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};
use crate::style::StyleOverrides;

/// Hook the embedder provides to manage session tokens itself.
///
/// Attaching one (together with a user id and session token) switches the
/// widget to the manual session strategy.
pub trait SessionConfigurator: Send + Sync {
    /// Fresh session token for `user_id`, or `None` to give up
    fn refresh_session_token(&self, user_id: &str) -> Option<String>;
}

/// Parameters for the channel created in manual mode
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelParams {
    pub name: Option<String>,
    pub cover_url: Option<String>,
}

/// Widget configuration (application, bot, and optional user identity)
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub application_id: String,
    pub bot_id: String,
    #[serde(default)]
    pub api_host: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default)]
    pub channel: ChannelParams,
    /// Opaque payload attached to the manual-mode channel
    #[serde(default)]
    pub first_message_data: Option<serde_json::Value>,
    #[serde(default)]
    pub style_overrides: Option<StyleOverrides>,
    #[serde(skip)]
    session_configurator: Option<Arc<dyn SessionConfigurator>>,
}

impl WidgetConfig {
    pub fn new(application_id: impl Into<String>, bot_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            bot_id: bot_id.into(),
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>, session_token: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self.session_token = Some(session_token.into());
        self
    }

    pub fn with_session_configurator(mut self, configurator: Arc<dyn SessionConfigurator>) -> Self {
        self.session_configurator = Some(configurator);
        self
    }

    pub fn with_style_overrides(mut self, overrides: StyleOverrides) -> Self {
        self.style_overrides = Some(overrides);
        self
    }

    pub fn session_configurator(&self) -> Option<&Arc<dyn SessionConfigurator>> {
        self.session_configurator.as_ref()
    }

    /// Fail when the application or bot id is missing
    pub fn validate(&self) -> Result<()> {
        if self.application_id.trim().is_empty() || self.bot_id.trim().is_empty() {
            return Err(SettingsError::MissingIdentity);
        }
        Ok(())
    }

    /// User id the embedder injected, if non-empty
    pub fn injected_user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }

    pub(crate) fn injected_session_token(&self) -> Option<&str> {
        self.session_token.as_deref().filter(|token| !token.is_empty())
    }
}

impl fmt::Debug for WidgetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetConfig")
            .field("application_id", &self.application_id)
            .field("bot_id", &self.bot_id)
            .field("api_host", &self.api_host)
            .field("user_id", &self.user_id)
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .field("channel", &self.channel)
            .field("first_message_data", &self.first_message_data)
            .field("style_overrides", &self.style_overrides)
            .field("session_configurator", &self.session_configurator.is_some())
            .finish()
    }
}
