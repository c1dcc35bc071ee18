//! Contract with the hosted settings backend

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::SessionStrategy;
use crate::style::{BotConfigs, BotStyle};

/// What the widget asks the backend for
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRequest {
    pub strategy: SessionStrategy,
    /// The widget already has a usable session and only needs settings
    pub use_cached_session: bool,
    pub host: Option<String>,
    pub app_id: String,
    pub bot_id: String,
    pub user_id: Option<String>,
}

/// User issued by the backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendUser {
    pub user_id: String,
    #[serde(default)]
    pub session_token: Option<String>,
    pub expire_at: i64,
}

/// Channel the bot conversation lives in
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendChannel {
    pub channel_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    #[serde(default)]
    pub bot_configs: BotConfigs,
    #[serde(default)]
    pub bot_style: BotStyle,
    #[serde(default)]
    pub user: Option<BackendUser>,
    #[serde(default)]
    pub channel: Option<BackendChannel>,
}

/// The hosted backend that serves bot settings and provisions users
pub trait SettingsBackend {
    fn fetch(&self, request: &SettingsRequest) -> Result<SettingsResponse>;
}
