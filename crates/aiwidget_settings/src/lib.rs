//! AI Widget Settings
//!
//! The configuration and session value the widget produces once at startup and
//! hands down to everything that needs it. Nothing here is global: the chat
//! backend and the session storage are injected.
//!
//! # Flow
//!
//! ```text
//! WidgetConfig ──► SessionStrategy (auto | manual)
//!                        │
//! SessionCache ──► cached session still usable?
//!                        │
//! SettingsBackend ──► bot style, bot configs, user, channel
//!                        │
//!                        ▼
//!                 WidgetSettings { session, bot style, theme }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let config = WidgetConfig::new("app-id", "bot-id");
//! let settings = WidgetSettings::initialize(config, MemoryStore::new(), &backend, now_millis())?;
//!
//! let theme = settings.theme();
//! let session = settings.require_session()?;
//! ```

mod backend;
mod config;
mod error;
mod session;
mod settings;
mod storage;
mod style;

pub use backend::{BackendChannel, BackendUser, SettingsBackend, SettingsRequest, SettingsResponse};
pub use config::{ChannelParams, SessionConfigurator, WidgetConfig};
pub use error::{Result, SettingsError};
pub use session::{
    date_n_days_later, is_past_time, now_millis, should_use_cached_session, SessionStrategy,
    WidgetSession, MANUAL_SESSION_DAYS,
};
pub use settings::{ChannelCreateRequest, WidgetSettings, DEFAULT_CHANNEL_NAME};
pub use storage::{cache_key, MemoryStore, SessionCache, SessionStore, CACHE_KEY_PREFIX};
pub use style::{BotConfigs, BotStyle, StyleOverrides};
