//! Widget settings resolved once at startup

use aiwidget_color::ColorScheme;
use aiwidget_theme::{get_theme, ThemeBundle, WidgetTheme};
use serde::Serialize;

use crate::backend::{SettingsBackend, SettingsRequest, SettingsResponse};
use crate::config::WidgetConfig;
use crate::error::{Result, SettingsError};
use crate::session::{
    date_n_days_later, should_use_cached_session, SessionStrategy, WidgetSession,
    MANUAL_SESSION_DAYS,
};
use crate::storage::{SessionCache, SessionStore};
use crate::style::{BotConfigs, BotStyle};

pub const DEFAULT_CHANNEL_NAME: &str = "AI Chatbot Widget Channel";

/// Channel the embedder's chat client should create in manual mode
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelCreateRequest {
    pub name: String,
    pub cover_url: Option<String>,
    pub invited_user_ids: Vec<String>,
    pub is_distinct: bool,
    /// JSON string carrying `first_message_data`
    pub data: Option<String>,
}

/// Settings and session for one widget instance.
///
/// Built by [`WidgetSettings::initialize`] and passed to whatever needs it.
#[derive(Debug)]
pub struct WidgetSettings<S> {
    config: WidgetConfig,
    strategy: SessionStrategy,
    cache: SessionCache<S>,
    bot_style: BotStyle,
    bot_configs: BotConfigs,
    session: Option<WidgetSession>,
    initialized: bool,
}

impl<S: SessionStore> WidgetSettings<S> {
    /// Validate the config, consult the cache and the backend, and resolve a session
    pub fn initialize<B>(config: WidgetConfig, store: S, backend: &B, now: i64) -> Result<Self>
    where
        B: SettingsBackend + ?Sized,
    {
        config.validate()?;
        let strategy = SessionStrategy::for_config(&config);
        tracing::info!(
            app_id = %config.application_id,
            bot_id = %config.bot_id,
            ?strategy,
            "initializing widget settings"
        );

        let mut settings = Self {
            config,
            strategy,
            cache: SessionCache::new(store),
            bot_style: BotStyle::default(),
            bot_configs: BotConfigs::default(),
            session: None,
            initialized: false,
        };
        settings.init_session(backend, false, now)?;
        Ok(settings)
    }

    /// Drop the cached session and resolve a fresh one
    pub fn reset_session<B>(&mut self, backend: &B, now: i64) -> Result<()>
    where
        B: SettingsBackend + ?Sized,
    {
        self.init_session(backend, true, now)
    }

    fn init_session<B>(&mut self, backend: &B, clear_cache: bool, now: i64) -> Result<()>
    where
        B: SettingsBackend + ?Sized,
    {
        let app_id = self.config.application_id.clone();
        let bot_id = self.config.bot_id.clone();
        let injected_user = self.config.injected_user_id().map(str::to_string);

        let cached = self.cache.load(&app_id, &bot_id);
        let use_cached = should_use_cached_session(
            cached.as_ref(),
            self.strategy,
            injected_user.as_deref(),
            clear_cache,
            now,
        );
        tracing::debug!(use_cached, clear_cache, "resolved session cache decision");

        let request = SettingsRequest {
            strategy: self.strategy,
            use_cached_session: use_cached,
            host: self.config.api_host.clone(),
            app_id: app_id.clone(),
            bot_id: bot_id.clone(),
            user_id: match self.strategy {
                SessionStrategy::Manual => injected_user.clone(),
                SessionStrategy::Auto => cached.as_ref().map(|c| c.user_id.clone()),
            },
        };
        let response = backend.fetch(&request)?;

        self.bot_configs = response.bot_configs.clone();
        self.bot_style = response.bot_style.clone();

        let cached = cached.filter(|_| use_cached);
        let (session, persist) = self.resolve_session(response, cached, injected_user)?;

        if let Some(session) = &session {
            if persist {
                let mut record = session.clone();
                if self.strategy == SessionStrategy::Manual {
                    // The embedder owns manual tokens; they are never cached.
                    record.session_token = None;
                }
                self.cache.save(&app_id, &bot_id, &record)?;
            }
        }

        if session.is_some() {
            self.session = session;
        }
        self.initialized = true;
        Ok(())
    }

    /// Session for each strategy/cache combination and whether to persist it
    fn resolve_session(
        &self,
        response: SettingsResponse,
        cached: Option<WidgetSession>,
        injected_user: Option<String>,
    ) -> Result<(Option<WidgetSession>, bool)> {
        let channel_url = response.channel.map(|channel| channel.channel_url);

        match (self.strategy, cached) {
            (SessionStrategy::Auto, None) => {
                let user = response
                    .user
                    .ok_or(SettingsError::IncompleteResponse("user"))?;
                let channel_url = channel_url.ok_or(SettingsError::IncompleteResponse("channel"))?;
                let session = WidgetSession {
                    strategy: SessionStrategy::Auto,
                    user_id: user.user_id,
                    expire_at: user.expire_at,
                    channel_url: Some(channel_url),
                    session_token: user.session_token,
                };
                Ok((Some(session), true))
            }
            (SessionStrategy::Auto, Some(cached)) => {
                let session = WidgetSession {
                    channel_url: channel_url.or(cached.channel_url.clone()),
                    ..cached
                };
                Ok((Some(session), true))
            }
            (SessionStrategy::Manual, None) => {
                // Completed later by `complete_manual_session` once the
                // embedder's client has created the channel.
                let session = injected_user.map(|user_id| WidgetSession {
                    strategy: SessionStrategy::Manual,
                    user_id,
                    expire_at: 0,
                    channel_url: None,
                    session_token: self.config.injected_session_token().map(str::to_string),
                });
                Ok((session, false))
            }
            (SessionStrategy::Manual, Some(cached)) => {
                let session = WidgetSession {
                    channel_url: channel_url.or(cached.channel_url.clone()),
                    session_token: self.config.injected_session_token().map(str::to_string),
                    ..cached
                };
                Ok((Some(session), true))
            }
        }
    }

    /// Channel to create for a manual session, `None` in auto mode
    pub fn manual_channel_request(&self) -> Option<ChannelCreateRequest> {
        if self.strategy != SessionStrategy::Manual {
            return None;
        }
        let user_id = self.config.injected_user_id()?;

        let data = self.config.first_message_data.as_ref().map(|first_message| {
            serde_json::json!({ "first_message_data": first_message }).to_string()
        });

        Some(ChannelCreateRequest {
            name: self
                .config
                .channel
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_CHANNEL_NAME.to_string()),
            cover_url: self.config.channel.cover_url.clone(),
            invited_user_ids: vec![user_id.to_string(), self.config.bot_id.clone()],
            is_distinct: false,
            data,
        })
    }

    /// Record the channel created for a manual session.
    ///
    /// Returns `false` (and does nothing) outside manual mode.
    pub fn complete_manual_session(&mut self, channel_url: impl Into<String>, now: i64) -> Result<bool> {
        let Some(user_id) = self.config.injected_user_id().map(str::to_string) else {
            return Ok(false);
        };
        if self.strategy != SessionStrategy::Manual {
            tracing::debug!("ignoring manual session completion in auto mode");
            return Ok(false);
        }

        let record = WidgetSession {
            strategy: SessionStrategy::Manual,
            user_id,
            expire_at: date_n_days_later(now, MANUAL_SESSION_DAYS),
            channel_url: Some(channel_url.into()),
            session_token: None,
        };
        self.cache
            .save(&self.config.application_id, &self.config.bot_id, &record)?;

        let session_token = self
            .session
            .as_ref()
            .and_then(|session| session.session_token.clone());
        self.session = Some(WidgetSession {
            session_token,
            ..record
        });
        Ok(true)
    }

    /// Ask the embedder's configurator for a new session token.
    ///
    /// Only the in-memory session is updated; manual tokens are never cached.
    pub fn refresh_session_token(&mut self) -> Option<&str> {
        if self.strategy != SessionStrategy::Manual {
            return None;
        }
        let configurator = self.config.session_configurator()?.clone();
        let session = self.session.as_mut()?;

        match configurator.refresh_session_token(&session.user_id) {
            Some(token) => {
                tracing::debug!(user_id = %session.user_id, "refreshed session token");
                session.session_token = Some(token);
                session.session_token.as_deref()
            }
            None => {
                tracing::warn!(user_id = %session.user_id, "session token refresh declined");
                None
            }
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn strategy(&self) -> SessionStrategy {
        self.strategy
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn session(&self) -> Option<&WidgetSession> {
        self.session.as_ref()
    }

    /// The session, or an error when none has been resolved yet
    pub fn require_session(&self) -> Result<&WidgetSession> {
        self.session.as_ref().ok_or(SettingsError::SessionNotInitialized)
    }

    pub fn bot_configs(&self) -> &BotConfigs {
        &self.bot_configs
    }

    /// Bot style with the embedder's overrides applied
    pub fn bot_style(&self) -> BotStyle {
        match &self.config.style_overrides {
            Some(overrides) => overrides.apply(&self.bot_style),
            None => self.bot_style.clone(),
        }
    }

    /// Light and dark themes for the effective bot style
    pub fn theme(&self) -> ThemeBundle {
        get_theme(&self.bot_style().theme_inputs())
    }

    pub fn active_scheme(&self) -> ColorScheme {
        self.bot_style().theme
    }

    /// Theme for the scheme the bot style selects
    pub fn active_theme(&self) -> WidgetTheme {
        let style = self.bot_style();
        get_theme(&style.theme_inputs()).for_scheme(style.theme).clone()
    }

    pub fn cache(&self) -> &SessionCache<S> {
        &self.cache
    }
}
