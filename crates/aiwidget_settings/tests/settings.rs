//! Session resolution and theming through `WidgetSettings`

use std::cell::RefCell;
use std::sync::Arc;

use aiwidget_color::ColorScheme;
use aiwidget_settings::{
    cache_key, BackendChannel, BackendUser, MemoryStore, SessionConfigurator, SessionStore,
    SessionStrategy, SettingsBackend, SettingsError, SettingsRequest, SettingsResponse,
    StyleOverrides, WidgetConfig, WidgetSession, WidgetSettings, DEFAULT_CHANNEL_NAME,
};
use aiwidget_theme::ThemeToken;
use pretty_assertions::assert_eq;

const NOW: i64 = 1_700_000_000_000;
const DAY: i64 = 86_400_000;

/// Backend that replays one response and records every request
struct MockBackend {
    response: SettingsResponse,
    requests: RefCell<Vec<SettingsRequest>>,
}

impl MockBackend {
    fn new(response: SettingsResponse) -> Self {
        Self {
            response,
            requests: RefCell::new(Vec::new()),
        }
    }

    fn provisioning(user_id: &str, channel_url: &str) -> Self {
        Self::new(SettingsResponse {
            user: Some(BackendUser {
                user_id: user_id.to_string(),
                session_token: Some("issued-token".to_string()),
                expire_at: NOW + DAY,
            }),
            channel: Some(BackendChannel {
                channel_url: channel_url.to_string(),
            }),
            ..Default::default()
        })
    }

    fn last_request(&self) -> SettingsRequest {
        self.requests.borrow().last().cloned().unwrap()
    }
}

impl SettingsBackend for MockBackend {
    fn fetch(&self, request: &SettingsRequest) -> aiwidget_settings::Result<SettingsResponse> {
        self.requests.borrow_mut().push(request.clone());
        Ok(self.response.clone())
    }
}

struct FailingBackend;

impl SettingsBackend for FailingBackend {
    fn fetch(&self, _request: &SettingsRequest) -> aiwidget_settings::Result<SettingsResponse> {
        Err(SettingsError::Backend("503 service unavailable".to_string()))
    }
}

struct StaticRefresh;

impl SessionConfigurator for StaticRefresh {
    fn refresh_session_token(&self, _user_id: &str) -> Option<String> {
        Some("refreshed".to_string())
    }
}

fn manual_config() -> WidgetConfig {
    WidgetConfig::new("app", "bot")
        .with_user("alice", "alice-token")
        .with_session_configurator(Arc::new(StaticRefresh))
}

fn store_with(session: &WidgetSession) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set(&cache_key("app", "bot"), serde_json::to_string(session).unwrap());
    store
}

fn cached(strategy: SessionStrategy, user_id: &str, channel_url: &str) -> WidgetSession {
    WidgetSession {
        strategy,
        user_id: user_id.to_string(),
        expire_at: NOW + DAY,
        channel_url: Some(channel_url.to_string()),
        session_token: Some("cached-token".to_string()),
    }
}

#[test]
fn test_missing_identity_is_rejected() {
    let backend = MockBackend::provisioning("anon", "ch");
    let result = WidgetSettings::initialize(WidgetConfig::new("", "bot"), MemoryStore::new(), &backend, NOW);
    assert!(matches!(result, Err(SettingsError::MissingIdentity)));
    assert!(backend.requests.borrow().is_empty());
}

#[test]
fn test_backend_failure_propagates() {
    let result = WidgetSettings::initialize(
        WidgetConfig::new("app", "bot"),
        MemoryStore::new(),
        &FailingBackend,
        NOW,
    );
    assert!(matches!(result, Err(SettingsError::Backend(_))));
}

#[test]
fn test_auto_without_cache_provisions_and_saves() {
    let backend = MockBackend::provisioning("anon-1", "ch-1");
    let settings =
        WidgetSettings::initialize(WidgetConfig::new("app", "bot"), MemoryStore::new(), &backend, NOW)
            .unwrap();

    assert_eq!(settings.strategy(), SessionStrategy::Auto);
    assert!(settings.is_initialized());
    assert!(!backend.last_request().use_cached_session);

    let session = settings.require_session().unwrap();
    assert_eq!(session.user_id, "anon-1");
    assert_eq!(session.channel_url.as_deref(), Some("ch-1"));
    assert_eq!(session.session_token.as_deref(), Some("issued-token"));
    assert_eq!(settings.cache().load("app", "bot").as_ref(), Some(session));
}

#[test]
fn test_auto_without_cache_needs_user_and_channel() {
    let mut response = MockBackend::provisioning("anon-1", "ch-1").response;
    response.channel = None;
    let backend = MockBackend::new(response);

    let result =
        WidgetSettings::initialize(WidgetConfig::new("app", "bot"), MemoryStore::new(), &backend, NOW);
    assert!(matches!(result, Err(SettingsError::IncompleteResponse("channel"))));
}

#[test]
fn test_auto_with_cache_reuses_session() {
    let previous = cached(SessionStrategy::Auto, "anon-1", "ch-old");
    let backend = MockBackend::new(SettingsResponse {
        channel: Some(BackendChannel {
            channel_url: "ch-new".to_string(),
        }),
        ..Default::default()
    });

    let settings =
        WidgetSettings::initialize(WidgetConfig::new("app", "bot"), store_with(&previous), &backend, NOW)
            .unwrap();

    let request = backend.last_request();
    assert!(request.use_cached_session);
    assert_eq!(request.user_id.as_deref(), Some("anon-1"));

    let session = settings.session().unwrap();
    assert_eq!(session.user_id, "anon-1");
    assert_eq!(session.channel_url.as_deref(), Some("ch-new"));
    assert_eq!(session.session_token.as_deref(), Some("cached-token"));
}

#[test]
fn test_expired_cache_is_replaced() {
    let mut previous = cached(SessionStrategy::Auto, "anon-old", "ch-old");
    previous.expire_at = NOW - 1;
    let backend = MockBackend::provisioning("anon-new", "ch-new");

    let settings =
        WidgetSettings::initialize(WidgetConfig::new("app", "bot"), store_with(&previous), &backend, NOW)
            .unwrap();

    assert!(!backend.last_request().use_cached_session);
    assert_eq!(settings.session().unwrap().user_id, "anon-new");
    assert_eq!(settings.cache().load("app", "bot").unwrap().user_id, "anon-new");
}

#[test]
fn test_manual_without_cache_waits_for_channel() {
    let backend = MockBackend::new(SettingsResponse::default());
    let settings = WidgetSettings::initialize(manual_config(), MemoryStore::new(), &backend, NOW).unwrap();

    assert_eq!(settings.strategy(), SessionStrategy::Manual);
    assert_eq!(backend.last_request().user_id.as_deref(), Some("alice"));

    let session = settings.session().unwrap();
    assert_eq!(session.user_id, "alice");
    assert_eq!(session.expire_at, 0);
    assert_eq!(session.channel_url, None);
    assert_eq!(session.session_token.as_deref(), Some("alice-token"));
    assert!(settings.cache().store().is_empty());
}

#[test]
fn test_manual_channel_request() {
    let mut config = manual_config();
    config.first_message_data = Some(serde_json::json!([{"message": "hi"}]));
    let backend = MockBackend::new(SettingsResponse::default());
    let settings = WidgetSettings::initialize(config, MemoryStore::new(), &backend, NOW).unwrap();

    let request = settings.manual_channel_request().unwrap();
    assert_eq!(request.name, DEFAULT_CHANNEL_NAME);
    assert_eq!(request.invited_user_ids, vec!["alice".to_string(), "bot".to_string()]);
    assert!(!request.is_distinct);

    let data: serde_json::Value = serde_json::from_str(request.data.as_deref().unwrap()).unwrap();
    assert_eq!(data, serde_json::json!({"first_message_data": [{"message": "hi"}]}));
}

#[test]
fn test_auto_mode_has_no_channel_request() {
    let backend = MockBackend::provisioning("anon", "ch");
    let mut settings =
        WidgetSettings::initialize(WidgetConfig::new("app", "bot"), MemoryStore::new(), &backend, NOW)
            .unwrap();

    assert_eq!(settings.manual_channel_request(), None);
    assert!(!settings.complete_manual_session("ch-x", NOW).unwrap());
    assert_eq!(settings.session().unwrap().channel_url.as_deref(), Some("ch"));
}

#[test]
fn test_complete_manual_session_caches_without_token() {
    let backend = MockBackend::new(SettingsResponse::default());
    let mut settings = WidgetSettings::initialize(manual_config(), MemoryStore::new(), &backend, NOW).unwrap();

    assert!(settings.complete_manual_session("ch-manual", NOW).unwrap());

    let session = settings.session().unwrap();
    assert_eq!(session.channel_url.as_deref(), Some("ch-manual"));
    assert_eq!(session.expire_at, NOW + 30 * DAY);
    assert_eq!(session.session_token.as_deref(), Some("alice-token"));

    let record = settings.cache().load("app", "bot").unwrap();
    assert_eq!(record.strategy, SessionStrategy::Manual);
    assert_eq!(record.session_token, None);
}

#[test]
fn test_manual_with_cache_attaches_injected_token() {
    let mut previous = cached(SessionStrategy::Manual, "alice", "ch-manual");
    previous.session_token = None;
    let backend = MockBackend::new(SettingsResponse::default());

    let settings = WidgetSettings::initialize(manual_config(), store_with(&previous), &backend, NOW).unwrap();

    assert!(backend.last_request().use_cached_session);
    let session = settings.session().unwrap();
    assert_eq!(session.channel_url.as_deref(), Some("ch-manual"));
    assert_eq!(session.session_token.as_deref(), Some("alice-token"));
    assert_eq!(settings.cache().load("app", "bot").unwrap().session_token, None);
}

#[test]
fn test_manual_cache_for_other_user_is_ignored() {
    let previous = cached(SessionStrategy::Manual, "bob", "ch-bob");
    let backend = MockBackend::new(SettingsResponse::default());

    let settings = WidgetSettings::initialize(manual_config(), store_with(&previous), &backend, NOW).unwrap();

    assert!(!backend.last_request().use_cached_session);
    assert_eq!(settings.session().unwrap().user_id, "alice");
    assert_eq!(settings.session().unwrap().channel_url, None);
}

#[test]
fn test_reset_session_skips_cache() {
    let previous = cached(SessionStrategy::Auto, "anon-old", "ch-old");
    let backend = MockBackend::provisioning("anon-new", "ch-new");
    let mut settings =
        WidgetSettings::initialize(WidgetConfig::new("app", "bot"), store_with(&previous), &backend, NOW)
            .unwrap();
    assert_eq!(settings.session().unwrap().user_id, "anon-old");

    settings.reset_session(&backend, NOW).unwrap();

    assert!(!backend.last_request().use_cached_session);
    assert_eq!(settings.session().unwrap().user_id, "anon-new");
    assert_eq!(settings.cache().load("app", "bot").unwrap().channel_url.as_deref(), Some("ch-new"));
}

#[test]
fn test_overrides_flow_into_theme() {
    let mut response = MockBackend::provisioning("anon", "ch").response;
    response.bot_style.theme = ColorScheme::Light;

    let overrides: StyleOverrides =
        serde_json::from_str(r##"{"theme":"dark","primaryColor":"#0055FF"}"##).unwrap();
    let config = WidgetConfig::new("app", "bot").with_style_overrides(overrides);
    let backend = MockBackend::new(response);
    let settings = WidgetSettings::initialize(config, MemoryStore::new(), &backend, NOW).unwrap();

    assert_eq!(settings.active_scheme(), ColorScheme::Dark);
    assert_eq!(settings.bot_style().accent_color, "#0055FF");

    let theme = settings.theme();
    assert_eq!(theme.dark.accent_color.to_string(), "#0055FF");
    assert_eq!(theme.light.get(ThemeToken::Accent).to_string(), "#0055FF");
    assert_eq!(
        theme.dark.get(ThemeToken::BgIncomingMessage).to_string(),
        "#EEEEEE"
    );
}

#[test]
fn test_config_from_toml() {
    let config: WidgetConfig = toml::from_str(
        r##"
application_id = "app"
bot_id = "bot"
user_id = "alice"
session_token = "alice-token"

[channel]
name = "Support"

[style_overrides]
theme = "dark"
accent_color = "#112233"
"##,
    )
    .unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.injected_user_id(), Some("alice"));
    assert_eq!(config.channel.name.as_deref(), Some("Support"));
    assert!(config.session_configurator().is_none());
    assert_eq!(SessionStrategy::for_config(&config), SessionStrategy::Auto);

    let overrides = config.style_overrides.unwrap();
    assert_eq!(overrides.theme, Some(ColorScheme::Dark));
    assert_eq!(overrides.accent_color.unwrap(), "#112233");
}

#[test]
fn test_refresh_session_token_uses_configurator() {
    let backend = MockBackend::new(SettingsResponse::default());
    let mut settings = WidgetSettings::initialize(manual_config(), MemoryStore::new(), &backend, NOW).unwrap();
    settings.complete_manual_session("ch-manual", NOW).unwrap();

    assert_eq!(settings.refresh_session_token(), Some("refreshed"));
    assert_eq!(settings.session().unwrap().session_token.as_deref(), Some("refreshed"));
    assert_eq!(settings.cache().load("app", "bot").unwrap().session_token, None);
}

#[test]
fn test_refresh_session_token_is_manual_only() {
    let backend = MockBackend::provisioning("anon", "ch");
    let mut settings =
        WidgetSettings::initialize(WidgetConfig::new("app", "bot"), MemoryStore::new(), &backend, NOW)
            .unwrap();

    assert_eq!(settings.refresh_session_token(), None);
    assert_eq!(settings.session().unwrap().session_token.as_deref(), Some("issued-token"));
}

#[test]
fn test_active_theme_follows_bot_style() {
    let mut response = MockBackend::provisioning("anon", "ch").response;
    response.bot_style.theme = ColorScheme::Dark;
    let backend = MockBackend::new(response);
    let settings =
        WidgetSettings::initialize(WidgetConfig::new("app", "bot"), MemoryStore::new(), &backend, NOW)
            .unwrap();

    let theme = settings.active_theme();
    assert_eq!(theme.scheme(), ColorScheme::Dark);
    assert_eq!(theme, settings.theme().dark);
}
