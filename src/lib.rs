//! IdHub Console Client
//!
//! Typed client SDK for the IdHub identity/user-management backend: REST
//! wrappers for users, OAuth identity linking, and LDAP directory-sync
//! configuration, plus the session context and navigation guard the console
//! UI runs on.

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod models;
pub mod router;
pub mod session;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::{AnalyticsApi, LdapConfigApi, SyncConfigApi, SyncLogApi, UserApi};
use config::Config;
use errors::ApiError;
use http::Http;
use models::{Provider, User};
use router::Navigation;
use session::{FileTokenStore, Session, TokenStore};

/// Initialize logging from the configured level, honoring `RUST_LOG` style
/// overrides via the default env filter.
pub fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// The console handle: one backend, one session, one set of API modules.
///
/// Everything hangs off the shared [`Session`] so the request wrapper, the
/// login flows, and the navigation guard observe the same state.
#[derive(Clone)]
pub struct Console {
    pub config: Arc<Config>,
    session: Arc<Session>,
    pub users: UserApi,
    pub ldap_configs: LdapConfigApi,
    pub sync_configs: SyncConfigApi,
    pub sync_logs: SyncLogApi,
    pub analytics: AnalyticsApi,
}

impl Console {
    /// Console over the file-backed token store at the configured path.
    pub fn new(config: Config) -> Self {
        let store = Box::new(FileTokenStore::new(config.token_path.clone()));
        Self::with_store(config, store)
    }

    /// Console over an explicit token store (fixture sessions in tests).
    pub fn with_store(config: Config, store: Box<dyn TokenStore>) -> Self {
        let session = Arc::new(Session::new(store));
        let http = Http::new(config.base_url.clone(), Arc::clone(&session));

        Self {
            config: Arc::new(config),
            session,
            users: UserApi::new(http.clone()),
            ldap_configs: LdapConfigApi::new(http.clone()),
            sync_configs: SyncConfigApi::new(http.clone()),
            sync_logs: SyncLogApi::new(http.clone()),
            analytics: AnalyticsApi::new(http),
        }
    }

    /// The shared session context.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Hydrate the session from the persisted token: if one is present,
    /// fetch the current user and store the snapshot.
    ///
    /// Idempotent. Concurrent callers coalesce onto a single `/auth/me/`
    /// fetch; later calls return immediately. A failed fetch logs a warning
    /// and leaves the session unauthenticated — there is no retry, matching
    /// the single-shot hydration the console UI performs on load.
    pub async fn initialize(&self) {
        self.session
            .hydration()
            .get_or_init(|| async {
                if self.session.token().is_none() {
                    return;
                }
                match self.users.me().await {
                    Ok(user) => {
                        tracing::debug!("Session hydrated for {}", user.username);
                        self.session.set_user(user);
                    }
                    Err(err) => {
                        tracing::warn!("Session hydration failed: {}", err);
                    }
                }
            })
            .await;
    }

    /// Username/password login; persists the token and remembers the user.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let bundle = self.users.login(username, password).await?;
        self.session.establish(&bundle.access, bundle.user.clone());
        Ok(bundle.user)
    }

    /// OAuth code-exchange login; persists the token and remembers the user.
    pub async fn oauth_login(&self, provider: Provider, code: &str) -> Result<User, ApiError> {
        let bundle = self.users.oauth_login(provider, code).await?;
        self.session.establish(&bundle.access, bundle.user.clone());
        Ok(bundle.user)
    }

    /// Logout: clear the session and the persisted token.
    pub fn logout(&self) {
        self.session.clear();
    }

    /// Run one navigation attempt: wait for hydration to settle, then
    /// evaluate the guard for the target path against a single session
    /// snapshot.
    pub async fn navigate(&self, path: &str) -> Navigation {
        self.initialize().await;

        let Some(route) = router::resolve(path) else {
            return Navigation::NotFound;
        };
        router::guard(route, &self.session.snapshot())
    }
}
