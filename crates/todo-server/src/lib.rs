//! Process wiring for the TODO service: configuration and the top-level
//! router with its tower middleware.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
  time::Duration,
};

use axum::{Router, http::StatusCode};
use serde::Deserialize;
use todo_core::TodoStore;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TODO_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  pub database_path:        PathBuf,
  /// Upper bound on a single request, store calls included.
  pub request_timeout_secs: u64,
}

impl ServerConfig {
  /// Layer defaults, the optional file at `path`, then the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080_i64)?
      .set_default("database_path", "todo.sqlite3")?
      .set_default("request_timeout_secs", 30_i64)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("TODO"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn request_timeout(&self) -> Duration { Duration::from_secs(self.request_timeout_secs) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API router wrapped in request tracing and a per-request timeout.
///
/// A request that outlives the timeout is dropped, which also abandons any
/// store call it was awaiting.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: TodoStore + 'static,
{
  todo_api::api_router(store)
    .layer(TimeoutLayer::with_status_code(
      StatusCode::REQUEST_TIMEOUT,
      config.request_timeout(),
    ))
    .layer(TraceLayer::new_for_http())
}
