//! JSON HTTP API for the TODO service.
//!
//! Exposes an axum [`Router`] backed by any [`todo_core::TodoStore`]. TLS,
//! timeouts and request tracing are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = todo_api::api_router(Arc::new(store));
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod healthz;
pub mod todos;

use std::sync::Arc;

use axum::{Router, routing::get};
use todo_core::TodoStore;

pub use error::ApiError;

/// Path of the TODO resource; all four verbs are served here.
pub const TODOS_PATH: &str = "/todos";

pub const HEALTHZ_PATH: &str = "/healthz";

/// Build the API router for `store`.
///
/// Methods other than GET/POST/PUT/DELETE on [`TODOS_PATH`] get axum's
/// `405 Method Not Allowed`.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TodoStore + 'static,
{
  Router::new()
    .route(
      TODOS_PATH,
      get(todos::read::<S>)
        .post(todos::create::<S>)
        .put(todos::update::<S>)
        .delete(todos::delete::<S>),
    )
    .route(HEALTHZ_PATH, get(healthz::handler))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
