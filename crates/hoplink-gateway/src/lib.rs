//! HTTP front end for the hoplink resolver.
//!
//! Exposes `GET /{short_code}` (302 redirect, 404, or 503) and
//! `GET /health`, wired to a [`Resolver`] behind [`AppState`].
//!
//! [`Resolver`]: hoplink_resolver::Resolver
//! [`AppState`]: state::AppState

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
