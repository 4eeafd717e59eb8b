// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Profile-Form: a single-user profile page
//!
//! Serves an HTML form that shows and replaces one stored profile
//! (name, email, interests) kept in a Firestore collection.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod templates;

use config::Config;
use db::ProfileStore;
use templates::Templates;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: ProfileStore,
    pub templates: Templates,
}
