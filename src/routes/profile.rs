// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile form routes.

use crate::error::{AppError, Result};
use crate::models::{Profile, ProfileForm};
use crate::templates::FormContext;
use crate::AppState;
use axum::{extract::State, response::Html, routing::get, Form, Router};
use std::sync::Arc;

/// `GET /` shows the stored profile, `POST /` replaces it.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(show_profile).post(save_profile))
}

/// Render the stored profile, or an empty form before the first save.
async fn show_profile(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    let profile = match state.store.fetch().await {
        Ok(profile) => profile,
        Err(AppError::NotFound(_)) => {
            tracing::debug!("No profile stored yet, rendering empty form");
            Profile::default()
        }
        Err(e) => return Err(e),
    };

    let html = state.templates.render_form(&FormContext::show(&profile))?;
    Ok(Html(html))
}

/// Store the posted fields and render a confirmation.
async fn save_profile(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProfileForm>,
) -> Result<Html<String>> {
    let profile = Profile::from(form);
    let outcome = state.store.upsert(&profile).await?;

    tracing::info!(?outcome, "Profile saved");

    let html = state
        .templates
        .render_form(&FormContext::saved(&profile, outcome))?;
    Ok(Html(html))
}
