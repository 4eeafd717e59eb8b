// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML rendering of the profile form.
//!
//! The template is compiled once at startup. A broken template file stops
//! the server from starting; a failure while rendering only fails the
//! request that hit it.

use crate::error::AppError;
use crate::models::{Profile, UpsertOutcome};
use minijinja::Environment;
use serde::Serialize;
use std::path::Path;

/// Name the form template is registered under. The `.html` suffix turns on
/// HTML auto-escaping.
pub const FORM_TEMPLATE: &str = "index.html";

/// Values handed to the form template.
#[derive(Debug, Serialize)]
pub struct FormContext<'a> {
    pub user_id: i64,
    pub name: &'a str,
    pub email: &'a str,
    pub interests: &'a str,
    /// True after a successful POST
    pub saved: bool,
    pub outcome: Option<UpsertOutcome>,
}

impl<'a> FormContext<'a> {
    /// Context for showing the stored profile.
    pub fn show(profile: &'a Profile) -> Self {
        Self {
            user_id: profile.user_id,
            name: &profile.name,
            email: &profile.email,
            interests: &profile.interests,
            saved: false,
            outcome: None,
        }
    }

    /// Context for confirming a save.
    pub fn saved(profile: &'a Profile, outcome: UpsertOutcome) -> Self {
        Self {
            saved: true,
            outcome: Some(outcome),
            ..Self::show(profile)
        }
    }
}

/// Compiled templates, shared by all requests.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Read and compile the form template from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            AppError::Template(format!("Unable to read {}: {}", path.display(), e))
        })?;

        let templates = Self::from_source(source)?;
        tracing::info!(path = %path.display(), "Form template loaded");
        Ok(templates)
    }

    /// Compile the form template from a string.
    pub fn from_source(source: impl Into<String>) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.add_template_owned(FORM_TEMPLATE, source.into())?;
        Ok(Self { env })
    }

    /// Render the form page.
    pub fn render_form(&self, ctx: &FormContext<'_>) -> Result<String, AppError> {
        let template = self.env.get_template(FORM_TEMPLATE)?;
        Ok(template.render(ctx)?)
    }
}
