// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use profile_form::config::Config;
use profile_form::db::ProfileStore;
use profile_form::routes::create_router;
use profile_form::templates::Templates;
use profile_form::AppState;
use std::sync::Arc;

pub const FORM_SOURCE: &str = include_str!("../../templates/index.html");

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Connect to the emulator using a collection of its own, so tests start empty.
/// The client follows FIRESTORE_EMULATOR_HOST, so the default URI is left as is.
#[allow(dead_code)]
pub async fn test_store(collection: &str) -> ProfileStore {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    let config = Config {
        database_uri: "https://firestore.googleapis.com".to_string(),
        collection_name: format!("{}_{}", collection, nanos),
        ..Config::default()
    };

    ProfileStore::connect(&config)
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app over the given store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(store: ProfileStore) -> (axum::Router, Arc<AppState>) {
    create_test_app_with_template(store, FORM_SOURCE)
}

#[allow(dead_code)]
pub fn create_test_app_with_template(
    store: ProfileStore,
    source: &str,
) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::default(),
        store,
        templates: Templates::from_source(source).expect("template should compile"),
    });

    (create_router(state.clone()), state)
}

/// Collect a response body into a string.
#[allow(dead_code)]
pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
