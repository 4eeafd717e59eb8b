// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile store over Firestore.
//!
//! The deployment keeps exactly one profile. It lives in the configured
//! collection under the document id [`PROFILE_DOCUMENT_ID`] and carries the
//! field `user_id: 1`. Two additional backends exist:
//! - in-memory, selected with `DATABASE_URI=memory://`
//! - offline, where every call fails (used by tests)

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Profile, UpsertOutcome, PROFILE_ID};
use dashmap::DashMap;
use std::sync::Arc;

/// Document id of the singleton profile (the sentinel id as a string).
pub const PROFILE_DOCUMENT_ID: &str = "1";

#[derive(Clone)]
enum Backend {
    Firestore {
        client: firestore::FirestoreDb,
        collection: String,
    },
    Memory(Arc<DashMap<String, Profile>>),
    Offline,
}

/// Handle to the profile collection, opened once and shared by all requests.
#[derive(Clone)]
pub struct ProfileStore {
    backend: Backend,
}

impl ProfileStore {
    /// Open the store described by the configuration.
    ///
    /// For local development with the emulator, set FIRESTORE_EMULATOR_HOST.
    /// The emulator host then takes precedence and `database_uri` is unused.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        if config.uses_memory_store() {
            tracing::info!("Using in-memory profile store");
            return Ok(Self::in_memory());
        }

        let options = firestore::FirestoreDbOptions::new(config.gcp_project_id.clone())
            .with_database_id(config.database_name.clone())
            .with_firebase_api_url(config.database_uri.clone());

        // The emulator accepts any bearer token, so skip local credential lookup.
        let client = if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            Self::create_emulator_client(options).await?
        } else {
            firestore::FirestoreDb::with_options(options)
                .await
                .map_err(|e| AppError::Store(format!("Failed to connect to Firestore: {}", e)))?
        };

        tracing::info!(
            project = %config.gcp_project_id,
            database = %config.database_name,
            collection = %config.collection_name,
            "Connected to Firestore"
        );

        Ok(Self {
            backend: Backend::Firestore {
                client,
                collection: config.collection_name.clone(),
            },
        })
    }

    async fn create_emulator_client(
        options: firestore::FirestoreDbOptions,
    ) -> Result<firestore::FirestoreDb, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| AppError::Store(format!("Failed to connect to Firestore Emulator: {}", e)))
    }

    /// Empty in-process store.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(DashMap::new())),
        }
    }

    /// Store whose every operation fails with [`AppError::Store`].
    pub fn offline() -> Self {
        Self {
            backend: Backend::Offline,
        }
    }

    /// Read the singleton profile.
    ///
    /// Returns [`AppError::NotFound`] before the first write.
    pub async fn fetch(&self) -> Result<Profile, AppError> {
        let found = self.find().await?;
        tracing::debug!(found = found.is_some(), "Fetched profile");
        found.ok_or_else(|| AppError::NotFound(format!("Profile {} not found", PROFILE_ID)))
    }

    /// Create or fully overwrite the singleton profile.
    ///
    /// The stored `user_id` is always [`PROFILE_ID`], whatever `profile` carries.
    pub async fn upsert(&self, profile: &Profile) -> Result<UpsertOutcome, AppError> {
        let profile = profile.pinned();

        let outcome = match &self.backend {
            Backend::Firestore { client, collection } => {
                Self::write_firestore(client, collection, &profile).await?
            }
            Backend::Memory(docs) => {
                let previous = docs.insert(PROFILE_DOCUMENT_ID.to_string(), profile);
                outcome_from(previous.is_some())
            }
            Backend::Offline => return Err(offline_error()),
        };

        tracing::debug!(?outcome, "Upserted profile");
        Ok(outcome)
    }

    /// Create the document, or overwrite it if it already exists.
    ///
    /// The create fails with a data conflict once the document exists, which
    /// tells the two cases apart without a prior read. The document is never
    /// deleted, so a conflict always means the overwrite path is correct.
    async fn write_firestore(
        client: &firestore::FirestoreDb,
        collection: &str,
        profile: &Profile,
    ) -> Result<UpsertOutcome, AppError> {
        let inserted: Result<(), firestore::errors::FirestoreError> = client
            .fluent()
            .insert()
            .into(collection)
            .document_id(PROFILE_DOCUMENT_ID)
            .object(profile)
            .execute()
            .await;

        match inserted {
            Ok(()) => Ok(UpsertOutcome::Created),
            Err(firestore::errors::FirestoreError::DataConflictError(_)) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collection)
                    .document_id(PROFILE_DOCUMENT_ID)
                    .object(profile)
                    .execute()
                    .await
                    .map_err(|e| AppError::Store(e.to_string()))?;
                Ok(UpsertOutcome::Modified)
            }
            Err(e) => Err(AppError::Store(e.to_string())),
        }
    }

    /// Number of documents in the collection.
    pub async fn count(&self) -> Result<usize, AppError> {
        match &self.backend {
            Backend::Firestore { client, collection } => {
                let docs: Vec<Profile> = client
                    .fluent()
                    .select()
                    .from(collection.as_str())
                    .obj()
                    .query()
                    .await
                    .map_err(|e| AppError::Store(e.to_string()))?;
                Ok(docs.len())
            }
            Backend::Memory(docs) => Ok(docs.len()),
            Backend::Offline => Err(offline_error()),
        }
    }

    async fn find(&self) -> Result<Option<Profile>, AppError> {
        match &self.backend {
            Backend::Firestore { client, collection } => client
                .fluent()
                .select()
                .by_id_in(collection)
                .obj()
                .one(PROFILE_DOCUMENT_ID)
                .await
                .map_err(|e| AppError::Store(e.to_string())),
            Backend::Memory(docs) => Ok(docs
                .get(PROFILE_DOCUMENT_ID)
                .map(|entry| entry.value().clone())),
            Backend::Offline => Err(offline_error()),
        }
    }
}

fn outcome_from(existed: bool) -> UpsertOutcome {
    if existed {
        UpsertOutcome::Modified
    } else {
        UpsertOutcome::Created
    }
}

fn offline_error() -> AppError {
    AppError::Store("Database not connected (offline mode)".to_string())
}
