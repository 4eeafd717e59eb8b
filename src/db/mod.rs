//! Database layer (Firestore).

pub mod firestore;

pub use firestore::{ProfileStore, PROFILE_DOCUMENT_ID};
