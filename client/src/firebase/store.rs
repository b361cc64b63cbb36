//! Firestore data store handle.

use super::config::FirebaseConfig;

pub const FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";

/// Handle to the project's default Firestore database.
///
/// Built alongside the auth client; no page reads or writes documents yet.
#[derive(Debug, Clone)]
pub struct DataStore {
    documents_url: String,
}

impl DataStore {
    pub fn new(config: &FirebaseConfig) -> Self {
        Self {
            documents_url: format!(
                "{FIRESTORE_URL}/projects/{}/databases/(default)/documents",
                config.project_id
            ),
        }
    }

    /// Root URL under which document paths resolve.
    pub fn documents_url(&self) -> &str {
        &self.documents_url
    }
}
