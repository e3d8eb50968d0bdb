//! Firestore-backed conversation store
//!
//! Talks to the document database's public JSON surface. Documents live
//! under a single collection and are addressed by session id; partial
//! updates use a field mask restricted to the audio fields so unrelated
//! fields written by other channels are never touched.

use crate::error::{StoreError, StoreResult};
use crate::fields::{audio_field_map, doc_field_map, doc_from_fields};
use crate::{AUDIO_FIELD_PATHS, ConversationStore};
use async_trait::async_trait;
use dialog_core::config::StoreConfig;
use dialog_core::{AudioFields, ConversationDoc};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

/// Error body returned on non-success statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Fetched document envelope
#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    fields: Value,
}

/// Conversation store over the managed document database
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    /// Collection URL (`{endpoint}/projects/{p}/databases/{d}/documents/{c}`)
    collection_url: String,

    /// Bearer token, if configured
    token: Option<String>,

    /// HTTP client
    http: reqwest::Client,
}

impl FirestoreStore {
    /// Create a new store from configuration
    #[must_use]
    pub fn new(config: &StoreConfig, token: Option<String>) -> Self {
        let collection_url = format!(
            "{}/projects/{}/databases/{}/documents/{}",
            config.endpoint.trim_end_matches('/'),
            config.project_id,
            config.database_id,
            config.collection,
        );

        Self {
            collection_url,
            token,
            http: reqwest::Client::new(),
        }
    }

    fn document_url(&self, session_id: &str) -> String {
        format!("{}/{session_id}", self.collection_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn api_error(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "unknown error".to_string()),
            Err(_) => "unknown error".to_string(),
        };
        StoreError::api(status, message)
    }
}

#[async_trait]
impl ConversationStore for FirestoreStore {
    async fn get(&self, session_id: &str) -> StoreResult<Option<ConversationDoc>> {
        let response = self
            .authorize(self.http.get(self.document_url(session_id)))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let document: Document = response.json().await?;
        let doc = doc_from_fields(session_id, &document.fields)?;
        Ok(Some(doc))
    }

    async fn update_audio(&self, session_id: &str, audio: &AudioFields) -> StoreResult<()> {
        let mask: Vec<(&str, &str)> = AUDIO_FIELD_PATHS
            .iter()
            .map(|path| ("updateMask.fieldPaths", *path))
            .collect();

        let response = self
            .authorize(self.http.patch(self.document_url(session_id)))
            .query(&mask)
            .json(&json!({ "fields": audio_field_map(audio) }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        debug!(session_id, "Updated audio fields");
        Ok(())
    }

    async fn create(&self, doc: &ConversationDoc) -> StoreResult<()> {
        let response = self
            .authorize(self.http.patch(self.document_url(&doc.session_id)))
            .json(&json!({ "fields": doc_field_map(doc) }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        debug!(session_id = doc.session_id, "Created conversation document");
        Ok(())
    }
}
