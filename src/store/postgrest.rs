use http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderMap, HeaderValue,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{
    guestbook_query, projects_query, GuestbookEntry, ListQuery, NewGuestbookEntry,
    ProjectListItem, RemoteStore, StoreError,
};
use crate::config::StoreConfig;

/// Server-side client for a PostgREST endpoint (Supabase's `/rest/v1`).
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct PostgrestStore {
    client: Client,
    config: StoreConfig,
}

impl PostgrestStore {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.anon_key)
            .map_err(|e| StoreError::Transport(format!("invalid api key: {e}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
            .map_err(|e| StoreError::Transport(format!("invalid api key: {e}")))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn select<T: DeserializeOwned>(&self, query: ListQuery) -> Result<Vec<T>, StoreError> {
        tracing::debug!(table = query.table(), "listing rows");
        let resp = self
            .client
            .get(self.config.table_url(query.table()))
            .query(&query.params())
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let resp = check_status(resp).await?;
        resp.json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = if body.is_empty() {
        status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
        body
    };
    tracing::warn!(status = status.as_u16(), %message, "remote store rejected request");
    Err(StoreError::Status {
        status: status.as_u16(),
        message,
    })
}

impl RemoteStore for PostgrestStore {
    async fn list_projects(&self, limit: Option<usize>) -> Result<Vec<ProjectListItem>, StoreError> {
        self.select(projects_query(&self.config.projects_table, limit))
            .await
    }

    async fn list_guestbook(&self) -> Result<Vec<GuestbookEntry>, StoreError> {
        self.select(guestbook_query(&self.config.guestbook_table))
            .await
    }

    async fn insert_guestbook(&self, entry: NewGuestbookEntry) -> Result<(), StoreError> {
        tracing::info!(author = %entry.author_name, "signing guestbook");
        let resp = self
            .client
            .post(self.config.table_url(&self.config.guestbook_table))
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "return=minimal")
            .json(&entry)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        check_status(resp).await.map(|_| ())
    }
}
