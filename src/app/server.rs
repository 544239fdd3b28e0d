//! Server functions over the remote store, and a [`RemoteStore`] that reaches
//! them from the browser.

use leptos::prelude::*;
use server_fn::codec::{GetUrl, Json};

#[cfg(feature = "ssr")]
use crate::store::PostgrestStore;
use crate::store::{GuestbookEntry, NewGuestbookEntry, ProjectListItem, RemoteStore, StoreError};

#[cfg(feature = "ssr")]
fn remote_store() -> Result<PostgrestStore, ServerFnError> {
    use_context::<PostgrestStore>().ok_or_else(|| ServerFnError::new(StoreError::NotConfigured))
}

#[server(input = GetUrl)]
pub async fn fetch_projects(limit: Option<usize>) -> Result<Vec<ProjectListItem>, ServerFnError> {
    remote_store()?
        .list_projects(limit)
        .await
        .map_err(ServerFnError::new)
}

#[server(input = GetUrl)]
pub async fn fetch_guestbook() -> Result<Vec<GuestbookEntry>, ServerFnError> {
    remote_store()?
        .list_guestbook()
        .await
        .map_err(ServerFnError::new)
}

#[server(input = Json)]
pub async fn sign_guestbook(entry: NewGuestbookEntry) -> Result<(), ServerFnError> {
    remote_store()?
        .insert_guestbook(entry)
        .await
        .map_err(ServerFnError::new)
}

fn store_error(err: ServerFnError) -> StoreError {
    match err {
        // already a readable message from the server side
        ServerFnError::ServerError(message) => StoreError::Remote(message),
        other => StoreError::Transport(other.to_string()),
    }
}

/// Reaches the remote store through the server functions above.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnStore;

impl RemoteStore for ServerFnStore {
    async fn list_projects(&self, limit: Option<usize>) -> Result<Vec<ProjectListItem>, StoreError> {
        fetch_projects(limit).await.map_err(store_error)
    }

    async fn list_guestbook(&self) -> Result<Vec<GuestbookEntry>, StoreError> {
        fetch_guestbook().await.map_err(store_error)
    }

    async fn insert_guestbook(&self, entry: NewGuestbookEntry) -> Result<(), StoreError> {
        sign_guestbook(entry).await.map_err(store_error)
    }
}

/// Blocking user notification for validation and submit failures.
pub fn notify(message: &str) {
    log::warn!("{message}");
    #[cfg(feature = "hydrate")]
    if window().alert_with_message(message).is_err() {
        log::error!("couldn't show alert");
    }
}
