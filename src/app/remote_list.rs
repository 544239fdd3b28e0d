use std::future::Future;

use leptos::prelude::*;
use serde::{de::DeserializeOwned, Serialize};

use crate::{listing::ListState, store::StoreError};

type Fetched<T> = Result<Vec<T>, StoreError>;

/// A remote list bound to the component that created it.
pub struct RemoteList<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub state: Memo<ListState<T>>,
    resource: Resource<Fetched<T>>,
    version: RwSignal<u64>,
}

impl<T> Clone for RemoteList<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RemoteList<T> where T: Clone + PartialEq + Send + Sync + 'static {}

impl<T> RemoteList<T>
where
    T: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Runs the fetch again with the current limit.
    pub fn refresh(&self) {
        self.version.update(|v| *v += 1);
    }

    /// Resolves once the current fetch has settled. Await this inside a
    /// `Suspend` so server rendering waits for the data.
    pub async fn ready(self) {
        let _ = self.resource.await;
    }
}

/// Loads a list on mount, again whenever `limit` changes, and on
/// [`RemoteList::refresh`].
///
/// Failures keep the previous items and surface a message; nothing retries.
pub fn use_remote_list<T, F, Fut>(limit: Signal<Option<usize>>, fetch: F) -> RemoteList<T>
where
    T: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
    F: Fn(Option<usize>) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Fetched<T>> + Send + 'static,
{
    let version = RwSignal::new(0u64);
    let resource = Resource::new(
        move || (limit.get(), version.get()),
        move |(limit, _)| async move {
            let result = fetch(limit).await;
            if let Err(err) = &result {
                log::warn!("list fetch failed: {err}");
            }
            result
        },
    );

    // each settled fetch is folded into the previous state so a failure
    // keeps what was already on screen
    let state = Memo::new(move |prev: Option<&ListState<T>>| {
        let mut state = prev.cloned().unwrap_or_default();
        let ticket = state.begin();
        if let Some(result) = resource.get() {
            state.settle(ticket, result);
        }
        state
    });

    RemoteList {
        state,
        resource,
        version,
    }
}

/// Inline notice for a failed load.
#[component]
pub fn ListError(message: String) -> impl IntoView {
    view! {
        <p
            role="alert"
            class="col-span-full mb-4 rounded-md border border-destructive/40 bg-destructive/10 px-4 py-2 text-center text-sm text-destructive"
        >
            {message}
        </p>
    }
}
