//! List and detail state for the CRUD dashboards.
//!
//! DESIGN
//! ======
//! One generic state shape serves users, roles, courses, and transactions.
//! The loaders below spawn the request in the browser and fold the result
//! back into the signal; on the server they only mark the state as loading.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use leptos::prelude::*;
use serde::Serialize;

use crate::error::ApiError;
use crate::net::types::Resource;

/// Rows of one collection plus request status.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<R> {
    pub items: Vec<R>,
    pub loading: bool,
    /// A create request is in flight.
    pub pending: bool,
    pub error: Option<String>,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, pending: false, error: None }
    }
}

impl<R: Resource> ListState<R> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<R>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(err) => self.error = Some(err.user_message()),
        }
    }

    pub fn begin_create(&mut self) {
        self.pending = true;
        self.error = None;
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.pending = false;
        self.error = Some(err.user_message());
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id() != id);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}

/// One record fetched by id.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailState<R> {
    pub item: Option<R>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<R> Default for DetailState<R> {
    fn default() -> Self {
        Self { item: None, loading: true, error: None }
    }
}

impl<R: Resource> DetailState<R> {
    pub fn finish(&mut self, result: Result<R, ApiError>) {
        self.loading = false;
        match result {
            Ok(item) => {
                self.item = Some(item);
                self.error = None;
            }
            Err(err) => {
                self.item = None;
                self.error = Some(err.user_message());
            }
        }
    }
}

/// Fetch `R::PATH` into `list`.
pub fn load_list<R: Resource>(list: RwSignal<ListState<R>>) {
    list.update(ListState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let client = crate::net::transport::default_client();
        let result = crate::net::api::list_resources::<R, _>(&client).await;
        list.update(|s| s.finish_load(result));
    });
}

/// Fetch `R::PATH/{id}` into `detail`.
pub fn load_detail<R: Resource>(detail: RwSignal<DetailState<R>>, id: String) {
    detail.set(DetailState::default());
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let client = crate::net::transport::default_client();
        let result = crate::net::api::fetch_resource::<R, _>(&client, &id).await;
        detail.update(|s| s.finish(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Delete one row; removes it locally once the backend confirms.
pub fn delete_item<R: Resource>(list: RwSignal<ListState<R>>, id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let client = crate::net::transport::default_client();
        match crate::net::api::delete_resource::<R, _>(&client, &id).await {
            Ok(()) => list.update(|s| s.remove(&id)),
            Err(err) => list.update(|s| s.fail(&err)),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (list, id);
}

/// Create a row from `payload`, then reload the list and run `on_created`.
pub fn create_item<R, B, F>(list: RwSignal<ListState<R>>, payload: B, on_created: F)
where
    R: Resource,
    B: Serialize + 'static,
    F: FnOnce() + 'static,
{
    list.update(ListState::begin_create);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let client = crate::net::transport::default_client();
        match crate::net::api::create_resource::<R, _, _>(&client, &payload).await {
            Ok(()) => {
                list.update(|s| s.pending = false);
                on_created();
                load_list(list);
            }
            Err(err) => list.update(|s| s.fail(&err)),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (payload, on_created);
}
