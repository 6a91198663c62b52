//! HTTP requests for one admin endpoint.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::draft::writable_payload;
use super::{ListQuery, Resource};
use crate::auth::AdminCredentials;
use crate::config::AdminConfig;
use crate::error::{AdminResult, NetworkError};
use crate::models::Page;
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Request builder for the endpoint of `R`.
///
/// Stateless apart from its address and credentials, so clones can run
/// requests concurrently.
pub struct ResourceApi<R, C: ?Sized> {
    client: Arc<C>,
    base: String,
    credentials: AdminCredentials,
    _resource: PhantomData<fn() -> R>,
}

impl<R, C: ?Sized> Clone for ResourceApi<R, C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            base: self.base.clone(),
            credentials: self.credentials.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R, C: ?Sized> std::fmt::Debug for ResourceApi<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceApi")
            .field("base", &self.base)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl<R: Resource, C: HttpClient + ?Sized> ResourceApi<R, C> {
    pub fn new(client: Arc<C>, config: &AdminConfig, credentials: AdminCredentials) -> Self {
        Self::with_base(client, config.admin_base(), credentials)
    }

    /// Use `base` (e.g. `http://localhost:8000/admin`) instead of the
    /// configured admin base.
    pub fn with_base(client: Arc<C>, base: impl Into<String>, credentials: AdminCredentials) -> Self {
        Self {
            client,
            base: base.into().trim_end_matches('/').to_string(),
            credentials,
            _resource: PhantomData,
        }
    }

    /// `{base}/{path}/`, the list and create endpoint.
    pub fn collection_url(&self) -> String {
        format!("{}/{}/", self.base, R::PATH)
    }

    /// `{base}/{path}/{id}`, the single-item endpoint.
    pub fn item_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base, R::PATH, id)
    }

    /// Fetch one page.
    pub async fn list(&self, query: &ListQuery) -> AdminResult<Page<R>> {
        let url = format!("{}?{}", self.collection_url(), query.to_query_string());
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url, &self.headers(false)).await;
        decode(check(response, &url)?)
    }

    pub async fn get(&self, id: i64) -> AdminResult<R> {
        let url = self.item_url(id);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url, &self.headers(false)).await;
        decode(check(response, &url)?)
    }

    /// POST the writable fields of `item`.
    pub async fn create(&self, item: &R) -> AdminResult<()> {
        let url = self.collection_url();
        let body = writable_payload(item)?.to_string();
        tracing::debug!("POST {} {}", url, body);
        let response = self.client.post(&url, &body, &self.headers(true)).await;
        check(response, &url).map(|_| ())
    }

    /// PUT the writable fields of `item` to the item `id`.
    pub async fn update(&self, id: i64, item: &R) -> AdminResult<()> {
        let url = self.item_url(id);
        let body = writable_payload(item)?.to_string();
        tracing::debug!("PUT {} {}", url, body);
        let response = self.client.put(&url, &body, &self.headers(true)).await;
        check(response, &url).map(|_| ())
    }

    pub async fn delete(&self, id: i64) -> AdminResult<()> {
        let url = self.item_url(id);
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url, &self.headers(false)).await;
        check(response, &url).map(|_| ())
    }

    fn headers(&self, with_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("accept".to_string(), "application/json".to_string());
        if with_body {
            headers.insert("content-type".to_string(), "application/json".to_string());
        }
        self.credentials.apply(&mut headers);
        headers
    }
}

/// Turn transport failures and non-2xx statuses into errors.
fn check(result: Result<Response, HttpError>, url: &str) -> AdminResult<Response> {
    let response = result.map_err(|e| NetworkError::from_http(e, url))?;
    if response.is_success() {
        Ok(response)
    } else {
        Err(NetworkError::from_response(&response).into())
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> AdminResult<T> {
    response
        .json::<T>()
        .map_err(|e| NetworkError::invalid_body(e).into())
}
