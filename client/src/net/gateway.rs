//! Authenticated request gateway.
//!
//! ARCHITECTURE
//! ============
//! One shared [`ApiClient`] per app, bound to the API base URL. Requests are
//! decorated at dispatch time by whatever bearer interceptor currently sits in
//! the client's interceptor slot. The session store swaps that slot on every
//! transition (see [`SessionListener`]), so exactly one rule is ever active and
//! a token is never attached after logout.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): dispatch returns [`ApiError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::session::store::SessionListener;

/// Errors surfaced to pages from API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {status}")]
    Status { status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Identity of an installed interceptor; a new one is minted per install.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InterceptorId(u64);

#[derive(Debug)]
struct BearerInterceptor {
    id: InterceptorId,
    header: String,
}

/// A request ready for dispatch, with interceptors already applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug)]
struct Inner {
    base_url: String,
    slot: RwLock<Option<BearerInterceptor>>,
    next_id: AtomicU64,
}

/// Shared HTTP client for the external API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { inner: Arc::new(Inner { base_url, slot: RwLock::new(None), next_id: AtomicU64::new(1) }) }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Absolute URL for an API path such as `/pedidos/12`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.inner.base_url)
        } else {
            format!("{}/{path}", self.inner.base_url)
        }
    }

    /// Install a bearer interceptor for `token`, ejecting the previous one.
    pub fn install_bearer(&self, token: &str) -> InterceptorId {
        let id = InterceptorId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let next = BearerInterceptor { id, header: format!("Bearer {token}") };
        let previous = self.inner.slot.write().unwrap_or_else(PoisonError::into_inner).replace(next);
        if let Some(previous) = previous {
            log::debug!("ejected interceptor {:?}", previous.id);
        }
        id
    }

    /// Remove the active interceptor, returning its id if there was one.
    pub fn eject(&self) -> Option<InterceptorId> {
        self.inner.slot.write().unwrap_or_else(PoisonError::into_inner).take().map(|i| i.id)
    }

    pub fn active_interceptor(&self) -> Option<InterceptorId> {
        self.inner.slot.read().unwrap_or_else(PoisonError::into_inner).as_ref().map(|i| i.id)
    }

    /// Build a request for `path`, decorated with the interceptor active right now.
    pub fn prepare(&self, method: Method, path: &str) -> ApiRequest {
        let mut request = ApiRequest { method, url: self.url(path), headers: Vec::new() };
        if let Some(interceptor) = self.inner.slot.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
            request.headers.push(("Authorization", interceptor.header.clone()));
        }
        request
    }

    /// `GET` a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status or bad JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.prepare(Method::Get, path);
        #[cfg(feature = "hydrate")]
        {
            let resp = builder(&request).send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    /// Send a JSON body and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status or bad JSON.
    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self.prepare(method, path);
        #[cfg(feature = "hydrate")]
        {
            let resp = builder(&request)
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, body);
            Err(ApiError::Unavailable)
        }
    }

    /// Send an optional JSON body and ignore the response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn send<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        let request = self.prepare(method, path);
        #[cfg(feature = "hydrate")]
        {
            let builder = builder(&request);
            let outgoing = match body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = outgoing.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(&resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, body);
            Err(ApiError::Unavailable)
        }
    }

    /// Send a multipart form body and ignore the response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    #[cfg(feature = "hydrate")]
    pub async fn send_form(&self, method: Method, path: &str, form: web_sys::FormData) -> Result<(), ApiError> {
        let request = self.prepare(method, path);
        // The browser sets the multipart boundary itself.
        let resp = builder(&request)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)
    }
}

impl SessionListener for ApiClient {
    fn token_changed(&self, token: Option<&str>) {
        match token {
            Some(token) => {
                self.install_bearer(token);
            }
            None => {
                self.eject();
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn builder(request: &ApiRequest) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Patch => Request::patch(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    builder
}

#[cfg(feature = "hydrate")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        log::warn!("{} {} -> {}", resp.url(), resp.status_text(), resp.status());
        Err(ApiError::Status { status: resp.status() })
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    check_status(&resp)?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Poll a future that completes without ever yielding.
#[cfg(all(test, not(feature = "hydrate")))]
pub(crate) fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future was expected to complete immediately"),
    }
}
