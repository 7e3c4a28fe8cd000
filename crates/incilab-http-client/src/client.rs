//! HTTP client wrapper

use std::sync::{Arc, RwLock as StdRwLock};
use std::time::Duration;

use bytes::Bytes;
use serde::Serialize;

use incilab_common::{Envelope, Error};

use crate::events::EventBus;
use crate::middleware::{Flow, Middleware, Payload, Reply};
use crate::request::{Method, RequestDescriptor};

/// Fixed timeout applied uniformly to all requests.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Shared HTTP client running every request through the middleware pipeline.
///
/// The base URL is a single atomically-replaced string: requests already in
/// flight keep the base they started with, only requests issued after
/// [`HttpClient::set_base_url`] observe the new one.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: Arc<StdRwLock<String>>,
    middleware: Arc<Vec<Arc<dyn Middleware>>>,
    events: EventBus,
}

impl HttpClient {
    /// Builder with the given base URL.
    pub fn builder(base_url: impl Into<String>) -> HttpClientBuilder {
        HttpClientBuilder::new(base_url.into())
    }

    /// Event bus shared with the pipeline stages.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Base URL currently prepended to request paths.
    pub fn base_url(&self) -> String {
        match self.base_url.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the base URL for requests issued from now on.
    pub fn set_base_url(&self, base_url: impl Into<String>) {
        let base_url = base_url.into();
        tracing::debug!("base url updated to {}", base_url);
        match self.base_url.write() {
            Ok(mut guard) => *guard = base_url,
            Err(poisoned) => *poisoned.into_inner() = base_url,
        }
    }

    /// Run a request through the pipeline, expecting an envelope reply.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<Envelope, Error> {
        match self.dispatch(request).await? {
            Payload::Envelope(envelope) => Ok(envelope),
            Payload::Binary(_) => Err(Error::Pipeline(
                "binary payload where an envelope was expected".to_string(),
            )),
        }
    }

    /// Run a binary request, returning the raw payload without envelope
    /// inspection.
    pub async fn execute_binary(&self, request: RequestDescriptor) -> Result<Bytes, Error> {
        match self.dispatch(request.binary()).await? {
            Payload::Binary(bytes) => Ok(bytes),
            Payload::Envelope(_) => Err(Error::Pipeline(
                "envelope where a binary payload was expected".to_string(),
            )),
        }
    }

    /// GET with query parameters.
    pub async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Envelope, Error> {
        let mut request = RequestDescriptor::get(path);
        for (key, value) in params {
            request = request.query(key, value);
        }
        self.execute(request).await
    }

    /// POST with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, Error> {
        self.execute(RequestDescriptor::post(path).json(body)?).await
    }

    /// PUT with a JSON body.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, Error> {
        self.execute(RequestDescriptor::put(path).json(body)?).await
    }

    /// DELETE with query parameters.
    pub async fn delete(&self, path: &str, params: &[(&str, String)]) -> Result<Envelope, Error> {
        let mut request = RequestDescriptor::delete(path);
        for (key, value) in params {
            request = request.query(key, value);
        }
        self.execute(request).await
    }

    async fn dispatch(&self, mut request: RequestDescriptor) -> Result<Payload, Error> {
        for stage in self.middleware.iter() {
            stage
                .on_request(&mut request)
                .await
                .inspect_err(|err| tracing::error!("request stage failed: {}", err))?;
        }

        let url = format!("{}{}", self.base_url(), request.path);
        let mut builder = match request.method {
            Method::Get => self.inner.get(&url),
            Method::Post => self.inner.post(&url),
            Method::Put => self.inner.put(&url),
            Method::Delete => self.inner.delete(&url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => return Err(self.transport_failure(err)),
        };

        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => return Err(self.transport_failure(err)),
        };
        tracing::debug!(status, path = %request.path, "received response");

        let mut flow = Flow::Continue(Reply { status, body });
        for stage in self.middleware.iter() {
            flow = stage
                .on_response(&request, flow)
                .await
                .inspect_err(|err| tracing::warn!("response stage failed: {}", err))?;
            if matches!(flow, Flow::Resolved(_)) {
                break;
            }
        }

        match flow {
            Flow::Resolved(payload) => Ok(payload),
            Flow::Continue(_) => Err(Error::Pipeline(
                "no pipeline stage resolved the reply".to_string(),
            )),
        }
    }

    fn transport_failure(&self, err: reqwest::Error) -> Error {
        let err = classify_transport(err);
        self.events.notify(err.to_string());
        err
    }
}

/// Map a transport failure onto the error taxonomy: nothing came back for
/// a sent request versus the request never leaving the client.
fn classify_transport(err: reqwest::Error) -> Error {
    if err.is_timeout() || err.is_connect() {
        Error::NoResponse
    } else {
        Error::Client(err.to_string())
    }
}

/// Builder configuring base URL, timeout, event bus, and the ordered
/// middleware list
#[derive(Debug)]
pub struct HttpClientBuilder {
    base_url: String,
    timeout: Duration,
    events: EventBus,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl HttpClientBuilder {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
            events: EventBus::new(),
            middleware: Vec::new(),
        }
    }

    /// Override the fixed request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Share an existing event bus with the pipeline.
    pub fn events(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }

    /// Append a pipeline stage; stages run in the order they are added.
    pub fn with(mut self, stage: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(stage));
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<HttpClient, Error> {
        let inner = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(HttpClient {
            inner,
            base_url: Arc::new(StdRwLock::new(self.base_url)),
            middleware: Arc::new(self.middleware),
            events: self.events,
        })
    }
}
