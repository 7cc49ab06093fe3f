//! HTTP collaborator seam.
//!
//! The provider only needs a GET with access to the status code and the body
//! as a byte stream. [`ReqwestClient`] is the production implementation;
//! anything else (tests, instrumented transports) can stand in through
//! [`HttpClient`]. Pooling, TLS and timeout policy live behind this seam and
//! no retries happen above it.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures::{
    stream::{self, BoxStream},
    Stream, StreamExt, TryStreamExt,
};
use reqwest::StatusCode;
use url::Url;

use crate::error::{Error, WebHdfsResult};

/// GET transport consumed by the provider.
///
/// The endpoint is assumed pre-authenticated or unauthenticated; no
/// negotiation happens at this layer.
#[async_trait]
pub trait HttpClient: fmt::Debug + Send + Sync {
    async fn get(&self, url: Url) -> WebHdfsResult<HttpResponse>;
}

/// Response handed back by an [`HttpClient`].
pub struct HttpResponse {
    status: StatusCode,
    body: BoxStream<'static, WebHdfsResult<Bytes>>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: BoxStream<'static, WebHdfsResult<Bytes>>) -> Self {
        Self { status, body }
    }

    /// Response with the whole body already in memory.
    pub fn from_bytes(status: StatusCode, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self::new(status, stream::once(async move { Ok::<_, Error>(body) }).boxed())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Body as a caller-owned byte stream.
    pub fn into_body(self) -> ByteStream {
        ByteStream { inner: self.body }
    }

    /// Collects the whole body into one buffer.
    pub async fn bytes(self) -> WebHdfsResult<Bytes> {
        self.into_body().bytes().await
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Byte stream of a response body. Caller-owned once returned; dropping it
/// releases the underlying transport resources.
pub struct ByteStream {
    inner: BoxStream<'static, WebHdfsResult<Bytes>>,
}

impl ByteStream {
    /// Reads the stream to the end.
    pub async fn bytes(mut self) -> WebHdfsResult<Bytes> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.inner.try_next().await? {
            buf.extend_from_slice(&chunk);
        }
        Ok(buf.freeze())
    }
}

impl Stream for ByteStream {
    type Item = WebHdfsResult<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }
}

impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStream").finish_non_exhaustive()
    }
}

/// Default transport backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Wraps a preconfigured client, keeping its timeout and TLS settings.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: Url) -> WebHdfsResult<HttpResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes_stream().map_err(Error::from).boxed();

        Ok(HttpResponse::new(status, body))
    }
}
