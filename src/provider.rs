use std::sync::Arc;

use crate::{
    endpoint::Endpoint,
    error::{Error, WebHdfsResult},
    fs::{DirectoryContents, WebHdfsFileInfo},
    http::{HttpClient, ReqwestClient},
    path::RelativePath,
};

/// Facade over one remote filesystem endpoint.
///
/// Holds only the immutable endpoint and the transport handle. Every lookup
/// performs an independent round-trip: no caching, no identity map, no
/// de-duplication of concurrent lookups for the same path.
#[derive(Debug, Clone)]
pub struct WebHdfsFileProvider {
    endpoint: Endpoint,
    client: Arc<dyn HttpClient>,
}

impl WebHdfsFileProvider {
    /// Provider backed by the default transport.
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_client(endpoint, Arc::new(ReqwestClient::default()))
    }

    /// Provider backed by a caller-supplied transport.
    pub fn with_client(endpoint: Endpoint, client: Arc<dyn HttpClient>) -> Self {
        Self { endpoint, client }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Looks up the node at `path`.
    ///
    /// Absence is a valid result state (the returned info has `exists() ==
    /// false`); only a failed query is an error.
    pub async fn get_file_info<P: Into<String>>(&self, path: P) -> WebHdfsResult<WebHdfsFileInfo> {
        WebHdfsFileInfo::resolve(
            self.client.clone(),
            self.endpoint.clone(),
            RelativePath::new(path),
        )
        .await
    }

    /// Looks up the directory at `path`.
    ///
    /// Returns the not-found sentinel when the node is absent or not a
    /// directory; no listing query is issued in that case.
    pub async fn get_directory_contents<P: Into<String>>(
        &self,
        path: P,
    ) -> WebHdfsResult<DirectoryContents> {
        let info = self.get_file_info(path).await?;

        if info.exists() && info.is_directory() {
            Ok(DirectoryContents::found(info))
        } else {
            Ok(DirectoryContents::not_found())
        }
    }

    /// Change notification is not supported by the remote protocol; this
    /// always fails rather than silently doing nothing.
    pub fn watch(&self, _filter: &str) -> WebHdfsResult<()> {
        Err(Error::WatchNotSupported)
    }
}
