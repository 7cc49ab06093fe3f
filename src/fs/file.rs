use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    endpoint::Endpoint,
    error::{Error, WebHdfsResult},
    http::{ByteStream, HttpClient},
    path::RelativePath,
    protocol::Operation,
    resolver::{self, StatusResult},
};

/// Metadata of one remote node, resolved once at construction.
///
/// [`resolve`](Self::resolve) performs a single metadata round-trip, so treat
/// it as an I/O-bound operation rather than a cheap allocation. An absent node
/// is a normal state ([`exists`](Self::exists) is `false`), never an error.
/// Immutable after construction; the transport handle is released when the
/// value (and any stream opened from it) is dropped.
#[derive(Debug, Clone)]
pub struct WebHdfsFileInfo {
    client: Arc<dyn HttpClient>,
    endpoint: Endpoint,
    path: RelativePath,
    exists: bool,
    is_directory: bool,
    length: u64,
    last_modified: DateTime<Utc>,
}

impl WebHdfsFileInfo {
    /// Resolves the node at `path`, issuing exactly one metadata query.
    pub(crate) async fn resolve(
        client: Arc<dyn HttpClient>,
        endpoint: Endpoint,
        path: RelativePath,
    ) -> WebHdfsResult<Self> {
        match resolver::resolve_status(client.as_ref(), &endpoint, &path).await? {
            StatusResult::Found(status) => {
                let last_modified = status.modified()?;
                Ok(Self {
                    client,
                    endpoint,
                    path,
                    exists: true,
                    is_directory: status.is_dir(),
                    length: status.length,
                    last_modified,
                })
            }
            StatusResult::NotFound => Ok(Self {
                client,
                endpoint,
                path,
                exists: false,
                is_directory: false,
                length: 0,
                last_modified: DateTime::UNIX_EPOCH,
            }),
        }
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Size of the node in bytes. Zero for absent nodes.
    pub fn len(&self) -> u64 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Last modification time; the Unix epoch for absent nodes.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Final segment of the relative path.
    pub fn name(&self) -> &str {
        self.path.name()
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub(crate) fn client(&self) -> &Arc<dyn HttpClient> {
        &self.client
    }

    pub(crate) fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Opens the node's content as a byte stream.
    ///
    /// Fails with [`Error::InvalidOperation`] on a directory, without touching
    /// the network. Opening an absent node is permitted and surfaces whatever
    /// the remote service returns, typically [`Error::NotFound`].
    pub async fn create_read_stream(&self) -> WebHdfsResult<ByteStream> {
        if self.is_directory {
            return Err(Error::InvalidOperation(
                "cannot create a read stream against a directory".to_owned(),
            ));
        }

        let url = self.endpoint.url_for(&self.path, Operation::Open)?;
        debug!("OPEN {}", url);

        let response = self.client.get(url).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await?;
            return Err(resolver::remote_error(status, &body));
        }

        Ok(response.into_body())
    }
}
