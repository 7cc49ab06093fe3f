use std::collections::VecDeque;
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::{
    stream::{self, BoxStream},
    Stream, StreamExt, TryStreamExt,
};

use crate::{
    endpoint::Endpoint,
    error::WebHdfsResult,
    http::HttpClient,
    path::RelativePath,
    protocol::{FileStatusesEnvelope, Operation},
    resolver,
};

use super::WebHdfsFileInfo;

/// Contents of one remote directory, or the not-found sentinel.
///
/// The sentinel is a terminal, non-error outcome distinguishing "no such
/// directory" from a failed query: it lists nothing and issues no requests.
#[derive(Debug)]
pub struct DirectoryContents {
    dir: Option<WebHdfsFileInfo>,
}

impl DirectoryContents {
    pub(crate) fn found(dir: WebHdfsFileInfo) -> Self {
        Self { dir: Some(dir) }
    }

    /// The not-found sentinel.
    pub fn not_found() -> Self {
        Self { dir: None }
    }

    /// `false` for the not-found sentinel.
    pub fn exists(&self) -> bool {
        self.dir.is_some()
    }

    /// The directory's own metadata; absent on the sentinel.
    pub fn directory(&self) -> Option<&WebHdfsFileInfo> {
        self.dir.as_ref()
    }

    /// Lists the directory and yields one fully resolved child per entry, in
    /// response order.
    ///
    /// The listing query runs up front; when it fails no entries are yielded
    /// at all. Each child is then re-resolved lazily with its own metadata
    /// query as the stream advances, so every entry carries full independent
    /// metadata. Calling `entries` again re-issues the listing (no caching).
    pub async fn entries(&self) -> WebHdfsResult<Entries> {
        let Some(dir) = &self.dir else {
            return Ok(Entries::empty());
        };

        let url = dir.endpoint().url_for(dir.path(), Operation::ListStatus)?;
        debug!("LISTSTATUS {}", url);

        let response = dir.client().get(url).await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(resolver::remote_error(status, &body));
        }

        let envelope: FileStatusesEnvelope = serde_json::from_slice(&body)?;
        let children = envelope
            .file_statuses
            .file_status
            .into_iter()
            .map(|entry| dir.path().child(&entry.path_suffix))
            .collect();

        Ok(Entries::resolving(
            dir.client().clone(),
            dir.endpoint().clone(),
            children,
        ))
    }
}

/// Finite stream over the children of one directory.
pub struct Entries {
    inner: BoxStream<'static, WebHdfsResult<WebHdfsFileInfo>>,
}

impl Entries {
    fn empty() -> Self {
        Self {
            inner: stream::empty().boxed(),
        }
    }

    fn resolving(
        client: Arc<dyn HttpClient>,
        endpoint: Endpoint,
        children: VecDeque<RelativePath>,
    ) -> Self {
        let inner = stream::try_unfold(
            (client, endpoint, children),
            |(client, endpoint, mut children)| async move {
                let Some(path) = children.pop_front() else {
                    return Ok(None);
                };

                let info = WebHdfsFileInfo::resolve(client.clone(), endpoint.clone(), path).await?;
                Ok(Some((info, (client, endpoint, children))))
            },
        )
        .boxed();

        Self { inner }
    }

    /// Collects all remaining entries.
    pub async fn collect(self) -> WebHdfsResult<Vec<WebHdfsFileInfo>> {
        self.inner.try_collect().await
    }
}

impl Stream for Entries {
    type Item = WebHdfsResult<WebHdfsFileInfo>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }
}

impl fmt::Debug for Entries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries").finish_non_exhaustive()
    }
}
