use url::Url;

use crate::{error::WebHdfsResult, path::RelativePath, protocol::Operation};

/// Base location (scheme, host, port) of the remote filesystem's API root.
///
/// Owned by the provider and cloned read-only into every value it creates.
#[derive(Debug, Clone)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Parses a base location such as `http://namenode:9870`.
    pub fn parse(input: &str) -> WebHdfsResult<Self> {
        Ok(Self {
            base: Url::parse(input)?,
        })
    }

    pub fn as_url(&self) -> &Url {
        &self.base
    }

    /// Request URL for one operation against one node:
    /// `{endpoint}/api/v1/{path}?OP=...`
    pub(crate) fn url_for(&self, path: &RelativePath, op: Operation) -> WebHdfsResult<Url> {
        let mut url = self.base.join(&format!("/api/v1/{}", path.as_str()))?;
        url.set_query(Some(op.query()));
        Ok(url)
    }
}
