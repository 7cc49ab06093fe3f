//! File provider backed by a WebHDFS-compatible remote filesystem.
//!
//! Given a relative path, [`WebHdfsFileProvider`] answers metadata queries,
//! lists directories and opens byte streams for reading, speaking the REST
//! wire protocol (`OP=GETFILESTATUS`, `OP=LISTSTATUS`, `OP=OPEN`) over a
//! supplied HTTP transport.

#[macro_use]
extern crate log;
#[macro_use]
extern crate async_trait;

mod endpoint;
mod error;
/// High-level view of the remote filesystem
pub mod fs;
mod http;
mod path;
/// Wire protocol types
pub mod protocol;
mod provider;
mod resolver;
#[cfg(test)]
pub(crate) mod test_client;

pub use endpoint::Endpoint;
pub use error::{Error, WebHdfsResult};
pub use fs::{DirectoryContents, Entries, WebHdfsFileInfo};
pub use http::{ByteStream, HttpClient, HttpResponse, ReqwestClient};
pub use path::RelativePath;
pub use provider::WebHdfsFileProvider;
