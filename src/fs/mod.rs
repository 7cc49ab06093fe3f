//! High-level view of the remote filesystem.
//!
//! [`WebHdfsFileInfo`] carries the resolved metadata of one node and can open
//! its content for reading; [`DirectoryContents`] enumerates the children of
//! a directory as the same metadata abstraction.

mod dir;
mod file;

pub use dir::{DirectoryContents, Entries};
pub use file::WebHdfsFileInfo;
