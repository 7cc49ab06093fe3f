//! Wire-level types of the WebHDFS REST protocol.
//!
//! Everything here is transient: decoded from one response body and converted
//! immediately into the public metadata surface.

mod exception;
mod file_status;

pub use self::{
    exception::{RemoteException, RemoteExceptionEnvelope},
    file_status::{FileStatus, FileStatusEnvelope, FileStatuses, FileStatusesEnvelope, NodeType},
};

/// Operations of the REST protocol used by this provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Metadata query for a single node
    GetFileStatus,
    /// Listing query for a directory
    ListStatus,
    /// Read the raw content of a file
    Open,
}

impl Operation {
    /// Query string selecting the operation.
    pub(crate) fn query(self) -> &'static str {
        match self {
            Self::GetFileStatus => "OP=GETFILESTATUS",
            Self::ListStatus => "OP=LISTSTATUS",
            Self::Open => "OP=OPEN",
        }
    }
}
