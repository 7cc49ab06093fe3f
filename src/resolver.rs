//! Metadata resolution: one round-trip from relative path to status record.

use reqwest::StatusCode;

use crate::{
    endpoint::Endpoint,
    error::{Error, WebHdfsResult},
    http::HttpClient,
    path::RelativePath,
    protocol::{FileStatus, FileStatusEnvelope, Operation, RemoteExceptionEnvelope},
};

/// Outcome of a metadata query. Absence is a representable state, not an
/// error; everything else non-2xx maps into the error taxonomy.
#[derive(Debug)]
pub(crate) enum StatusResult {
    Found(FileStatus),
    NotFound,
}

pub(crate) async fn resolve_status(
    client: &dyn HttpClient,
    endpoint: &Endpoint,
    path: &RelativePath,
) -> WebHdfsResult<StatusResult> {
    let url = endpoint.url_for(path, Operation::GetFileStatus)?;
    debug!("GETFILESTATUS {}", url);

    let response = client.get(url).await?;
    let status = response.status();

    // 404 is the only non-2xx mapped to a non-error outcome here.
    if status == StatusCode::NOT_FOUND {
        return Ok(StatusResult::NotFound);
    }

    let body = response.bytes().await?;
    if status.is_success() {
        let envelope: FileStatusEnvelope = serde_json::from_slice(&body)?;
        Ok(StatusResult::Found(envelope.file_status))
    } else {
        Err(remote_error(status, &body))
    }
}

/// Maps a non-2xx response to the local taxonomy, carrying the remote
/// `message` text. An undecodable error envelope is itself an error.
pub(crate) fn remote_error(status: StatusCode, body: &[u8]) -> Error {
    match serde_json::from_slice::<RemoteExceptionEnvelope>(body) {
        Ok(envelope) => Error::from_remote(status, envelope.remote_exception.message),
        Err(err) => Error::MalformedResponse(err.to_string()),
    }
}
