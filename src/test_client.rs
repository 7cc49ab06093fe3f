//! Scripted transport for tests: canned responses keyed by full request URL,
//! with a record of every URL that was asked for.

use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;
use reqwest::StatusCode;
use url::Url;

use crate::{
    error::WebHdfsResult,
    http::{HttpClient, HttpResponse},
};

#[derive(Debug, Default)]
pub(crate) struct StubClient {
    responses: Mutex<HashMap<String, (StatusCode, Bytes)>>,
    requests: Mutex<Vec<String>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a canned response for one exact URL.
    pub fn on(self, url: &str, status: u16, body: impl Into<Bytes>) -> Self {
        let _ = self.responses.lock().unwrap().insert(
            url.to_owned(),
            (StatusCode::from_u16(status).unwrap(), body.into()),
        );
        self
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for StubClient {
    async fn get(&self, url: Url) -> WebHdfsResult<HttpResponse> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.responses.lock().unwrap().get(url.as_str()) {
            Some((status, body)) => Ok(HttpResponse::from_bytes(*status, body.clone())),
            None => Ok(HttpResponse::from_bytes(
                StatusCode::NOT_FOUND,
                exception_json("FileNotFoundException", "File does not exist"),
            )),
        }
    }
}

pub(crate) fn file_json(length: u64, mtime: i64) -> String {
    format!(
        r#"{{"FileStatus":{{"length":{length},"modificationTime":{mtime},"type":"FILE","pathSuffix":""}}}}"#
    )
}

pub(crate) fn dir_json(mtime: i64) -> String {
    format!(
        r#"{{"FileStatus":{{"length":0,"modificationTime":{mtime},"type":"DIRECTORY","pathSuffix":""}}}}"#
    )
}

/// One LISTSTATUS entry; feed the results to [`listing_json`].
pub(crate) fn listing_entry(name: &str, node_type: &str, length: u64, mtime: i64) -> String {
    format!(
        r#"{{"length":{length},"modificationTime":{mtime},"type":"{node_type}","pathSuffix":"{name}"}}"#
    )
}

pub(crate) fn listing_json(entries: &[String]) -> String {
    format!(
        r#"{{"FileStatuses":{{"FileStatus":[{}]}}}}"#,
        entries.join(",")
    )
}

pub(crate) fn exception_json(exception: &str, message: &str) -> String {
    format!(
        r#"{{"RemoteException":{{"exception":"{exception}","message":"{message}"}}}}"#
    )
}
