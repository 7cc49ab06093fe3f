use chrono::{DateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};

use crate::error::{Error, WebHdfsResult};

/// Node kind reported by the remote service.
///
/// The service spells it `FILE`/`DIRECTORY`; comparison is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    File,
    Directory,
}

impl<'de> Deserialize<'de> for NodeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;

        if value.eq_ignore_ascii_case("DIRECTORY") {
            Ok(Self::Directory)
        } else if value.eq_ignore_ascii_case("FILE") {
            Ok(Self::File)
        } else {
            Err(de::Error::unknown_variant(&value, &["FILE", "DIRECTORY"]))
        }
    }
}

/// Metadata record for one remote node.
#[derive(Debug, Clone, Deserialize)]
pub struct FileStatus {
    pub length: u64,
    /// Milliseconds since the Unix epoch
    #[serde(rename = "modificationTime")]
    pub modification_time: i64,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Entry name relative to the listed directory. Empty outside listings.
    #[serde(rename = "pathSuffix", default)]
    pub path_suffix: String,
}

impl FileStatus {
    pub fn is_dir(&self) -> bool {
        self.node_type == NodeType::Directory
    }

    /// Modification time as a timestamp.
    ///
    /// Values outside chrono's representable range (about ±262,000 years from
    /// the common era) yield [`Error::TimestampOutOfRange`].
    pub fn modified(&self) -> WebHdfsResult<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.modification_time)
            .single()
            .ok_or(Error::TimestampOutOfRange(self.modification_time))
    }
}

/// Body of a successful metadata query.
#[derive(Debug, Deserialize)]
pub struct FileStatusEnvelope {
    #[serde(rename = "FileStatus")]
    pub file_status: FileStatus,
}

/// Body of a successful listing query.
#[derive(Debug, Deserialize)]
pub struct FileStatusesEnvelope {
    #[serde(rename = "FileStatuses")]
    pub file_statuses: FileStatuses,
}

#[derive(Debug, Deserialize)]
pub struct FileStatuses {
    #[serde(rename = "FileStatus")]
    pub file_status: Vec<FileStatus>,
}

#[cfg(test)]
mod test_file_status {
    use super::*;

    #[test]
    fn decodes_the_metadata_envelope() {
        let body = r#"{"FileStatus":{"length":24930,"modificationTime":1320171722771,"type":"FILE","blockSize":134217728,"replication":1}}"#;
        let envelope: FileStatusEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.file_status.length, 24930);
        assert_eq!(envelope.file_status.modification_time, 1320171722771);
        assert_eq!(envelope.file_status.node_type, NodeType::File);
        assert!(!envelope.file_status.is_dir());
    }

    #[test]
    fn node_type_comparison_is_case_insensitive() {
        let status: FileStatus = serde_json::from_str(
            r#"{"length":0,"modificationTime":0,"type":"directory"}"#,
        )
        .unwrap();

        assert_eq!(status.node_type, NodeType::Directory);
    }

    #[test]
    fn unknown_node_type_is_rejected() {
        let result: Result<FileStatus, _> = serde_json::from_str(
            r#"{"length":0,"modificationTime":0,"type":"SYMLINK"}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn decodes_the_listing_envelope_in_order() {
        let body = r#"{"FileStatuses":{"FileStatus":[
            {"length":12,"modificationTime":1000,"type":"FILE","pathSuffix":"b.log"},
            {"length":0,"modificationTime":2000,"type":"DIRECTORY","pathSuffix":"a"}
        ]}}"#;
        let envelope: FileStatusesEnvelope = serde_json::from_str(body).unwrap();
        let entries = &envelope.file_statuses.file_status;

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path_suffix, "b.log");
        assert_eq!(entries[1].path_suffix, "a");
    }

    fn status_with_mtime(millis: i64) -> FileStatus {
        FileStatus {
            length: 0,
            modification_time: millis,
            node_type: NodeType::File,
            path_suffix: String::new(),
        }
    }

    #[test]
    fn epoch_zero_converts_to_the_unix_epoch() {
        let modified = status_with_mtime(0).modified().unwrap();
        assert_eq!(modified, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn in_range_millis_convert_exactly() {
        let modified = status_with_mtime(1320171722771).modified().unwrap();
        assert_eq!(modified.timestamp_millis(), 1320171722771);
    }

    #[test]
    fn out_of_range_millis_are_a_defined_error() {
        let result = status_with_mtime(i64::MAX).modified();
        assert!(matches!(result, Err(Error::TimestampOutOfRange(_))));
    }
}
