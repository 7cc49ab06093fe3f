use std::fmt;

/// Slash-delimited identifier of a node under the endpoint.
///
/// Leading and trailing slashes are stripped at construction so the value can
/// be embedded into a request URL directly. The root of the remote tree is
/// the empty path. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    pub fn new<T: Into<String>>(path: T) -> Self {
        Self(path.into().trim_matches('/').to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path segment, empty for the root.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    /// Joins an entry name from a directory listing.
    pub fn child(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self::new(name)
        } else {
            Self(format!("{}/{}", self.0, name.trim_matches('/')))
        }
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test_relative_path {
    use super::*;

    #[test]
    fn trims_surrounding_slashes() {
        assert_eq!(RelativePath::new("/data/logs/").as_str(), "data/logs");
        assert_eq!(RelativePath::new("data/logs").as_str(), "data/logs");
        assert_eq!(RelativePath::new("/").as_str(), "");
    }

    #[test]
    fn name_is_the_final_segment() {
        assert_eq!(RelativePath::new("data/logs/app.log").name(), "app.log");
        assert_eq!(RelativePath::new("app.log").name(), "app.log");
        assert_eq!(RelativePath::new("/").name(), "");
    }

    #[test]
    fn child_joins_entry_names() {
        assert_eq!(RelativePath::new("/data/").child("logs").as_str(), "data/logs");
        assert_eq!(RelativePath::new("").child("top").as_str(), "top");
    }
}
