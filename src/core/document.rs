//! Document view
//!
//! Borrowed (uri, text) pair handed to the engine for one validation run.
//! Nothing here is stored between runs.

/// A text document identified by its URI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    uri: &'a str,
    text: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(uri: &'a str, text: &'a str) -> Self {
        Self { uri, text }
    }

    pub fn uri(&self) -> &'a str {
        self.uri
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Last path segment of the URI, without query or fragment
    pub fn file_name(&self) -> &'a str {
        let path = self.uri.split(['?', '#']).next().unwrap_or(self.uri);
        path.rsplit(['/', '\\']).next().unwrap_or(path)
    }

    /// File extension without the dot
    pub fn extension(&self) -> Option<&'a str> {
        let name = self.file_name();
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => Some(ext),
            _ => None,
        }
    }

    /// Whether the document should be linted at all
    pub fn is_json(&self) -> bool {
        self.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}
