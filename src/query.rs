//! Query parameter encoding — `ParameterSet` and the per-endpoint
//! request contract.

use crate::error::SdkError;

/// An ordered set of query parameters, built fresh for each call.
///
/// Insertion order is encoding order, which matters for signed URLs: the
/// signature covers the exact query string sent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pairs: Vec<(String, String)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Duplicate names are kept; the Maps APIs accept
    /// repeated parameters (e.g. multiple `markers`).
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Builder-style `push`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Render as a percent-encoded query string, preserving order.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(n, v)| format!("{}={}", urlencoding::encode(n), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl FromIterator<(String, String)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// Contract implemented by each endpoint request type.
///
/// Implementations validate their own required fields and return
/// [`SdkError::InvalidRequest`] before any network call is attempted; the
/// transport never inspects parameter meaning.
pub trait ApiRequest {
    fn params(&self) -> Result<ParameterSet, SdkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_preserves_insertion_order() {
        let mut p = ParameterSet::new();
        p.push("location", "-33.86,151.2");
        p.push("timestamp", "1331161200");
        p.push("language", "es");
        assert_eq!(
            p.encode(),
            "location=-33.86%2C151.2&timestamp=1331161200&language=es"
        );
    }

    #[test]
    fn encode_percent_escapes_values() {
        let p = ParameterSet::new().with("markers", "color:blue|label:S|40.7,-74.0");
        assert_eq!(p.encode(), "markers=color%3Ablue%7Clabel%3AS%7C40.7%2C-74.0");
    }

    #[test]
    fn duplicate_names_are_kept() {
        let p = ParameterSet::new().with("markers", "a").with("markers", "b");
        assert_eq!(p.len(), 2);
        assert_eq!(p.encode(), "markers=a&markers=b");
    }
}
