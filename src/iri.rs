//! IRI management for OWL2 entities
//!
//! Provides the identity primitive used by every entity in an ontology,
//! with namespace/local-name decomposition and optional prefix support.

use crate::error::{OwlError, OwlResult};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Internationalized Resource Identifier (IRI)
///
/// OWL2 uses IRIs to uniquely identify all named entities. An IRI is
/// optionally decomposed into a namespace and a local name; the split
/// point is the last `#`, or failing that the last `/`. When neither
/// separator exists (or the separator is the final character), the
/// whole string is the namespace and there is no local name.
///
/// Equality, ordering, and hashing consider the full IRI string only.
/// Two IRIs with the same full form but different prefixes are equal.
#[derive(Debug, Clone)]
pub struct IRI {
    /// The full IRI string
    full: Arc<str>,
    /// Byte offset where the local name starts, if the IRI decomposes
    local_start: Option<usize>,
    /// Optional namespace prefix for abbreviation
    prefix: Option<Arc<str>>,
    /// Cached hash of the full string
    hash: u64,
}

fn hash_str(s: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    s.hash(&mut hasher);
    hasher.finish()
}

impl IRI {
    /// Create a new IRI from a full IRI string
    pub fn new<S: Into<String>>(iri: S) -> OwlResult<Self> {
        let iri = iri.into();
        if iri.is_empty() {
            return Err(OwlError::InvalidIri("empty IRI".to_string()));
        }
        Ok(Self::new_unchecked(iri))
    }

    /// Create an IRI without validating the input string
    ///
    /// Used for compile-time vocabulary constants whose validity is known.
    pub fn new_unchecked<S: Into<String>>(iri: S) -> Self {
        let iri = iri.into();
        let local_start = Self::split_point(&iri);
        let hash = hash_str(&iri);
        IRI {
            full: Arc::from(iri),
            local_start,
            prefix: None,
            hash,
        }
    }

    /// Create an IRI from a prefix, local name, and namespace URI
    ///
    /// The full form is the concatenation of namespace and local name.
    pub fn from_parts<P, L, N>(prefix: P, local_name: L, namespace: N) -> Self
    where
        P: Into<String>,
        L: Into<String>,
        N: Into<String>,
    {
        let namespace = namespace.into();
        let local_name = local_name.into();
        let local_start = namespace.len();
        let full = format!("{namespace}{local_name}");
        let hash = hash_str(&full);
        IRI {
            full: Arc::from(full),
            local_start: Some(local_start),
            prefix: Some(Arc::from(prefix.into())),
            hash,
        }
    }

    /// Attach a prefix to this IRI for abbreviated rendering
    pub fn with_prefix<P: Into<String>>(mut self, prefix: P) -> Self {
        self.prefix = Some(Arc::from(prefix.into()));
        self
    }

    // Split point: after the last '#', else after the last '/'.
    // A separator in final position leaves the IRI undecomposed.
    fn split_point(iri: &str) -> Option<usize> {
        let sep = iri.rfind('#').or_else(|| iri.rfind('/'))?;
        if sep + 1 < iri.len() {
            Some(sep + 1)
        } else {
            None
        }
    }

    /// Get the full IRI as a string slice
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// Get the namespace part
    ///
    /// When the IRI does not decompose, the namespace is the whole string.
    pub fn namespace(&self) -> &str {
        match self.local_start {
            Some(start) => &self.full[..start],
            None => &self.full,
        }
    }

    /// Get the local name part, if the IRI decomposes
    pub fn local_name(&self) -> Option<&str> {
        self.local_start.map(|start| &self.full[start..])
    }

    /// Get the namespace prefix, if one is attached
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Check whether this IRI carries both a prefix and a local name
    pub fn is_abbreviated(&self) -> bool {
        self.prefix.is_some() && self.local_start.is_some()
    }

    /// Get the abbreviated form `prefix:localName`, or the full IRI
    /// when no abbreviation is available
    pub fn abbreviated(&self) -> String {
        match (&self.prefix, self.local_name()) {
            (Some(prefix), Some(local)) => format!("{prefix}:{local}"),
            _ => self.full.to_string(),
        }
    }
}

impl PartialEq for IRI {
    fn eq(&self, other: &Self) -> bool {
        self.full == other.full
    }
}

impl Eq for IRI {}

impl PartialOrd for IRI {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IRI {
    fn cmp(&self, other: &Self) -> Ordering {
        self.full.cmp(&other.full)
    }
}

impl Hash for IRI {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Display for IRI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full)
    }
}

impl From<&str> for IRI {
    fn from(s: &str) -> Self {
        Self::new_unchecked(s)
    }
}

impl From<String> for IRI {
    fn from(s: String) -> Self {
        Self::new_unchecked(s)
    }
}
