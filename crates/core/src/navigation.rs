//! Navigation targets and the navigation collaborator contract
//!
//! A [`NavigationTarget`] is an opaque destination: a path plus optional
//! query parameters. The search surface only produces targets; actually
//! moving the user there is the job of a [`Navigator`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::{form_urlencoded, Url};

/// Base used only to borrow `url`'s path segment encoding rules
const ENCODING_BASE: &str = "http://adamftd.invalid/";

/// Destination handed to the external navigation mechanism
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationTarget {
    path: String,
    query: Vec<(String, String)>,
}

impl NavigationTarget {
    /// Create a target for an absolute path such as `/search`
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        Self {
            path,
            query: Vec::new(),
        }
    }

    /// Append one path segment, percent-encoding it
    pub fn with_segment(mut self, segment: &str) -> Self {
        let encoded = encode_segment(segment);
        if !self.path.ends_with('/') {
            self.path.push('/');
        }
        self.path.push_str(&encoded);
        self
    }

    /// Append a query parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Parse a literal such as `/search?mode=find-buyers`
    pub fn parse(literal: &str) -> Result<Self> {
        if !literal.starts_with('/') {
            return Err(Error::invalid_input(format!(
                "Navigation target must be an absolute path, got '{literal}'"
            )));
        }

        let (path, query) = match literal.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (literal, None),
        };

        let mut target = Self::new(path);
        if let Some(query) = query {
            target.query = form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
        }
        Ok(target)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// First value for a query parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as a relative URL for a URL-based router
    pub fn to_url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            write!(f, "?{encoded}")?;
        }
        Ok(())
    }
}

fn encode_segment(segment: &str) -> String {
    // `url` treats these as relative path steps and drops them
    if matches!(segment, "." | "..") {
        return "%2E".repeat(segment.len());
    }
    Url::parse(ENCODING_BASE)
        .ok()
        .and_then(|mut url| {
            url.path_segments_mut().ok()?.clear().push(segment);
            Some(url.path().trim_start_matches('/').to_string())
        })
        .unwrap_or_else(|| segment.to_string())
}

/// Collaborator that physically performs navigation
///
/// Fire-and-forget: the search surface never consumes a return value.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &NavigationTarget);
}
