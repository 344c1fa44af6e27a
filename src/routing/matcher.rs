//! Path matching logic for bypass patterns.
//!
//! # Responsibilities
//! - Match whole-segment path prefixes
//! - Match exact paths
//! - Match paths whose final segment looks like a file name
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Prefixes respect segment boundaries ("/api" does not match "/apis")
//! - No regex to guarantee O(n) matching

/// Trait for matching request paths against conditions.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches a path prefix on a segment boundary.
#[derive(Debug, Clone)]
pub struct SegmentPrefixMatcher {
    prefix: String,
}

impl SegmentPrefixMatcher {
    /// Create a new prefix matcher. A trailing slash on `prefix` is ignored.
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        while prefix.len() > 1 && prefix.ends_with('/') {
            prefix.pop();
        }
        Self { prefix }
    }
}

impl PathMatcher for SegmentPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Matches one exact path.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    path: String,
}

impl ExactMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl PathMatcher for ExactMatcher {
    fn matches(&self, path: &str) -> bool {
        path == self.path
    }
}

/// Matches any path whose final segment contains a dot.
///
/// This is a heuristic for static files: a page slug such as `/docs/v1.2` is
/// matched as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileExtensionMatcher;

impl PathMatcher for FileExtensionMatcher {
    fn matches(&self, path: &str) -> bool {
        path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug, Default)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn PathMatcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn PathMatcher>>) -> Self {
        Self { matchers }
    }
}

impl PathMatcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}
