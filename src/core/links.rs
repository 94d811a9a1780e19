//! Page-link resolution.
//!
//! The builder never fabricates URLs itself; it calls through a [`PageLinks`]
//! implementation supplied by the caller. Two stock resolvers cover the
//! common permalink shapes: query-string (`?paged=N`) and path-segment
//! (`/page/N/`). Page 1 resolves to the bare base URL in both styles, since
//! the first page of a listing lives at the listing's own address.
//!
//! # Public API
//! - [`PageLinks`]: Resolver trait, `resolve(page) -> String`
//! - [`LinkStyle`]: Config-selectable resolver style
//! - [`QueryStringLinks`]: `base?paged=N` resolver
//! - [`PathSegmentLinks`]: `base/page/N/` resolver

use serde::{Deserialize, Serialize};

/// Resolves an absolute page number to a URL or path string
pub trait PageLinks {
    fn resolve(&self, page: usize) -> String;
}

/// Permalink style selector for the stock resolvers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// `base?paged=N`
    #[default]
    Query,
    /// `base/page/N/`
    Path,
}

impl LinkStyle {
    /// Build the resolver this style names for the given base URL
    pub fn resolver(self, base: impl Into<String>) -> Box<dyn PageLinks> {
        match self {
            LinkStyle::Query => Box::new(QueryStringLinks::new(base)),
            LinkStyle::Path => Box::new(PathSegmentLinks::new(base)),
        }
    }
}

/// Query-string resolver: `base?paged=N`
#[derive(Debug, Clone)]
pub struct QueryStringLinks {
    base: String,
    param: String,
}

impl QueryStringLinks {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            param: "paged".to_string(),
        }
    }

    /// Override the query parameter name (default "paged")
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }
}

impl PageLinks for QueryStringLinks {
    fn resolve(&self, page: usize) -> String {
        if page <= 1 {
            return self.base.clone();
        }
        let separator = if self.base.contains('?') { '&' } else { '?' };
        format!("{}{}{}={}", self.base, separator, self.param, page)
    }
}

/// Path-segment resolver: `base/page/N/`
#[derive(Debug, Clone)]
pub struct PathSegmentLinks {
    base: String,
}

impl PathSegmentLinks {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl PageLinks for PathSegmentLinks {
    fn resolve(&self, page: usize) -> String {
        if page <= 1 {
            return self.base.clone();
        }
        let trimmed = self.base.trim_end_matches('/');
        format!("{trimmed}/page/{page}/")
    }
}
