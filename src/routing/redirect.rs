//! Redirect target construction.

use serde::Serialize;

use crate::locale::LocaleCode;

/// Where a request without a locale prefix is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectTarget {
    /// Locale-prefixed path.
    pub path: String,
    /// Original query string, without the leading `?`. May be empty.
    pub query: String,
}

impl RedirectTarget {
    /// Path plus query, as used in a relative `Location`.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    /// Absolute URL on the original scheme and host.
    ///
    /// Without a host the relative form is returned.
    pub fn location(&self, scheme: &str, host: Option<&str>) -> String {
        match host {
            Some(host) => format!("{}://{}{}", scheme, host, self.path_and_query()),
            None => self.path_and_query(),
        }
    }
}

/// Prefix `path` with `locale`, carrying the query over unchanged.
///
/// `path` must start with `/`. The root becomes `/{locale}` rather than `/{locale}/`.
pub fn build_redirect_target(path: &str, query: &str, locale: LocaleCode) -> RedirectTarget {
    let path = if path == "/" {
        format!("/{}", locale)
    } else {
        format!("/{}{}", locale, path)
    };

    RedirectTarget {
        path,
        query: query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        let target = build_redirect_target("/", "", LocaleCode::En);
        assert_eq!(target.path, "/en");
        assert_eq!(target.query, "");
    }

    #[test]
    fn test_nested_path_keeps_query() {
        let target = build_redirect_target("/specialists", "q=tax", LocaleCode::Ru);
        assert_eq!(target.path, "/ru/specialists");
        assert_eq!(target.query, "q=tax");
    }

    #[test]
    fn test_trailing_slash_is_kept() {
        let target = build_redirect_target("/news/", "", LocaleCode::Ka);
        assert_eq!(target.path, "/ka/news/");
    }

    #[test]
    fn test_location() {
        let target = build_redirect_target("/companies", "city=tbilisi", LocaleCode::En);
        assert_eq!(
            target.location("https", Some("example.ge")),
            "https://example.ge/en/companies?city=tbilisi"
        );
        assert_eq!(target.location("https", None), "/en/companies?city=tbilisi");

        let root = build_redirect_target("/", "", LocaleCode::Ka);
        assert_eq!(root.location("http", Some("localhost:8080")), "http://localhost:8080/ka");
    }
}
