//! Target descriptor: the validated Graylog2 API base URL and credentials

use std::fmt;
use thiserror::Error;
use url::Url;

/// Validated Graylog2 API base URL, stored without a trailing slash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Parses and validates a raw base URL
    ///
    /// Checks run in a fixed order: the string must parse as a URL, carry a
    /// non-empty host, spell out a numeric port, and use a scheme starting
    /// with `http`.
    ///
    /// # Errors
    ///
    /// Returns the first [`TargetError`] encountered
    pub fn parse(raw: &str) -> Result<Self, TargetError> {
        let url = Url::parse(raw).map_err(|err| match err {
            url::ParseError::EmptyHost => TargetError::MissingHost,
            url::ParseError::InvalidPort => TargetError::PortNotNumeric,
            other => TargetError::Unparsable(other),
        })?;

        if url.host_str().is_none_or(str::is_empty) {
            return Err(TargetError::MissingHost);
        }

        match explicit_port(raw) {
            Some(port) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {}
            _ => return Err(TargetError::PortNotNumeric),
        }

        // Url lowercases the scheme; any scheme starting with "http" passes
        if !url.scheme().starts_with("http") {
            return Err(TargetError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
            });
        }

        let mut normalized = String::from(url);
        if normalized.ends_with('/') {
            normalized.pop();
        }

        Ok(Self(normalized))
    }

    /// Absolute URL for an API path such as `/system`
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authority section of the raw input, without userinfo
fn authority(raw: &str) -> Option<&str> {
    let (_, rest) = raw.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    Some(authority.rsplit_once('@').map_or(authority, |(_, host)| host))
}

/// Port exactly as written in the input
///
/// `Url` drops a port equal to the scheme default, so presence is checked
/// against the raw string.
fn explicit_port(raw: &str) -> Option<&str> {
    let authority = authority(raw)?;
    let host_end = if authority.starts_with('[') {
        authority.find(']')? + 1
    } else {
        0
    };
    authority[host_end..].rsplit_once(':').map(|(_, port)| port)
}

/// HTTP Basic authentication credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Base URL validation errors
#[derive(Debug, Error)]
pub enum TargetError {
    /// Input is not a URL at all
    #[error("Can not parse given URL.")]
    Unparsable(#[source] url::ParseError),

    #[error("Hostname is missing.")]
    MissingHost,

    /// Port absent or not made of digits
    #[error("Port is not a number.")]
    PortNotNumeric,

    #[error("Only HTTP/S protocols are supported.")]
    UnsupportedScheme {
        /// Scheme found in the input
        scheme: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_trailing_slash() {
        let base = BaseUrl::parse("http://localhost:12900/").unwrap();
        assert_eq!(base.as_str(), "http://localhost:12900");
    }

    #[test]
    fn test_parse_bare_authority_has_no_trailing_slash() {
        // Url serializes an empty path as "/"
        let base = BaseUrl::parse("http://graylog.example.com:12900").unwrap();
        assert_eq!(base.as_str(), "http://graylog.example.com:12900");
    }

    #[test]
    fn test_parse_keeps_api_prefix() {
        let base = BaseUrl::parse("https://graylog.example.com:443/api/").unwrap();
        assert_eq!(base.as_str(), "https://graylog.example.com/api");
        assert_eq!(base.join("/system"), "https://graylog.example.com/api/system");
    }

    #[test]
    fn test_parse_accepts_uppercase_scheme() {
        let base = BaseUrl::parse("HTTPS://Graylog.Example.com:9000").unwrap();
        assert_eq!(base.as_str(), "https://graylog.example.com:9000");
    }

    #[test]
    fn test_parse_accepts_ipv6_host() {
        let base = BaseUrl::parse("http://[::1]:12900").unwrap();
        assert_eq!(base.join("/system"), "http://[::1]:12900/system");
    }

    #[test]
    fn test_parse_rejects_unparsable() {
        let err = BaseUrl::parse("not a url").unwrap_err();
        assert!(matches!(err, TargetError::Unparsable(_)));
        assert_eq!(err.to_string(), "Can not parse given URL.");
    }

    #[test]
    fn test_parse_rejects_missing_host() {
        assert!(matches!(
            BaseUrl::parse("http://:12900"),
            Err(TargetError::MissingHost)
        ));
        // No scheme separator: "localhost" is read as the scheme
        assert!(matches!(
            BaseUrl::parse("localhost:12900"),
            Err(TargetError::MissingHost)
        ));
    }

    #[test]
    fn test_parse_rejects_missing_port() {
        let err = BaseUrl::parse("http://localhost/").unwrap_err();
        assert!(matches!(err, TargetError::PortNotNumeric));
        assert_eq!(err.to_string(), "Port is not a number.");
    }

    #[test]
    fn test_parse_rejects_non_numeric_port() {
        assert!(matches!(
            BaseUrl::parse("http://localhost:web"),
            Err(TargetError::PortNotNumeric)
        ));
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        let err = BaseUrl::parse("ftp://localhost:21").unwrap_err();
        assert!(matches!(
            &err,
            TargetError::UnsupportedScheme { scheme } if scheme == "ftp"
        ));
        assert_eq!(err.to_string(), "Only HTTP/S protocols are supported.");
    }

    #[test]
    fn test_parse_accepts_http_prefixed_scheme() {
        let base = BaseUrl::parse("httpx://graylog:12900/").unwrap();
        assert_eq!(base.as_str(), "httpx://graylog:12900");
    }

    #[test]
    fn test_parse_rejects_out_of_range_port() {
        // Digits, but rejected by Url before the port check runs
        assert!(matches!(
            BaseUrl::parse("http://localhost:70000"),
            Err(TargetError::PortNotNumeric)
        ));
    }

    #[test]
    fn test_explicit_port_ignores_userinfo_and_path() {
        assert_eq!(explicit_port("http://u:p@host:8080/a:b"), Some("8080"));
        assert_eq!(explicit_port("http://u:p@host/a:b"), None);
        assert_eq!(explicit_port("http://[fe80::1]/"), None);
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("admin", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
