//! URL 规范化
//!
//! 缺少 `scheme://` 时补全默认协议，再按绝对 URL 解析

use std::borrow::Cow;

use url::Url;

use super::error::CardError;

/// 默认补全的协议
pub const DEFAULT_SCHEME: &str = "https";

/// 判断输入是否以 `scheme://` 开头
///
/// scheme 为字母开头，后接字母、数字、`+`、`-`、`.`
pub fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// 规范化 URL
///
/// 1. 去除首尾空白，空输入返回 `EmptyInput`
/// 2. 缺少 `scheme://` 时补全 `default_scheme://`
/// 3. 解析失败返回 `InvalidUrl`；已有的协议原样保留
pub fn normalize_url_with_scheme(raw: &str, default_scheme: &str) -> Result<Url, CardError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CardError::EmptyInput);
    }

    let candidate = if has_scheme(trimmed) {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("{}://{}", default_scheme, trimmed))
    };

    Url::parse(&candidate).map_err(|e| CardError::InvalidUrl(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_url(raw: &str) -> Result<Url, CardError> {
        normalize_url_with_scheme(raw, DEFAULT_SCHEME)
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://example.com"));
        assert!(has_scheme("git+ssh://host/repo"));
        assert!(has_scheme("HTTP://example.com"));
        assert!(!has_scheme("example.com"));
        assert!(!has_scheme("localhost:8080"));
        assert!(!has_scheme("://example.com"));
        assert!(!has_scheme("1http://example.com"));
        assert!(!has_scheme("example.com/redirect?to=https://other.com"));
    }

    #[test]
    fn test_bare_domain_defaults_to_https() {
        let url = normalize_url("example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_existing_scheme_is_preserved() {
        let url = normalize_url("http://example.com/path").unwrap();
        assert_eq!(url.as_str(), "http://example.com/path");
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_input_is_trimmed() {
        let url = normalize_url("   example.com/a?b=1  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a?b=1");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(normalize_url(""), Err(CardError::EmptyInput));
        assert_eq!(normalize_url(" \t\n "), Err(CardError::EmptyInput));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            normalize_url("http://"),
            Err(CardError::InvalidUrl(_))
        ));
        assert!(matches!(
            normalize_url("exa mple.com"),
            Err(CardError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_any_parsed_scheme_is_kept() {
        let url = normalize_url("file:///home/me/notes.html").unwrap();
        assert_eq!(url.as_str(), "file:///home/me/notes.html");

        let url = normalize_url("ftp://example.com/x").unwrap();
        assert_eq!(url.scheme(), "ftp");

        let url = normalize_url("data://text/plain,hi").unwrap();
        assert_eq!(url.scheme(), "data");
    }

    #[test]
    fn test_custom_default_scheme() {
        let url = normalize_url_with_scheme("example.com", "http").unwrap();
        assert_eq!(url.as_str(), "http://example.com/");
    }
}
