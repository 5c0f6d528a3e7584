use linkdeck::deck::{CardError, DEFAULT_SCHEME, EXPECTED_URL_FORMAT, normalize_url_with_scheme};
use url::Url;

fn normalize_url(raw: &str) -> std::result::Result<Url, CardError> {
    normalize_url_with_scheme(raw, DEFAULT_SCHEME)
}
use linkdeck::errors::{LinkdeckError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_browser_error() {
        let error = LinkdeckError::browser("no browser found");

        assert!(matches!(error, LinkdeckError::Browser(_)));
        assert_eq!(error.code(), "E005");
        assert!(error.to_string().contains("Browser Launch Error"));
        assert!(error.to_string().contains("no browser found"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            LinkdeckError::config("x"),
            LinkdeckError::file_operation("x"),
            LinkdeckError::serialization("x"),
            LinkdeckError::validation("x"),
            LinkdeckError::browser("x"),
            LinkdeckError::clipboard("x"),
            LinkdeckError::terminal("x"),
            LinkdeckError::logging("x"),
        ];
        let mut codes: Vec<&str> = errors.iter().map(LinkdeckError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_colored_format_keeps_message() {
        let error = LinkdeckError::terminal("raw mode unavailable");
        let text = error.format_colored();
        assert!(text.contains("E007"));
        assert!(text.contains("raw mode unavailable"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: LinkdeckError = io_error.into();

        assert!(matches!(error, LinkdeckError::FileOperation(_)));
        assert!(error.message().contains("missing"));
    }

    #[test]
    fn test_card_error_conversion() {
        let card_error = normalize_url("http://").unwrap_err();
        let error: LinkdeckError = card_error.into();
        assert!(matches!(error, LinkdeckError::Validation(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn add_one(raw: &str) -> Result<String> {
            let url = normalize_url(raw)?;
            Ok(url.to_string())
        }

        assert_eq!(add_one("a.com").unwrap(), "https://a.com/");
        assert!(add_one("   ").is_err());
    }

    #[test]
    fn test_std_error_trait() {
        let error = LinkdeckError::config("bad");
        let dyn_error: &dyn Error = &error;
        assert!(dyn_error.source().is_none());
    }
}

#[cfg(test)]
mod card_error_tests {
    use super::*;

    #[test]
    fn test_user_visibility() {
        assert!(!CardError::EmptyInput.is_user_visible());
        let invalid = normalize_url("http://").unwrap_err();
        assert!(invalid.is_user_visible());
        assert!(invalid.user_message().contains(EXPECTED_URL_FORMAT));
    }
}
