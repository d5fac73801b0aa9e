use std::num::IntErrorKind;

use crate::types::{DEFAULT_PAGE, PageRequest};

/// Raw `page` / `per_page` query parameters.
///
/// Built from the query pairs rather than a typed extractor so that junk or
/// repeated keys fall back to defaults instead of rejecting the request. The
/// first occurrence of a key wins.
#[derive(Debug, Default)]
pub struct PageParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// Positive integers parse; values too large for a page number saturate.
fn parse_positive(raw: Option<&str>) -> Option<u32> {
    match raw?.trim().parse::<u32>() {
        Ok(0) => None,
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
        Err(_) => None,
    }
}

impl PageParams {
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" if params.page.is_none() => params.page = Some(value),
                "per_page" if params.per_page.is_none() => params.per_page = Some(value),
                _ => {}
            }
        }
        params
    }

    #[must_use]
    pub fn to_request(&self, default_per_page: u32) -> PageRequest {
        PageRequest::new(
            parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            parse_positive(self.per_page.as_deref()).unwrap_or(default_per_page),
        )
    }
}

/// Builds a link back to `path` for another page, keeping the page size.
#[must_use]
pub fn page_link(path: &str, page: u32, per_page: u32) -> String {
    format!("{path}?page={page}&per_page={per_page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, per_page: Option<&str>) -> PageParams {
        PageParams {
            page: page.map(str::to_string),
            per_page: per_page.map(str::to_string),
        }
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_missing() {
        assert_eq!(params(None, None).to_request(10), PageRequest::new(1, 10));
    }

    #[test]
    fn test_junk_falls_back() {
        assert_eq!(
            params(Some("abc"), Some("-5")).to_request(10),
            PageRequest::new(1, 10)
        );
        assert_eq!(
            params(Some("0"), Some("2.5")).to_request(25),
            PageRequest::new(1, 25)
        );
    }

    #[test]
    fn test_valid_values() {
        assert_eq!(
            params(Some("3"), Some(" 7 ")).to_request(10),
            PageRequest::new(3, 7)
        );
    }

    #[test]
    fn test_oversized_page_saturates() {
        assert_eq!(
            params(Some("99999999999"), Some("2")).to_request(10),
            PageRequest::new(u32::MAX, 2)
        );
        assert_eq!(
            params(Some("-99999999999"), None).to_request(10),
            PageRequest::new(1, 10)
        );
    }

    #[test]
    fn test_first_repeated_key_wins() {
        let params = PageParams::from_pairs(pairs(&[
            ("page", "2"),
            ("sort", "name"),
            ("page", "5"),
            ("per_page", "3"),
        ]));
        assert_eq!(params.to_request(10), PageRequest::new(2, 3));
    }

    #[test]
    fn test_page_link() {
        assert_eq!(
            page_link("/api/pokemons", 2, 5),
            "/api/pokemons?page=2&per_page=5"
        );
    }
}
