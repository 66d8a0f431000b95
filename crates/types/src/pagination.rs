// crates/types/src/pagination.rs
//! DRF pagination envelopes.
//!
//! Some list endpoints are paginated, some return bare arrays, and at least
//! one (subcategories) has shipped both shapes. [`ListResponse`] absorbs
//! either so call sites never sniff the JSON themselves.

use serde::{Deserialize, Serialize};

/// Standard DRF page envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A list body that is either a bare array or a [`Paginated`] envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Plain(Vec<T>),
    Paginated(Paginated<T>),
}

impl<T> ListResponse<T> {
    pub fn into_results(self) -> Vec<T> {
        match self {
            Self::Plain(items) => items,
            Self::Paginated(page) => page.results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_response_accepts_bare_array() {
        let parsed: ListResponse<u32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(parsed.into_results(), vec![1, 2, 3]);
    }

    #[test]
    fn list_response_accepts_page_envelope() {
        let json = r#"{"count": 2, "next": null, "previous": null, "results": [4, 5]}"#;
        let parsed: ListResponse<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.into_results(), vec![4, 5]);
    }
}
