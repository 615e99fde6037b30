//! Wire and output types for the nearby enrichment lookup
//!
//! The remote response is an id-keyed mapping with no inherent order, so
//! the caller-visible ordering (by title) is produced here as part of
//! decoding, not left to the display layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel summary used when the remote source has no structured
/// description for a page
pub const NO_FURTHER_INFORMATION: &str = "No further information";

/// A remote-sourced descriptive summary for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentRecord {
    /// Integer key, unique within a single lookup response
    pub page_id: u64,

    /// Page title
    pub title: String,

    /// Short description; the fixed sentinel when the source has none
    pub summary: String,
}

/// Top-level response wrapper: `{ "query": { ... } }`
#[derive(Debug, Deserialize)]
pub(crate) struct LookupResponse {
    pub query: QueryBody,
}

/// `{ "pages": { "<id>": { ... } } }` — keys are string-formatted page
/// ids with no meaningful order; the typed `pageid` field inside each
/// record is authoritative
#[derive(Debug, Deserialize)]
pub(crate) struct QueryBody {
    pub pages: HashMap<String, PageRecord>,
}

/// One page record; `terms.description` may be absent or empty
#[derive(Debug, Deserialize)]
pub(crate) struct PageRecord {
    pub pageid: u64,
    pub title: String,
    #[serde(default)]
    pub terms: Option<HashMap<String, Vec<String>>>,
}

impl PageRecord {
    /// First `terms.description` entry, or the fixed sentinel
    fn summary(&self) -> String {
        self.terms
            .as_ref()
            .and_then(|terms| terms.get("description"))
            .and_then(|values| values.first())
            .cloned()
            .unwrap_or_else(|| NO_FURTHER_INFORMATION.to_string())
    }
}

/// Flatten a decoded response into records sorted by title ascending
/// (ties broken by page id, since the source mapping is unordered)
pub(crate) fn sorted_records(response: LookupResponse) -> Vec<EnrichmentRecord> {
    let mut records: Vec<EnrichmentRecord> = response
        .query
        .pages
        .into_values()
        .map(|page| {
            let summary = page.summary();
            EnrichmentRecord {
                page_id: page.pageid,
                title: page.title,
                summary,
            }
        })
        .collect();

    records.sort_by(|a, b| a.title.cmp(&b.title).then(a.page_id.cmp(&b.page_id)));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> LookupResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_records_sorted_by_title() {
        let response = decode(
            r#"{
                "query": {
                    "pages": {
                        "3": { "pageid": 3, "title": "Banana" },
                        "1": { "pageid": 1, "title": "Apple" },
                        "2": { "pageid": 2, "title": "Cherry" }
                    }
                }
            }"#,
        );

        let records = sorted_records(response);
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_title_ties_break_by_page_id() {
        let response = decode(
            r#"{
                "query": {
                    "pages": {
                        "9": { "pageid": 9, "title": "Same" },
                        "4": { "pageid": 4, "title": "Same" }
                    }
                }
            }"#,
        );

        let records = sorted_records(response);
        assert_eq!(records[0].page_id, 4);
        assert_eq!(records[1].page_id, 9);
    }

    #[test]
    fn test_summary_from_description_terms() {
        let response = decode(
            r#"{
                "query": {
                    "pages": {
                        "7": {
                            "pageid": 7,
                            "title": "Ikebukuro",
                            "terms": {
                                "description": ["commercial district in Tokyo", "secondary"]
                            }
                        }
                    }
                }
            }"#,
        );

        let records = sorted_records(response);
        assert_eq!(records[0].summary, "commercial district in Tokyo");
    }

    #[test]
    fn test_missing_terms_falls_back() {
        let response = decode(
            r#"{
                "query": {
                    "pages": {
                        "7": { "pageid": 7, "title": "Obscure" }
                    }
                }
            }"#,
        );

        let records = sorted_records(response);
        assert_eq!(records[0].summary, NO_FURTHER_INFORMATION);
    }

    #[test]
    fn test_empty_description_list_falls_back() {
        let response = decode(
            r#"{
                "query": {
                    "pages": {
                        "7": {
                            "pageid": 7,
                            "title": "Obscure",
                            "terms": { "description": [] }
                        }
                    }
                }
            }"#,
        );

        let records = sorted_records(response);
        assert_eq!(records[0].summary, NO_FURTHER_INFORMATION);
    }

    #[test]
    fn test_terms_without_description_key_falls_back() {
        let response = decode(
            r#"{
                "query": {
                    "pages": {
                        "7": {
                            "pageid": 7,
                            "title": "Obscure",
                            "terms": { "alias": ["other name"] }
                        }
                    }
                }
            }"#,
        );

        let records = sorted_records(response);
        assert_eq!(records[0].summary, NO_FURTHER_INFORMATION);
    }

    #[test]
    fn test_empty_pages_decodes_to_no_records() {
        let response = decode(r#"{ "query": { "pages": {} } }"#);
        assert!(sorted_records(response).is_empty());
    }

    #[test]
    fn test_missing_query_fails_decode() {
        let result = serde_json::from_str::<LookupResponse>(r#"{ "batchcomplete": "" }"#);
        assert!(result.is_err());
    }
}
