//! Response envelopes and list query parameters shared by every endpoint

use serde::Deserialize;

/// `{ data, message }` wrapper around every backend response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: String,
}

/// Envelope of a mutation where only the message matters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

/// `{ data, total }` page nested inside list envelopes
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

/// Pagination and filter parameters of a list request
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub name: String,
    /// Extra filters, sent only when non-empty
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            name: String::new(),
            filters: Vec::new(),
        }
    }

    /// Set or replace a filter; an empty value removes it
    pub fn set_filter(&mut self, key: &str, value: &str) {
        self.filters.retain(|(k, _)| k != key);
        if !value.is_empty() {
            self.filters.push((key.to_string(), value.to_string()));
        }
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Query-string pairs with empty values dropped
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if !self.name.trim().is_empty() {
            params.push(("name".to_string(), self.name.trim().to_string()));
        }
        params.extend(
            self.filters
                .iter()
                .filter(|(_, v)| !v.is_empty())
                .cloned(),
        );
        params
    }

    /// Number of pages for a given total, never less than one
    pub fn page_count(&self, total: u64) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        let pages = total.div_ceil(u64::from(self.limit));
        u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_shape() {
        let json = r#"{"data": {"data": [1, 2, 3], "total": 42}, "message": "ok"}"#;
        let envelope: Envelope<Page<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.data, vec![1, 2, 3]);
        assert_eq!(envelope.data.total, 42);
        assert_eq!(envelope.message, "ok");
    }

    #[test]
    fn test_params_drop_empty_values() {
        let mut query = ListQuery::new(10);
        query.set_filter("isRequestChangeToPremium", "");
        assert_eq!(
            query.to_params(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );

        query.name = " kanji ".to_string();
        query.set_filter("courseId", "c1");
        let params = query.to_params();
        assert!(params.contains(&("name".to_string(), "kanji".to_string())));
        assert!(params.contains(&("courseId".to_string(), "c1".to_string())));
    }

    #[test]
    fn test_set_filter_replaces_and_removes() {
        let mut query = ListQuery::new(10);
        query.set_filter("status", "a");
        query.set_filter("status", "b");
        assert_eq!(query.filter("status"), Some("b"));
        assert_eq!(query.filters.len(), 1);

        query.set_filter("status", "");
        assert_eq!(query.filter("status"), None);
    }

    #[test]
    fn test_page_count() {
        let query = ListQuery::new(10);
        assert_eq!(query.page_count(0), 1);
        assert_eq!(query.page_count(10), 1);
        assert_eq!(query.page_count(11), 2);
    }

    #[test]
    fn test_page_count_saturates_on_huge_total() {
        let query = ListQuery::new(1);
        assert_eq!(query.page_count(u64::MAX), u32::MAX);
        assert_eq!(query.page_count(u64::from(u32::MAX) + 1), u32::MAX);
    }
}
