use serde::{Deserialize, Serialize};

// Pagination block of the response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

// Sort direction accepted by list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

// Query parameters for list endpoints; unset fields are omitted from the
// request so the backend applies its own defaults (page=1, limit=10)
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub order: Option<SortOrder>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Set parameters as query pairs.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(order) = self.order {
            query.push(("order", order.to_string()));
        }
        query
    }
}

// A page of results together with the backend pagination block
#[derive(Debug, Clone)]
pub struct PaginatedList<T> {
    pub items: Vec<T>,
    pub pagination: Option<PaginationMeta>,
}

impl<T> PaginatedList<T> {
    /// Total across all pages when the backend reported it, otherwise the
    /// size of this page.
    pub fn total(&self) -> i64 {
        self.pagination
            .as_ref()
            .map(|p| p.total)
            .unwrap_or(self.items.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_skips_unset() {
        let params = ListParams::new().page(2).search("maria");
        let query = params.to_query();
        assert_eq!(
            query,
            vec![("page", "2".to_string()), ("search", "maria".to_string())]
        );
    }

    #[test]
    fn test_total_falls_back_to_page_size() {
        let page = PaginatedList {
            items: vec![1, 2, 3],
            pagination: None,
        };
        assert_eq!(page.total(), 3);
    }
}
