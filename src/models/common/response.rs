use serde::{Deserialize, Serialize};

use super::pagination::PaginationMeta;

// Unified API response envelope used by the SIGEA backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
    // Older backend revisions reported pagination under `meta`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PaginationMeta>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            pagination: None,
            meta: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            pagination: None,
            meta: None,
        }
    }

    /// Pagination block, wherever the backend put it.
    pub fn pagination(&self) -> Option<&PaginationMeta> {
        self.pagination.as_ref().or(self.meta.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success_roundtrip() {
        let resp = ApiResponse::success(vec![1, 2, 3], "ok");
        let json = serde_json::to_string(&resp).unwrap();
        let back: ApiResponse<Vec<i32>> = serde_json::from_str(&json).unwrap();
        assert!(back.success);
        assert_eq!(back.data.unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_error_without_data() {
        let json = r#"{"success":false,"message":"Escola nao encontrada"}"#;
        let resp: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.message.as_deref(), Some("Escola nao encontrada"));
    }

    #[test]
    fn test_pagination_meta_fallback() {
        let json = r#"{"success":true,"data":[],"meta":{"total":42,"page":1,"limit":10,"totalPages":5}}"#;
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.pagination().unwrap().total, 42);
    }
}
