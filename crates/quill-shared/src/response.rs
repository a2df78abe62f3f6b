//! Standardized API response envelopes.

use serde::{Deserialize, Serialize};

/// Successful response carrying a payload under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub status: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

/// Successful response carrying a message instead of a payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

/// Paginated listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub status: String,
    pub total: u64,
    #[serde(rename = "currentPage")]
    pub current_page: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
    pub data: Vec<T>,
}

impl<T> PagedResponse<T> {
    pub fn success(data: Vec<T>, total: u64, current_page: u64, total_pages: u64) -> Self {
        Self {
            status: "success".to_string(),
            total,
            current_page,
            total_pages,
            data,
        }
    }
}

/// JSON error body; the only shape error responses ever take.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_response_uses_camel_case_page_fields() {
        let resp: PagedResponse<u32> = PagedResponse::success(vec![1, 2], 12, 1, 2);
        let value = serde_json::to_value(resp).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["currentPage"], 1);
        assert_eq!(value["totalPages"], 2);
    }
}
