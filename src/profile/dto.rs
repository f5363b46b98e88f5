use serde::{Deserialize, Serialize};

/// PUT body. The image reference is optional; the counter bumps either way.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_allows_missing_image() {
        let req: UpdateProfileRequest = serde_json::from_str("{}").unwrap();
        assert!(req.image.is_none());
    }

    #[test]
    fn update_request_accepts_an_image_url() {
        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"image":"https://example.com/cat.jpg"}"#).unwrap();
        assert_eq!(req.image.as_deref(), Some("https://example.com/cat.jpg"));
    }
}
