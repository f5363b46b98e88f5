use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ImageUrlRequest {
    #[serde(default)]
    pub input: String,
}
