use thiserror::Error;

/// Everything that can go wrong while fetching the room list.
#[derive(Debug, Error)]
pub enum FetchError {
  #[error("http status {0}")]
  HttpStatus(u16),
  #[error("malformed rooms response: {0}")]
  Parse(#[from] serde_json::Error),
  #[error("request failed: {0}")]
  Network(#[from] reqwest::Error),
}

impl FetchError {
  pub fn kind(&self) -> &'static str {
    match self {
      FetchError::HttpStatus(_) => "http_status",
      FetchError::Parse(_) => "parse",
      FetchError::Network(_) => "network",
    }
  }
}
