use thiserror::Error;

/// Bulk load failures. The dashboard treats any of them as an empty store.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("sending request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("store responded with HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("decoding rows: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
impl FetchError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { code, .. } => Some(*code),
            FetchError::Request(err) => err.status().map(|s| s.as_u16()),
            FetchError::Decode(_) => None,
        }
    }
}
