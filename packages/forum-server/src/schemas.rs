//! Request bodies. Every field is optional at the serde level so that absent
//! and empty values both surface as the endpoint's own 400 error.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonceRequest {
    pub wallet_address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub wallet_address: Option<String>,
    pub signature: Option<String>,
}

/// Body of post and reply creation.
#[derive(Debug, Default, Deserialize)]
pub struct ContentRequest {
    pub content: Option<String>,
}

impl ContentRequest {
    /// Present and non-empty, else `MissingContent`.
    pub fn into_content(self) -> Result<String, crate::Error> {
        self.content
            .filter(|c| !c.is_empty())
            .ok_or(crate::Error::MissingContent)
    }
}
