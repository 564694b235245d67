//! Kubernetes Secret manifest.
//!
//! Wraps parsed env data in an `Opaque` Secret and renders it as YAML.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::types::SecretData;
use crate::error::Result;

/// A `v1/Secret` resource.
///
/// Field order matches the rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Secret {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    #[serde(rename = "type")]
    pub secret_type: String,
    /// Key to base64-encoded value.
    pub data: SecretData,
}

/// Object metadata of the Secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl Secret {
    /// Create a Secret holding `data`.
    ///
    /// An empty namespace is treated the same as no namespace.
    pub fn new(data: SecretData, name: &str, namespace: Option<&str>) -> Self {
        Self {
            api_version: constants::API_VERSION.to_string(),
            kind: constants::KIND.to_string(),
            metadata: Metadata {
                name: name.to_string(),
                namespace: namespace
                    .filter(|ns| !ns.is_empty())
                    .map(str::to_string),
            },
            secret_type: constants::SECRET_TYPE.to_string(),
            data,
        }
    }

    /// Serialize to a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Build`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Build the YAML manifest for a Secret.
///
/// # Errors
///
/// Returns [`crate::error::Error::Build`] if serialization fails.
pub fn build(data: SecretData, name: &str, namespace: Option<&str>) -> Result<String> {
    let secret = Secret::new(data, name, namespace);
    debug!(
        name = %secret.metadata.name,
        namespace = secret.metadata.namespace.as_deref().unwrap_or("-"),
        keys = secret.data.len(),
        "building secret manifest"
    );
    secret.to_yaml()
}
