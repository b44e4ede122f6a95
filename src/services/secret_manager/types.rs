use serde::{Deserialize, Serialize};

use crate::config::{CLUSTER_ID, SECRET_NAMES};

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SecretItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SecretItem {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: None,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SecretGroup {
    #[serde(rename = "ClusterId")]
    pub cluster_id: String,
    #[serde(rename = "SystemSecret")]
    pub system_secret: bool,
    #[serde(rename = "Secrets")]
    pub secrets: Vec<SecretItem>,
}

impl Default for SecretGroup {
    /// The fixed lookup this tool performs: two named secrets of one cluster.
    fn default() -> Self {
        Self {
            cluster_id: CLUSTER_ID.to_string(),
            system_secret: false,
            secrets: SECRET_NAMES.iter().map(|name| SecretItem::named(name)).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct SecretReference {
    pub name: String,
    pub value: String,
    pub version: String,
    pub id: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct SecretManagerResponseData {
    pub data: Vec<SecretReference>,
    pub secret_store_provider: String,
    pub secret_store_name: String,
}
