use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClusterData {
    pub id: String,
    pub created_at: String,
    pub organization_id: i64,
    pub organization_uuid: String,
    pub env_name: String,
    pub region: String,
    pub choreo_env: String,
    pub cluster_id: String,
    pub docker_credential_uuid: String,
    pub external_apim_env_name: String,
    pub internal_apim_env_name: String,
    pub sandbox_apim_env_name: String,
    pub critical: bool,
    pub pdp_web_app_dns_prefix: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CloudManagerResponseData {
    pub data: ClusterData,
}
