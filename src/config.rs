pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CLOUD_MANAGER_URL: &str = "http://localhost:5009";
pub const SECRET_MANAGER_URL: &str = "http://localhost:5006";

pub const ORGANIZATION_ID: &str = "0";
pub const PROJECT_ID: &str = "global";

pub const ENV_TEMPLATES: [&str; 5] = [
    "49eae34b-fb17-479f-a657-0bba998a4e79",
    "433a2e50-5d4b-4efb-a994-680173bc1079",
    "0af31d8b-9f84-4e20-b42d-fb4a5927940d",
    "ad5a37e4-9c92-4952-9694-c3269fdd8cdc",
    "842e5f7b-eed1-423b-98c2-e074c008c949",
];

pub const CLUSTER_ID: &str = "7eca5163-6a37-ee11-b8f0-000d3adac5f0";
pub const SECRET_NAMES: [&str; 2] = [
    "01ee7ebe-c770-1ab8-ade5-584ac5adffb9",
    "01ee7ebe-c770-1ab8-b16a-4188708e8251",
];
