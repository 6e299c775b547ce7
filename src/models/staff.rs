//! Staff model. Exposed under `/api/users`.

use super::Flag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Staff {
    #[serde(rename = "staff_ID")]
    pub staff_id: String,
    pub staff_name: String,
    pub join_date: DateTime<Utc>,
    pub roles: String,
    pub image_link: Option<String>,
    pub is_available: i16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffCreate {
    #[serde(rename = "staff_ID")]
    pub staff_id: String,
    pub staff_name: String,
    #[serde(default = "default_role")]
    pub roles: String,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default = "available")]
    pub is_available: Flag,
}

fn default_role() -> String {
    "staff".into()
}

fn available() -> Flag {
    Flag::ON
}
