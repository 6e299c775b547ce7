//! Dining table model.

use super::{non_empty, Flag};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DiningTable {
    #[serde(rename = "table_ID")]
    pub table_id: String,
    pub table_seat: i32,
    pub is_available: i16,
    #[serde(rename = "staff_ID")]
    pub staff_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    #[serde(rename = "table_ID")]
    pub table_id: String,
    pub table_seat: i32,
    #[serde(default)]
    pub is_available: Flag,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableUpdate {
    pub table_seat: i32,
    #[serde(default)]
    pub is_available: Flag,
    #[serde(rename = "staff_ID", default)]
    staff_id: Option<String>,
}

impl TableUpdate {
    pub fn staff_id(&self) -> Option<&str> {
        self.staff_id.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilitySwitch {
    #[serde(rename = "staff_ID", default)]
    staff_id: Option<String>,
    #[serde(default)]
    pub is_available: Flag,
}

impl AvailabilitySwitch {
    /// The attributing staff member; a switch without one is rejected before touching the store.
    pub fn staff_id(&self) -> Result<String, AppError> {
        non_empty(self.staff_id.clone())
            .ok_or_else(|| AppError::BadRequest("There is no staff ID to make change".into()))
    }
}

/// Path filter of `GET /get-tables/:status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Available,
    Unavailable,
}

impl TableStatus {
    pub fn flag(self) -> Flag {
        match self {
            TableStatus::Available => Flag::ON,
            TableStatus::Unavailable => Flag::OFF,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TableStatus::Available => "available",
            TableStatus::Unavailable => "unavailable",
        }
    }
}

impl FromStr for TableStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(TableStatus::Available),
            "unavailable" => Ok(TableStatus::Unavailable),
            _ => Err(AppError::BadRequest("Invalid status input".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_parsing() {
        assert_eq!("available".parse::<TableStatus>().unwrap(), TableStatus::Available);
        assert_eq!("unavailable".parse::<TableStatus>().unwrap().flag(), Flag::OFF);
        assert!(matches!("bogus".parse::<TableStatus>(), Err(AppError::BadRequest(_))));
        assert!("Available".parse::<TableStatus>().is_err());
    }

    #[test]
    fn table_uses_wire_names() {
        let t = DiningTable {
            table_id: "T1".into(),
            table_seat: 4,
            is_available: 1,
            staff_id: None,
        };
        assert_eq!(
            serde_json::to_value(&t).unwrap(),
            json!({ "table_ID": "T1", "table_seat": 4, "is_available": 1, "staff_ID": null })
        );
    }

    #[test]
    fn switch_requires_staff() {
        let body: AvailabilitySwitch = serde_json::from_value(json!({ "is_available": true })).unwrap();
        assert!(body.staff_id().is_err());
        let body: AvailabilitySwitch =
            serde_json::from_value(json!({ "staff_ID": "  ", "is_available": true })).unwrap();
        assert!(body.staff_id().is_err());
        let body: AvailabilitySwitch =
            serde_json::from_value(json!({ "staff_ID": "S1", "is_available": "1" })).unwrap();
        assert_eq!(body.staff_id().unwrap(), "S1");
        assert!(body.is_available.is_on());
    }

    #[test]
    fn update_blank_staff_is_none() {
        let body: TableUpdate =
            serde_json::from_value(json!({ "table_seat": 6, "is_available": false, "staff_ID": "" })).unwrap();
        assert_eq!(body.staff_id(), None);
    }
}
