//! Row types and request bodies for tables, products and staff.

pub mod product;
pub mod staff;
pub mod table;

pub use product::*;
pub use staff::*;
pub use table::*;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Availability flag as stored: always 0 or 1.
///
/// Request bodies and admin links send it in many shapes (`true`, `1`, `"1"`, `"on"`,
/// `"available"`); anything not recognised as "on" reads as 0, and so does a missing field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flag(i16);

impl Flag {
    pub const ON: Flag = Flag(1);
    pub const OFF: Flag = Flag(0);

    pub fn value(self) -> i16 {
        self.0
    }

    pub fn is_on(self) -> bool {
        self.0 == 1
    }

    pub fn parse(raw: &str) -> Flag {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "on" | "yes" | "available" => Flag::ON,
            _ => Flag::OFF,
        }
    }
}

impl From<bool> for Flag {
    fn from(b: bool) -> Self {
        if b {
            Flag::ON
        } else {
            Flag::OFF
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawFlag>::deserialize(deserializer)? {
            None => Flag::OFF,
            Some(RawFlag::Bool(b)) => Flag::from(b),
            Some(RawFlag::Int(n)) => Flag::from(n != 0),
            Some(RawFlag::Float(n)) => Flag::from(n != 0.0),
            Some(RawFlag::Str(s)) => Flag::parse(&s),
        })
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i16(self.0)
    }
}

/// Body of the `switch-status` endpoints for products and staff.
#[derive(Debug, Deserialize)]
pub struct StatusSwitch {
    #[serde(default)]
    pub is_available: Flag,
}

/// Empty or whitespace-only optional strings count as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flag(v: serde_json::Value) -> i16 {
        serde_json::from_value::<Flag>(v).unwrap().value()
    }

    #[test]
    fn flag_accepts_loose_inputs() {
        assert_eq!(flag(json!(true)), 1);
        assert_eq!(flag(json!(false)), 0);
        assert_eq!(flag(json!(1)), 1);
        assert_eq!(flag(json!(0)), 0);
        assert_eq!(flag(json!("1")), 1);
        assert_eq!(flag(json!("true")), 1);
        assert_eq!(flag(json!("available")), 1);
        assert_eq!(flag(json!("false")), 0);
        assert_eq!(flag(json!("")), 0);
        assert_eq!(flag(json!(null)), 0);
    }

    #[test]
    fn missing_flag_is_off() {
        let body: StatusSwitch = serde_json::from_value(json!({})).unwrap();
        assert_eq!(body.is_available, Flag::OFF);
    }

    #[test]
    fn flag_serializes_as_integer() {
        assert_eq!(serde_json::to_value(Flag::ON).unwrap(), json!(1));
    }
}
