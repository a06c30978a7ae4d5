//! Entity state payloads
//!
//! Backends report state either as a bare scalar or as an object of named
//! fields. The variant order matters for untagged deserialization: booleans
//! must win before numbers, and any scalar before the field map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::STATE_UNKNOWN;

/// Last reported state of an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Multi-field payload, e.g. `{"temperature": 21.5, "humidity": 40}`.
    /// Field order is preserved as reported.
    Fields(IndexMap<String, Value>),
}

impl Default for StateValue {
    fn default() -> Self {
        StateValue::Text(STATE_UNKNOWN.to_string())
    }
}

impl StateValue {
    /// Numeric reading, if the state is a bare number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StateValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text reading, if the state is a bare string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StateValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a named field in a multi-field payload
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            StateValue::Fields(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Numeric value of a named field
    pub fn field_f64(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(Value::as_f64)
    }

    /// Text value of a named field
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// Whether the state reads as "on" for toggle purposes
    ///
    /// True booleans, nonzero numbers, and the usual active words all count.
    /// Field payloads are probed at `value` then `state`.
    pub fn is_active(&self) -> bool {
        match self {
            StateValue::Bool(b) => *b,
            StateValue::Number(n) => *n != 0.0,
            StateValue::Text(s) => text_is_active(s),
            StateValue::Fields(_) => {
                let probe = self.field("value").or_else(|| self.field("state"));
                match probe {
                    Some(Value::Bool(b)) => *b,
                    Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
                    Some(Value::String(s)) => text_is_active(s),
                    _ => false,
                }
            }
        }
    }

    /// Render a scalar for display, trimming a trailing `.0`
    ///
    /// Returns `None` for field payloads; callers pick a field first.
    pub fn scalar_display(&self) -> Option<String> {
        match self {
            StateValue::Bool(b) => Some(if *b { "ON" } else { "OFF" }.to_string()),
            StateValue::Number(n) => Some(format_number(*n)),
            StateValue::Text(s) => Some(s.clone()),
            StateValue::Fields(_) => None,
        }
    }
}

fn text_is_active(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "on" | "open" | "detected" | "true"
    )
}

/// Format a number without a trailing `.0`
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_variants() {
        let state: StateValue = serde_json::from_str("true").unwrap();
        assert_eq!(state, StateValue::Bool(true));

        let state: StateValue = serde_json::from_str("21.5").unwrap();
        assert_eq!(state, StateValue::Number(21.5));

        let state: StateValue = serde_json::from_str(r#""OFF""#).unwrap();
        assert_eq!(state, StateValue::Text("OFF".to_string()));

        let state: StateValue =
            serde_json::from_str(r#"{"temperature": 21.5, "humidity": 40}"#).unwrap();
        assert_eq!(state.field_f64("temperature"), Some(21.5));
        assert_eq!(state.field_f64("humidity"), Some(40.0));
    }

    #[test]
    fn test_fields_preserve_order() {
        let state: StateValue =
            serde_json::from_str(r#"{"humidity": 40, "temperature": 21.5}"#).unwrap();
        match &state {
            StateValue::Fields(fields) => {
                let keys: Vec<_> = fields.keys().collect();
                assert_eq!(keys, vec!["humidity", "temperature"]);
            }
            other => panic!("expected fields, got {:?}", other),
        }
    }

    #[test]
    fn test_is_active() {
        assert!(StateValue::Bool(true).is_active());
        assert!(!StateValue::Bool(false).is_active());
        assert!(StateValue::Number(1.0).is_active());
        assert!(!StateValue::Number(0.0).is_active());
        assert!(StateValue::Text("ON".to_string()).is_active());
        assert!(StateValue::Text("Detected".to_string()).is_active());
        assert!(!StateValue::Text("closed".to_string()).is_active());
        assert!(!StateValue::default().is_active());

        let state: StateValue = serde_json::from_str(r#"{"value": "on"}"#).unwrap();
        assert!(state.is_active());
        let state: StateValue = serde_json::from_str(r#"{"state": 0}"#).unwrap();
        assert!(!state.is_active());
    }

    #[test]
    fn test_scalar_display_trims_trailing_zero() {
        assert_eq!(StateValue::Number(21.0).scalar_display().unwrap(), "21");
        assert_eq!(StateValue::Number(21.5).scalar_display().unwrap(), "21.5");
        assert_eq!(StateValue::Bool(false).scalar_display().unwrap(), "OFF");
        assert!(StateValue::Fields(IndexMap::new()).scalar_display().is_none());
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(StateValue::default().as_str(), Some("unknown"));
    }
}
