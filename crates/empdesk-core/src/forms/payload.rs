use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use super::{FieldKind, FieldSpec, FormSchema};

/// Raw, untrimmed input values keyed by field name.
pub type RawInputs = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// `None` when the input was blank or not a finite number.
    Number(Option<f64>),
}

impl FieldValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Number(_) => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => *value,
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(value) => value.is_empty(),
            Self::Number(value) => value.is_none(),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Number(Some(value)) => serializer.serialize_f64(*value),
            Self::Number(None) => serializer.serialize_none(),
        }
    }
}

/// Field values gathered for one submission attempt, in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    entries: Vec<(&'static str, FieldValue)>,
}

impl FormPayload {
    pub fn collect(schema: &FormSchema, inputs: &RawInputs) -> Self {
        let entries = schema
            .fields
            .iter()
            .map(|spec| {
                let raw = inputs.get(spec.name).map(String::as_str).unwrap_or("");
                (spec.name, read_field(spec, raw))
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FormPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

pub(crate) fn read_field(spec: &FieldSpec, raw: &str) -> FieldValue {
    match spec.kind {
        FieldKind::Text => FieldValue::Text(raw.trim().to_string()),
        FieldKind::Password => FieldValue::Text(raw.to_string()),
        FieldKind::Number => FieldValue::Number(parse_number(raw)),
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
