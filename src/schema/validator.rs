//! A small JSON Schema subset: top-level `type`, `required`, and per-property `type`.
//! Validation collects every failure instead of stopping at the first.

use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

impl JsonType {
    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Integer => "integer",
            JsonType::Number => "number",
            JsonType::Boolean => "boolean",
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::Null => "null",
        }
    }

    pub fn matches(self, v: &Value) -> bool {
        match self {
            JsonType::String => v.is_string(),
            JsonType::Integer => match v {
                Value::Number(n) => {
                    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
                }
                _ => false,
            },
            JsonType::Number => v.is_number(),
            JsonType::Boolean => v.is_boolean(),
            JsonType::Object => v.is_object(),
            JsonType::Array => v.is_array(),
            JsonType::Null => v.is_null(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub type_: JsonType,
}

#[derive(Deserialize)]
struct RawSchema {
    #[serde(rename = "type", default)]
    type_: Option<JsonType>,
    #[serde(default)]
    required: Vec<String>,
    #[serde(default)]
    properties: serde_json::Map<String, Value>,
}

/// Parsed schema. Properties keep the order they are declared in.
#[derive(Clone, Debug)]
pub struct JsonSchema {
    pub type_: Option<JsonType>,
    pub required: Vec<String>,
    pub properties: Vec<(String, PropertySchema)>,
}

impl JsonSchema {
    pub fn parse(source: &str) -> Result<Self, serde_json::Error> {
        let raw: RawSchema = serde_json::from_str(source)?;
        let mut properties = Vec::with_capacity(raw.properties.len());
        for (name, prop) in raw.properties {
            properties.push((name, serde_json::from_value(prop)?));
        }
        Ok(JsonSchema {
            type_: raw.type_,
            required: raw.required,
            properties,
        })
    }

    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    /// Returns one message per failure: required properties first, then property types.
    pub fn validate(&self, instance: &Value) -> Vec<String> {
        let mut errors = Vec::new();
        if let Some(t) = self.type_ {
            if !t.matches(instance) {
                errors.push(format!("instance is not of a type(s) {}", t.as_str()));
                return errors;
            }
        }
        let Some(obj) = instance.as_object() else {
            return errors;
        };
        for name in &self.required {
            if !obj.contains_key(name) {
                errors.push(format!("instance requires property \"{}\"", name));
            }
        }
        for (name, prop) in &self.properties {
            if let Some(v) = obj.get(name) {
                if !prop.type_.matches(v) {
                    errors.push(format!(
                        "instance.{} is not of a type(s) {}",
                        name,
                        prop.type_.as_str()
                    ));
                }
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> JsonSchema {
        JsonSchema::parse(
            r#"{
                "type": "object",
                "required": ["isbn", "author", "title"],
                "properties": {
                    "isbn": { "type": "string" },
                    "author": { "type": "string" },
                    "pages": { "type": "integer" },
                    "title": { "type": "string" }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn valid_payload_has_no_errors() {
        let errors = schema().validate(&json!({
            "isbn": "1111", "author": "A", "title": "T", "pages": 12, "extra": true
        }));
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn every_missing_property_is_reported() {
        let errors = schema().validate(&json!({ "pages": 200 }));
        assert_eq!(
            errors,
            vec![
                "instance requires property \"isbn\"",
                "instance requires property \"author\"",
                "instance requires property \"title\"",
            ]
        );
    }

    #[test]
    fn every_type_mismatch_is_reported() {
        let errors = schema().validate(&json!({
            "isbn": "2222", "author": 2222, "title": "T", "pages": "200"
        }));
        assert_eq!(
            errors,
            vec![
                "instance.author is not of a type(s) string",
                "instance.pages is not of a type(s) integer",
            ]
        );
    }

    #[test]
    fn missing_and_mistyped_accumulate() {
        let errors = schema().validate(&json!({ "author": 1 }));
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&"instance.author is not of a type(s) string".to_string()));
    }

    #[test]
    fn non_object_instance_is_rejected_once() {
        assert_eq!(
            schema().validate(&json!([1, 2])),
            vec!["instance is not of a type(s) object"]
        );
    }

    #[test]
    fn integer_accepts_whole_floats_only() {
        assert!(JsonType::Integer.matches(&json!(100)));
        assert!(JsonType::Integer.matches(&json!(100.0)));
        assert!(!JsonType::Integer.matches(&json!(100.5)));
        assert!(!JsonType::Integer.matches(&json!("100")));
    }

    #[test]
    fn null_is_not_a_string() {
        let errors = schema().validate(&json!({
            "isbn": "1", "author": null, "title": "T"
        }));
        assert_eq!(errors, vec!["instance.author is not of a type(s) string"]);
    }

    #[test]
    fn property_lookup_keeps_declaration_order() {
        let s = schema();
        let names: Vec<&str> = s.properties.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["isbn", "author", "pages", "title"]);
        assert_eq!(s.property("pages").map(|p| p.type_), Some(JsonType::Integer));
        assert!(s.property("year").is_none());
    }
}
