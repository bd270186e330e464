//! JSON import/export of the flat map.
//!
//! Requires the `json` cargo feature. Only flat string-to-string objects are
//! supported; the layout model is not represented, so an imported store
//! renders in canonical `key = value` form.

use crate::error::{ParseResult, PropertiesError};
use crate::store::Properties;
use serde_json::{Map, Value};

impl Properties {
    /// Encode the flat map as a JSON object. Keys are emitted sorted, so the
    /// output is deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "json")] {
    /// use propfile::Properties;
    ///
    /// let mut props = Properties::new();
    /// props.parse("b = 2\na = 1\n");
    /// assert_eq!(props.to_json(), r#"{"a":"1","b":"2"}"#);
    /// # }
    /// ```
    pub fn to_json(&self) -> String {
        let mut object = Map::new();
        for (key, value) in self.iter() {
            object.insert(key.to_string(), Value::String(value.to_string()));
        }
        Value::Object(object).to_string()
    }

    /// Decode a flat JSON object into a new store.
    ///
    /// String values are taken as-is; numbers and booleans are stringified.
    /// Arrays, nested objects, and nulls are rejected, as is any top-level
    /// value that is not an object.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "json")] {
    /// use propfile::Properties;
    ///
    /// let props = Properties::from_json(r#"{"port": 8080, "host": "example.com"}"#).unwrap();
    /// assert_eq!(props.get("port"), Some("8080"));
    /// assert_eq!(props.get("host"), Some("example.com"));
    /// # }
    /// ```
    pub fn from_json(input: &str) -> ParseResult<Properties> {
        let parsed: Value =
            serde_json::from_str(input).map_err(|e| PropertiesError::json(e.to_string()))?;

        let Value::Object(object) = parsed else {
            return Err(PropertiesError::json("top-level value must be an object"));
        };

        let mut properties = Properties::new();
        for (key, value) in object {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(PropertiesError::json(format!(
                        "unsupported value for '{}': {}",
                        key, other
                    )));
                }
            };
            properties.set(key, text);
        }

        Ok(properties)
    }
}
