//! Field-level validation errors.
//!
//! A failed validation reports every offending field, each addressed by a
//! location path such as `["body", "price"]` or `["query", "skip"]`.

use serde::Serialize;
use serde_json::Value;

/// One invalid (or missing) input field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
}

impl FieldError {
    pub fn new(
        loc: &[&str],
        kind: &'static str,
        msg: impl Into<String>,
        input: Option<Value>,
    ) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind,
            input,
        }
    }

    pub fn missing(loc: &[&str]) -> Self {
        Self::new(loc, "missing", "Field required", None)
    }

    pub fn string_type(loc: &[&str], input: &Value) -> Self {
        Self::new(loc, "string_type", "Input should be a valid string", Some(input.clone()))
    }

    pub fn float_type(loc: &[&str], input: &Value) -> Self {
        Self::new(loc, "float_type", "Input should be a valid number", Some(input.clone()))
    }

    pub fn float_parsing(loc: &[&str], input: &Value) -> Self {
        Self::new(
            loc,
            "float_parsing",
            "Input should be a valid number, unable to parse string as a number",
            Some(input.clone()),
        )
    }

    pub fn finite_number(loc: &[&str], input: &Value) -> Self {
        Self::new(loc, "finite_number", "Input should be a finite number", Some(input.clone()))
    }

    pub fn int_parsing(loc: &[&str], input: &str) -> Self {
        Self::new(
            loc,
            "int_parsing",
            "Input should be a valid integer, unable to parse string as an integer",
            Some(Value::String(input.to_string())),
        )
    }

    pub fn json_invalid(msg: impl Into<String>) -> Self {
        Self::new(&["body"], "json_invalid", msg, None)
    }

    pub fn object_type(input: &Value) -> Self {
        Self::new(
            &["body"],
            "model_attributes_type",
            "Input should be a valid dictionary or object to extract fields from",
            Some(input.clone()),
        )
    }

    /// Dotted rendering of `loc`, used in log lines and `Display`.
    pub fn path(&self) -> String {
        self.loc.join(".")
    }
}

/// Every field error produced by one validation pass (never empty).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    /// `Ok(())` when nothing was collected, otherwise the collected errors.
    pub fn check(errors: Vec<FieldError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self(errors))
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.path(), e.msg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn check_is_ok_when_nothing_collected() {
        assert!(ValidationErrors::check(vec![]).is_ok());
    }

    #[test]
    fn serializes_in_detail_shape() {
        let errs = ValidationErrors::single(FieldError::float_type(&["body", "price"], &json!(true)));
        let v = serde_json::to_value(&errs).unwrap();
        assert_eq!(
            v,
            json!([{
                "loc": ["body", "price"],
                "msg": "Input should be a valid number",
                "type": "float_type",
                "input": true,
            }])
        );
    }

    #[test]
    fn missing_fields_carry_no_input() {
        let v = serde_json::to_value(FieldError::missing(&["body", "name"])).unwrap();
        assert!(v.get("input").is_none());
        assert_eq!(v["type"], "missing");
    }

    #[test]
    fn display_joins_all_errors() {
        let errs = ValidationErrors::check(vec![
            FieldError::missing(&["body", "name"]),
            FieldError::missing(&["body", "price"]),
        ])
        .unwrap_err();
        assert_eq!(errs.to_string(), "body.name: Field required; body.price: Field required");
    }
}
