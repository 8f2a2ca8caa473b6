use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use catalog_core::{FieldError, ItemId, ValidationErrors};

/// Validated payload for creating an item.
///
/// Built either directly (tests, internal callers) or from an untrusted JSON
/// body through [`NewItem::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            tax: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = Some(tax);
        self
    }

    /// Validate an untrusted request body.
    ///
    /// The body must be an object. `name` and `price` are required,
    /// `description` and `tax` may be absent or `null`. Numbers may arrive as
    /// numeric strings. Unknown keys are ignored. All field errors are
    /// collected before returning.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let Some(obj) = body.as_object() else {
            return Err(ValidationErrors::single(FieldError::object_type(body)));
        };

        let mut errors = Vec::new();
        let name = required(obj, "name", &mut errors, string_field);
        let description = optional(obj, "description", &mut errors, string_field);
        let price = required(obj, "price", &mut errors, number_field);
        let tax = optional(obj, "tax", &mut errors, number_field);

        ValidationErrors::check(errors)?;

        // Every required field is Some once no errors were collected.
        match (name, price) {
            (Some(name), Some(price)) => Ok(Self {
                name,
                description: description.flatten(),
                price,
                tax: tax.flatten(),
            }),
            _ => Err(ValidationErrors::single(FieldError::missing(&["body"]))),
        }
    }
}

/// A stored catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

impl Item {
    pub fn new(id: ItemId, new: NewItem) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            tax: new.tax,
        }
    }

    /// Price plus tax, counting a missing tax as zero. Saturates at `±f64::MAX`.
    pub fn gross_value(&self) -> f64 {
        crate::stats::saturate(self.price + self.tax.unwrap_or(0.0))
    }
}

type FieldParser<T> = fn(&[&str], &Value) -> Result<T, FieldError>;

fn required<T>(
    obj: &Map<String, Value>,
    key: &str,
    errors: &mut Vec<FieldError>,
    parse: FieldParser<T>,
) -> Option<T> {
    let loc = ["body", key];
    match obj.get(key) {
        None => {
            errors.push(FieldError::missing(&loc));
            None
        }
        Some(v) => parse(&loc, v).map_err(|e| errors.push(e)).ok(),
    }
}

/// `Some(None)` for absent/null, `Some(Some(_))` for a valid value, `None` on error.
fn optional<T>(
    obj: &Map<String, Value>,
    key: &str,
    errors: &mut Vec<FieldError>,
    parse: FieldParser<T>,
) -> Option<Option<T>> {
    let loc = ["body", key];
    match obj.get(key) {
        None | Some(Value::Null) => Some(None),
        Some(v) => parse(&loc, v).map(Some).map_err(|e| errors.push(e)).ok(),
    }
}

fn string_field(loc: &[&str], v: &Value) -> Result<String, FieldError> {
    match v {
        Value::String(s) => Ok(s.clone()),
        other => Err(FieldError::string_type(loc, other)),
    }
}

fn number_field(loc: &[&str], v: &Value) -> Result<f64, FieldError> {
    let n = match v {
        Value::Number(n) => n.as_f64().ok_or_else(|| FieldError::float_type(loc, v))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| FieldError::float_parsing(loc, v))?,
        other => return Err(FieldError::float_type(loc, other)),
    };
    if !n.is_finite() {
        return Err(FieldError::finite_number(loc, v));
    }
    Ok(n)
}
