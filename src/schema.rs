/// Declarative record schemas
///
/// One [`RecordSchema`] per record kind, as plain static data: field name,
/// type, required flag, default and range constraints. The demo-request
/// handler validates inbound payloads against the `demorequest` schema, and
/// the whole catalog is served at `GET /schema` so the external database
/// viewer can generate its CRUD UI from it. Record kind maps directly to the
/// collection name in the store.
use serde::Serialize;
use serde_json::{json, Value};
use url::Url;

/// Semantic field types understood by the generic validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Boolean,
    Url,
    TextList,
}

/// A single field of a record kind.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    /// Substituted when the field is absent from an inbound payload.
    /// Optional fields without an explicit default get `null`.
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub description: &'static str,
}

impl FieldSpec {
    fn required(name: &'static str, field_type: FieldType, description: &'static str) -> Self {
        Self {
            name,
            field_type,
            required: true,
            default: Value::Null,
            min: None,
            max: None,
            description,
        }
    }

    fn optional(name: &'static str, field_type: FieldType, description: &'static str) -> Self {
        Self {
            required: false,
            ..Self::required(name, field_type, description)
        }
    }

    fn default(mut self, value: Value) -> Self {
        self.default = value;
        self
    }

    fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Type and range check for a present, non-null value.
    fn check(&self, value: &Value) -> Result<(), String> {
        let ok = match self.field_type {
            FieldType::Text => value.is_string(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Float => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Url => match value.as_str() {
                Some(s) => Url::parse(s).is_ok(),
                None => false,
            },
            FieldType::TextList => match value.as_array() {
                Some(items) => items.iter().all(Value::is_string),
                None => false,
            },
        };

        if !ok {
            return Err(match self.field_type {
                FieldType::Url => format!("field `{}` must be a well-formed URL", self.name),
                FieldType::TextList => format!("field `{}` must be a list of text values", self.name),
                _ => format!("field `{}` must be of type {:?}", self.name, self.field_type),
            });
        }

        if let Some(n) = value.as_f64() {
            if let Some(min) = self.min {
                if n < min {
                    return Err(format!("field `{}` must be >= {}", self.name, min));
                }
            }
            if let Some(max) = self.max {
                if n > max {
                    return Err(format!("field `{}` must be <= {}", self.name, max));
                }
            }
        }

        Ok(())
    }
}

/// Shape definition for one record kind.
#[derive(Debug, Clone, Serialize)]
pub struct RecordSchema {
    pub kind: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl RecordSchema {
    /// Validate an inbound payload against this schema.
    ///
    /// Checks field presence, type and range, substitutes defaults for
    /// absent optional fields and drops unknown fields. Returns the
    /// normalized document on success, or all violations joined into one
    /// message.
    pub fn validate(&self, payload: &Value) -> Result<Value, String> {
        let Some(object) = payload.as_object() else {
            return Err("payload must be a JSON object".to_string());
        };

        let mut errors = Vec::new();
        let mut output = serde_json::Map::new();

        for field in &self.fields {
            match object.get(field.name).filter(|v| !v.is_null()) {
                Some(value) => match field.check(value) {
                    Ok(()) => {
                        output.insert(field.name.to_string(), value.clone());
                    }
                    Err(e) => errors.push(e),
                },
                None if field.required => {
                    errors.push(format!("missing required field `{}`", field.name));
                }
                None => {
                    output.insert(field.name.to_string(), field.default.clone());
                }
            }
        }

        if errors.is_empty() {
            Ok(Value::Object(output))
        } else {
            Err(errors.join("; "))
        }
    }
}

/// Channels collection schema. Channel records are written out-of-band by
/// the admin viewer; this service only reads them.
pub fn channel() -> RecordSchema {
    RecordSchema {
        kind: "channel",
        fields: vec![
            FieldSpec::required("name", FieldType::Text, "Channel display name"),
            FieldSpec::required("slug", FieldType::Text, "URL-friendly identifier"),
            FieldSpec::optional("description", FieldType::Text, "Short description"),
            FieldSpec::optional("logo_url", FieldType::Url, "Logo image URL"),
            FieldSpec::optional("categories", FieldType::TextList, "Categories or tags")
                .default(json!([])),
            FieldSpec::optional("is_live", FieldType::Boolean, "Currently broadcasting live")
                .default(json!(false)),
            FieldSpec::optional("viewer_count", FieldType::Integer, "Current viewers")
                .default(json!(0))
                .min(0.0),
        ],
    }
}

/// Demo requests collection schema. The only kind this service writes.
pub fn demo_request() -> RecordSchema {
    RecordSchema {
        kind: "demorequest",
        fields: vec![
            FieldSpec::required("company", FieldType::Text, "Company name"),
            FieldSpec::required("contact_name", FieldType::Text, "Primary contact full name"),
            FieldSpec::required("email", FieldType::Text, "Work email"),
            FieldSpec::optional("use_case", FieldType::Text, "Primary streaming use case"),
            FieldSpec::optional("audience_size", FieldType::Text, "Estimated audience size"),
            FieldSpec::optional("notes", FieldType::Text, "Additional context"),
        ],
    }
}

/// Example users collection schema, kept as a documentation template for
/// the viewer. No endpoint uses it.
pub fn user() -> RecordSchema {
    RecordSchema {
        kind: "user",
        fields: vec![
            FieldSpec::required("name", FieldType::Text, "Full name"),
            FieldSpec::required("email", FieldType::Text, "Email address"),
            FieldSpec::required("address", FieldType::Text, "Address"),
            FieldSpec::optional("age", FieldType::Integer, "Age in years")
                .min(0.0)
                .max(120.0),
            FieldSpec::optional("is_active", FieldType::Boolean, "Whether user is active")
                .default(json!(true)),
        ],
    }
}

/// Example products collection schema, documentation template only.
pub fn product() -> RecordSchema {
    RecordSchema {
        kind: "product",
        fields: vec![
            FieldSpec::required("title", FieldType::Text, "Product title"),
            FieldSpec::optional("description", FieldType::Text, "Product description"),
            FieldSpec::required("price", FieldType::Float, "Price in dollars").min(0.0),
            FieldSpec::required("category", FieldType::Text, "Product category"),
            FieldSpec::optional("in_stock", FieldType::Boolean, "Whether product is in stock")
                .default(json!(true)),
        ],
    }
}

/// The full schema catalog, in the order the viewer presents collections.
pub fn catalog() -> Vec<RecordSchema> {
    vec![user(), product(), channel(), demo_request()]
}
