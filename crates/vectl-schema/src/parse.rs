//! Field definition parser.
//!
//! Grammar: `name:type[:param][:modifier...]`, split on `:` with
//! whitespace-trimmed tokens. Positional params are consumed greedily
//! right after the type (varchar length, vector dim, array element type
//! and capacity); every remaining token is a modifier (`pk`, `auto`,
//! `nullable`) or a metric type name. Defaults are resolved last:
//! varchar length 65535, array capacity 4096, COSINE for dense vectors,
//! IP for sparse.

use vectl_core::error::{Error, Result};
use vectl_core::types::{DataType, FieldSpec, MetricType, METRIC_NAMES, TYPE_NAMES};

pub const DEFAULT_VARCHAR_MAX_LENGTH: u32 = 65535;
pub const DEFAULT_ARRAY_CAPACITY: u32 = 4096;

/// Index-based cursor over the `:`-separated tokens of one definition.
/// Keeps the consumption state explicit instead of mutating a token list
/// in place.
#[derive(Debug)]
struct TokenCursor {
    tokens: Vec<String>,
    pos: usize,
}

impl TokenCursor {
    fn new(input: &str) -> Self {
        let tokens = input.split(':').map(|t| t.trim().to_string()).collect();
        Self { tokens, pos: 0 }
    }

    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn advance(&mut self) -> Option<&str> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token.as_str())
    }
}

/// Locale-independent numeric check: ASCII digits only, nothing else.
fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_number(field: &str, what: &str, token: &str) -> Result<u32> {
    token.parse::<u32>().map_err(|_| {
        Error::SchemaParse(format!("Field '{field}': {what} value '{token}' is out of range"))
    })
}

/// Parse one field definition string into a `FieldSpec`.
pub fn parse_field(field_str: &str) -> Result<FieldSpec> {
    let mut cursor = TokenCursor::new(field_str);
    if cursor.len() < 2 {
        return Err(Error::SchemaParse(format!(
            "Invalid field format: '{field_str}'. Expected 'name:type[:params...]'"
        )));
    }

    let name = cursor.advance().unwrap_or_default().to_string();
    if name.is_empty() {
        return Err(Error::SchemaParse("Field name cannot be empty".to_string()));
    }

    let type_name = cursor.advance().unwrap_or_default().to_lowercase();
    let Some(data_type) = DataType::from_name(&type_name) else {
        return Err(Error::SchemaParse(format!(
            "Unknown type '{type_name}'. Valid types: {}",
            TYPE_NAMES.join(", ")
        )));
    };

    let mut spec = FieldSpec::new(name, data_type);

    // Type-specific positional parameters, consumed from the front.
    if data_type == DataType::VarChar {
        if cursor.peek().is_some_and(is_ascii_digits) {
            let token = cursor.advance().unwrap_or_default().to_string();
            spec.max_length = Some(parse_number(&spec.name, "max_length", &token)?);
        }
    } else if data_type.is_dense_vector() {
        let dim_token = match cursor.peek() {
            Some(token) if is_ascii_digits(token) => token.to_string(),
            _ => {
                return Err(Error::SchemaParse(format!(
                    "Vector field '{}' requires dimension, e.g., '{}:{}:768'",
                    spec.name, spec.name, type_name
                )))
            }
        };
        let _ = cursor.advance();
        spec.dim = Some(parse_number(&spec.name, "dim", &dim_token)?);
    } else if data_type == DataType::Array {
        let Some(elem_name) = cursor.advance().map(str::to_lowercase) else {
            return Err(Error::SchemaParse(format!(
                "Array field '{}' requires element type, e.g., '{}:array:int64:100'",
                spec.name, spec.name
            )));
        };
        let Some(element_type) = DataType::from_name(&elem_name) else {
            return Err(Error::SchemaParse(format!(
                "Unknown array element type '{elem_name}'"
            )));
        };
        spec.element_type = Some(element_type);
        if cursor.peek().is_some_and(is_ascii_digits) {
            let token = cursor.advance().unwrap_or_default().to_string();
            spec.max_capacity = Some(parse_number(&spec.name, "max_capacity", &token)?);
        }
    }

    // Everything left is a modifier or a metric type, in any order.
    while let Some(token) = cursor.advance() {
        match token.to_lowercase().as_str() {
            "pk" => spec.is_primary = true,
            "auto" => spec.auto_id = true,
            "nullable" => spec.nullable = true,
            _ => {
                if let Some(metric) = MetricType::from_name(token) {
                    if !data_type.is_vector() {
                        return Err(Error::SchemaParse(format!(
                            "Metric type '{token}' can only be used with vector fields"
                        )));
                    }
                    spec.metric_type = Some(metric);
                } else {
                    return Err(Error::SchemaParse(format!(
                        "Unknown modifier '{token}'. Valid modifiers: pk, auto, nullable, or metric types: {}",
                        METRIC_NAMES.join(", ")
                    )));
                }
            }
        }
    }

    if spec.auto_id && !spec.is_primary {
        return Err(Error::SchemaParse(format!(
            "Field '{}': 'auto' modifier requires 'pk' modifier",
            spec.name
        )));
    }

    // Resolve defaults.
    if data_type.is_vector() && spec.metric_type.is_none() {
        spec.metric_type = Some(if data_type == DataType::SparseVector {
            MetricType::Ip
        } else {
            MetricType::Cosine
        });
    }
    if data_type == DataType::VarChar && spec.max_length.is_none() {
        spec.max_length = Some(DEFAULT_VARCHAR_MAX_LENGTH);
    }
    if data_type == DataType::Array && spec.max_capacity.is_none() {
        spec.max_capacity = Some(DEFAULT_ARRAY_CAPACITY);
    }

    Ok(spec)
}

/// Parse an ordered batch of field definitions.
///
/// Short-circuits on the first bad field. After parsing, exactly one
/// field must carry `pk`. Name uniqueness is NOT checked; duplicate
/// names pass through to the server as-is.
pub fn parse_fields<S: AsRef<str>>(field_strs: &[S]) -> Result<Vec<FieldSpec>> {
    let mut specs = Vec::with_capacity(field_strs.len());
    let mut primary_count = 0usize;

    for field_str in field_strs {
        let spec = parse_field(field_str.as_ref())?;
        if spec.is_primary {
            primary_count += 1;
        }
        specs.push(spec);
    }

    if primary_count == 0 {
        return Err(Error::SchemaParse(
            "At least one field must be marked as primary key (pk)".to_string(),
        ));
    }
    if primary_count > 1 {
        return Err(Error::SchemaParse(
            "Only one field can be marked as primary key".to_string(),
        ));
    }

    Ok(specs)
}
