use crate::{FieldError, SolverError, SolverResult};
use qsel_structs::{
    config::SolverConfig,
    core::{ItemData, SolveRequest},
};
use serde_json::{Map, Value};
use tracing::debug;

/// Checks a raw `{"items": [...], "capacity": n}` document before it reaches
/// the solver.
///
/// Shape and capacity problems fail immediately. Item problems are collected
/// across the whole list and reported together as field level errors.
pub fn validate_request(doc: &Value, config: &SolverConfig) -> SolverResult<SolveRequest> {
    let obj = doc.as_object().ok_or_else(|| SolverError::InvalidShape {
        reason: format!("expected a json object, got {}", type_name(doc)),
    })?;

    let raw_items = match obj.get("items") {
        Some(Value::Array(arr)) => arr,
        Some(other) => {
            return Err(SolverError::InvalidShape {
                reason: format!("'items' must be an array, got {}", type_name(other)),
            })
        }
        None => {
            return Err(SolverError::InvalidShape {
                reason: "'items' is required".to_string(),
            })
        }
    };

    let capacity = match obj.get("capacity") {
        Some(value) => parse_u32(value).map_err(|reason| SolverError::InvalidCapacity { reason })?,
        None => {
            return Err(SolverError::InvalidCapacity {
                reason: "'capacity' is required".to_string(),
            })
        }
    };

    let mut errors = Vec::new();
    let mut items = Vec::with_capacity(raw_items.len());
    for (i, raw) in raw_items.iter().enumerate() {
        match raw.as_object() {
            Some(fields) => {
                if let Some(item) = validate_item(i, fields, config, &mut errors) {
                    items.push(item);
                }
            }
            None => errors.push(FieldError::new(
                format!("items[{}]", i),
                format!("must be an object, got {}", type_name(raw)),
            )),
        }
    }
    if !errors.is_empty() {
        debug!(num_errors = errors.len(), "request rejected");
        return Err(SolverError::InvalidItems { errors });
    }

    Ok(SolveRequest { items, capacity })
}

/// Returns field errors for items whose weight is not allowed by `config`.
/// Used where items arrive already typed, e.g. quiz questions.
pub fn check_weights<'a>(
    field_prefix: &str,
    weights: impl IntoIterator<Item = &'a u32>,
    weight_field: &str,
    config: &SolverConfig,
) -> Vec<FieldError> {
    if config.allow_zero_weight {
        return Vec::new();
    }
    weights
        .into_iter()
        .enumerate()
        .filter(|&(_, &weight)| weight == 0)
        .map(|(i, _)| {
            FieldError::new(
                format!("{}[{}].{}", field_prefix, i, weight_field),
                "must be positive",
            )
        })
        .collect()
}

fn validate_item(
    index: usize,
    fields: &Map<String, Value>,
    config: &SolverConfig,
    errors: &mut Vec<FieldError>,
) -> Option<ItemData> {
    let field = |name: &str| format!("items[{}].{}", index, name);
    let num_errors = errors.len();

    let id = match fields.get("id") {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field("id"), "is required"));
            None
        }
        Some(id) => Some(id.clone()),
    };

    let value = match fields.get("value") {
        None => {
            errors.push(FieldError::new(field("value"), "is required"));
            None
        }
        Some(raw) => parse_u32(raw)
            .map_err(|message| errors.push(FieldError::new(field("value"), message)))
            .ok(),
    };

    let weight = match fields.get("weight") {
        None => {
            errors.push(FieldError::new(field("weight"), "is required"));
            None
        }
        Some(raw) => match parse_u32(raw) {
            Ok(0) if !config.allow_zero_weight => {
                errors.push(FieldError::new(field("weight"), "must be positive"));
                None
            }
            Ok(weight) => Some(weight),
            Err(message) => {
                errors.push(FieldError::new(field("weight"), message));
                None
            }
        },
    };

    if errors.len() > num_errors {
        return None;
    }
    Some(ItemData {
        id: id?,
        value: value?,
        weight: weight?,
        payload: fields.get("payload").cloned(),
    })
}

fn parse_u32(value: &Value) -> Result<u32, String> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).map_err(|_| format!("must be at most {}, got {}", u32::MAX, v))
            } else if n.is_i64() {
                Err(format!("must not be negative, got {}", n))
            } else {
                Err(format!("must be an integer, got {}", n))
            }
        }
        other => Err(format!("must be an integer, got {}", type_name(other))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
