use coral_query::Aggregation;
use serde_json::{Map, Value, json};

use crate::error::CompileError;

/// Build the name → spec aggregation mapping.
///
/// Metric requests are named `alias` when present, otherwise
/// `{field}_{metric}`, and compile to `{metric: {"field": field}}`. Raw
/// requests pass through verbatim once their spec is checked to be an
/// object. Overrides merge last in declaration order and replace any
/// same-named entry. `Ok(None)` when there is nothing to aggregate.
pub fn compile_aggs(
    aggs: &[Aggregation],
    overrides: &[(String, Value)],
) -> Result<Option<Value>, CompileError> {
    if aggs.is_empty() && overrides.is_empty() {
        return Ok(None);
    }

    let mut out = Map::new();
    for agg in aggs {
        match agg {
            Aggregation::Metric {
                field,
                metric,
                alias,
            } => {
                let name = alias
                    .clone()
                    .unwrap_or_else(|| format!("{field}_{metric}"));
                out.insert(name, json!({ metric.as_str(): { "field": field.as_str() } }));
            }
            Aggregation::Raw { name, spec } => {
                ensure_object(name, spec)?;
                out.insert(name.clone(), spec.clone());
            }
        }
    }

    for (name, spec) in overrides {
        ensure_object(name, spec)?;
        out.insert(name.clone(), spec.clone());
    }

    Ok(Some(Value::Object(out)))
}

fn ensure_object(name: &str, spec: &Value) -> Result<(), CompileError> {
    if spec.is_object() {
        Ok(())
    } else {
        Err(CompileError::MalformedAggregation(format!(
            "raw spec for {name} must be an object"
        )))
    }
}
