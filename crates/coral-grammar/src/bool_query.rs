use coral_query::Condition;
use serde_json::{Map, Value, json};

use crate::error::CompileError;
use crate::group::priority_groups;
use crate::leaf::{compile_basic, compile_should};

/// Compile an ordered condition list into the engine's bool-query tree.
///
/// Each precedence group becomes one `{"bool": {"must_not": [..],
/// "filter": [..]}}` node with empty buckets omitted. A single surviving
/// node is wrapped under `filter` (plain conjunction); two or more go under
/// `should` (at least one group must match). `Ok(None)` means there is no
/// query section at all — every group compiled away.
pub fn compile_conditions(conditions: &[Condition]) -> Result<Option<Value>, CompileError> {
    let mut nodes = Vec::new();
    for group in priority_groups(conditions) {
        if let Some(node) = compile_group(group)? {
            nodes.push(node);
        }
    }

    if nodes.is_empty() {
        return Ok(None);
    }
    // The shape decision counts compiled nodes, not raw groups, so a group
    // that vanished (all-empty nested members) cannot force `should`.
    let operation = if nodes.len() == 1 { "filter" } else { "should" };
    Ok(Some(json!({ "bool": { operation: nodes } })))
}

fn compile_group(group: &[Condition]) -> Result<Option<Value>, CompileError> {
    let mut filter = Vec::new();
    let mut must_not = Vec::new();

    for condition in group {
        match condition {
            Condition::Basic {
                column,
                leaf,
                operator,
                value,
                ..
            } => {
                filter.push(compile_basic(column, *leaf, *operator, value)?);
            }
            Condition::Nested { conditions, .. } => {
                // Recurses to arbitrary depth; an empty sub-group yields
                // None and is dropped rather than spliced in.
                if let Some(sub_tree) = compile_conditions(conditions)? {
                    filter.push(sub_tree);
                }
            }
            Condition::MustNot { column, value, .. } => {
                must_not.push(json!({ "term": { column.as_str(): value.clone() } }));
            }
            Condition::Should {
                column,
                leaf,
                values,
                ..
            } => {
                // A disjunction over values is itself one ANDed constraint.
                // An empty value set contributes nothing, like an empty
                // nested group — never an empty bool node on the wire.
                if !values.is_empty() {
                    filter.push(compile_should(column, *leaf, values)?);
                }
            }
        }
    }

    let mut bool_body = Map::new();
    if !must_not.is_empty() {
        bool_body.insert("must_not".to_string(), Value::Array(must_not));
    }
    if !filter.is_empty() {
        bool_body.insert("filter".to_string(), Value::Array(filter));
    }
    if bool_body.is_empty() {
        return Ok(None);
    }
    Ok(Some(json!({ "bool": bool_body })))
}
