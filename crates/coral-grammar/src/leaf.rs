use coral_query::{CompareOperator, Leaf};
use serde_json::{Value, json};

use crate::error::CompileError;

/// Translate one basic predicate into its atomic wire clause.
///
/// Term, match, match_phrase and wildcard leaves compile to
/// `{leaf: {column: value}}`. A range with a bound-object value passes the
/// object through verbatim; a range with a scalar value needs one of
/// gt/gte/lt/lte.
pub fn compile_basic(
    column: &str,
    leaf: Leaf,
    operator: Option<CompareOperator>,
    value: &Value,
) -> Result<Value, CompileError> {
    match leaf {
        Leaf::Term | Leaf::Match | Leaf::MatchPhrase | Leaf::Wildcard => {
            Ok(json!({ leaf.as_str(): { column: value.clone() } }))
        }
        Leaf::Range => compile_range(column, operator, value),
    }
}

/// Translate a multi-value membership into an inner disjunction:
/// `{"bool": {"should": [{leaf: {column: v}}, ...]}}`. The clause as a whole
/// still ANDs with its group siblings. Callers must not pass an empty value
/// set — the bool compiler drops those before translation.
pub fn compile_should(column: &str, leaf: Leaf, values: &[Value]) -> Result<Value, CompileError> {
    if leaf == Leaf::Range {
        return Err(CompileError::InvalidLeafKind(format!(
            "range is not valid for a multi-value set on {column}"
        )));
    }

    let clauses: Vec<Value> = values
        .iter()
        .map(|value| json!({ leaf.as_str(): { column: value.clone() } }))
        .collect();

    Ok(json!({ "bool": { "should": clauses } }))
}

fn compile_range(
    column: &str,
    operator: Option<CompareOperator>,
    value: &Value,
) -> Result<Value, CompileError> {
    if value.is_object() {
        // Bound object such as {"gte": 10, "lte": 100} — verbatim.
        return Ok(json!({ "range": { column: value.clone() } }));
    }

    let operator = match operator {
        Some(
            op @ (CompareOperator::Gt
            | CompareOperator::Gte
            | CompareOperator::Lt
            | CompareOperator::Lte),
        ) => op,
        Some(CompareOperator::Eq) => {
            return Err(CompileError::InvalidRangeOperator(format!(
                "eq is not a range operator for {column}"
            )));
        }
        None => {
            return Err(CompileError::InvalidRangeOperator(format!(
                "scalar range on {column} needs one of gt, gte, lt, lte"
            )));
        }
    };

    Ok(json!({ "range": { column: { operator.as_str(): value.clone() } } }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_clause_shape() {
        let clause = compile_basic("status", Leaf::Term, None, &json!("active")).unwrap();
        assert_eq!(clause, json!({ "term": { "status": "active" } }));
    }

    #[test]
    fn scalar_range_uses_the_operator() {
        let clause =
            compile_basic("age", Leaf::Range, Some(CompareOperator::Gte), &json!(21)).unwrap();
        assert_eq!(clause, json!({ "range": { "age": { "gte": 21 } } }));
    }

    #[test]
    fn bound_object_passes_through_verbatim() {
        let bounds = json!({ "gte": 10, "lte": 100 });
        let clause = compile_basic("price", Leaf::Range, None, &bounds).unwrap();
        assert_eq!(clause, json!({ "range": { "price": { "gte": 10, "lte": 100 } } }));
    }

    #[test]
    fn scalar_range_without_an_operator_is_rejected() {
        let err = compile_basic("age", Leaf::Range, None, &json!(21)).unwrap_err();
        assert!(matches!(err, CompileError::InvalidRangeOperator(_)));
    }

    #[test]
    fn eq_is_rejected_for_a_scalar_range() {
        let err =
            compile_basic("age", Leaf::Range, Some(CompareOperator::Eq), &json!(21)).unwrap_err();
        assert!(matches!(err, CompileError::InvalidRangeOperator(_)));
    }

    #[test]
    fn membership_compiles_to_an_inner_disjunction() {
        let clause = compile_should("status", Leaf::Term, &[json!("a"), json!("b")]).unwrap();
        assert_eq!(
            clause,
            json!({ "bool": { "should": [
                { "term": { "status": "a" } },
                { "term": { "status": "b" } },
            ] } })
        );
    }

    #[test]
    fn range_membership_is_rejected() {
        let err = compile_should("age", Leaf::Range, &[json!(1)]).unwrap_err();
        assert!(matches!(err, CompileError::InvalidLeafKind(_)));
    }
}
