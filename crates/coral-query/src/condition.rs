use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::operator::{CompareOperator, Leaf};

/// How a condition joins the one before it: `And` extends the current group,
/// `Or` closes it and opens a new disjunctive branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    And,
    Or,
}

/// One declared predicate or nested group.
///
/// The shape is resolved once at construction: scalar vs multi-value vs
/// bound-object inputs land in different variants instead of being
/// re-inspected at every compile step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Single-field predicate. `operator` is only meaningful for a scalar
    /// `range` leaf; `value` may be a `{"gte": .., "lte": ..}` bound object
    /// for range-between, which passes through verbatim.
    Basic {
        column: String,
        leaf: Leaf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        operator: Option<CompareOperator>,
        value: Value,
        combinator: Combinator,
    },
    /// Parenthesized sub-group, compiled recursively and spliced into the
    /// parent group as one conjunctive clause.
    Nested {
        conditions: Vec<Condition>,
        combinator: Combinator,
    },
    /// Negated predicate. Always compiles with `term` semantics.
    MustNot {
        column: String,
        value: Value,
        combinator: Combinator,
    },
    /// Multi-value membership: an inner disjunction across `values` that is
    /// still ANDed with its siblings.
    Should {
        column: String,
        leaf: Leaf,
        values: Vec<Value>,
        combinator: Combinator,
    },
}

impl Condition {
    pub fn combinator(&self) -> Combinator {
        match self {
            Condition::Basic { combinator, .. }
            | Condition::Nested { combinator, .. }
            | Condition::MustNot { combinator, .. }
            | Condition::Should { combinator, .. } => *combinator,
        }
    }
}
