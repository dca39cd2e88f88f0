use serde::{Deserialize, Serialize};

/// Atomic clause kind for a single-field predicate.
///
/// Variant names match the engine's clause keys, so the wire spelling falls
/// out of [`Leaf::as_str`] and the serde representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leaf {
    Term,
    Match,
    MatchPhrase,
    Wildcard,
    Range,
}

impl Leaf {
    pub fn as_str(self) -> &'static str {
        match self {
            Leaf::Term => "term",
            Leaf::Match => "match",
            Leaf::MatchPhrase => "match_phrase",
            Leaf::Wildcard => "wildcard",
            Leaf::Range => "range",
        }
    }
}

/// Comparison operator for a scalar range predicate.
///
/// `Eq` exists for the generic entry points but is never valid on a range
/// leaf; the grammar rejects it at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOperator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOperator::Eq => "eq",
            CompareOperator::Gt => "gt",
            CompareOperator::Gte => "gte",
            CompareOperator::Lt => "lt",
            CompareOperator::Lte => "lte",
        }
    }
}
