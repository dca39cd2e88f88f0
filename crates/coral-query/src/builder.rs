use serde_json::{Value, json};

use crate::aggregation::Aggregation;
use crate::condition::{Combinator, Condition};
use crate::operator::{CompareOperator, Leaf};
use crate::query::SearchQuery;
use crate::sort::{Sort, SortDirection};

/// Fluent constructor for a [`SearchQuery`].
///
/// Each `where_*` call appends one condition to a plain ordered list; the
/// `or_*` twins mark their condition as the start of a new disjunctive
/// branch. The builder is a value — chaining moves it, and [`build`]
/// releases the finished query by value.
///
/// ```
/// use coral_query::{CompareOperator, SearchBuilder, SortDirection};
///
/// let query = SearchBuilder::new()
///     .index("orders")
///     .where_term("status", "open")
///     .where_range("total", CompareOperator::Gte, 100)
///     .or_where_term("priority", "high")
///     .order_by("created_at", SortDirection::Desc)
///     .limit(20)
///     .build();
/// assert_eq!(query.conditions.len(), 3);
/// ```
///
/// [`build`]: SearchBuilder::build
#[derive(Debug, Clone, Default)]
pub struct SearchBuilder {
    query: SearchQuery,
}

impl SearchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Request scalars ─────────────────────────────────────────

    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.query.index = Some(index.into());
        self
    }

    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.query.doc_type = Some(doc_type.into());
        self
    }

    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.query.sorts.push(Sort {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn limit(mut self, size: u64) -> Self {
        self.query.size = Some(size);
        self
    }

    pub fn take(self, size: u64) -> Self {
        self.limit(size)
    }

    pub fn offset(mut self, from: u64) -> Self {
        self.query.from = Some(from);
        self
    }

    pub fn skip(self, from: u64) -> Self {
        self.offset(from)
    }

    /// Scroll keep-alive duration, e.g. `"10m"`. Presence turns the search
    /// envelope into a scroll-initiating request.
    pub fn scroll(mut self, duration: impl Into<String>) -> Self {
        self.query.scroll = Some(duration.into());
        self
    }

    // ── Predicates ──────────────────────────────────────────────

    pub fn where_term(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.basic(column.into(), Leaf::Term, None, value.into(), Combinator::And)
    }

    pub fn or_where_term(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.basic(column.into(), Leaf::Term, None, value.into(), Combinator::Or)
    }

    pub fn where_match(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.basic(column.into(), Leaf::Match, None, value.into(), Combinator::And)
    }

    pub fn or_where_match(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.basic(column.into(), Leaf::Match, None, value.into(), Combinator::Or)
    }

    pub fn where_match_phrase(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.basic(
            column.into(),
            Leaf::MatchPhrase,
            None,
            value.into(),
            Combinator::And,
        )
    }

    pub fn or_where_match_phrase(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.basic(
            column.into(),
            Leaf::MatchPhrase,
            None,
            value.into(),
            Combinator::Or,
        )
    }

    pub fn where_wildcard(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.basic(
            column.into(),
            Leaf::Wildcard,
            None,
            value.into(),
            Combinator::And,
        )
    }

    pub fn or_where_wildcard(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.basic(
            column.into(),
            Leaf::Wildcard,
            None,
            value.into(),
            Combinator::Or,
        )
    }

    /// Scalar range predicate: `column <op> value`.
    pub fn where_range(
        self,
        column: impl Into<String>,
        operator: CompareOperator,
        value: impl Into<Value>,
    ) -> Self {
        self.basic(
            column.into(),
            Leaf::Range,
            Some(operator),
            value.into(),
            Combinator::And,
        )
    }

    pub fn or_where_range(
        self,
        column: impl Into<String>,
        operator: CompareOperator,
        value: impl Into<Value>,
    ) -> Self {
        self.basic(
            column.into(),
            Leaf::Range,
            Some(operator),
            value.into(),
            Combinator::Or,
        )
    }

    /// Inclusive range-between: compiles to `{"range": {column: {"gte": lo,
    /// "lte": hi}}}`.
    pub fn where_between(
        self,
        column: impl Into<String>,
        lo: impl Into<Value>,
        hi: impl Into<Value>,
    ) -> Self {
        let bounds = json!({ "gte": lo.into(), "lte": hi.into() });
        self.basic(column.into(), Leaf::Range, None, bounds, Combinator::And)
    }

    pub fn or_where_between(
        self,
        column: impl Into<String>,
        lo: impl Into<Value>,
        hi: impl Into<Value>,
    ) -> Self {
        let bounds = json!({ "gte": lo.into(), "lte": hi.into() });
        self.basic(column.into(), Leaf::Range, None, bounds, Combinator::Or)
    }

    /// Multi-value membership: matches when `column` equals any of `values`.
    /// The disjunction is internal — the condition as a whole still ANDs
    /// with its siblings.
    pub fn where_in<I, V>(self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.membership(column.into(), Leaf::Term, values, Combinator::And)
    }

    pub fn or_where_in<I, V>(self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.membership(column.into(), Leaf::Term, values, Combinator::Or)
    }

    /// Multi-value membership with wildcard semantics: matches when `column`
    /// matches any of `patterns`. Patterns pass through verbatim — callers
    /// place their own `*` markers.
    pub fn where_wildcard_in<I, V>(self, column: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.membership(column.into(), Leaf::Wildcard, patterns, Combinator::And)
    }

    pub fn or_where_wildcard_in<I, V>(self, column: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.membership(column.into(), Leaf::Wildcard, patterns, Combinator::Or)
    }

    /// Negated predicate, always with `term` semantics.
    pub fn where_not(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.conditions.push(Condition::MustNot {
            column: column.into(),
            value: value.into(),
            combinator: Combinator::And,
        });
        self
    }

    pub fn or_where_not(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.conditions.push(Condition::MustNot {
            column: column.into(),
            value: value.into(),
            combinator: Combinator::Or,
        });
        self
    }

    /// Parenthesized sub-group. The closure receives a fresh child builder
    /// and returns it; the parent takes ownership of the finished sub-list.
    /// A child that declared no conditions contributes nothing.
    pub fn where_nested(self, build: impl FnOnce(SearchBuilder) -> SearchBuilder) -> Self {
        self.nested(Combinator::And, build)
    }

    pub fn or_where_nested(self, build: impl FnOnce(SearchBuilder) -> SearchBuilder) -> Self {
        self.nested(Combinator::Or, build)
    }

    /// Generic single-field predicate with an explicit leaf and comparison
    /// operator, for callers that carry both as data. The operator only
    /// matters for a scalar `range` leaf; the grammar ignores it elsewhere.
    pub fn where_leaf(
        self,
        column: impl Into<String>,
        leaf: Leaf,
        operator: CompareOperator,
        value: impl Into<Value>,
    ) -> Self {
        self.basic(
            column.into(),
            leaf,
            Some(operator),
            value.into(),
            Combinator::And,
        )
    }

    pub fn or_where_leaf(
        self,
        column: impl Into<String>,
        leaf: Leaf,
        operator: CompareOperator,
        value: impl Into<Value>,
    ) -> Self {
        self.basic(
            column.into(),
            leaf,
            Some(operator),
            value.into(),
            Combinator::Or,
        )
    }

    /// Append an already-constructed condition. Escape hatch for shapes the
    /// typed helpers do not cover.
    pub fn where_condition(mut self, condition: Condition) -> Self {
        self.query.conditions.push(condition);
        self
    }

    // ── Aggregations ────────────────────────────────────────────

    /// Metric aggregation named `{field}_{metric}`.
    pub fn agg_by(mut self, field: impl Into<String>, metric: impl Into<String>) -> Self {
        self.query.aggs.push(Aggregation::Metric {
            field: field.into(),
            metric: metric.into(),
            alias: None,
        });
        self
    }

    /// Metric aggregation under an explicit name.
    pub fn agg_as(
        mut self,
        alias: impl Into<String>,
        field: impl Into<String>,
        metric: impl Into<String>,
    ) -> Self {
        self.query.aggs.push(Aggregation::Metric {
            field: field.into(),
            metric: metric.into(),
            alias: Some(alias.into()),
        });
        self
    }

    /// Named engine-shaped spec, passed through verbatim.
    pub fn agg_raw(mut self, name: impl Into<String>, spec: Value) -> Self {
        self.query.aggs.push(Aggregation::Raw {
            name: name.into(),
            spec,
        });
        self
    }

    /// Raw spec merged after everything else; replaces a same-named entry.
    pub fn agg_override(mut self, name: impl Into<String>, spec: Value) -> Self {
        self.query.agg_overrides.push((name.into(), spec));
        self
    }

    pub fn build(self) -> SearchQuery {
        self.query
    }

    // ── Internals ───────────────────────────────────────────────

    fn basic(
        mut self,
        column: String,
        leaf: Leaf,
        operator: Option<CompareOperator>,
        value: Value,
        combinator: Combinator,
    ) -> Self {
        self.query.conditions.push(Condition::Basic {
            column,
            leaf,
            operator,
            value,
            combinator,
        });
        self
    }

    fn membership<I, V>(mut self, column: String, leaf: Leaf, values: I, combinator: Combinator) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.query.conditions.push(Condition::Should {
            column,
            leaf,
            values: values.into_iter().map(Into::into).collect(),
            combinator,
        });
        self
    }

    fn nested(mut self, combinator: Combinator, build: impl FnOnce(SearchBuilder) -> SearchBuilder) -> Self {
        let child = build(SearchBuilder::new());
        let conditions = child.query.conditions;
        if !conditions.is_empty() {
            self.query.conditions.push(Condition::Nested {
                conditions,
                combinator,
            });
        }
        self
    }
}
