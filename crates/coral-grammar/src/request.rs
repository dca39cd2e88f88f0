use coral_query::SearchQuery;
use serde_json::{Map, Value, json};

use crate::aggs::compile_aggs;
use crate::bool_query::compile_conditions;
use crate::error::CompileError;

/// Compiles [`SearchQuery`] values into wire-protocol request envelopes.
///
/// Assembly only: each method merges the compiled query and aggregation
/// sections with the request scalars, omitting whatever is empty or unset.
/// Anything smarter than a presence check belongs in the compilers, not
/// here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grammar;

impl Grammar {
    pub fn new() -> Self {
        Grammar
    }

    /// Full search envelope:
    /// `{"index", "type", "body": {"_source", "query", "aggs", "sort",
    /// "size", "from"}, "scroll"?}`.
    pub fn compile_search(&self, query: &SearchQuery) -> Result<Value, CompileError> {
        let body = self.search_body(query, None)?;

        let mut params = Map::new();
        self.push_target(&mut params, query);
        params.insert("body".to_string(), Value::Object(body));
        if let Some(scroll) = &query.scroll {
            params.insert("scroll".to_string(), json!(scroll));
        }
        Ok(Value::Object(params))
    }

    /// Search envelope with `size` forced to 0 — aggregation results only,
    /// no hits.
    pub fn compile_aggs_search(&self, query: &SearchQuery) -> Result<Value, CompileError> {
        let body = self.search_body(query, Some(0))?;

        let mut params = Map::new();
        self.push_target(&mut params, query);
        params.insert("body".to_string(), Value::Object(body));
        Ok(Value::Object(params))
    }

    /// Count envelope: the boolean query only. The count API rejects
    /// paging, projection and sort.
    pub fn compile_count(&self, query: &SearchQuery) -> Result<Value, CompileError> {
        let mut body = Map::new();
        if let Some(tree) = compile_conditions(&query.conditions)? {
            body.insert("query".to_string(), tree);
        }

        let mut params = Map::new();
        self.push_target(&mut params, query);
        params.insert("body".to_string(), Value::Object(body));
        Ok(Value::Object(params))
    }

    /// Index one document under an explicit id.
    pub fn compile_create(&self, query: &SearchQuery, id: &str, doc: Value) -> Value {
        let mut params = Map::new();
        self.push_target(&mut params, query);
        params.insert("id".to_string(), json!(id));
        params.insert("body".to_string(), doc);
        Value::Object(params)
    }

    /// Partial update of one document by id.
    pub fn compile_update(&self, query: &SearchQuery, id: &str, doc: Value) -> Value {
        let mut params = Map::new();
        self.push_target(&mut params, query);
        params.insert("id".to_string(), json!(id));
        params.insert(
            "body".to_string(),
            json!({ "doc": doc, "detect_noop": false }),
        );
        Value::Object(params)
    }

    /// Delete one document by id.
    pub fn compile_delete(&self, query: &SearchQuery, id: &str) -> Value {
        let mut params = Map::new();
        self.push_target(&mut params, query);
        params.insert("id".to_string(), json!(id));
        Value::Object(params)
    }

    /// Delete everything the compiled boolean query matches.
    pub fn compile_delete_by_query(&self, query: &SearchQuery) -> Result<Value, CompileError> {
        let mut body = Map::new();
        if let Some(tree) = compile_conditions(&query.conditions)? {
            body.insert("query".to_string(), tree);
        }

        let mut params = Map::new();
        self.push_target(&mut params, query);
        params.insert("body".to_string(), Value::Object(body));
        Ok(Value::Object(params))
    }

    fn search_body(
        &self,
        query: &SearchQuery,
        size_override: Option<u64>,
    ) -> Result<Map<String, Value>, CompileError> {
        let mut body = Map::new();

        if !query.columns.is_empty() {
            body.insert("_source".to_string(), json!(query.columns));
        }
        if let Some(tree) = compile_conditions(&query.conditions)? {
            body.insert("query".to_string(), tree);
        }
        if let Some(aggs) = compile_aggs(&query.aggs, &query.agg_overrides)? {
            body.insert("aggs".to_string(), aggs);
        }
        if !query.sorts.is_empty() {
            let sorts: Vec<Value> = query
                .sorts
                .iter()
                .map(|sort| json!({ sort.field.as_str(): { "order": sort.direction.as_str() } }))
                .collect();
            body.insert("sort".to_string(), Value::Array(sorts));
        }
        if let Some(size) = size_override.or(query.size) {
            body.insert("size".to_string(), json!(size));
        }
        if let Some(from) = query.from {
            body.insert("from".to_string(), json!(from));
        }

        Ok(body)
    }

    fn push_target(&self, params: &mut Map<String, Value>, query: &SearchQuery) {
        if let Some(index) = &query.index {
            params.insert("index".to_string(), json!(index));
        }
        if let Some(doc_type) = &query.doc_type {
            params.insert("type".to_string(), json!(doc_type));
        }
    }
}
