use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::aggregation::Aggregation;
use crate::condition::Condition;
use crate::sort::Sort;

/// The finished search input: an ordered condition list plus the request
/// scalars the envelope needs.
///
/// Built once by [`SearchBuilder`](crate::SearchBuilder), handed to the
/// grammar by reference and never mutated by it. Condition order is
/// significant — it drives precedence grouping and, within a group, the
/// filter/must_not bucketing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub sorts: Vec<Sort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub aggs: Vec<Aggregation>,
    /// Raw name → spec overrides, merged after `aggs`; on a name collision
    /// the override wins.
    #[serde(default)]
    pub agg_overrides: Vec<(String, Value)>,
}
