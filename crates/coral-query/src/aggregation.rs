use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One aggregation request.
///
/// The metric form is named by the grammar (`alias` when given, otherwise
/// `{field}_{metric}`); the raw form carries an engine-shaped spec that
/// passes through verbatim, for shapes the metric form cannot model
/// (composite, histogram, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    Metric {
        field: String,
        metric: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
    },
    Raw {
        name: String,
        spec: Value,
    },
}
