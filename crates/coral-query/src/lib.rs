mod aggregation;
mod builder;
mod condition;
mod operator;
mod query;
mod sort;

pub use aggregation::Aggregation;
pub use builder::SearchBuilder;
pub use condition::{Combinator, Condition};
pub use operator::{CompareOperator, Leaf};
pub use query::SearchQuery;
pub use sort::{Sort, SortDirection};
