mod aggs;
mod bool_query;
mod error;
mod group;
mod leaf;
mod request;

pub use aggs::compile_aggs;
pub use bool_query::compile_conditions;
pub use error::CompileError;
pub use group::priority_groups;
pub use leaf::{compile_basic, compile_should};
pub use request::Grammar;
