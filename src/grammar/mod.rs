pub mod operator;
pub use operator::*;

pub mod predicate_builder;
pub use predicate_builder::*;
