pub mod argument;
pub use argument::*;

pub mod aggregate_table;
pub use aggregate_table::*;

pub mod strategies;
pub use strategies::*;

pub mod column_resolver;
pub use column_resolver::*;

pub mod config;
pub use config::*;
