pub mod filter_clause;
pub use filter_clause::*;

pub mod aggregate_expr;
pub use aggregate_expr::*;

pub mod where_clause;
pub use where_clause::*;

pub mod having;
pub use having::*;

pub mod order_by;
pub use order_by::*;

pub mod group_by;
pub use group_by::*;

pub mod select;
pub use select::*;
