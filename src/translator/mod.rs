pub mod translate_error;
pub use translate_error::*;

pub mod query_values;
pub use query_values::*;

pub mod translation_result;
pub use translation_result::*;

pub mod translator;
pub use translator::*;

mod _tests;
