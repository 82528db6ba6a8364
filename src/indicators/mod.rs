pub mod catalog;
pub mod error;
pub mod parser;
pub mod reconciler;
pub mod registry;
pub mod validation;

pub use catalog::*;
pub use error::IndicatorError;
pub use parser::*;
pub use reconciler::*;
pub use registry::*;
pub use validation::*;
