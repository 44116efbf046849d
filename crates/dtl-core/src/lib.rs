pub mod error;
pub mod model;
pub mod report;
pub mod tokens;
pub mod types;

pub use error::*;
pub use model::*;
pub use report::*;
pub use tokens::*;
pub use types::*;
