pub mod exempt;
pub mod rule;
pub mod scanner;
pub mod types;

pub use exempt::*;
pub use rule::*;
pub use scanner::*;
pub use types::*;
