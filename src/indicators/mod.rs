pub mod error;
pub mod validation;

pub mod volatility;

pub use error::ValidationError;
pub use validation::*;
pub use volatility::*;
