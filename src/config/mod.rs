mod defaults;
mod types;
mod validation;

pub use types::ManualConfig;
pub use validation::validate_config;
