pub mod services;
pub mod utils;
pub mod validation;
