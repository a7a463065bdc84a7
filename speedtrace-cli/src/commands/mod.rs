pub mod analyze;
pub mod validate;

pub use analyze::run_analyze;
pub use validate::run_validate;
