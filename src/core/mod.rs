pub mod package;
pub mod validate;

pub use package::Package;
pub use validate::{is_separator, is_valid_name};
