pub mod form_fields;
pub mod modal_shell;

pub use form_fields::*;
pub use modal_shell::*;
