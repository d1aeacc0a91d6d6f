// ============================================================================
// DOM MODULE - Helpers for DOM manipulation
// ============================================================================

pub mod element;
pub mod builder;
pub mod events;
pub mod dialogs;
pub mod modal;
pub mod incremental;

pub use element::*;
pub use builder::*;
pub use events::*;
pub use dialogs::*;
pub use modal::*;
pub use incremental::*;
