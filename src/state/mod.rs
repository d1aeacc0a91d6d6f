// ============================================================================
// STATE MODULE - State management with Rc<RefCell> + change notifications
// ============================================================================

pub mod loadable;
pub mod roster_state;
pub mod session_state;
pub mod modal_state;
pub mod app_state;

pub use loadable::*;
pub use roster_state::*;
pub use session_state::*;
pub use modal_state::*;
pub use app_state::*;
