pub mod presentation;
pub mod dashboard_viewmodel;
pub mod login_viewmodel;

pub use presentation::*;
pub use dashboard_viewmodel::{DashboardViewModel, Prompts, DELETE_SESSION_PROMPT, PAST_EDIT_PROMPT};
pub use login_viewmodel::LoginViewModel;
