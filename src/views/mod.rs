pub mod shared;
pub mod login;
pub mod dashboard;
pub mod profile;
pub mod coachee_list;
pub mod coachee_form;
pub mod organization_form;
pub mod sessions_modal;
pub mod session_row;
pub mod session_form;
pub mod session_detail;
pub mod coach_sessions;
pub mod assignment_list;

pub use login::render_login;
pub use dashboard::render_dashboard;
pub use profile::{render_profile, render_profile_editor};
pub use coachee_list::render_coachee_list;
pub use coachee_form::render_coachee_editor;
pub use organization_form::{render_organization_form, render_organization_list, render_organizations_panel};
pub use sessions_modal::{render_session_list, render_sessions_modal};
pub use session_row::{render_attachment_links, render_session_row};
pub use session_form::{checked_attachment_positions, render_session_editor};
pub use session_detail::render_session_detail;
pub use coach_sessions::render_coach_sessions;
pub use assignment_list::render_assignment_list;
