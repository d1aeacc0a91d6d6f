/// Page the login screen sends coaches to
pub const DASHBOARD_PAGE: &str = "coach_dashboard.html";

/// Page the dashboard falls back to without a coach id
pub const LOGIN_PAGE: &str = "index.html";

/// Query parameter carrying the coach id on the dashboard URL
pub const COACH_ID_PARAM: &str = "coach_id";

// Empty-state placeholders
pub const NO_COACHEES: &str = "No coachees yet.";
pub const NO_SESSIONS: &str = "No sessions yet.";
pub const NO_ASSIGNMENTS: &str = "No assignments yet.";
pub const NO_UPCOMING_SESSIONS: &str = "No upcoming sessions.";
pub const NO_BIO: &str = "No bio available";
pub const NO_ORGANIZATIONS: &str = "No organizations yet.";
pub const NO_SUMMARY: &str = "No summary yet.";

// Error placeholders
pub const COACHEES_LOAD_FAILED: &str = "Could not load coachees.";
pub const SESSIONS_LOAD_FAILED: &str = "Could not load sessions.";
pub const ASSIGNMENTS_LOAD_FAILED: &str = "Could not load assignments.";

// DOM ids of the dashboard regions
pub const ROOT_ID: &str = "app";
pub const PROFILE_ID: &str = "coach-profile";
pub const COACHEE_LIST_ID: &str = "coachee-list";
pub const COACH_SESSIONS_ID: &str = "coach-sessions";
pub const ASSIGNMENT_LIST_ID: &str = "assignment-list";
pub const ORGANIZATION_LIST_ID: &str = "organization-list";
pub const SESSION_LIST_ID: &str = "session-list";
pub const MODAL_CONTAINER_ID: &str = "modal-container";
pub const MODAL_BACKDROP_ID: &str = "modal-backdrop";
pub const TOAST_HOST_ID: &str = "toast-host";
pub const SERVER_STATUS_ID: &str = "server-status";

/// Class shared by every organization `<select>` so they refresh together
pub const ORGANIZATION_SELECT_CLASS: &str = "organization-select";
