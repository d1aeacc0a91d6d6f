pub mod coach;
pub mod coachee;
pub mod session;
pub mod attachments;
pub mod organization;
pub mod assignment;
pub mod auth;
pub mod forms;

pub use coach::Coach;
pub use coachee::{Coachee, SessionRef, sort_coachees};
pub use session::{Session, SessionLabel};
pub use attachments::{AttachmentList, filename_from_url};
pub use organization::{Organization, organization_name};
pub use assignment::Assignment;
pub use auth::{LoginDestination, LoginForm, LoginResponse, Role};
pub use forms::{CoacheeFields, FormEntries, OrganizationFields, ProfileFields, SessionFields};
