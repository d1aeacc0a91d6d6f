pub mod api_client;
pub mod error;
pub mod form_data;
pub mod routes;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use form_data::{build_form_data, named_files, selected_files};
pub use routes::ApiRoutes;
