pub mod auth;
pub mod guard;
pub mod response;

pub use auth::jwt_auth_middleware;
pub use guard::{require_admin, InstitutionScope};
pub use response::{Acknowledgement, ApiResponse, ApiResult};
