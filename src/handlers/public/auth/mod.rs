// Token acquisition. The only route reachable without a token.
pub mod login; // POST /api/auth/login - authenticate and get JWT

pub use login::login_post;
