// handlers/elevated/mod.rs - Tier 3: admin role required
//
// Routes here sit behind both jwt_auth_middleware and require_admin.
pub mod admin;
