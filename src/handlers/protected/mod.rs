// handlers/protected/mod.rs - Tier 2: JWT authentication required
pub mod auth;
pub mod institution;
