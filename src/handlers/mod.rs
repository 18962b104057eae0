// handlers/mod.rs - 3-Tier Handler Architecture
//
// Public (no auth) → Protected (JWT auth, owner-or-admin) → Elevated (admin JWT)
pub mod public;    // Tier 1: No authentication required (/api/auth/login)
pub mod protected; // Tier 2: JWT authentication required (/api/auth/whoami, /api/institutions/*)
pub mod elevated;  // Tier 3: Admin JWT required (/api/admin/*)

pub mod status;
