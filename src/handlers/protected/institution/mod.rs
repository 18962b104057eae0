// Institution dashboard routes. Every handler takes an `InstitutionScope`,
// so the owner-or-admin check has passed before any of them run.
pub mod announcements; // /api/institutions/:institution_id/announcements[/:announcement_id]
pub mod profile;       // /api/institutions/:institution_id
pub mod stats;         // /api/institutions/:institution_id/stats
pub mod tickets;       // /api/institutions/:institution_id/tickets[/:ticket_id]
