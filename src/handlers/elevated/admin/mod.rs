pub mod complaints;   // GET /api/admin/complaints, POST .../:complaint_id/resolve
pub mod institutions; // GET .../verified|pending, POST .../:institution_id/approve|reject
pub mod stats;        // GET /api/admin/stats
