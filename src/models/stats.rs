//! Dashboard figures. The values are placeholders derived from the
//! current store contents, not real sales analytics.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCount {
    pub month: &'static str,
    pub count: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthAmount {
    pub month: &'static str,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopInstitution {
    pub id: String,
    pub name: String,
    pub visitors: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_revenue: f64,
    pub tickets_sold: f64,
    pub total_users: usize,
    pub pending_institutions: usize,
    pub user_growth_data: Vec<MonthCount>,
    pub top_institutions: Vec<TopInstitution>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionStats {
    pub visitors: u64,
    pub revenue: f64,
    pub tickets_sold: usize,
    pub visitor_trend: Vec<MonthCount>,
    pub revenue_trend: Vec<MonthAmount>,
}
