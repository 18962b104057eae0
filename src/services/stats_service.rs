use std::sync::Arc;

use crate::models::stats::{MonthAmount, MonthCount, TopInstitution};
use crate::models::{AdminStats, Institution, InstitutionStats, InstitutionStatus, Ticket};
use crate::store::{PrincipalRepository, Repository, ScopedRepository};

use super::{ServiceError, ServiceResult};

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const USER_GROWTH: [f64; 6] = [10.0, 15.0, 25.0, 30.0, 40.0, 55.0];
const VISITOR_SHARE: [f64; 6] = [0.10, 0.12, 0.15, 0.13, 0.18, 0.22];
const REVENUE_SHARE: [f64; 6] = [0.05, 0.06, 0.08, 0.07, 0.10, 0.11];

/// Share of listed tickets assumed sold.
const SOLD_RATIO: f64 = 0.7;
const TICKETS_SOLD_PER_LISTING: usize = 30;

/// Placeholder dashboard figures derived from store contents.
#[derive(Clone)]
pub struct StatsService {
    principals: Arc<dyn PrincipalRepository>,
    institutions: Arc<dyn Repository<Institution>>,
    tickets: Arc<dyn ScopedRepository<Ticket>>,
}

impl StatsService {
    pub fn new(
        principals: Arc<dyn PrincipalRepository>,
        institutions: Arc<dyn Repository<Institution>>,
        tickets: Arc<dyn ScopedRepository<Ticket>>,
    ) -> Self {
        Self {
            principals,
            institutions,
            tickets,
        }
    }

    pub async fn admin_stats(&self) -> ServiceResult<AdminStats> {
        let institutions = self.institutions.all().await?;
        let tickets = self.tickets.all().await?;

        let mut verified: Vec<&Institution> = institutions.iter().filter(|i| i.is_verified).collect();
        verified.sort_by(|a, b| b.total_visitors.cmp(&a.total_visitors));

        Ok(AdminStats {
            total_revenue: tickets.iter().map(|t| t.price).sum::<f64>() * SOLD_RATIO,
            tickets_sold: tickets.len() as f64 * SOLD_RATIO,
            total_users: self.principals.count().await?,
            pending_institutions: institutions
                .iter()
                .filter(|i| i.status == InstitutionStatus::Pending)
                .count(),
            user_growth_data: MONTHS
                .into_iter()
                .zip(USER_GROWTH)
                .map(|(month, count)| MonthCount { month, count })
                .collect(),
            top_institutions: verified
                .into_iter()
                .take(3)
                .map(|i| TopInstitution {
                    id: i.id.clone(),
                    name: i.name.clone(),
                    visitors: i.total_visitors,
                    revenue: i.entry_fee * i.total_visitors as f64 * 0.5,
                })
                .collect(),
        })
    }

    pub async fn institution_stats(&self, institution_id: &str) -> ServiceResult<InstitutionStats> {
        let institution = self
            .institutions
            .find(institution_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Institution not found".to_string()))?;
        let listed = self.tickets.list_for(institution_id).await?.len();

        let visitors = institution.total_visitors as f64;
        let gross = institution.entry_fee * visitors;
        let revenue_trend: Vec<MonthAmount> = MONTHS
            .into_iter()
            .zip(REVENUE_SHARE)
            .map(|(month, share)| MonthAmount {
                month,
                amount: gross * share,
            })
            .collect();

        Ok(InstitutionStats {
            visitors: institution.total_visitors,
            revenue: revenue_trend.iter().map(|m| m.amount).sum(),
            tickets_sold: listed * TICKETS_SOLD_PER_LISTING,
            visitor_trend: MONTHS
                .into_iter()
                .zip(VISITOR_SHARE)
                .map(|(month, share)| MonthCount {
                    month,
                    count: visitors * share,
                })
                .collect(),
            revenue_trend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{GALLERY_ID, MUSEUM_ID};
    use crate::store::Store;

    fn service() -> StatsService {
        let store = Store::seeded(None).unwrap();
        StatsService::new(store.principals, store.institutions, store.tickets)
    }

    #[tokio::test]
    async fn admin_stats_rank_verified_institutions_by_visitors() {
        let stats = service().admin_stats().await.unwrap();

        assert_eq!(stats.pending_institutions, 1);
        assert_eq!(stats.total_users, 4);
        assert_eq!(stats.user_growth_data.len(), 6);
        assert_eq!(stats.top_institutions[0].id, GALLERY_ID);
        assert_eq!(stats.top_institutions.len(), 2);
        assert!((stats.total_revenue - 28.0 * SOLD_RATIO).abs() < 1e-9);
    }

    #[tokio::test]
    async fn institution_stats_count_own_tickets() {
        let stats = service().institution_stats(MUSEUM_ID).await.unwrap();

        assert_eq!(stats.visitors, 50);
        assert_eq!(stats.tickets_sold, 2 * TICKETS_SOLD_PER_LISTING);
        assert_eq!(stats.visitor_trend.len(), 6);
        let trend_total: f64 = stats.revenue_trend.iter().map(|m| m.amount).sum();
        assert!((stats.revenue - trend_total).abs() < 1e-9);
    }

    #[tokio::test]
    async fn institution_stats_for_unknown_id_is_not_found() {
        assert!(matches!(
            service().institution_stats("nope").await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
