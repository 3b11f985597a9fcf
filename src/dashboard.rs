use chrono::{DateTime, Utc};

use crate::errors::PosError;
use crate::models::{DashboardStats, TodaySalesSummary};
use crate::services::SalesService;

/// Read-only view over the Sales Service's precomputed aggregates. The
/// client never recomputes revenue or counts; when a refresh fails the last
/// stats stay on display, flagged by their `fetched_at` timestamp.
#[derive(Debug, Default)]
pub struct DashboardAggregator {
    stats: Option<DashboardStats>,
    fetched_at: Option<DateTime<Utc>>,
}

impl DashboardAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh<S: SalesService>(
        &mut self,
        service: &S,
    ) -> Result<&DashboardStats, PosError> {
        let stats = service.dashboard_stats().await?;
        self.fetched_at = Some(Utc::now());
        Ok(self.stats.insert(stats))
    }

    /// The today_sales summary is fetched on demand and not cached.
    pub async fn today_summary<S: SalesService>(
        &self,
        service: &S,
    ) -> Result<TodaySalesSummary, PosError> {
        service.today_sales().await
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}
