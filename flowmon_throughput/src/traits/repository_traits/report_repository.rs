use crate::common::*;

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn report_exists(&self, report_path: &Path) -> bool;
    async fn read_report(&self, report_path: &Path) -> Result<String, anyhow::Error>;
}
