use crate::common::*;

use crate::traits::repository_traits::report_repository::*;

#[doc = "FlowMonitor 보고서 파일을 로컬 파일시스템에서 읽어오는 저장소"]
#[derive(Debug, Clone, Default, new)]
pub struct ReportRepositoryImpl;

#[async_trait]
impl ReportRepository for ReportRepositoryImpl {
    #[doc = "Path existence check only. A directory counts as existing and fails later on read."]
    async fn report_exists(&self, report_path: &Path) -> bool {
        tokio::fs::try_exists(report_path).await.unwrap_or(false)
    }

    async fn read_report(&self, report_path: &Path) -> Result<String, anyhow::Error> {
        tokio::fs::read_to_string(report_path)
            .await
            .with_context(|| {
                format!(
                    "[ReportRepositoryImpl->read_report] Failed to read {:?}",
                    report_path
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn reads_existing_report() {
        let dir: TempDir = TempDir::new().unwrap();
        let path: PathBuf = dir.path().join("results.xml");
        tokio::fs::write(&path, "<FlowMonitor/>").await.unwrap();

        let repository: ReportRepositoryImpl = ReportRepositoryImpl::new();

        assert!(repository.report_exists(&path).await);
        assert_eq!(repository.read_report(&path).await.unwrap(), "<FlowMonitor/>");
    }

    #[tokio::test]
    async fn missing_report() {
        let dir: TempDir = TempDir::new().unwrap();
        let path: PathBuf = dir.path().join("results.xml");

        let repository: ReportRepositoryImpl = ReportRepositoryImpl::new();

        assert!(!repository.report_exists(&path).await);
        assert!(repository.read_report(&path).await.is_err());
    }
}
