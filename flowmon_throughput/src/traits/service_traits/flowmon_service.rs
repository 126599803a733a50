use crate::common::*;

use crate::dto::throughput_sample::*;

#[async_trait]
pub trait FlowmonService: Send + Sync {
    #[doc = "
        Read a FlowMonitor report and compute the throughput of every target flow
        # Arguments
        * `report_path` - Path of the FlowMonitor XML report
        # Returns
        * Samples in document order. Empty (not an error) when the report does not exist.
    "]
    async fn read_throughputs(&self, report_path: &Path) -> anyhow::Result<ThroughputSeries>;
}
