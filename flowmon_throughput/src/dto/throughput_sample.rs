use crate::common::*;

#[doc = "One throughput value (Mbps) together with the flow it came from."]
#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct ThroughputSample {
    pub flow_id: i64,
    pub throughput_mbps: f64,
}

#[doc = "Samples in document order. Normally 0..=2 long; duplicated flow ids make it longer."]
pub type ThroughputSeries = Vec<ThroughputSample>;
