use crate::common::*;

use crate::utils_modules::{time_utils::*, traits::*};

pub const BITS_PER_BYTE: f64 = 8.0;
pub const BITS_PER_MEGABIT: f64 = 1_000_000.0;

#[doc = r#"
    `FlowStats/Flow` 요소 하나에서 읽어온 값들.

    # Fields
    * `flow_id` - `flowId` 속성
    * `time_first_rx_secs` - `timeFirstRxPacket` (초 단위로 변환됨)
    * `time_last_rx_secs` - `timeLastRxPacket` (초 단위로 변환됨)
    * `rx_bytes` - `rxBytes` 속성
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct FlowStatsRecord {
    pub flow_id: i64,
    pub time_first_rx_secs: f64,
    pub time_last_rx_secs: f64,
    pub rx_bytes: f64,
}

impl FlowStatsRecord {
    #[doc = "Reads only `flowId`, so filtered-out flows never need their other attributes."]
    pub fn read_flow_id(node: &Node) -> anyhow::Result<i64> {
        let raw: &str = required_attribute(node, "flowId")?;

        raw.trim().parse::<i64>().map_err(|e| {
            anyhow!(
                "[FlowStatsRecord->read_flow_id] flowId '{}' is not an integer: {}",
                raw,
                e
            )
        })
    }

    pub fn duration_secs(&self) -> f64 {
        self.time_last_rx_secs - self.time_first_rx_secs
    }

    #[doc = r#"
        수신 구간 동안의 평균 처리량 (Mbps).

        (rxBytes * 8) / (duration * 10^6). 수신 구간이 0 이하이면 정확히 0 을 반환한다.
    "#]
    pub fn throughput_mbps(&self) -> f64 {
        let duration: f64 = self.duration_secs();

        if duration > 0.0 {
            (self.rx_bytes * BITS_PER_BYTE) / (duration * BITS_PER_MEGABIT)
        } else {
            0.0
        }
    }
}

impl FromXmlNode for FlowStatsRecord {
    fn from_xml_node(node: &Node) -> Result<Self, anyhow::Error> {
        /* 1) flowId */
        let flow_id: i64 = Self::read_flow_id(node)?;

        /* 2) timeFirstRxPacket / timeLastRxPacket */
        let time_first_rx_secs: f64 =
            parse_ns_timestamp_secs(required_attribute(node, "timeFirstRxPacket")?)
                .with_context(|| {
                    format!("[FlowStatsRecord->from_xml_node] flowId {}: timeFirstRxPacket", flow_id)
                })?;

        let time_last_rx_secs: f64 =
            parse_ns_timestamp_secs(required_attribute(node, "timeLastRxPacket")?)
                .with_context(|| {
                    format!("[FlowStatsRecord->from_xml_node] flowId {}: timeLastRxPacket", flow_id)
                })?;

        /* 3) rxBytes */
        let raw_rx_bytes: &str = required_attribute(node, "rxBytes")?;
        let rx_bytes: f64 = raw_rx_bytes.trim().parse::<f64>().map_err(|e| {
            anyhow!(
                "[FlowStatsRecord->from_xml_node] flowId {}: rxBytes '{}' is not numeric: {}",
                flow_id,
                raw_rx_bytes,
                e
            )
        })?;

        Ok(FlowStatsRecord::new(
            flow_id,
            time_first_rx_secs,
            time_last_rx_secs,
            rx_bytes,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_from(xml: &str) -> anyhow::Result<FlowStatsRecord> {
        let doc: Document = Document::parse(xml).unwrap();
        FlowStatsRecord::from_xml_node(&doc.root_element())
    }

    #[test]
    fn one_microsecond_window() {
        let record: FlowStatsRecord = record_from(
            r#"<Flow flowId="1" timeFirstRxPacket="1000ns" timeLastRxPacket="2000ns" rxBytes="125000"/>"#,
        )
        .unwrap();

        assert_eq!(record.flow_id(), &1);
        assert!((record.duration_secs() - 1e-6).abs() < 1e-15);
        assert!((record.throughput_mbps() - 1_000_000.0).abs() < 1e-3);
    }

    #[test]
    fn non_positive_duration_is_zero() {
        let reversed: FlowStatsRecord = record_from(
            r#"<Flow flowId="2" timeFirstRxPacket="2000ns" timeLastRxPacket="1000ns" rxBytes="125000"/>"#,
        )
        .unwrap();
        let empty: FlowStatsRecord = record_from(
            r#"<Flow flowId="2" timeFirstRxPacket="+0.0ns" timeLastRxPacket="+0.0ns" rxBytes="0"/>"#,
        )
        .unwrap();

        assert_eq!(reversed.throughput_mbps(), 0.0);
        assert_eq!(empty.throughput_mbps(), 0.0);
    }

    #[test]
    fn half_second_window() {
        let record: FlowStatsRecord = record_from(
            r#"<Flow flowId="1" timeFirstRxPacket="+1000000000.0ns" timeLastRxPacket="+1500000000.0ns" rxBytes="625000"/>"#,
        )
        .unwrap();

        assert!((record.throughput_mbps() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn missing_attribute_names_it() {
        let err: anyhow::Error = record_from(
            r#"<Flow flowId="1" timeFirstRxPacket="1000ns" timeLastRxPacket="2000ns"/>"#,
        )
        .unwrap_err();

        assert!(format!("{:?}", err).contains("rxBytes"));
    }

    #[test]
    fn non_integer_flow_id_is_an_error() {
        assert!(record_from(
            r#"<Flow flowId="1.0" timeFirstRxPacket="1000ns" timeLastRxPacket="2000ns" rxBytes="1"/>"#,
        )
        .is_err());
    }
}
