use crate::common::*;

use crate::traits::{
    repository_traits::report_repository::*, service_traits::flowmon_service::*,
};

use crate::dto::{flow_stats_record::*, throughput_sample::*};

use crate::utils_modules::traits::*;

pub const FLOW_STATS_TAG: &str = "FlowStats";
pub const FLOW_TAG: &str = "Flow";

#[derive(Debug, new)]
pub struct FlowmonServiceImpl<R: ReportRepository> {
    report_repository: R,
    target_flow_ids: Vec<i64>,
}

impl<R: ReportRepository> FlowmonServiceImpl<R> {
    #[doc = r#"
        FlowMonitor XML 문자열에서 대상 flow 들의 처리량을 문서 순서대로 계산하는 함수.

        1. XML 을 트리로 파싱한다 (형식이 잘못되면 오류)
        2. 루트 아래의 `FlowStats` 요소의 자식 `Flow` 요소들을 문서 순서대로 순회한다
        3. `flowId` 가 대상 목록에 없으면 건너뛴다
        4. 나머지 속성을 읽어 처리량(Mbps)을 계산하고 결과에 추가한다

        중복 제거나 정렬은 하지 않는다.
    "#]
    pub fn parse_flow_stats(&self, report_xml: &str) -> anyhow::Result<ThroughputSeries> {
        let parsing_options: ParsingOptions = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };

        let doc: Document = Document::parse_with_options(report_xml, parsing_options)
            .context("[FlowmonServiceImpl->parse_flow_stats] Report is not well-formed XML")?;

        let mut throughputs: ThroughputSeries = Vec::new();

        for flow_node in find_flow_stats_nodes(&doc) {
            let flow_id: i64 = FlowStatsRecord::read_flow_id(&flow_node)?;

            if !self.target_flow_ids.contains(&flow_id) {
                continue;
            }

            let record: FlowStatsRecord = FlowStatsRecord::from_xml_node(&flow_node)?;
            let throughput_mbps: f64 = record.throughput_mbps();

            info!(
                "[FlowmonServiceImpl->parse_flow_stats] flowId={} rxBytes={} duration={:.9}s throughput={:.3}Mbps",
                flow_id,
                record.rx_bytes(),
                record.duration_secs(),
                throughput_mbps
            );

            throughputs.push(ThroughputSample::new(flow_id, throughput_mbps));
        }

        Ok(throughputs)
    }
}

#[doc = "`.//FlowStats/Flow` - every Flow element whose parent is a FlowStats element below the root"]
fn find_flow_stats_nodes<'a, 'input>(doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
    let root: Node<'a, 'input> = doc.root_element();

    root.descendants()
        .filter(|node| node.is_element() && node.has_tag_name(FLOW_TAG))
        .filter(|node| {
            node.parent_element()
                .map(|parent| parent.has_tag_name(FLOW_STATS_TAG) && parent != root)
                .unwrap_or(false)
        })
        .collect()
}

#[async_trait]
impl<R: ReportRepository> FlowmonService for FlowmonServiceImpl<R> {
    async fn read_throughputs(&self, report_path: &Path) -> anyhow::Result<ThroughputSeries> {
        if !self.report_repository.report_exists(report_path).await {
            println!("Error: {} not found.", report_path.display());
            error!(
                "[FlowmonServiceImpl->read_throughputs] {:?} not found.",
                report_path
            );
            return Ok(Vec::new());
        }

        let report_xml: String = self.report_repository.read_report(report_path).await?;

        let throughputs: ThroughputSeries = self.parse_flow_stats(&report_xml).with_context(|| {
            format!(
                "[FlowmonServiceImpl->read_throughputs] Failed to read flow stats from {:?}",
                report_path
            )
        })?;

        info!(
            "[FlowmonServiceImpl->read_throughputs] {} target flow(s) found in {:?}",
            throughputs.len(),
            report_path
        );

        Ok(throughputs)
    }
}
