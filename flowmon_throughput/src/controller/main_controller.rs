use crate::common::*;

use crate::model::configs::chart_config::*;

use crate::dto::{chart_bar::*, throughput_sample::*};

use crate::enums::tcp_variant::*;

use crate::traits::service_traits::{chart_service::*, flowmon_service::*, summary_service::*};

pub const THROUGHPUT_Y_LABEL: &str = "Throughput (Mbps)";

#[derive(Debug, new)]
pub struct MainController<F: FlowmonService, C: ChartService, S: SummaryService> {
    flowmon_service: F,
    chart_service: C,
    summary_service: S,
    chart_config: ChartConfig,
    report_path: PathBuf,
    chart_path: PathBuf,
}

impl<F: FlowmonService, C: ChartService, S: SummaryService> MainController<F, C, S> {
    #[doc = r#"
        보고서를 한 번 읽고, 결과를 한 번 출력하는 메인 작업.

        1. `report_path` 의 FlowMonitor 보고서에서 대상 flow 들의 처리량을 읽어온다
           (파일이 없으면 빈 결과)
        2. 결과가 2개 미만이면 안내 문구만 출력하고 정상 종료한다
        3. 2개 이상이면 앞의 두 값을 라벨에 순서대로 묶어 막대 차트를 저장하고,
           뷰어로 띄운 뒤 요약을 출력한다

        # Returns
        * `anyhow::Result<()>` - 보고서 형식 오류나 차트 저장 실패 시 Err
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        /* 1. 보고서 읽기 */
        let throughputs: ThroughputSeries = self
            .flowmon_service
            .read_throughputs(&self.report_path)
            .await?;

        /* 2. 데이터 부족 */
        if throughputs.len() < TcpVariant::ALL.len() {
            warn!(
                "[MainController->main_task] Only {} target flow(s) found. Chart is not generated.",
                throughputs.len()
            );
            self.summary_service.print_insufficient_data(&self.report_path);
            return Ok(());
        }

        /* 3. 차트 생성, 표시, 요약 출력 */
        let bars: Vec<ChartBar> = self.bind_chart_bars(&throughputs);

        self.chart_service
            .generate_bar_chart(
                self.chart_config.title(),
                &bars,
                &self.chart_path,
                THROUGHPUT_Y_LABEL,
            )
            .await?;

        if let Err(e) = self.chart_service.show_chart(&self.chart_path).await {
            warn!("[MainController->main_task] Could not display chart: {:?}", e);
        }

        self.summary_service.print_summary(&bars, &self.chart_path);

        Ok(())
    }

    #[doc = r#"
        Binds labels to samples by position: the first sample is charted as Cubic and the
        second as BBR, whatever their flowId. Mismatches and surplus samples are only logged.
    "#]
    fn bind_chart_bars(&self, throughputs: &[ThroughputSample]) -> Vec<ChartBar> {
        if throughputs.len() > TcpVariant::ALL.len() {
            warn!(
                "[MainController->bind_chart_bars] {} samples found, only the first {} are charted.",
                throughputs.len(),
                TcpVariant::ALL.len()
            );
        }

        TcpVariant::ALL
            .iter()
            .zip(throughputs)
            .map(|(variant, sample)| {
                if *sample.flow_id() != variant.flow_id() {
                    warn!(
                        "[MainController->bind_chart_bars] '{}' expects flowId {} but was bound to flowId {}",
                        variant.label(),
                        variant.flow_id(),
                        sample.flow_id()
                    );
                }

                ChartBar::new(
                    variant.label().to_string(),
                    *sample.throughput_mbps(),
                    variant.colour(&self.chart_config).to_string(),
                )
            })
            .collect()
    }
}
