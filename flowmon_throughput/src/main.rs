/*
Author      : Seunghwan Shin
Create date : 2026-10-18
Description : NS-3 FlowMonitor 보고서(results.xml)에서 TCP Cubic / TCP BBR flow 의 처리량을 계산하고
              비교 막대 차트(simulation_chart.png)와 요약을 출력하는 프로그램

History     : 2026-10-18 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::report_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod model;
use model::configs::total_config::*;

mod dto;

mod enums;
use enums::tcp_variant::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, flowmon_service_impl::*, summary_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Flowmon throughput analysis start!");

    /* 의존 주입 */
    let flowmon_service: FlowmonServiceImpl<ReportRepositoryImpl> = FlowmonServiceImpl::new(
        ReportRepositoryImpl::new(),
        get_target_flow_ids().to_vec(),
    );
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(get_chart_config_info().clone());
    let summary_service: SummaryServiceImpl = SummaryServiceImpl::new();

    let main_controller: MainController<
        FlowmonServiceImpl<ReportRepositoryImpl>,
        ChartServiceImpl,
        SummaryServiceImpl,
    > = MainController::new(
        flowmon_service,
        chart_service,
        summary_service,
        get_chart_config_info().clone(),
        PathBuf::from(FLOWMON_REPORT_PATH),
        PathBuf::from(CHART_OUTPUT_PATH),
    );

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });

    info!("Flowmon throughput analysis finished.");
}
