use crate::common::*;

#[doc = r#"
    NS-3 시뮬레이션이 FlowMonitor 결과를 직렬화하는 보고서 파일 경로.

    시뮬레이션 스크립트가 `SerializeToXmlFile("results.xml", ..)` 로 작업 디렉토리에
    기록하므로, 이 프로그램도 같은 이름을 고정값으로 사용한다. 설정으로 바꿀 수 없다.
"#]
pub const FLOWMON_REPORT_PATH: &str = "results.xml";

#[doc = "Bar chart image written on every successful run (overwritten)."]
pub const CHART_OUTPUT_PATH: &str = "simulation_chart.png";

#[doc = r#"
    Optional path to the TOML file holding chart and log settings.

    `FLOWMON_CONFIG_PATH` 환경변수가 없으면 `None` 이 되고, 이 경우 모든 설정은
    기본값을 사용한다. once_lazy 로 최초 접근 시에만 읽는다.
"#]
pub static FLOWMON_CONFIG_PATH: once_lazy<Option<String>> =
    once_lazy::new(|| get_env_or_none("FLOWMON_CONFIG_PATH"));

#[doc = "환경변수를 읽어오고, 설정되지 않았거나 비어있으면 None 을 반환하는 함수"]
fn get_env_or_none(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Some(val),
        _ => {
            info!("[get_env_or_none] '{}' is not set. Default values will be used.", key);
            None
        }
    }
}
