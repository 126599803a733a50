use crate::common::*;

use crate::model::configs::{chart_config::*, log_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Default, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct TotalConfig {
    pub chart: ChartConfig,
    pub log: LogConfig,
}

#[doc = "차트 출력 설정 정보"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

#[doc = "로그 설정 정보"]
pub fn get_log_config_info() -> &'static LogConfig {
    &TOTAL_CONFIG.log
}

impl TotalConfig {
    fn new() -> Self {
        let config_path: &str = match FLOWMON_CONFIG_PATH.as_deref() {
            Some(config_path) => config_path,
            None => return TotalConfig::default(),
        };

        match read_toml_from_file::<TotalConfig>(config_path) {
            Ok(config) => config,
            Err(e) => {
                let err_msg: &str =
                    "Failed to convert the data from FLOWMON_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                eprintln!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: TotalConfig = toml::from_str(
            r#"
            [chart]
            show_chart = false

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert!(!config.chart().show_chart());
        assert_eq!(config.chart().width(), &800);
        assert_eq!(config.chart().cubic_colour(), "#3498db");
        assert_eq!(config.log().level(), "debug");
        assert_eq!(config.log().directory(), "logs");
    }

    #[test]
    fn empty_config_is_default() {
        let config: TotalConfig = toml::from_str("").unwrap();

        assert_eq!(
            config.chart().title(),
            "TCP Performance Comparison: Cubic vs BBR (5% Loss)"
        );
        assert_eq!(config.chart().height(), &600);
        assert_eq!(config.log().keep_files(), &10);
    }
}
