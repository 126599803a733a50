pub mod chart_config;
pub mod log_config;
pub mod total_config;
