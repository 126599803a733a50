pub mod chart_bar;
pub mod flow_stats_record;
pub mod throughput_sample;
