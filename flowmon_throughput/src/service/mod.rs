pub mod chart_service_impl;
pub mod flowmon_service_impl;
pub mod summary_service_impl;
