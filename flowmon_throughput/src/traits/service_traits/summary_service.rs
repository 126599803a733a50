use crate::common::*;

use crate::dto::chart_bar::*;

pub trait SummaryService: Send + Sync {
    fn print_summary(&self, bars: &[ChartBar], output_path: &Path);
    fn print_insufficient_data(&self, report_path: &Path);
}
