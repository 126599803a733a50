use crate::common::*;
use crate::dto::chart_bar::*;
use crate::traits::service_traits::summary_service::*;

pub const SUMMARY_HEADER: &str = "--- SIMULATION RESULTS ---";

#[derive(Debug, Clone, Default, new)]
pub struct SummaryServiceImpl;

impl SummaryServiceImpl {
    #[doc = r#"
        콘솔에 출력할 결과 요약 문장들을 만드는 함수.

        라벨 열은 가장 긴 `<label> Throughput:` 길이에 맞춰 채우므로 값들이 같은 열에서 시작한다.
    "#]
    pub fn build_summary_lines(&self, bars: &[ChartBar], output_path: &Path) -> Vec<String> {
        let captions: Vec<String> = bars
            .iter()
            .map(|bar| format!("{} Throughput:", bar.label()))
            .collect();

        let width: usize = captions.iter().map(|c| c.chars().count()).max().unwrap_or(0);

        let mut lines: Vec<String> = Vec::with_capacity(bars.len() + 2);
        lines.push(SUMMARY_HEADER.to_string());

        for (caption, bar) in captions.iter().zip(bars) {
            lines.push(format!("{:<width$} {:.3} Mbps", caption, bar.value(), width = width));
        }

        lines.push(format!("Chart saved as '{}'", output_path.display()));

        lines
    }

    pub fn build_insufficient_data_lines(&self, report_path: &Path) -> Vec<String> {
        vec![
            format!("Error: Insufficient data found in {}.", report_path.display()),
            "Please ensure the NS-3 simulation ran correctly and produced FlowStats data."
                .to_string(),
        ]
    }
}

impl SummaryService for SummaryServiceImpl {
    fn print_summary(&self, bars: &[ChartBar], output_path: &Path) {
        for line in self.build_summary_lines(bars, output_path) {
            info!("[SummaryServiceImpl->print_summary] {}", line);
            println!("{}", line);
        }
    }

    fn print_insufficient_data(&self, report_path: &Path) {
        for line in self.build_insufficient_data_lines(report_path) {
            warn!("[SummaryServiceImpl->print_insufficient_data] {}", line);
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars() -> Vec<ChartBar> {
        vec![
            ChartBar::new("TCP Cubic".to_string(), 10.0, "#3498db".to_string()),
            ChartBar::new("TCP BBR".to_string(), 20.0, "#e74c3c".to_string()),
        ]
    }

    #[test]
    fn summary_lines_line_up() {
        let lines: Vec<String> =
            SummaryServiceImpl::new().build_summary_lines(&bars(), Path::new("simulation_chart.png"));

        assert_eq!(
            lines,
            vec![
                "--- SIMULATION RESULTS ---".to_string(),
                "TCP Cubic Throughput: 10.000 Mbps".to_string(),
                "TCP BBR Throughput:   20.000 Mbps".to_string(),
                "Chart saved as 'simulation_chart.png'".to_string(),
            ]
        );
    }

    #[test]
    fn values_are_rounded_to_three_places() {
        let bars: Vec<ChartBar> = vec![
            ChartBar::new("TCP Cubic".to_string(), 1.23456, "#3498db".to_string()),
            ChartBar::new("TCP BBR".to_string(), 0.0, "#e74c3c".to_string()),
        ];

        let lines: Vec<String> =
            SummaryServiceImpl::new().build_summary_lines(&bars, Path::new("simulation_chart.png"));

        assert_eq!(lines[1], "TCP Cubic Throughput: 1.235 Mbps");
        assert_eq!(lines[2], "TCP BBR Throughput:   0.000 Mbps");
    }

    #[test]
    fn insufficient_data_lines() {
        let lines: Vec<String> =
            SummaryServiceImpl::new().build_insufficient_data_lines(Path::new("results.xml"));

        assert_eq!(
            lines,
            vec![
                "Error: Insufficient data found in results.xml.".to_string(),
                "Please ensure the NS-3 simulation ran correctly and produced FlowStats data."
                    .to_string(),
            ]
        );
    }
}
