use crate::common::*;
use crate::dto::chart_bar::*;
use crate::model::configs::chart_config::*;
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::colour_utils::*;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const Y_LABEL_COUNT: usize = 10;
const Y_HEADROOM: f64 = 0.15;
const BAR_MARGIN_PX: u32 = 60;
/* 굵은 글꼴이 없으면 일반 글꼴로 떨어지므로, 1px 씩 밀어 겹쳐 그려 굵게 보이게 한다 */
const ANNOTATION_STROKE_OFFSETS: [i32; 2] = [0, 1];

#[doc = "Value label drawn above each bar"]
pub fn format_bar_annotation(value: f64) -> String {
    format!("{:.3} Mbps", value)
}

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    chart_config: ChartConfig,
}

impl ChartServiceImpl {
    #[doc = "Helper function to determine Y-axis range, leaving room above the tallest bar for its annotation"]
    fn calculate_y_range(&self, values: &[f64]) -> (f64, f64) {
        let max_val: f64 = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max);

        if max_val <= 0.0 {
            return (0.0, 1.0);
        }

        (0.0, max_val * (1.0 + Y_HEADROOM))
    }

    #[doc = "Whether a viewer can be shown at all. On Linux this needs an X11 or Wayland session."]
    fn display_available(&self) -> bool {
        if cfg!(target_os = "linux") {
            env::var_os("DISPLAY").is_some() || env::var_os("WAYLAND_DISPLAY").is_some()
        } else {
            cfg!(any(target_os = "macos", target_os = "windows"))
        }
    }

    fn viewer_command(&self, output_path: &Path) -> tokio::process::Command {
        if cfg!(target_os = "macos") {
            let mut cmd: tokio::process::Command = tokio::process::Command::new("open");
            cmd.arg(output_path);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd: tokio::process::Command = tokio::process::Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(output_path);
            cmd
        } else {
            let mut cmd: tokio::process::Command = tokio::process::Command::new("xdg-open");
            cmd.arg(output_path);
            cmd
        }
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_bar_chart(
        &self,
        title: &str,
        bars: &[ChartBar],
        output_path: &Path,
        y_label: &str,
    ) -> anyhow::Result<()> {
        if bars.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_bar_chart] Cannot generate chart with empty data"
            ));
        }

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let colours: Vec<RGBColor> = bars
            .iter()
            .map(|bar| parse_hex_colour(bar.colour()))
            .collect::<anyhow::Result<Vec<RGBColor>>>()?;

        let values: Vec<f64> = bars.iter().map(|bar| *bar.value()).collect();
        let labels: Vec<String> = bars.iter().map(|bar| bar.label().clone()).collect();
        let (y_min, y_max) = self.calculate_y_range(&values);

        /* ---- 여기부터는 동기 코드 (plotters) ---- */
        let draw = || -> anyhow::Result<()> {
            let root = BitMapBackend::new(
                output_path,
                (*self.chart_config.width(), *self.chart_config.height()),
            )
            .into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(title, ("sans-serif", 24).into_font().color(&BLACK))
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(70)
                .build_cartesian_2d((0..bars.len() - 1).into_segmented(), y_min..y_max)?;

            let text_color: RGBColor = RGBColor(40, 40, 40);
            let grid_color: RGBAColor = RGBColor(176, 176, 176).mix(0.7);

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .y_desc(y_label)
                .y_labels(Y_LABEL_COUNT)
                .axis_style(ShapeStyle::from(&BLACK).stroke_width(1))
                .x_label_style(("sans-serif", 16).into_font().color(&text_color))
                .y_label_style(("sans-serif", 14).into_font().color(&text_color))
                .x_label_formatter(&|x| match x {
                    SegmentValue::CenterOf(idx) => labels.get(*idx).cloned().unwrap_or_default(),
                    _ => String::new(),
                })
                .draw()?;

            /* 가로 점선 그리드 - y 축 라벨과 같은 key point 에 맞춘다 */
            let y_axis: RangedCoordf64 = (y_min..y_max).into();
            let grid_ticks: Vec<f64> = y_axis.key_points(Y_LABEL_COUNT);

            for tick in grid_ticks {
                chart.draw_series(DashedLineSeries::new(
                    vec![
                        (SegmentValue::Exact(0), tick),
                        (SegmentValue::Last, tick),
                    ],
                    6,
                    4,
                    grid_color.stroke_width(1),
                ))?;
            }

            chart.draw_series(values.iter().zip(colours.iter()).enumerate().map(
                |(idx, (&value, colour))| {
                    let mut bar = Rectangle::new(
                        [
                            (SegmentValue::Exact(idx), 0.0),
                            (SegmentValue::Exact(idx + 1), value),
                        ],
                        colour.filled(),
                    );
                    bar.set_margin(0, 0, BAR_MARGIN_PX, BAR_MARGIN_PX);
                    bar
                },
            ))?;

            let annotation_style: TextStyle = ("sans-serif", 16)
                .into_font()
                .style(FontStyle::Bold)
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Bottom));

            for dx in ANNOTATION_STROKE_OFFSETS {
                chart.draw_series(values.iter().enumerate().map(|(idx, &value)| {
                    EmptyElement::at((SegmentValue::CenterOf(idx), value))
                        + Text::new(
                            format_bar_annotation(value),
                            (dx, -4),
                            annotation_style.clone(),
                        )
                }))?;
            }

            root.present()?;
            Ok(())
        };

        draw().context("[ChartServiceImpl->generate_bar_chart] drawing/present failed")?;

        info!("Bar chart generated successfully: {:?}", output_path);

        Ok(())
    }

    async fn show_chart(&self, output_path: &Path) -> anyhow::Result<()> {
        if !self.chart_config.show_chart() {
            info!("[ChartServiceImpl->show_chart] show_chart is disabled. Skipping viewer.");
            return Ok(());
        }

        if !self.display_available() {
            info!("[ChartServiceImpl->show_chart] No display available. Skipping viewer.");
            return Ok(());
        }

        let status: std::process::ExitStatus = self
            .viewer_command(output_path)
            .status()
            .await
            .context("[ChartServiceImpl->show_chart] Failed to launch image viewer")?;

        if !status.success() {
            return Err(anyhow!(
                "[ChartServiceImpl->show_chart] Image viewer exited with {}",
                status
            ));
        }

        Ok(())
    }
}
