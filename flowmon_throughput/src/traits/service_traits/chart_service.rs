use crate::common::*;

use crate::dto::chart_bar::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Generate a vertical bar chart with one annotated bar per entry and save it as an image file
        # Arguments
        * `title` - Chart title
        * `bars` - Label, height and colour of each bar, drawn left to right
        * `output_path` - Path where the chart image will be saved
        * `y_label` - Label for Y-axis
    "]
    async fn generate_bar_chart(
        &self,
        title: &str,
        bars: &[ChartBar],
        output_path: &Path,
        y_label: &str,
    ) -> anyhow::Result<()>;

    #[doc = "Open a saved chart with the platform image viewer, if a display is available"]
    async fn show_chart(&self, output_path: &Path) -> anyhow::Result<()>;
}
