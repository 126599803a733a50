use crate::common::*;

#[doc = r#"
    Presentation settings of the comparison chart.

    Every field falls back to the defaults below when it is absent from the
    `[chart]` section, so an empty or missing config file still renders the
    same chart.
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub cubic_colour: String,
    pub bbr_colour: String,
    pub show_chart: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "TCP Performance Comparison: Cubic vs BBR (5% Loss)".to_string(),
            width: 800,
            height: 600,
            cubic_colour: "#3498db".to_string(),
            bbr_colour: "#e74c3c".to_string(),
            show_chart: true,
        }
    }
}
