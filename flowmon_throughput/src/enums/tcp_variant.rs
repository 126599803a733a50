use crate::model::configs::chart_config::*;

#[doc = r#"
    The two congestion-control variants compared by the simulation.

    S1 (flow 1) runs TCP Cubic and S2 (flow 2) runs TCP BBR. The order of
    `ALL` is the order in which bars are drawn and summary lines are printed.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TcpVariant {
    Cubic,
    Bbr,
}

impl TcpVariant {
    pub const ALL: [TcpVariant; 2] = [TcpVariant::Cubic, TcpVariant::Bbr];

    pub fn flow_id(&self) -> i64 {
        match self {
            TcpVariant::Cubic => 1,
            TcpVariant::Bbr => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TcpVariant::Cubic => "TCP Cubic",
            TcpVariant::Bbr => "TCP BBR",
        }
    }

    pub fn colour<'a>(&self, chart_config: &'a ChartConfig) -> &'a str {
        match self {
            TcpVariant::Cubic => chart_config.cubic_colour().as_str(),
            TcpVariant::Bbr => chart_config.bbr_colour().as_str(),
        }
    }
}

#[doc = "Flow identifiers the report reader keeps. Every other flow is skipped."]
pub fn get_target_flow_ids() -> [i64; 2] {
    TcpVariant::ALL.map(|variant| variant.flow_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_flow_ids_follow_variant_order() {
        assert_eq!(get_target_flow_ids(), [1, 2]);
    }

    #[test]
    fn labels_and_colours() {
        let chart_config: ChartConfig = ChartConfig::default();

        assert_eq!(TcpVariant::Cubic.label(), "TCP Cubic");
        assert_eq!(TcpVariant::Bbr.label(), "TCP BBR");
        assert_eq!(TcpVariant::Cubic.colour(&chart_config), "#3498db");
        assert_eq!(TcpVariant::Bbr.colour(&chart_config), "#e74c3c");
    }
}
