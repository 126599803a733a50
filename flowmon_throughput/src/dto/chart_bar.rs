use crate::common::*;

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub colour: String,
}
