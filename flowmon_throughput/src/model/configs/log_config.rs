use crate::common::*;

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub directory: String,
    pub keep_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: "logs".to_string(),
            keep_files: 10,
        }
    }
}
