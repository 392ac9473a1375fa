use serde::Deserialize;

pub const DEFAULT_INCLUDE_SCAN_LINES: usize = 50;
pub const DEFAULT_TITLE_SUFFIX: &str = "cppView";
pub const DEFAULT_FALLBACK_TITLE: &str = "Cpp View";

/// Explorer settings. Hosts map their own settings onto this; there is no
/// config file of our own.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExplorerConfig {
    pub include_scan_lines: usize,
    pub ignored_names: Vec<String>,
    pub source_extensions: Vec<String>,
    /// Order matters: paired headers are attached in this order.
    pub header_extensions: Vec<String>,
    pub title_suffix: String,
    pub fallback_title: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            include_scan_lines: DEFAULT_INCLUDE_SCAN_LINES,
            ignored_names: vec![".git".to_string()],
            source_extensions: vec!["c".to_string(), "cpp".to_string()],
            header_extensions: vec!["h".to_string(), "hpp".to_string()],
            title_suffix: DEFAULT_TITLE_SUFFIX.to_string(),
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
        }
    }
}

impl ExplorerConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_names.iter().any(|n| n == name)
    }
}
