use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use unimail_foundation::layout::FolderLabel;
use unimail_foundation::{FolderChipStyle, ViewConfiguration};

/// Everything the demo needs to lay out one conversation row.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub density: f32,
    /// Row span in dp.
    pub row_width: f32,
    pub max_cell_width: f32,
    pub max_chips: usize,
    pub char_width: f32,
    pub style: FolderChipStyle,
    pub gestures: ViewConfiguration,
    pub folders: Vec<FolderLabel>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            row_width: 240.0,
            max_cell_width: 96.0,
            max_chips: 4,
            char_width: 7.0,
            style: FolderChipStyle::default(),
            gestures: ViewConfiguration::default(),
            folders: ["Inbox", "Receipts and invoices", "Me", "תיקייה ארוכה מאוד"]
                .into_iter()
                .map(FolderLabel::new)
                .collect(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading demo config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing demo config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(raw)?;
        anyhow::ensure!(
            config.density.is_finite() && config.density > 0.0,
            "density must be positive, got {}",
            config.density
        );
        Ok(config)
    }
}
