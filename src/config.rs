use serde::Deserialize;
use std::path::PathBuf;

use crate::theme::Palette;

/// Optional on-disk configuration, `~/.drafter/config.toml`.
///
/// Everything here has a sensible default; a missing or malformed file only
/// produces a warning.
#[derive(Debug, Default, Deserialize)]
pub struct DrafterConfig {
    pub ui: Option<UiConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    pub high_contrast: Option<bool>,
    pub document_pane: Option<bool>,
}

impl DrafterConfig {
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn palette(&self) -> Palette {
        let high_contrast = self
            .ui
            .as_ref()
            .and_then(|ui| ui.high_contrast)
            .unwrap_or(false);
        if high_contrast {
            Palette::high_contrast()
        } else {
            Palette::standard()
        }
    }

    /// Whether the placeholder document pane is shown.
    pub fn document_pane(&self) -> bool {
        self.ui
            .as_ref()
            .and_then(|ui| ui.document_pane)
            .unwrap_or(true)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".drafter").join("config.toml"))
}
