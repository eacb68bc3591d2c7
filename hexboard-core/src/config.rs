//! Game configuration
//!
//! Window size, title and board layout. Defaults reproduce the classic
//! 800x450 window with the board anchored near the top-left corner.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;
use crate::layout::{Layout, Point};

/// Window configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 450.0,
            title: "Hex".to_string(),
        }
    }
}

/// Board layout configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Hexagon radius; derived from the window width when unset
    pub radius: Option<f32>,
    /// Centre of cell (0, 0)
    pub origin_x: f32,
    pub origin_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: None,
            origin_x: 70.0,
            origin_y: 70.0,
        }
    }
}

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    /// Seed for the first-player draw (None = from entropy)
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject sizes the board cannot be drawn with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            anyhow::bail!(
                "window size must be positive, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        if let Some(radius) = self.layout.radius {
            if radius <= 0.0 {
                anyhow::bail!("hex radius must be positive, got {}", radius);
            }
        }
        let radius = self.layout().radius;
        if radius <= Layout::min_radius() {
            anyhow::bail!(
                "hex radius {:.2} is too small, cells need a radius above {}",
                radius,
                Layout::min_radius()
            );
        }
        Ok(())
    }

    /// Resolve the layout, deriving the radius from the window width
    pub fn layout(&self) -> Layout {
        // Fit twice the board width across the window
        let radius = self
            .layout
            .radius
            .unwrap_or(self.window.width / (BOARD_SIZE as f32 * 2.0) / 2.0);
        Layout::new(radius, Point::new(self.layout.origin_x, self.layout.origin_y))
    }

    /// Set window size
    pub fn with_window_size(mut self, width: f32, height: f32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = GameConfig::default().layout();
        assert!((layout.radius - 800.0 / 22.0 / 2.0).abs() < 1e-4);
        assert_eq!(layout.origin, Point::new(70.0, 70.0));
    }

    #[test]
    fn test_explicit_radius_wins() {
        let mut config = GameConfig::default().with_window_size(1200.0, 600.0);
        config.layout.radius = Some(25.0);
        assert_eq!(config.layout().radius, 25.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "window": { "width": 1000.0 }, "seed": 7 }"#).unwrap();
        assert_eq!(config.window.width, 1000.0);
        assert_eq!(config.window.height, 450.0);
        assert_eq!(config.window.title, "Hex");
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(GameConfig::default().with_window_size(0.0, 450.0).validate().is_err());

        let mut config = GameConfig::default();
        config.layout.radius = Some(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unclickable_radius() {
        // Derived radius 120 / 22 / 2 leaves no hit circle
        let narrow = GameConfig::default().with_window_size(120.0, 450.0);
        assert!(narrow.layout().hit_radius() <= 0.0);
        assert!(narrow.validate().is_err());

        let mut config = GameConfig::default();
        config.layout.radius = Some(Layout::min_radius());
        assert!(config.validate().is_err());

        config.layout.radius = Some(Layout::min_radius() + 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(GameConfig::load(Path::new("/nonexistent/hex.json")).is_err());
    }
}
