//! Runtime configuration, read from the page payload.

use serde::Deserialize;

/// Geometry of the radial layout.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	pub width: f64,
	pub height: f64,
	pub radius: f64,
	pub start_angle_deg: f64,
	pub padding: f64,
	pub font_px: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			width: 600.0,
			height: 600.0,
			radius: 220.0,
			start_angle_deg: -90.0,
			padding: 8.0,
			font_px: 16.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	pub layout: LayoutConfig,
	pub history_key: String,
	pub story_endpoint: String,
	pub search_action: String,
	/// The earliest pages let the query node itself trigger a search; later ones don't.
	pub center_clickable: bool,
	pub clear_history_on_home: bool,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			layout: LayoutConfig::default(),
			history_key: "clickHistory".into(),
			story_endpoint: "/process_clicks".into(),
			search_action: "/".into(),
			center_clickable: false,
			clear_history_on_home: true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_config_keeps_defaults() {
		let cfg: AppConfig =
			serde_json::from_str(r#"{"center_clickable": true, "layout": {"radius": 180}}"#)
				.unwrap();
		assert!(cfg.center_clickable);
		assert_eq!(cfg.layout.radius, 180.0);
		assert_eq!(cfg.layout.width, 600.0);
		assert_eq!(cfg.layout.padding, 8.0);
		assert_eq!(cfg.history_key, "clickHistory");
		assert_eq!(cfg.story_endpoint, "/process_clicks");
		assert!(cfg.clear_history_on_home);
	}

	#[test]
	fn empty_object_is_default() {
		let cfg: AppConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(cfg, AppConfig::default());
	}
}
