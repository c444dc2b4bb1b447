use thiserror::Error;

/// Number of result nodes drawn around the query.
pub const SATELLITE_COUNT: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphInput {
	pub center: String,
	pub satellites: Vec<String>,
	pub all_queries: Vec<String>,
}

impl GraphInput {
	pub fn validate(&self) -> Result<(), LayoutError> {
		if self.satellites.len() != SATELLITE_COUNT {
			return Err(LayoutError::SatelliteCount {
				expected: SATELLITE_COUNT,
				found: self.satellites.len(),
			});
		}
		Ok(())
	}

	pub fn is_renderable(&self) -> bool {
		self.validate().is_ok()
	}
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
	#[error("expected {expected} results, got {found}")]
	SatelliteCount { expected: usize, found: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeRole {
	Center,
	Satellite(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub fn contains(&self, px: f64, py: f64) -> bool {
		px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
	pub label: String,
	pub role: NodeRole,
	pub x: f64,
	pub y: f64,
	pub bounds: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneEdge {
	pub from: (f64, f64),
	pub to: (f64, f64),
}
