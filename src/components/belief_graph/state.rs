use std::f64::consts::PI;

use super::types::{
	GraphInput, LayoutError, NodeRole, Rect, SATELLITE_COUNT, SceneEdge, SceneNode,
};
use crate::config::LayoutConfig;

/// Measures rendered label extents as `(width, height)`.
pub trait TextMeasure {
	fn measure(&self, text: &str) -> (f64, f64);
}

pub struct GraphState {
	pub nodes: Vec<SceneNode>,
	pub edges: Vec<SceneEdge>,
	pub hovered: Option<usize>,
	pub width: f64,
	pub height: f64,
	pub font_px: f64,
	center_clickable: bool,
}

/// Angle in radians of satellite `i`, advancing clockwise on screen.
pub fn satellite_angle(layout: &LayoutConfig, i: usize) -> f64 {
	layout.start_angle_deg.to_radians() + (i as f64) * 2.0 * PI / SATELLITE_COUNT as f64
}

impl GraphState {
	pub fn new(
		input: &GraphInput,
		layout: &LayoutConfig,
		measure: &impl TextMeasure,
		center_clickable: bool,
	) -> Result<Self, LayoutError> {
		input.validate()?;

		let (cx, cy) = (layout.width / 2.0, layout.height / 2.0);
		let boxed = |label: &str, role: NodeRole, x: f64, y: f64| {
			let (w, h) = measure.measure(label);
			SceneNode {
				label: label.to_owned(),
				role,
				x,
				y,
				bounds: Rect {
					x: x - w / 2.0 - layout.padding,
					y: y - h / 2.0 - layout.padding,
					width: w + layout.padding * 2.0,
					height: h + layout.padding * 2.0,
				},
			}
		};

		let mut nodes = Vec::with_capacity(SATELLITE_COUNT + 1);
		let mut edges = Vec::with_capacity(SATELLITE_COUNT);
		nodes.push(boxed(&input.center, NodeRole::Center, cx, cy));

		for (i, label) in input.satellites.iter().enumerate() {
			let angle = satellite_angle(layout, i);
			let (x, y) = (
				cx + layout.radius * angle.cos(),
				cy + layout.radius * angle.sin(),
			);
			edges.push(SceneEdge {
				from: (cx, cy),
				to: (x, y),
			});
			nodes.push(boxed(label, NodeRole::Satellite(i), x, y));
		}

		Ok(Self {
			nodes,
			edges,
			hovered: None,
			width: layout.width,
			height: layout.height,
			font_px: layout.font_px,
			center_clickable,
		})
	}

	pub fn is_activatable(&self, idx: usize) -> bool {
		match self.nodes.get(idx).map(|n| n.role) {
			Some(NodeRole::Satellite(_)) => true,
			Some(NodeRole::Center) => self.center_clickable,
			None => false,
		}
	}

	/// Topmost node whose box contains the point.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		self.nodes.iter().rposition(|n| n.bounds.contains(x, y))
	}

	/// Label of the activatable node under the point, if any.
	pub fn activation_at(&self, x: f64, y: f64) -> Option<&str> {
		self.node_at_position(x, y)
			.filter(|&idx| self.is_activatable(idx))
			.map(|idx| self.nodes[idx].label.as_str())
	}

	/// CSS cursor for the current hover target.
	pub fn cursor(&self) -> &'static str {
		if self.hovered.is_some_and(|idx| self.is_activatable(idx)) {
			"pointer"
		} else {
			"default"
		}
	}

	/// Returns true when the hovered node changed and a redraw is due.
	pub fn set_hover(&mut self, node: Option<usize>) -> bool {
		if self.hovered == node {
			return false;
		}
		self.hovered = node;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct FixedMeasure;

	impl TextMeasure for FixedMeasure {
		fn measure(&self, text: &str) -> (f64, f64) {
			(text.chars().count() as f64 * 8.0, 16.0)
		}
	}

	fn input(n: usize) -> GraphInput {
		GraphInput {
			center: "vaccines".into(),
			satellites: (0..n).map(|i| format!("result {i}")).collect(),
			all_queries: vec![],
		}
	}

	fn build(n: usize, center_clickable: bool) -> Result<GraphState, LayoutError> {
		GraphState::new(&input(n), &LayoutConfig::default(), &FixedMeasure, center_clickable)
	}

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn valid_input_yields_six_nodes_five_edges() {
		let state = build(5, false).unwrap();
		assert_eq!(state.nodes.len(), 6);
		assert_eq!(state.edges.len(), 5);
		assert_eq!(state.nodes[0].role, NodeRole::Center);
		assert_eq!((state.nodes[0].x, state.nodes[0].y), (300.0, 300.0));
		for (i, edge) in state.edges.iter().enumerate() {
			assert_eq!(edge.from, (300.0, 300.0));
			let node = &state.nodes[i + 1];
			assert_eq!(node.role, NodeRole::Satellite(i));
			assert_eq!(edge.to, (node.x, node.y));
		}
	}

	#[test]
	fn satellites_sit_at_seventy_two_degree_steps_from_top() {
		let state = build(5, false).unwrap();
		for i in 0..5 {
			let node = &state.nodes[i + 1];
			let expected = (-90.0 + i as f64 * 72.0_f64).to_radians();
			let actual = (node.y - 300.0).atan2(node.x - 300.0);
			let diff = (actual - expected).rem_euclid(2.0 * PI);
			assert!(diff < 1e-9 || (2.0 * PI - diff) < 1e-9, "satellite {i}");
			let r = ((node.x - 300.0).powi(2) + (node.y - 300.0).powi(2)).sqrt();
			assert!(close(r, 220.0));
		}
		// first satellite directly above the center
		assert!(close(state.nodes[1].x, 300.0));
		assert!(close(state.nodes[1].y, 80.0));
		// second one is to the right: clockwise on screen
		assert!(state.nodes[2].x > 300.0);
	}

	#[test]
	fn boxes_pad_the_measured_label() {
		let state = build(5, false).unwrap();
		let center = &state.nodes[0];
		// "vaccines" is 8 chars -> 64 wide, 16 tall
		assert_eq!(
			center.bounds,
			Rect {
				x: 300.0 - 32.0 - 8.0,
				y: 300.0 - 8.0 - 8.0,
				width: 80.0,
				height: 32.0,
			}
		);
	}

	#[test]
	fn wrong_satellite_counts_are_rejected() {
		for n in [0, 1, 4, 6] {
			assert_eq!(
				build(n, false).err(),
				Some(LayoutError::SatelliteCount {
					expected: 5,
					found: n
				})
			);
			assert!(!input(n).is_renderable());
		}
	}

	#[test]
	fn hit_test_finds_satellites() {
		let state = build(5, false).unwrap();
		let top = &state.nodes[1];
		assert_eq!(state.node_at_position(top.x, top.y), Some(1));
		assert_eq!(state.activation_at(top.x, top.y), Some("result 0"));
		assert_eq!(state.node_at_position(5.0, 5.0), None);
	}

	#[test]
	fn center_activation_follows_flag() {
		let locked = build(5, false).unwrap();
		assert_eq!(locked.node_at_position(300.0, 300.0), Some(0));
		assert_eq!(locked.activation_at(300.0, 300.0), None);

		let open = build(5, true).unwrap();
		assert_eq!(open.activation_at(300.0, 300.0), Some("vaccines"));
	}

	#[test]
	fn hover_reports_changes_only() {
		let mut state = build(5, false).unwrap();
		assert!(state.set_hover(Some(2)));
		assert!(!state.set_hover(Some(2)));
		assert!(state.set_hover(None));
		assert_eq!(state.hovered, None);
	}

	#[test]
	fn cursor_points_only_at_activatable_nodes() {
		let mut state = build(5, false).unwrap();
		assert_eq!(state.cursor(), "default");
		state.set_hover(Some(3));
		assert_eq!(state.cursor(), "pointer");
		state.set_hover(Some(0));
		assert_eq!(state.cursor(), "default");

		let mut open = build(5, true).unwrap();
		open.set_hover(Some(0));
		assert_eq!(open.cursor(), "pointer");
	}
}
