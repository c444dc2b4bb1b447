use web_sys::CanvasRenderingContext2d;

use super::state::{GraphState, TextMeasure};
use super::types::NodeRole;

const BACKGROUND: &str = "#1a1a2e";
const EDGE_COLOR: &str = "rgba(100, 180, 255, 0.6)";

/// Label measurement backed by the canvas font metrics.
pub struct CanvasMeasure<'a> {
	ctx: &'a CanvasRenderingContext2d,
	font_px: f64,
}

impl<'a> CanvasMeasure<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d, font_px: f64) -> Self {
		ctx.set_font(&font(font_px));
		Self { ctx, font_px }
	}
}

impl TextMeasure for CanvasMeasure<'_> {
	fn measure(&self, text: &str) -> (f64, f64) {
		match self.ctx.measure_text(text) {
			Ok(m) => label_extent(
				m.width(),
				m.font_bounding_box_ascent(),
				m.font_bounding_box_descent(),
				self.font_px,
			),
			Err(_) => (text.chars().count() as f64 * self.font_px * 0.6, self.font_px),
		}
	}
}

/// Box extent from font-wide metrics, so every label of one font gets the same height.
fn label_extent(width: f64, font_ascent: f64, font_descent: f64, font_px: f64) -> (f64, f64) {
	let height = font_ascent + font_descent;
	(width, if height > 0.0 { height } else { font_px })
}

fn font(px: f64) -> String {
	format!("{}px sans-serif", px)
}

pub fn render(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(EDGE_COLOR);
	ctx.set_line_width(1.5);
	for edge in &state.edges {
		ctx.begin_path();
		ctx.move_to(edge.from.0, edge.from.1);
		ctx.line_to(edge.to.0, edge.to.1);
		ctx.stroke();
	}
}

fn draw_nodes(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(&font(state.font_px));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for (idx, node) in state.nodes.iter().enumerate() {
		let hovered = state.hovered == Some(idx) && state.is_activatable(idx);
		let b = &node.bounds;

		// box first so the label sits on top
		let fill = match (node.role, hovered) {
			(_, true) => "#3a4a7a",
			(NodeRole::Center, false) => "#2c2c54",
			(NodeRole::Satellite(_), false) => "#24243e",
		};
		ctx.set_fill_style_str(fill);
		ctx.fill_rect(b.x, b.y, b.width, b.height);
		ctx.set_stroke_style_str(if hovered {
			"white"
		} else {
			"rgba(100, 180, 255, 0.8)"
		});
		ctx.set_line_width(if hovered { 2.0 } else { 1.0 });
		ctx.stroke_rect(b.x, b.y, b.width, b.height);

		ctx.set_fill_style_str("white");
		let _ = ctx.fill_text(&node.label, node.x, node.y);
	}
}

#[cfg(test)]
mod tests {
	use super::label_extent;

	#[test]
	fn height_comes_from_the_font_not_the_glyphs() {
		// "ace" and "Ag" measured with the same font report the same font box
		let (ace_w, ace_h) = label_extent(27.0, 14.5, 3.5, 16.0);
		let (ag_w, ag_h) = label_extent(19.0, 14.5, 3.5, 16.0);
		assert_eq!(ace_h, ag_h);
		assert_eq!(ace_h, 18.0);
		assert_eq!((ace_w, ag_w), (27.0, 19.0));
	}

	#[test]
	fn missing_font_metrics_fall_back_to_font_size() {
		assert_eq!(label_extent(40.0, 0.0, 0.0, 16.0), (40.0, 16.0));
	}
}
