use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render::{self, CanvasMeasure};
use super::state::GraphState;
use super::types::GraphInput;
use crate::config::LayoutConfig;

pub const NO_RESULTS: &str = "No results found. Enter a new belief and hit \"Search\".";

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

/// Pointer position in canvas pixels, accounting for CSS scaling.
fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	let scale = |px: u32, css: f64| if css > 0.0 { px as f64 / css } else { 1.0 };
	(
		(ev.client_x() as f64 - rect.left()) * scale(canvas.width(), rect.width()),
		(ev.client_y() as f64 - rect.top()) * scale(canvas.height(), rect.height()),
	)
}

fn redraw(canvas: &HtmlCanvasElement, state: &GraphState) {
	if let Some(ctx) = context_2d(canvas) {
		render::render(state, &ctx);
	}
}

#[component]
pub fn BeliefGraphCanvas(
	#[prop(into)] input: Signal<GraphInput>,
	layout: LayoutConfig,
	#[prop(default = false)] center_clickable: bool,
	#[prop(into)] on_activate: Callback<String>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = StoredValue::new(None::<GraphState>);

	Effect::new(move |_| {
		let input = input.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		canvas.set_width(layout.width as u32);
		canvas.set_height(layout.height as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("2d canvas context unavailable");
			return;
		};
		let measure = CanvasMeasure::new(&ctx, layout.font_px);
		match GraphState::new(&input, &layout, &measure, center_clickable) {
			Ok(s) => {
				render::render(&s, &ctx);
				state.set_value(Some(s));
			}
			Err(e) => {
				warn!("graph not rendered: {e}");
				state.set_value(None);
			}
		}
	});

	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		let label = state.with_value(|s| {
			s.as_ref()
				.and_then(|s| s.activation_at(x, y))
				.map(str::to_owned)
		});
		if let Some(label) = label {
			debug!("node activated: {label}");
			on_activate.run(label);
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		state.update_value(|s| {
			let Some(s) = s.as_mut() else {
				return;
			};
			if s.set_hover(s.node_at_position(x, y)) {
				// leptos' ElementExt::style shadows the web-sys getter
				let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", s.cursor());
				redraw(&canvas, s);
			}
		});
	};

	let on_mouseleave = move |_: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		state.update_value(|s| {
			if let Some(s) = s.as_mut() {
				if s.set_hover(None) {
					redraw(&canvas, s);
				}
			}
		});
	};

	view! {
		<Show
			when=move || input.with(GraphInput::is_renderable)
			fallback=|| view! {
				<div class="no-results">
					<p>{NO_RESULTS}</p>
				</div>
			}
		>
			<canvas
				node_ref=canvas_ref
				class="belief-graph-canvas"
				on:click=on_click
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				style="display: block;"
			/>
		</Show>
	}
}
