//! Search data embedded in the page by the backend.

use log::warn;
use serde::Deserialize;

use crate::components::belief_graph::GraphInput;
use crate::config::AppConfig;

/// Id of the `<script type="application/json">` element carrying the payload.
pub const PAYLOAD_ELEMENT_ID: &str = "belief-data";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PagePayload {
	pub query: String,
	pub results: Vec<String>,
	pub all_queries: Vec<String>,
	pub config: AppConfig,
}

impl PagePayload {
	pub fn parse(raw: &str) -> Self {
		serde_json::from_str(raw).unwrap_or_else(|e| {
			warn!("malformed page payload: {e}");
			Self::default()
		})
	}

	/// Reads the payload from the current document; empty when absent.
	pub fn from_document() -> Self {
		let raw = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.get_element_by_id(PAYLOAD_ELEMENT_ID))
			.and_then(|el| el.text_content());
		match raw {
			Some(raw) => Self::parse(&raw),
			None => Self::default(),
		}
	}

	pub fn into_parts(self) -> (GraphInput, AppConfig) {
		let input = GraphInput {
			center: self.query,
			satellites: self.results,
			all_queries: self.all_queries,
		};
		(input, self.config)
	}
}
