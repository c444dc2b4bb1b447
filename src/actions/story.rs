use gloo_net::http::Request;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown in place of the story when the request fails.
pub const STORY_FAILURE_MESSAGE: &str = "Failed to generate story.";

#[derive(Debug, Error)]
pub enum StoryError {
	#[error("story request failed: {0}")]
	Network(String),
	#[error("story endpoint answered with status {0}")]
	Status(u16),
	#[error("bad story payload: {0}")]
	Decode(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct StoryRequest<'a> {
	clicked: &'a [String],
}

#[derive(Deserialize)]
struct StoryReply {
	story: String,
}

pub struct Reply {
	pub status: u16,
	pub body: String,
}

/// Sends a JSON body with a POST.
pub trait StoryTransport {
	async fn post_json(&self, url: &str, body: String) -> Result<Reply, StoryError>;
}

/// Browser `fetch` through gloo-net.
pub struct FetchTransport;

impl StoryTransport for FetchTransport {
	async fn post_json(&self, url: &str, body: String) -> Result<Reply, StoryError> {
		let network = |e: gloo_net::Error| StoryError::Network(e.to_string());
		let response = Request::post(url)
			.header("Content-Type", "application/json")
			.body(body)
			.map_err(network)?
			.send()
			.await
			.map_err(network)?;
		let status = response.status();
		let body = if response.ok() {
			response.text().await.map_err(network)?
		} else {
			String::new()
		};
		Ok(Reply { status, body })
	}
}

/// Posts `{"clicked": history}` and returns the `story` of the reply.
pub async fn send_history<T: StoryTransport>(
	transport: &T,
	endpoint: &str,
	history: &[String],
) -> Result<String, StoryError> {
	let body = serde_json::to_string(&StoryRequest { clicked: history })?;
	debug!("requesting story for {} clicks", history.len());
	let reply = transport.post_json(endpoint, body).await?;
	if !(200..300).contains(&reply.status) {
		return Err(StoryError::Status(reply.status));
	}
	let reply: StoryReply = serde_json::from_str(&reply.body)?;
	Ok(reply.story)
}

/// Story text for the output area: the generated story, or the fixed failure message.
pub async fn story_or_fallback<T: StoryTransport>(
	transport: &T,
	endpoint: &str,
	history: &[String],
) -> String {
	send_history(transport, endpoint, history)
		.await
		.unwrap_or_else(|e| {
			warn!("{e}");
			STORY_FAILURE_MESSAGE.to_owned()
		})
}

/// Count of story requests still waiting for a reply.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InFlight(u32);

impl InFlight {
	pub fn start(&mut self) {
		self.0 += 1;
	}

	pub fn finish(&mut self) {
		self.0 = self.0.saturating_sub(1);
	}

	pub fn is_busy(&self) -> bool {
		self.0 > 0
	}
}
