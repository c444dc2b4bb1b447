use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use crate::actions::story::{FetchTransport, InFlight, story_or_fallback};
use crate::components::click_history::ClickHistory;

/// "Make Story" trigger plus the area the returned narrative lands in.
#[component]
pub fn StoryPanel(history: RwSignal<ClickHistory>, #[prop(into)] endpoint: String) -> impl IntoView {
	let story = RwSignal::new(None::<String>);
	let in_flight = RwSignal::new(InFlight::default());
	let endpoint = StoredValue::new(endpoint);

	let on_click = move |_: MouseEvent| {
		let clicked = history.with_untracked(|h| h.entries().to_vec());
		let endpoint = endpoint.get_value();
		in_flight.update(InFlight::start);
		spawn_local(async move {
			let text = story_or_fallback(&FetchTransport, &endpoint, &clicked).await;
			story.set(Some(text));
			in_flight.update(InFlight::finish);
		});
	};

	view! {
		<section class="story">
			<button type="button" class="make-story" on:click=on_click>
				"Make Story"
			</button>
			<Show when=move || in_flight.with(InFlight::is_busy)>
				<p class="story-pending">"Writing your story..."</p>
			</Show>
			<div class="story-output">{move || story.get()}</div>
		</section>
	}
}
