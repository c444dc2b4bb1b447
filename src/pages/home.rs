use leptos::prelude::*;
use log::debug;
use web_sys::MouseEvent;

use crate::components::belief_graph::BeliefGraphCanvas;
use crate::components::click_history::{ClickHistoryList, HistoryStore, LocalStorage};
use crate::components::random_query_button::RandomQueryButton;
use crate::components::search_form::{SearchForm, SearchFormRef};
use crate::components::story_panel::StoryPanel;
use crate::payload::PagePayload;

/// Belief graph page: search form, graph, history and story.
#[component]
pub fn Home() -> impl IntoView {
	let (input, config) = PagePayload::from_document().into_parts();

	let mut store = HistoryStore::load(LocalStorage, config.history_key.clone());
	store.prime_if_first_visit(&input.center, input.is_renderable());
	let history = RwSignal::new(store);

	let form = SearchFormRef::new();
	// Record first, then navigate: the programmatic submit does not clear.
	let on_activate = Callback::new(move |label: String| {
		history.update(|h| h.append(label.clone()));
		form.submit_with(&label);
	});

	let clear_on_home = config.clear_history_on_home;
	let on_home = move |_: MouseEvent| {
		if clear_on_home {
			debug!("returning home, clearing click history");
			history.update(|h| h.clear());
		}
	};

	let query = input.center.clone();
	let all_queries = input.all_queries.clone();
	let graph_input = Signal::stored(input);

	view! {
		<div class="belief-page">
			<header>
				<a href="/" rel="external" class="home-link" on:click=on_home>
					<h1>"Belief Graph"</h1>
				</a>
				<SearchForm form=form history=history action=config.search_action query=query />
			</header>

			<main class="belief-graph">
				<BeliefGraphCanvas
					input=graph_input
					layout=config.layout
					center_clickable=config.center_clickable
					on_activate=on_activate
				/>
			</main>

			<aside>
				<RandomQueryButton form=form history=history all_queries=all_queries />
				<ClickHistoryList history=history form=form />
				<StoryPanel history=history endpoint=config.story_endpoint />
			</aside>
		</div>
	}
}
