use leptos::prelude::*;
use log::{info, warn};
use web_sys::MouseEvent;

use crate::actions::random_query::pick;
use crate::components::click_history::ClickHistory;
use crate::components::search_form::SearchFormRef;

#[component]
pub fn RandomQueryButton(
	form: SearchFormRef,
	history: RwSignal<ClickHistory>,
	all_queries: Vec<String>,
) -> impl IntoView {
	let all_queries = StoredValue::new(all_queries);

	let on_click = move |_: MouseEvent| {
		let picked = all_queries.with_value(|queries| pick(queries).map(str::to_owned));
		match picked {
			Ok(query) => {
				info!("random query: {query:?}");
				history.update(|h| h.clear());
				form.submit_with(&query);
			}
			Err(e) => {
				warn!("random query unavailable: {e}");
				if let Some(window) = web_sys::window() {
					let _ = window.alert_with_message(&e.to_string());
				}
			}
		}
	};

	view! {
		<button type="button" class="random-query" on:click=on_click>
			"Random Belief"
		</button>
	}
}
