use leptos::prelude::*;
use web_sys::MouseEvent;

use super::store::ClickHistory;
use crate::components::search_form::SearchFormRef;

/// Visible list of the clicked labels, one row per entry. Clicking a row puts
/// its label back into the search field.
#[component]
pub fn ClickHistoryList(history: RwSignal<ClickHistory>, form: SearchFormRef) -> impl IntoView {
	let rows = move || {
		history.with(|h| {
			h.entries()
				.iter()
				.cloned()
				.enumerate()
				.collect::<Vec<_>>()
		})
	};

	view! {
		<section class="click-history">
			<h2>"Node Click History"</h2>
			<ol>
				<For
					each=rows
					key=|(i, label)| (*i, label.clone())
					children=move |(_, label)| {
						let text = label.clone();
						let on_click = move |ev: MouseEvent| {
							ev.prevent_default();
							form.fill(&text);
						};
						view! {
							<li>
								<a href="#" class="belief-link" on:click=on_click>{label}</a>
							</li>
						}
					}
				/>
			</ol>
		</section>
	}
}
