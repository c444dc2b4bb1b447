use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use log::error;

use crate::components::click_history::ClickHistory;

/// Handles to the search form, for submitting it from outside the form.
#[derive(Clone, Copy)]
pub struct SearchFormRef {
	form: NodeRef<html::Form>,
	input: NodeRef<html::Input>,
}

impl Default for SearchFormRef {
	fn default() -> Self {
		Self::new()
	}
}

impl SearchFormRef {
	pub fn new() -> Self {
		Self {
			form: NodeRef::new(),
			input: NodeRef::new(),
		}
	}

	/// Fills the query field and focuses it without submitting.
	pub fn fill(&self, value: &str) {
		let Some(input) = self.input.get_untracked() else {
			error!("search form is not mounted");
			return;
		};
		input.set_value(value);
		if let Err(e) = web_sys::HtmlElement::focus(&input) {
			error!("could not focus the query field: {e:?}");
		}
	}

	/// Fills the query field and navigates. `form.submit()` skips the `submit`
	/// event, so history is left as the caller arranged it.
	pub fn submit_with(&self, value: &str) {
		let (Some(form), Some(input)) = (self.form.get_untracked(), self.input.get_untracked())
		else {
			error!("search form is not mounted");
			return;
		};
		input.set_value(value);
		if let Err(e) = form.submit() {
			error!("search form submission failed: {e:?}");
		}
	}
}

#[component]
pub fn SearchForm(
	form: SearchFormRef,
	history: RwSignal<ClickHistory>,
	#[prop(into)] action: String,
	#[prop(into)] query: String,
) -> impl IntoView {
	// A search typed by the user starts a new session.
	let on_submit = move |_: SubmitEvent| history.update(|h| h.clear());

	view! {
		<form node_ref=form.form class="search-form" method="post" action=action on:submit=on_submit>
			<input
				node_ref=form.input
				type="text"
				name="query"
				placeholder="Enter a belief"
				value=query
			/>
			<button type="submit">"Search"</button>
		</form>
	}
}
