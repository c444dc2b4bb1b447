pub mod belief_graph;
pub mod click_history;
pub mod random_query_button;
pub mod search_form;
pub mod story_panel;
