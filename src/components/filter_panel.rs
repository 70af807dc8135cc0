//! Multi-select filters over the tag categories of the loaded documents.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::components::relation_graph::{Document, FilterSelection, TagCategory, filter_options};

fn selected_values(event: &ev::Event) -> Vec<String> {
	let Some(select) = event
		.target()
		.and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
	else {
		return Vec::new();
	};
	let options = select.selected_options();
	(0..options.length())
		.filter_map(|i| options.item(i))
		.filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
		.map(|option| option.value())
		.collect()
}

/// One multi-select per tag category. Every change reports the category key
/// and its full list of selected values.
#[component]
pub fn FilterPanel(
	/// Documents the option lists are built from.
	#[prop(into)]
	documents: Signal<Vec<Document>>,
	/// Current selection, used to mark options as selected.
	#[prop(into)]
	selection: Signal<FilterSelection>,
	/// Receives `(category key, selected values)` on every change.
	on_change: Callback<(String, Vec<String>)>,
) -> impl IntoView {
	TagCategory::ALL
		.into_iter()
		.map(|category| {
			let key = category.key();
			view! {
				<div class="filter">
					<label for=key>{format!("{}:", category.label())}</label>
					<select
						id=key
						multiple=true
						on:change=move |evt| on_change.run((key.to_string(), selected_values(&evt)))
					>
						{move || {
							filter_options(&documents.get(), category)
								.into_iter()
								.map(|value| {
									let selected = selection.with(|s| s.contains(key, &value));
									let text = value.clone();
									view! {
										<option value=value selected=selected>
											{text}
										</option>
									}
								})
								.collect_view()
						}}
					</select>
				</div>
			}
		})
		.collect_view()
}
