use leptos::ev;
use leptos::prelude::*;
use log::{error, info};

use crate::components::filter_panel::FilterPanel;
use crate::components::relation_graph::{
	DocumentRecord, DocumentStore, FilterSelection, NamedEntity, RelationGraphCanvas,
	TooltipState, Topic,
};

fn record(title: &str, entities: &[&str], topics: &[&str], keywords: &[&str]) -> DocumentRecord {
	DocumentRecord {
		title: title.to_string(),
		sentiment_score: 0.0,
		named_entities: entities
			.iter()
			.map(|text| NamedEntity {
				text: text.to_string(),
				kind: "organization".to_string(),
			})
			.collect(),
		topics: topics
			.iter()
			.map(|text| Topic {
				text: text.to_string(),
				score: 0.8,
			})
			.collect(),
		keywords: keywords.iter().map(|k| k.to_string()).collect(),
	}
}

/// A few analysis results so the graph has something to show on first load.
fn sample_records() -> Vec<DocumentRecord> {
	vec![
		record("Chips and tariffs", &["TSMC"], &["trade"], &["semiconductors", "policy"]),
		record("Fab expansion", &["TSMC", "Intel"], &["manufacturing"], &["semiconductors"]),
		record("Port congestion", &[], &["trade", "logistics"], &["shipping"]),
		record("Garden notes", &[], &["gardening"], &["tomatoes"]),
	]
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let store = RwSignal::new(DocumentStore::with_records(sample_records()));
	let documents = Signal::derive(move || store.with(|s| s.documents().to_vec()));
	let filters = RwSignal::new(FilterSelection::new());
	let tooltip = RwSignal::new(TooltipState::hidden());

	let input = RwSignal::new(String::new());
	let ingest_error = RwSignal::new(None::<String>);
	let show_results = RwSignal::new(false);

	let on_filter_change = Callback::new(move |(category, values): (String, Vec<String>)| {
		info!("Filter {category} -> {values:?}");
		filters.update(|f| f.set(&category, values));
	});

	let on_submit = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		let raw = input.get_untracked();
		// A rejected result leaves the store as it was, so only successes notify.
		match store.try_update_untracked(|s| s.ingest(&raw)) {
			Some(Ok(_)) => {
				store.notify();
				input.set(String::new());
				ingest_error.set(None);
				show_results.set(true);
			}
			Some(Err(e)) => {
				error!("Analysis result rejected: {e}");
				ingest_error.set(Some(e.to_string()));
			}
			None => {}
		}
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="container">
				<h1 class="title">"Visualisation Prototype"</h1>
				<form class="form" on:submit=on_submit>
					<label for="inputText" class="label">"Paste an analysis result here:"</label>
					<textarea
						id="inputText"
						class="textarea"
						prop:value=move || input.get()
						on:input=move |ev| input.set(event_target_value(&ev))
					/>
					<button type="submit" class="button">"Add document"</button>
				</form>
				{move || ingest_error.get().map(|e| view! { <p class="error">{e}</p> })}

				<button class="button" on:click=move |_| show_results.update(|v| *v = !*v)>
					{move || if show_results.get() { "Hide Results" } else { "Show Results" }}
				</button>
				<Show when=move || show_results.get()>
					<div class="results">
						{move || {
							documents
								.get()
								.into_iter()
								.map(|doc| {
									let json = serde_json::to_string_pretty(&doc.record)
										.unwrap_or_default();
									view! { <pre>{json}</pre> }
								})
								.collect_view()
						}}
					</div>
				</Show>

				<FilterPanel documents=documents selection=filters on_change=on_filter_change />
				<RelationGraphCanvas documents=documents filters=filters tooltip=tooltip />
			</div>
		</ErrorBoundary>
	}
}
