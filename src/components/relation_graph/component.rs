use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::config::GraphConfig;
use super::filter::FilterSelection;
use super::render;
use super::state::GraphState;
use super::tooltip::TooltipState;
use super::types::Document;

// The bounding rect includes the border; the drawing surface starts inside it.
fn drawing_point(client: (f64, f64), rect: (f64, f64), border: (f64, f64)) -> (f64, f64) {
	(client.0 - rect.0 - border.0, client.1 - rect.1 - border.1)
}

/// Node-link view of `documents` narrowed by `filters`.
///
/// The tooltip state belongs to the caller; the overlay element itself lives
/// and dies with this component.
#[component]
pub fn RelationGraphCanvas(
	/// Every loaded document, filtered or not.
	#[prop(into)]
	documents: Signal<Vec<Document>>,
	/// Current filter selection.
	#[prop(into)]
	filters: Signal<FilterSelection>,
	/// Edge tooltip state, owned by the caller.
	tooltip: RwSignal<TooltipState>,
	/// Drawing settings; defaults when absent.
	#[prop(default = None)]
	config: Option<GraphConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = Rc::new(RefCell::new(GraphState::new(config.clone())));

	// Current canvas-relative pointer position of a mouse event.
	let pointer = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some(drawing_point(
			(ev.client_x() as f64, ev.client_y() as f64),
			(rect.left(), rect.top()),
			(canvas.client_left() as f64, canvas.client_top() as f64),
		))
	};

	let state_fx = state.clone();
	Effect::new(move |_| {
		let docs = documents.get();
		let selection = filters.get();
		let mut s = state_fx.borrow_mut();
		let ctx = match render::surface(canvas_ref.get().map(Into::into), &s.config) {
			Ok(ctx) => ctx,
			Err(e) => {
				warn!("Skipping graph render: {e}");
				return;
			}
		};
		tooltip.update(TooltipState::reset);
		let stats = s.refresh(&docs, &selection);
		if !stats.is_noop() {
			debug!("scene changed: {stats:?}");
		}
		render::paint(&s.scene, &ctx, &s.config);
	});

	// Drag path: positions only, no filtering or link derivation.
	let state_rp = state.clone();
	let repaint = move || {
		let s = state_rp.borrow();
		match render::surface(canvas_ref.get().map(Into::into), &s.config) {
			Ok(ctx) => render::paint(&s.scene, &ctx, &s.config),
			Err(e) => warn!("Skipping graph repaint: {e}"),
		}
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(id) = state_md.borrow_mut().pointer_down(x, y) {
			debug!("grabbed {id:?}");
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		let moved = state_mm.borrow_mut().pointer_move(x, y);
		if moved {
			repaint();
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		state_mu.borrow_mut().pointer_up();
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		state_ml.borrow_mut().pointer_up();
	};

	let state_cl = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		let s = state_cl.borrow();
		if let Some(link) = s.edge_at(x, y) {
			tooltip.update(|t| {
				t.on_edge_activate(
					&link,
					s.visible(),
					ev.page_x() as f64,
					ev.page_y() as f64,
					&s.config,
				);
			});
		}
	};

	on_cleanup(move || {
		tooltip.update(TooltipState::reset);
	});

	let overlay_config = config;
	view! {
		<canvas
			node_ref=canvas_ref
			class="relation-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:click=on_click
			style="display: block; cursor: grab;"
		/>
		<div class="tooltip" style=move || tooltip.with(|t| t.style(&overlay_config))>
			{move || tooltip.with(|t| t.content.clone())}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pointer_is_measured_inside_the_border() {
		assert_eq!(drawing_point((11.0, 21.0), (10.0, 20.0), (1.0, 1.0)), (0.0, 0.0));
		assert_eq!(
			drawing_point((410.0, 270.0), (8.0, 18.0), (2.0, 2.0)),
			(400.0, 250.0)
		);
	}
}
