//! Canvas painting of a reconciled scene.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::GraphConfig;
use super::error::{GraphError, Result};
use super::scene::Scene;

/// Size the canvas and hand back its 2D context.
///
/// Called before every pass; when it fails nothing is reconciled or drawn.
pub fn surface(
	canvas: Option<HtmlCanvasElement>,
	config: &GraphConfig,
) -> Result<CanvasRenderingContext2d> {
	let canvas =
		canvas.ok_or_else(|| GraphError::MissingSurface("canvas is not mounted".into()))?;
	canvas.set_width(config.width as u32);
	canvas.set_height(config.height as u32);
	canvas
		.get_context("2d")
		.map_err(|e| GraphError::MissingSurface(format!("{e:?}")))?
		.ok_or_else(|| GraphError::MissingSurface("2d context not supported".into()))?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| GraphError::MissingSurface("context is not 2d".into()))
}

/// Clear the canvas and draw every primitive, lines under circles under labels.
pub fn paint(scene: &Scene, ctx: &CanvasRenderingContext2d, config: &GraphConfig) {
	ctx.clear_rect(0.0, 0.0, config.width, config.height);
	ctx.save();
	let (ox, oy) = config.origin();
	let _ = ctx.translate(ox, oy);
	draw_lines(scene, ctx);
	draw_circles(scene, ctx);
	draw_labels(scene, ctx, config);
	ctx.restore();
}

fn draw_lines(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	for (_, line) in scene.lines() {
		ctx.set_stroke_style_str(&line.stroke);
		ctx.set_line_width(line.width);
		ctx.begin_path();
		ctx.move_to(line.from.x, line.from.y);
		ctx.line_to(line.to.x, line.to.y);
		ctx.stroke();
	}
}

fn draw_circles(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	for (_, circle) in scene.circles() {
		ctx.begin_path();
		let _ = ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&circle.fill);
		ctx.fill();
	}
}

fn draw_labels(scene: &Scene, ctx: &CanvasRenderingContext2d, config: &GraphConfig) {
	ctx.set_fill_style_str(&config.label_fill);
	ctx.set_font(&config.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for (_, label) in scene.labels() {
		let _ = ctx.fill_text(&label.text, label.anchor.x, label.anchor.y);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unmounted_canvas_is_a_missing_surface() {
		let result = surface(None, &GraphConfig::default());
		assert!(matches!(result, Err(GraphError::MissingSurface(_))));
	}
}
