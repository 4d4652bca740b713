use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::geometry::{Segment, edge_segment};
use super::state::Editor;

const NODE_STROKE: &str = "#333";
const NODE_FILL: &str = "#fff";
const LABEL_FILL: &str = "#333";
const LINK_STROKE: &str = "#333";
const SELECTION_STROKE: &str = "#8ac3f2";
const LINE_WIDTH: f64 = 3.0;
const ARROW_SIZE: f64 = 8.0;

/// Full redraw: links underneath, nodes in paint order, selection ring last.
pub fn render(editor: &Editor, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.clear_rect(0.0, 0.0, width, height);
	draw_links(editor, ctx);
	draw_nodes(editor, ctx);
	draw_selection(editor, ctx);
}

fn draw_links(editor: &Editor, ctx: &CanvasRenderingContext2d) {
	let store = editor.store();
	ctx.set_stroke_style_str(LINK_STROKE);
	ctx.set_fill_style_str(LINK_STROKE);
	ctx.set_line_width(LINE_WIDTH / 1.5);

	for link in store.links() {
		let (Some(from), Some(to)) = (store.get(link.source), store.get(link.target)) else {
			continue;
		};
		let Some(segment) = edge_segment(&from.circle(), &to.circle()) else {
			continue;
		};
		ctx.begin_path();
		ctx.move_to(segment.start.0, segment.start.1);
		ctx.line_to(
			segment.end.0 - segment.angle.cos() * ARROW_SIZE,
			segment.end.1 - segment.angle.sin() * ARROW_SIZE,
		);
		ctx.stroke();
		draw_arrow_head(ctx, &segment);
	}
}

fn draw_arrow_head(ctx: &CanvasRenderingContext2d, segment: &Segment) {
	let (ux, uy) = (segment.angle.cos(), segment.angle.sin());
	let (tip_x, tip_y) = segment.end;
	let (back_x, back_y) = (tip_x - ux * ARROW_SIZE, tip_y - uy * ARROW_SIZE);
	let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn draw_nodes(editor: &Editor, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(LINE_WIDTH);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_font(&format!("{}px sans-serif", (editor.options().node_radius * 0.9).round()));

	for node in editor.store().nodes() {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(NODE_STROKE);
		ctx.stroke();
		ctx.set_fill_style_str(NODE_FILL);
		ctx.fill();

		if let Some(label) = &node.label {
			ctx.set_fill_style_str(LABEL_FILL);
			let _ = ctx.fill_text(label, node.x, node.y);
		}
	}
}

fn draw_selection(editor: &Editor, ctx: &CanvasRenderingContext2d) {
	let Some(node) = editor.selected_node() else {
		return;
	};
	ctx.set_stroke_style_str(SELECTION_STROKE);
	ctx.set_line_width(LINE_WIDTH);
	ctx.begin_path();
	let _ = ctx.arc(
		node.x,
		node.y,
		editor.options().selection_ring_radius(),
		0.0,
		2.0 * PI,
	);
	ctx.stroke();
}
