use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use super::render;
use super::state::Editor;
use super::types::{EditorEvent, EditorOptions, Modifiers, PointerButton};

#[component]
pub fn NodeCanvas(
	#[prop(default = EditorOptions::default())] options: EditorOptions,
	/// Every change of this signal restarts the editor.
	#[prop(into, optional)]
	restart: Option<Signal<u32>>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = 320.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let repaint_ms = options.repaint_interval_ms;
	let editor = match Editor::new(options) {
		Ok(editor) => editor,
		Err(err) => {
			error!("{}; falling back to default options", err);
			Editor::default()
		}
	};
	let editor: Rc<RefCell<Editor>> = Rc::new(RefCell::new(editor));
	let repaint: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (editor_init, repaint_init) = (editor.clone(), repaint.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window): Option<Window> = web_sys::window() else {
			return;
		};

		let w = width.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		});
		canvas.set_width(w as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				error!("Canvas has no 2d context");
				return;
			}
		};

		let (editor_tick, canvas_tick) = (editor_init.clone(), canvas.clone());
		*repaint_init.borrow_mut() = Some(Closure::new(move || {
			render::render(
				&editor_tick.borrow(),
				&ctx,
				canvas_tick.width() as f64,
				canvas_tick.height() as f64,
			);
		}));
		if let Some(ref cb) = *repaint_init.borrow() {
			match window.set_interval_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				repaint_ms,
			) {
				Ok(handle) => on_cleanup(move || {
					if let Some(window) = web_sys::window() {
						window.clear_interval_with_handle(handle);
					}
				}),
				Err(err) => warn!("Could not start repaint clock: {:?}", err),
			}
		}
	});

	if let Some(restart) = restart {
		let editor_rs = editor.clone();
		Effect::new(move |_| {
			let _ = restart.get();
			editor_rs.borrow_mut().handle(EditorEvent::Restart);
		});
	}

	let editor_md = editor.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(canvas) = canvas_ref.get() {
			let _ = canvas.focus();
		}
		editor_md.borrow_mut().handle(EditorEvent::Press {
			x,
			y,
			button: PointerButton::from(ev.button()),
			modifiers: Modifiers {
				ctrl: ev.ctrl_key() || ev.meta_key(),
				shift: ev.shift_key(),
			},
		});
	};

	let editor_mm = editor.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		editor_mm.borrow_mut().handle(EditorEvent::Move {
			x,
			y,
			dx: ev.movement_x() as f64,
			dy: ev.movement_y() as f64,
		});
	};

	let editor_mu = editor.clone();
	let on_mouseup = move |ev: MouseEvent| {
		editor_mu.borrow_mut().handle(EditorEvent::Release {
			button: PointerButton::from(ev.button()),
		});
	};

	let editor_ml = editor.clone();
	let on_mouseleave = move |_: MouseEvent| {
		editor_ml.borrow_mut().handle(EditorEvent::release());
	};

	let editor_kd = editor.clone();
	let on_keydown = move |ev: KeyboardEvent| {
		if ev.key() == "Delete" {
			ev.prevent_default();
			editor_kd.borrow_mut().handle(EditorEvent::Delete);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="node-canvas"
			tabindex="0"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:keydown=on_keydown
			style="display: block; user-select: none; outline: none; border: 1px solid #ccc;"
		/>
	}
}

/// Pointer position relative to the canvas' top-left corner.
fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
