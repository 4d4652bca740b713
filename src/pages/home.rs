use leptos::prelude::*;

use crate::components::node_canvas::{EditorOptions, NodeCanvas};

/// One editor with its own reset button.
#[component]
fn EditorPanel(
	title: &'static str,
	hint: &'static str,
	options: EditorOptions,
) -> impl IntoView {
	let (restarts, set_restarts) = signal(0u32);

	view! {
		<section class="editor-panel">
			<h2>{title}</h2>
			<p class="subtitle">{hint}</p>
			<NodeCanvas options=options restart=restarts />
			<button class="reset" on:click=move |_| set_restarts.update(|n| *n += 1)>
				"Reset"
			</button>
		</section>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
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

			<main class="node-canvas-page">
				<h1>"Node Canvas"</h1>
				<EditorPanel
					title="Nodes"
					hint="Ctrl+click to add a node. Drag to move it. Delete removes the selected node."
					options=EditorOptions::plain()
				/>
				<EditorPanel
					title="Labeled nodes"
					hint="Ctrl+click to add a numbered node. Drag the background to move everything."
					options=EditorOptions::labeled()
				/>
				<EditorPanel
					title="Linked nodes"
					hint="Select a node, then Shift+click another to link them."
					options=EditorOptions::linked()
				/>
			</main>
		</ErrorBoundary>
	}
}
