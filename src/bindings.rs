//! The page-author API, as seen from JavaScript.

use crate::{
	register::{RegisteredWidget, UrlOptions, WidgetRegistry},
	uri::{self, Mode, UriParams},
};
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::prelude::*;

/// Builds a widget URI, or returns `undefined` if there is no base URI or the mode is unknown.
#[wasm_bindgen(js_name = widgetUri)]
#[allow(clippy::too_many_arguments)]
#[allow(clippy::needless_pass_by_value)]
pub fn widget_uri(
	base_uri: Option<String>,
	session_id: String,
	frame: Option<String>,
	focus: Option<String>,
	mode: Option<String>,
	path_info: Option<String>,
	translate: Option<String>,
	view: Option<String>,
) -> Option<String> {
	let params = UriParams {
		frame: frame.as_deref(),
		focus: focus.as_deref(),
		mode: None,
		path_info: path_info.as_deref(),
		translate: translate.as_deref(),
		view: view.as_deref(),
	};
	uri::build_with_mode_name(base_uri.as_deref(), &session_id, mode.as_deref(), params)
		.map_err(|rejected| warn!("Rejected widget URI: {}", rejected))
		.ok()
}

#[wasm_bindgen(js_name = WidgetRegistry)]
#[derive(Debug, Default)]
pub struct JsWidgetRegistry {
	registry: WidgetRegistry,
}

#[wasm_bindgen(js_class = WidgetRegistry)]
impl JsWidgetRegistry {
	#[wasm_bindgen(constructor)]
	pub fn new() -> Self {
		Self::default()
	}

	#[allow(clippy::needless_pass_by_value)]
	pub fn register(&mut self, base_uri: &str, session_id: &str, frame: Option<String>, widget_path: &str) -> JsRegisteredWidget {
		JsRegisteredWidget {
			widget: self.registry.register(base_uri, session_id, frame.as_deref(), widget_path),
		}
	}

	pub fn get(&self, widget_path: &str) -> Option<JsRegisteredWidget> {
		self.registry.get(widget_path).map(|widget| JsRegisteredWidget { widget })
	}
}

#[wasm_bindgen(js_name = RegisteredWidget)]
#[derive(Debug, Clone)]
pub struct JsRegisteredWidget {
	widget: Rc<RegisteredWidget>,
}

#[wasm_bindgen(js_class = RegisteredWidget)]
impl JsRegisteredWidget {
	#[wasm_bindgen(getter)]
	pub fn path(&self) -> String {
		self.widget.path().to_owned()
	}

	/// Returns `undefined` for an unknown `mode`. `mode` defaults to `"partial"`.
	#[allow(clippy::needless_pass_by_value)]
	pub fn url(&self, path_info: Option<String>, mode: Option<String>, translate: Option<String>, view: Option<String>) -> Option<String> {
		let mode = match mode.as_deref().map(str::parse::<Mode>).transpose() {
			Ok(mode) => mode,
			Err(rejected) => {
				warn!("Rejected widget URI: {}", rejected);
				return None;
			}
		};
		let options = UrlOptions {
			mode,
			translate: translate.as_deref(),
			view: view.as_deref(),
		};
		Some(self.widget.url(path_info.as_deref(), &options))
	}
}
