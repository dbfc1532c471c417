//! URI construction for widgets that page scripts know only by path.

use crate::uri::{self, Mode, UriParams};
use hashbrown::HashMap;
use std::rc::Rc;
use tracing::{debug, instrument};

/// A widget announced by the page, without a [`Widget`](`crate::Widget`) tree behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredWidget {
	base_uri: String,
	session_id: String,
	frame: Option<String>,
	path: String,
}

/// Per-call options of [`RegisteredWidget::url`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlOptions<'a> {
	/// [`Mode::Partial`] if [`None`].
	pub mode: Option<Mode>,
	pub translate: Option<&'a str>,
	pub view: Option<&'a str>,
}

impl RegisteredWidget {
	#[must_use]
	pub fn path(&self) -> &str {
		&self.path
	}

	#[must_use]
	pub fn frame(&self) -> Option<&str> {
		self.frame.as_deref()
	}

	/// Builds a URI focused on this widget.
	#[must_use]
	pub fn url(&self, path_info: Option<&str>, options: &UrlOptions<'_>) -> String {
		let params = UriParams {
			frame: self.frame.as_deref(),
			focus: Some(&self.path),
			mode: Some(options.mode.unwrap_or(Mode::Partial)),
			path_info,
			translate: options.translate,
			view: options.view,
		};
		uri::build_on(&self.base_uri, &self.session_id, &params)
	}
}

/// The widgets a page has announced, by path.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
	widgets: HashMap<String, Rc<RegisteredWidget>>,
}

impl WidgetRegistry {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Announces the widget at `widget_path`, replacing any earlier announcement of the same path.
	#[instrument(skip(self, session_id))]
	pub fn register(&mut self, base_uri: &str, session_id: &str, frame: Option<&str>, widget_path: &str) -> Rc<RegisteredWidget> {
		let widget = Rc::new(RegisteredWidget {
			base_uri: base_uri.to_owned(),
			session_id: session_id.to_owned(),
			frame: frame.map(str::to_owned),
			path: widget_path.to_owned(),
		});
		if self.widgets.insert(widget_path.to_owned(), Rc::clone(&widget)).is_some() {
			debug!("Replaced earlier registration.");
		}
		widget
	}

	#[must_use]
	pub fn get(&self, widget_path: &str) -> Option<Rc<RegisteredWidget>> {
		self.widgets.get(widget_path).cloned()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.widgets.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.widgets.is_empty()
	}
}
