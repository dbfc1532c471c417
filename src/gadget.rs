//! Emulation of the legacy gadget API for widgets written against it.
//!
//! Everything here is expressed through a [`Refresher`]'s plain fetch and an [`OnloadRegistry`];
//! the rest of the crate does not know about gadgets.

use crate::{
	net::{Network, Response},
	surface::Document,
	uri::escape,
	OnloadRegistry, Refresher, Rejected, Widget,
};
use core::{cell::RefCell, iter::FromIterator};
use hashbrown::HashMap;
use std::rc::Rc;
use tracing::{error, instrument, warn};
use wasm_bindgen::JsValue;
use web_sys::{DomParser, SupportedType};

/// A gadget's user preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences(HashMap<String, String>);

impl Preferences {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// `""` if unset.
	#[must_use]
	pub fn get_string(&self, name: &str) -> &str {
		self.0.get(name).map_or("", String::as_str)
	}

	/// `0` if unset or not an integer.
	#[must_use]
	pub fn get_int(&self, name: &str) -> i64 {
		self.get_string(name).trim().parse().unwrap_or(0)
	}

	/// `true` for `"1"` and `"true"`, ignoring case.
	#[must_use]
	pub fn get_bool(&self, name: &str) -> bool {
		let value = self.get_string(name).trim();
		value == "1" || value.eq_ignore_ascii_case("true")
	}

	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.insert(name.into(), value.into());
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Preferences {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

/// The legacy API surface offered to one gadget.
#[derive(Debug)]
pub struct Gadget<N, D> {
	refresher: Rc<Refresher<N, D>>,
	onload: Rc<OnloadRegistry>,
	widget: Option<Rc<Widget>>,
	preferences: RefCell<Preferences>,
}

impl<N: Network, D: Document + 'static> Gadget<N, D> {
	/// `widget` is where preference changes are saved. Without it, they stay local.
	#[must_use]
	pub fn new(refresher: Rc<Refresher<N, D>>, onload: Rc<OnloadRegistry>, widget: Option<Rc<Widget>>, preferences: Preferences) -> Self {
		Self {
			refresher,
			onload,
			widget,
			preferences: RefCell::new(preferences),
		}
	}

	#[must_use]
	pub fn preferences(&self) -> core::cell::Ref<'_, Preferences> {
		self.preferences.borrow()
	}

	/// Stores a preference and saves it through the gadget's widget, if any.
	///
	/// The local value is updated even if saving is impossible.
	///
	/// # Errors
	///
	/// [`Rejected::Unaddressable`] if the gadget's widget has no path.
	#[instrument(skip(self, value))]
	pub fn set_preference(&self, name: &str, value: &str) -> Result<(), Rejected> {
		self.preferences.borrow_mut().set(name, value);

		let widget = match &self.widget {
			Some(widget) => widget,
			None => return Ok(()),
		};
		let path_info = format!("?{}={}", escape(name), escape(value));
		let uri = widget.target_uri(Some(&path_info), false, true)?;
		self.refresher.fetch(&uri, |response| {
			if !response.is_success() {
				warn!(status = response.status, "Saving preference failed.");
			}
		});
		Ok(())
	}

	/// Fetches `url` as text. The callback receives [`None`] unless the request succeeded.
	pub fn fetch_content(&self, url: &str, callback: impl FnOnce(Option<String>) + 'static) {
		self.refresher.fetch(url, move |response| callback(success_body(response)));
	}

	/// Fetches `url` and parses it as XML.
	///
	/// The callback receives [`None`] unless the request succeeded and a parser was available.
	/// Malformed XML yields the browser's error document, not [`None`].
	pub fn fetch_xml_content(&self, url: &str, callback: impl FnOnce(Option<web_sys::Document>) + 'static) {
		self.refresher.fetch(url, move |response| callback(success_body(response).and_then(|body| parse_xml(&body))));
	}

	pub fn register_onload_handler(&self, handler: impl FnOnce() + 'static) {
		self.onload.register(handler);
	}
}

fn success_body(response: Response) -> Option<String> {
	if response.is_success() {
		Some(response.body)
	} else {
		None
	}
}

fn parse_xml(body: &str) -> Option<web_sys::Document> {
	let parsed: Result<_, JsValue> = DomParser::new().and_then(|parser| parser.parse_from_string(body, SupportedType::TextXml));
	match parsed {
		Ok(document) => Some(document),
		Err(error) => {
			error!("Could not parse XML content: {:?}", error);
			None
		}
	}
}
