//! Browser implementations of the capabilities the rest of the crate consumes.

use crate::{
	net::{Completion, Network, Response},
	redact::sensitive,
	surface::{ContentSurface, Document, FrameSurface, Surface},
	OnloadRegistry, ProxyContext, Rejected,
};
use js_sys::Function;
use std::rc::Rc;
use tracing::{debug, error, instrument, trace};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{AddEventListenerOptions, EventTarget, HtmlElement, HtmlIFrameElement, Location, Window, XmlHttpRequest};

impl ContentSurface for HtmlElement {
	fn replace_content(&self, markup: &str) {
		self.set_inner_html(markup);
	}
}

impl FrameSurface for HtmlIFrameElement {
	fn navigate(&self, uri: &str) {
		self.set_src(uri);
	}
}

/// Finds surfaces by element id: `<iframe>`s are frames, other HTML elements hold content.
#[derive(Debug, Clone)]
pub struct WebDocument(web_sys::Document);

impl WebDocument {
	#[must_use]
	pub fn new(document: web_sys::Document) -> Self {
		Self(document)
	}

	/// The document of the global `window`, if there is one.
	#[must_use]
	pub fn current() -> Option<Self> {
		web_sys::window().and_then(|window| window.document()).map(Self)
	}
}

impl Document for WebDocument {
	type Content = HtmlElement;
	type Frame = HtmlIFrameElement;

	fn find_surface(&self, id: &str) -> Option<Surface<HtmlElement, HtmlIFrameElement>> {
		let element = self.0.get_element_by_id(id)?;
		match element.dyn_into::<HtmlIFrameElement>() {
			Ok(frame) => Some(Surface::Frame(frame)),
			Err(element) => match element.dyn_into::<HtmlElement>() {
				Ok(content) => Some(Surface::Content(content)),
				Err(element) => {
					debug!("Element #{} is not an HTML element: {:?}", id, element);
					None
				}
			},
		}
	}
}

/// Issues requests through `XMLHttpRequest`.
///
/// Failed requests complete with status `0`. Requests the browser refuses to start never complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct XhrNetwork;

impl Network for XhrNetwork {
	#[instrument(skip(self, url, on_complete), fields(url = sensitive(url)))]
	fn get(&self, url: &str, on_complete: Completion) {
		let xhr = match XmlHttpRequest::new() {
			Ok(xhr) => xhr,
			Err(error) => return error!("Could not create XMLHttpRequest: {:?}", error),
		};
		if let Err(error) = xhr.open_with_async("GET", url, true) {
			return error!("Could not open XMLHttpRequest: {:?}", error);
		}

		let request = xhr.clone();
		// `loadend` follows `load`, `error`, `abort` and `timeout` alike.
		let on_loadend = Closure::once_into_js(move || {
			let status = request.status().unwrap_or(0);
			let body = request.response_text().ok().flatten().unwrap_or_default();
			trace!(status, "Request completed.");
			on_complete(Response { status, body });
		});
		xhr.set_onloadend(Some(on_loadend.unchecked_ref::<Function>()));

		if let Err(error) = xhr.send() {
			error!("Could not send XMLHttpRequest: {:?}", error);
		}
	}
}

impl ProxyContext {
	/// Creates a context for the page currently shown at `location`.
	///
	/// # Errors
	///
	/// [`Rejected::MissingLocation`] if the location's `href` cannot be read.
	pub fn from_location(location: &Location, session_id: impl Into<String>) -> Result<Self, Rejected> {
		let href = location.href().map_err(|error| {
			error!("Could not read location.href: {:?}", error);
			Rejected::MissingLocation
		})?;
		Ok(Self::new(&href, session_id))
	}
}

impl OnloadRegistry {
	/// Fires this registry once `window` has loaded, or right away if it already has.
	#[instrument(skip(self, window))]
	pub fn fire_on_load(self: &Rc<Self>, window: &Window) {
		let loaded = window.document().map_or(false, |document| document.ready_state() == "complete");
		if loaded {
			debug!("Document already loaded.");
			return self.fire();
		}
		self.fire_on_event(window, "load");
	}

	/// Fires this registry the first time `target` dispatches an `event_type` event.
	#[instrument(skip(self, target))]
	pub fn fire_on_event(self: &Rc<Self>, target: &EventTarget, event_type: &str) {
		let registry = Rc::clone(self);
		let listener = Closure::once_into_js(move || registry.fire());
		let mut options = AddEventListenerOptions::new();
		options.once(true);
		if let Err(error) = target.add_event_listener_with_callback_and_add_event_listener_options(event_type, listener.unchecked_ref::<Function>(), &options) {
			error!("Could not listen for `{}`: {:?}", event_type, error);
		}
	}
}
