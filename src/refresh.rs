//! Refreshing a single widget in place.

use crate::{
	net::{Network, Response},
	redact::sensitive,
	surface::{ContentSurface, Document, FrameSurface, Surface},
	Rejected, Widget,
};
use std::rc::Rc;
use tracing::{debug, instrument, trace, warn};

/// How a refresh was started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
	/// The widget's frame was pointed at `uri`. There is no completion signal.
	Navigated { uri: String },
	/// A request for `uri` is in flight. Its content surface is replaced iff it succeeds.
	Fetching { uri: String },
}

impl Refresh {
	#[must_use]
	pub fn uri(&self) -> &str {
		match self {
			Refresh::Navigated { uri } | Refresh::Fetching { uri } => uri,
		}
	}
}

/// Refreshes widgets, either by navigating their frame or by replacing their markup inline.
///
/// Concurrent inline refreshes of the same widget are not ordered: whichever response arrives last is shown.
#[derive(Debug)]
pub struct Refresher<N, D> {
	network: N,
	document: Rc<D>,
}

impl<N: Network, D: Document + 'static> Refresher<N, D> {
	#[must_use]
	pub fn new(network: N, document: D) -> Self {
		Self {
			network,
			document: Rc::new(document),
		}
	}

	#[must_use]
	pub fn network(&self) -> &N {
		&self.network
	}

	#[must_use]
	pub fn document(&self) -> &D {
		&self.document
	}

	/// Refreshes `widget`, forwarding `path_info` to it.
	///
	/// If the page has a frame surface for the widget, that frame is navigated and nothing is fetched.
	/// Otherwise exactly one request is issued.
	///
	/// # Errors
	///
	/// [`Rejected::Unaddressable`] if the widget has no path. Nothing is requested in that case.
	#[instrument(skip(self))]
	pub fn refresh(&self, widget: &Widget, path_info: Option<&str>) -> Result<Refresh, Rejected> {
		let path = match widget.path() {
			Some(path) => path,
			None => {
				warn!("Refusing to refresh unaddressable widget.");
				return Err(Rejected::Unaddressable);
			}
		};
		let naming = widget.context().naming();

		if let Some(Surface::Frame(frame)) = self.document.find_surface(&naming.frame_id(path)) {
			let uri = widget.target_uri(path_info, true, false)?;
			debug!("Navigating frame.");
			frame.navigate(&uri);
			return Ok(Refresh::Navigated { uri });
		}

		let uri = widget.target_uri(path_info, false, false)?;
		let content_id = naming.content_id(path);
		let document = Rc::clone(&self.document);
		debug!("Fetching inline content.");
		self.network.get(&uri, Box::new(move |response| apply(&*document, &content_id, &response)));
		Ok(Refresh::Fetching { uri })
	}

	/// Issues a plain GET through the same network as [`Refresher::refresh`].
	pub fn fetch(&self, url: &str, on_complete: impl FnOnce(Response) + 'static) {
		self.network.get(url, Box::new(on_complete));
	}
}

fn apply<D: Document + ?Sized>(document: &D, content_id: &str, response: &Response) {
	if !response.is_success() {
		debug!(content_id, status = response.status, "Refresh failed; keeping stale content.");
		return;
	}

	match document.find_surface(content_id) {
		Some(Surface::Content(content)) => {
			trace!(content_id, body = sensitive(&response.body), "Replacing content.");
			content.replace_content(&response.body);
		}
		Some(Surface::Frame(_)) => debug!(content_id, "Content surface is a frame; discarding response."),
		None => debug!(content_id, "Content surface is gone; discarding response."),
	}
}
