//! Reading widget URIs back, as the server does.

use crate::{
	redact::sensitive,
	uri::{unescape, Mode},
};
use hashbrown::HashMap;
use tracing::{instrument, trace, warn};

/// Splits `uri` into its base and its `;` argument block, ignoring query string and fragment.
///
/// ```
/// use widget_refresh::args::split;
///
/// assert_eq!(split("http://h/p;session=S&focus=a?x=1"), ("http://h/p", Some("session=S&focus=a")));
/// assert_eq!(split("http://h/p#top"), ("http://h/p", None));
/// ```
#[must_use]
pub fn split(uri: &str) -> (&str, Option<&str>) {
	let uri = strip_query_and_fragment(uri);
	match uri.find(';') {
		Some(semicolon) => (&uri[..semicolon], Some(&uri[semicolon + 1..])),
		None => (uri, None),
	}
}

pub(crate) fn strip_query_and_fragment(uri: &str) -> &str {
	match uri.find(|c: char| c == '?' || c == '#') {
		Some(end) => &uri[..end],
		None => uri,
	}
}

/// Decoded widget arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(HashMap<String, String>);

impl Args {
	/// Parses an argument block like `session=S&focus=nav$2Fmenu`.
	///
	/// Pairs without `=`, with an empty name or with an undecodable value are skipped.
	/// Later duplicates win.
	#[must_use]
	#[instrument(skip(block), fields(block = sensitive(block)))]
	pub fn parse(block: &str) -> Self {
		let mut args = HashMap::new();
		for pair in block.split('&').filter(|pair| !pair.is_empty()) {
			let (name, value) = match pair.find('=') {
				Some(eq) if eq > 0 => (&pair[..eq], &pair[eq + 1..]),
				_ => {
					trace!("Skipping malformed argument {:?}.", pair);
					continue;
				}
			};
			match unescape(value) {
				Some(value) => {
					args.insert(name.to_owned(), value);
				}
				None => warn!("Skipping undecodable value of argument {:?}.", name),
			}
		}
		Self(args)
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Interprets the arguments emitted by [`crate::uri::build`].
	#[must_use]
	pub fn widget_request(&self) -> WidgetRequest<'_> {
		let focus = self.get("focus");
		let frame = self.get("frame");
		let save = self.get("save") == Some("1");
		WidgetRequest {
			session: self.get("session"),
			focus,
			frame,
			path: self.get("path"),
			view: self.get("view"),
			translate: self.get("translate"),
			save,
			mode: match (focus, frame) {
				(Some(_), _) if save => Some(Mode::Save),
				(Some(focus), Some(frame)) if focus == frame => Some(Mode::Partial),
				(Some(_), _) => Some(Mode::Focus),
				(None, _) => None,
			},
		}
	}
}

/// What a widget URI asks of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetRequest<'a> {
	pub session: Option<&'a str>,
	pub focus: Option<&'a str>,
	pub frame: Option<&'a str>,
	pub path: Option<&'a str>,
	pub view: Option<&'a str>,
	pub translate: Option<&'a str>,
	pub save: bool,
	/// Reconstructed from `focus`, `frame` and `save`. [`Mode::Frame`] is never reported, as it is an alias.
	pub mode: Option<Mode>,
}
