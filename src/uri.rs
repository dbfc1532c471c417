//! Widget request URIs.
//!
//! A widget URI is the page's base URI followed by a `;`-delimited block of `&`-joined arguments:
//!
//! ```text
//! http://example.com/page;session=S&focus=nav$2Fmenu&frame=nav$2Fmenu&path=$2Fitems&x=1
//! ```
//!
//! Argument values are [`escape`]d so that the whole URI can itself be embedded into another
//! percent-encoded URI without ambiguity.

use crate::Rejected;
use core::{fmt, str::FromStr};
use tracing::{instrument, trace};

/// How a widget request is to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
	/// Render the whole page, with the focused widget receiving the request.
	Focus,
	/// Alias of [`Mode::Partial`].
	Frame,
	/// Render only the focused widget.
	Partial,
	/// Like [`Mode::Partial`], but also persist the widget's state.
	Save,
}

impl Mode {
	/// Resolves aliases.
	#[must_use]
	pub fn normalized(self) -> Self {
		match self {
			Mode::Frame => Mode::Partial,
			other => other,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Mode::Focus => "focus",
			Mode::Frame => "frame",
			Mode::Partial => "partial",
			Mode::Save => "save",
		}
	}

	/// Whether a request in this mode is bounded by the focused widget.
	fn derives_frame(self) -> bool {
		matches!(self.normalized(), Mode::Partial | Mode::Save)
	}
}

impl FromStr for Mode {
	type Err = Rejected;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"focus" => Mode::Focus,
			"frame" => Mode::Frame,
			"partial" => Mode::Partial,
			"save" => Mode::Save,
			other => return Err(Rejected::UnknownMode(other.to_owned())),
		})
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Everything of a widget URI except the base and the session.
///
/// All fields are optional. Without a `focus`, only `translate` has any effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UriParams<'a> {
	/// Path of the widget bounding the re-rendered part of the tree.
	pub frame: Option<&'a str>,
	/// Path of the widget receiving the request.
	pub focus: Option<&'a str>,
	pub mode: Option<Mode>,
	/// Path and query to forward to the focused widget, like `/items?page=2`.
	pub path_info: Option<&'a str>,
	pub translate: Option<&'a str>,
	/// Only emitted alongside a frame.
	pub view: Option<&'a str>,
}

/// Builds a widget URI.
///
/// # Errors
///
/// [`Rejected::NoBase`] iff `base_uri` is [`None`].
#[instrument(skip(session_id))]
pub fn build(base_uri: Option<&str>, session_id: &str, params: &UriParams<'_>) -> Result<String, Rejected> {
	let base_uri = base_uri.ok_or(Rejected::NoBase)?;
	Ok(build_on(base_uri, session_id, params))
}

pub(crate) fn build_on(base_uri: &str, session_id: &str, params: &UriParams<'_>) -> String {
	let mut uri = String::with_capacity(base_uri.len() + 64);
	uri.push_str(base_uri);
	uri.push(';');
	uri.push_str("session=");
	uri.push_str(&escape(session_id));

	if let Some(focus) = params.focus {
		let mode = params.mode.map(Mode::normalized);
		push_arg(&mut uri, "focus", focus);

		let frame = match mode {
			Some(mode) if mode.derives_frame() => Some(focus),
			_ => params.frame,
		};
		if let Some(frame) = frame {
			push_arg(&mut uri, "frame", frame);
			if let Some(view) = params.view {
				push_arg(&mut uri, "view", view);
			}
		}

		if mode == Some(Mode::Save) {
			uri.push_str("&save=1");
		}

		if let Some(path_info) = params.path_info {
			let (path, query_string) = split_query(path_info);
			push_arg(&mut uri, "path", path);
			// Already in argument form.
			if let Some(query_string) = query_string.filter(|q| !q.is_empty()) {
				uri.push('&');
				uri.push_str(query_string);
			}
		}
	} else {
		trace!("No focus; addressing the page as a whole.");
	}

	if let Some(translate) = params.translate {
		push_arg(&mut uri, "translate", translate);
	}

	uri
}

/// Like [`build`], but with the mode given by name, as it arrives from page scripts.
///
/// # Errors
///
/// [`Rejected::UnknownMode`] if `mode` is not one of `focus`, `frame`, `partial` and `save`,
/// otherwise as [`build`].
pub fn build_with_mode_name(base_uri: Option<&str>, session_id: &str, mode: Option<&str>, params: UriParams<'_>) -> Result<String, Rejected> {
	let mode = mode.map(str::parse).transpose()?;
	build(base_uri, session_id, &UriParams { mode, ..params })
}

/// Percent-encodes `value` as a URI component, then replaces each `%` with `$`.
///
/// Unreserved characters (`A-Z a-z 0-9 - . _ ~`) pass through unchanged.
/// The result never contains `%`, `&`, `=` or `;`.
#[must_use]
pub fn escape(value: &str) -> String {
	urlencoding::encode(value).replace('%', "$")
}

/// Inverse of [`escape`].
///
/// Returns [`None`] if the decoded bytes are not valid UTF-8.
#[must_use]
pub fn unescape(value: &str) -> Option<String> {
	let percent_encoded = value.replace('$', "%");
	urlencoding::decode(&percent_encoded).ok().map(|decoded| decoded.into_owned())
}

fn push_arg(uri: &mut String, name: &str, value: &str) {
	uri.push('&');
	uri.push_str(name);
	uri.push('=');
	uri.push_str(&escape(value));
}

fn split_query(path_info: &str) -> (&str, Option<&str>) {
	match path_info.find('?') {
		Some(qmark) => (&path_info[..qmark], Some(&path_info[qmark + 1..])),
		None => (path_info, None),
	}
}
