//! Rendering surfaces, as found in the page by derived identifiers.

use std::borrow::Cow;

/// A region of the page that can show a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Surface<C, F> {
	/// Inline markup, replaced wholesale on refresh.
	Content(C),
	/// A navigable sub-frame.
	Frame(F),
}

pub trait ContentSurface {
	fn replace_content(&self, markup: &str);
}

pub trait FrameSurface {
	fn navigate(&self, uri: &str);
}

/// Surface lookup by identifier.
pub trait Document {
	type Content: ContentSurface;
	type Frame: FrameSurface;

	fn find_surface(&self, id: &str) -> Option<Surface<Self::Content, Self::Frame>>;
}

/// How surface identifiers are derived from widget paths.
///
/// The defaults produce `widget_content_nav__slash__menu` and `widget_frame_nav__slash__menu` for the path `nav/menu`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceNaming {
	pub content_prefix: Cow<'static, str>,
	pub frame_prefix: Cow<'static, str>,
	/// Replaces each `/` of the widget path.
	pub slash: Cow<'static, str>,
}

impl Default for SurfaceNaming {
	fn default() -> Self {
		Self {
			content_prefix: Cow::Borrowed("widget_content_"),
			frame_prefix: Cow::Borrowed("widget_frame_"),
			slash: Cow::Borrowed("__slash__"),
		}
	}
}

impl SurfaceNaming {
	#[must_use]
	pub fn content_id(&self, widget_path: &str) -> String {
		self.derive(&self.content_prefix, widget_path)
	}

	#[must_use]
	pub fn frame_id(&self, widget_path: &str) -> String {
		self.derive(&self.frame_prefix, widget_path)
	}

	fn derive(&self, prefix: &str, widget_path: &str) -> String {
		let mut id = String::with_capacity(prefix.len() + widget_path.len());
		id.push_str(prefix);
		id.push_str(&widget_path.replace('/', &self.slash));
		id
	}
}
