use crate::{
	args,
	redact::sensitive,
	surface::SurfaceNaming,
	uri::{self, UriParams},
};
use tracing::{debug, instrument};

/// Page-wide state shared by every [`Widget`](`crate::Widget`) of one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyContext {
	base_uri: String,
	session_id: String,
	naming: SurfaceNaming,
}

impl ProxyContext {
	/// Creates a context for the page at `page_uri`.
	///
	/// The query string, fragment and any `;` argument block are stripped from `page_uri`.
	#[must_use]
	pub fn new(page_uri: &str, session_id: impl Into<String>) -> Self {
		Self::with_naming(page_uri, session_id, SurfaceNaming::default())
	}

	#[must_use]
	#[instrument(skip(page_uri, session_id), fields(page_uri = sensitive(page_uri)))]
	pub fn with_naming(page_uri: &str, session_id: impl Into<String>, naming: SurfaceNaming) -> Self {
		let session_id = session_id.into();
		let (base_uri, _) = args::split(page_uri);
		debug!(base_uri, session_id = sensitive(&session_id), "Created proxy context.");
		Self {
			base_uri: base_uri.to_owned(),
			session_id,
			naming,
		}
	}

	#[must_use]
	pub fn base_uri(&self) -> &str {
		&self.base_uri
	}

	#[must_use]
	pub fn session_id(&self) -> &str {
		&self.session_id
	}

	#[must_use]
	pub fn naming(&self) -> &SurfaceNaming {
		&self.naming
	}

	/// Builds a widget URI relative to this page.
	#[must_use]
	pub fn uri(&self, params: &UriParams<'_>) -> String {
		uri::build_on(&self.base_uri, &self.session_id, params)
	}
}
