use thiserror::Error;

/// Why a URI or refresh could not be produced.
///
/// Every variant is a local, silent failure: no request is issued and no surface is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
	#[error("no base URI available")]
	NoBase,

	#[error("unknown mode {0:?}")]
	UnknownMode(String),

	/// The widget, or one of its ancestors, has no id.
	#[error("widget is not addressable")]
	Unaddressable,

	#[error("the page location could not be read")]
	MissingLocation,
}
