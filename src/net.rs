//! The network capability consumed by refreshes and the gadget shim.

/// A completed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
	/// `0` if the request failed before any response arrived.
	pub status: u16,
	pub body: String,
}

impl Response {
	#[must_use]
	pub fn transport_failure() -> Self {
		Self { status: 0, body: String::new() }
	}

	#[must_use]
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

pub type Completion = Box<dyn FnOnce(Response)>;

/// Issues GET requests.
///
/// Implementations return immediately and call `on_complete` at a later turn of the event loop,
/// at most once. Requests that never finish never complete.
pub trait Network {
	fn get(&self, url: &str, on_complete: Completion);
}

impl<N: Network + ?Sized> Network for std::rc::Rc<N> {
	fn get(&self, url: &str, on_complete: Completion) {
		(**self).get(url, on_complete)
	}
}
