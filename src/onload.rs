use core::{cell::RefCell, fmt};
use tracing::{instrument, trace};

/// Callbacks to run once the page has loaded.
///
/// Each registered callback runs exactly once, on the first [`OnloadRegistry::fire`] after its registration,
/// in registration order.
#[derive(Default)]
pub struct OnloadRegistry {
	callbacks: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl OnloadRegistry {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&self, callback: impl FnOnce() + 'static) {
		self.callbacks.borrow_mut().push(Box::new(callback));
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.callbacks.borrow().len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.callbacks.borrow().is_empty()
	}

	/// Runs and forgets all pending callbacks.
	///
	/// Callbacks may register further callbacks. Those run in the same call, after the ones already pending.
	#[instrument(skip(self))]
	pub fn fire(&self) {
		loop {
			let pending = self.callbacks.replace(Vec::new());
			if pending.is_empty() {
				break;
			}
			trace!("Running {} onload callback(s).", pending.len());
			for callback in pending {
				callback();
			}
		}
	}
}

impl fmt::Debug for OnloadRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OnloadRegistry").field("pending", &self.len()).finish()
	}
}
