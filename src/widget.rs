use crate::{
	uri::{Mode, UriParams},
	ProxyContext, Rejected,
};
use core::{cell::RefCell, fmt};
use hashbrown::HashMap;
use std::rc::{Rc, Weak};
use tracing::{instrument, trace, warn};

/// One node of a page's widget tree.
///
/// The tree is rooted at [`Widget::root`]. Each child is owned by its parent's child map and holds a weak
/// back-reference to the parent, so a widget lives exactly as long as its parent keeps it.
///
/// The tree is single-threaded: [`Widget`] is neither [`Send`] nor [`Sync`].
pub struct Widget {
	id: Option<String>,
	path: Option<String>,
	parent: Option<Weak<Widget>>,
	context: Rc<ProxyContext>,
	children: RefCell<HashMap<String, Rc<Widget>>>,
}

impl Widget {
	/// Creates the implicit root widget of a page. It has neither id nor path.
	#[must_use]
	pub fn root(context: Rc<ProxyContext>) -> Rc<Self> {
		Rc::new(Self {
			id: None,
			path: None,
			parent: None,
			context,
			children: RefCell::default(),
		})
	}

	/// Creates a child of `parent` and registers it under `id`.
	///
	/// A child without `id` is not registered and is unaddressable, as are all of its descendants.
	/// Registering a second child under the same `id` replaces the first one in the child map.
	#[instrument(skip(parent), fields(parent_path = ?parent.path))]
	pub fn new_child(parent: &Rc<Self>, id: Option<&str>) -> Rc<Self> {
		let path = match id {
			None => None,
			Some(id) if parent.is_root() => Some(id.to_owned()),
			Some(id) => match parent.path.as_deref() {
				Some(parent_path) if !parent_path.is_empty() => Some(format!("{}/{}", parent_path, id)),
				_ => None,
			},
		};
		if path.is_none() {
			trace!("Widget is unaddressable.");
		}

		let child = Rc::new(Self {
			id: id.map(str::to_owned),
			path,
			parent: Some(Rc::downgrade(parent)),
			context: Rc::clone(&parent.context),
			children: RefCell::default(),
		});

		if let Some(id) = id {
			if let Some(previous) = parent.children.borrow_mut().insert(id.to_owned(), Rc::clone(&child)) {
				warn!("Replaced existing child widget {:?}.", previous.path);
			}
		}
		child
	}

	#[must_use]
	pub fn is_root(&self) -> bool {
		self.parent.is_none()
	}

	#[must_use]
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// The `/`-joined ids from the root's child down to this widget,
	/// or [`None`] if this widget cannot be addressed.
	#[must_use]
	pub fn path(&self) -> Option<&str> {
		self.path.as_deref()
	}

	/// [`None`] for the root, or if the parent was dropped.
	#[must_use]
	pub fn parent(&self) -> Option<Rc<Self>> {
		self.parent.as_ref().and_then(Weak::upgrade)
	}

	#[must_use]
	pub fn context(&self) -> &Rc<ProxyContext> {
		&self.context
	}

	#[must_use]
	pub fn child(&self, id: &str) -> Option<Rc<Self>> {
		self.children.borrow().get(id).cloned()
	}

	/// Looks up a descendant by a `/`-delimited path relative to this widget.
	#[must_use]
	pub fn resolve(&self, relative_path: &str) -> Option<Rc<Self>> {
		match relative_path.find('/') {
			None => self.child(relative_path),
			Some(slash) => self.child(&relative_path[..slash])?.resolve(&relative_path[slash + 1..]),
		}
	}

	/// Builds the URI that refreshes this widget.
	///
	/// `save` takes precedence over `as_frame`. Either way, the widget is its own frame.
	///
	/// # Errors
	///
	/// [`Rejected::Unaddressable`] iff [`Widget::path`] is [`None`].
	pub fn target_uri(&self, path_info: Option<&str>, as_frame: bool, save: bool) -> Result<String, Rejected> {
		let mode = if save {
			Mode::Save
		} else if as_frame {
			Mode::Frame
		} else {
			Mode::Partial
		};
		self.uri(&UriParams {
			mode: Some(mode),
			path_info,
			..UriParams::default()
		})
	}

	/// Builds a URI focused on this widget. `params.focus` is ignored.
	///
	/// # Errors
	///
	/// [`Rejected::Unaddressable`] iff [`Widget::path`] is [`None`].
	pub fn uri(&self, params: &UriParams<'_>) -> Result<String, Rejected> {
		let path = self.path().ok_or(Rejected::Unaddressable)?;
		Ok(self.context.uri(&UriParams { focus: Some(path), ..*params }))
	}
}

impl fmt::Debug for Widget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Widget")
			.field("id", &self.id)
			.field("path", &self.path)
			.field("children", &self.children.borrow().len())
			.finish()
	}
}
