#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, rc::Rc};
use widget_refresh::{
	net::{Completion, Network, Response},
	surface::{ContentSurface, Document, FrameSurface, Surface},
};

/// Records requests and completes them on demand.
#[derive(Default)]
pub struct FakeNetwork {
	pending: RefCell<Vec<(String, Completion)>>,
	issued: RefCell<Vec<String>>,
}

impl FakeNetwork {
	/// Every URL requested so far, including completed ones.
	pub fn issued(&self) -> Vec<String> {
		self.issued.borrow().clone()
	}

	pub fn pending(&self) -> usize {
		self.pending.borrow().len()
	}

	pub fn complete(&self, index: usize, status: u16, body: &str) {
		let (_, on_complete) = self.pending.borrow_mut().remove(index);
		on_complete(Response { status, body: body.to_owned() });
	}
}

impl Network for FakeNetwork {
	fn get(&self, url: &str, on_complete: Completion) {
		self.issued.borrow_mut().push(url.to_owned());
		self.pending.borrow_mut().push((url.to_owned(), on_complete));
	}
}

#[derive(Debug, Clone, Default)]
pub struct FakeContent(Rc<RefCell<String>>);

impl FakeContent {
	pub fn markup(&self) -> String {
		self.0.borrow().clone()
	}
}

impl ContentSurface for FakeContent {
	fn replace_content(&self, markup: &str) {
		*self.0.borrow_mut() = markup.to_owned();
	}
}

#[derive(Debug, Clone, Default)]
pub struct FakeFrame(Rc<RefCell<Option<String>>>);

impl FakeFrame {
	pub fn src(&self) -> Option<String> {
		self.0.borrow().clone()
	}
}

impl FrameSurface for FakeFrame {
	fn navigate(&self, uri: &str) {
		*self.0.borrow_mut() = Some(uri.to_owned());
	}
}

#[derive(Default)]
pub struct FakeDocument {
	surfaces: RefCell<HashMap<String, Surface<FakeContent, FakeFrame>>>,
}

impl FakeDocument {
	pub fn add_content(&self, id: &str, markup: &str) -> FakeContent {
		let content = FakeContent::default();
		content.replace_content(markup);
		self.surfaces.borrow_mut().insert(id.to_owned(), Surface::Content(content.clone()));
		content
	}

	pub fn add_frame(&self, id: &str) -> FakeFrame {
		let frame = FakeFrame::default();
		self.surfaces.borrow_mut().insert(id.to_owned(), Surface::Frame(frame.clone()));
		frame
	}

	pub fn remove(&self, id: &str) {
		self.surfaces.borrow_mut().remove(id);
	}
}

impl Document for FakeDocument {
	type Content = FakeContent;
	type Frame = FakeFrame;

	fn find_surface(&self, id: &str) -> Option<Surface<FakeContent, FakeFrame>> {
		self.surfaces.borrow().get(id).cloned()
	}
}
