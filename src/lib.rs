//! Tree-addressed, server-rendered widgets that refresh themselves without reloading the page.
//!
//! A page is a tree of [`Widget`]s rooted at one [`ProxyContext`]. Each widget's position in that tree is its path,
//! which [`uri::build`] encodes into a request URI. A [`Refresher`] then either navigates the widget's sub-frame to
//! that URI or fetches it and replaces the widget's markup inline.
//!
//! The network and the page's elements are consumed through the [`Network`](`net::Network`) and
//! [`Document`](`surface::Document`) traits; [`web`] implements them for the browser.

#![doc(html_root_url = "https://docs.rs/widget-refresh/0.0.1")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod args;
pub mod bindings;
mod context;
mod error;
pub mod gadget;
pub mod net;
mod onload;
mod redact;
pub mod refresh;
pub mod register;
pub mod surface;
pub mod uri;
pub mod web;
mod widget;

pub use context::ProxyContext;
pub use error::Rejected;
pub use onload::OnloadRegistry;
pub use refresh::{Refresh, Refresher};
pub use widget::Widget;
