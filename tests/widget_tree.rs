use std::rc::Rc;
use widget_refresh::{ProxyContext, Rejected, Widget};

fn root() -> Rc<Widget> {
	Widget::root(Rc::new(ProxyContext::new("http://h/p?x=1#top", "S")))
}

#[test]
fn context_strips_query_fragment_and_arguments() {
	assert_eq!(ProxyContext::new("http://h/p?x=1#top", "S").base_uri(), "http://h/p");
	assert_eq!(ProxyContext::new("http://h/p#top", "S").base_uri(), "http://h/p");
	assert_eq!(ProxyContext::new("http://h/p;session=T&focus=a?x=1", "S").base_uri(), "http://h/p");
	assert_eq!(ProxyContext::new("http://h/p", "S").session_id(), "S");
}

#[test]
fn root_has_neither_id_nor_path() {
	let root = root();
	assert!(root.is_root());
	assert_eq!(root.id(), None);
	assert_eq!(root.path(), None);
	assert!(root.parent().is_none());
	assert_eq!(root.target_uri(None, false, false), Err(Rejected::Unaddressable));
}

#[test]
fn paths_join_ancestor_ids() {
	let root = root();
	let nav = Widget::new_child(&root, Some("nav"));
	let menu = Widget::new_child(&nav, Some("menu"));

	assert_eq!(nav.path(), Some("nav"));
	assert_eq!(menu.path(), Some("nav/menu"));
	assert_eq!(menu.id(), Some("menu"));
	assert!(!menu.is_root());
	assert!(Rc::ptr_eq(&menu.parent().unwrap(), &nav));

	let resolved = root.resolve("nav/menu").unwrap();
	assert!(Rc::ptr_eq(&resolved, &menu));
	assert_eq!(resolved.path(), Some("nav/menu"));
	assert!(Rc::ptr_eq(&nav.resolve("menu").unwrap(), &menu));
}

#[test]
fn resolve_inverts_construction_at_depth() {
	let root = root();
	let mut node = Rc::clone(&root);
	let mut ids = Vec::new();
	for depth in 0..12 {
		let id = format!("w{}", depth);
		node = Widget::new_child(&node, Some(&id));
		ids.push(id);

		let path = ids.join("/");
		assert_eq!(node.path(), Some(path.as_str()));
		assert!(Rc::ptr_eq(&root.resolve(&path).unwrap(), &node));
	}
}

#[test]
fn unresolved_segments_yield_nothing() {
	let root = root();
	let nav = Widget::new_child(&root, Some("nav"));
	Widget::new_child(&nav, Some("menu"));

	assert!(root.resolve("nav/missing").is_none());
	assert!(root.resolve("missing/menu").is_none());
	assert!(root.resolve("menu").is_none());
	assert!(root.resolve("nav/menu/deeper").is_none());
	assert!(root.resolve("").is_none());
}

#[test]
fn anonymous_widgets_poison_their_subtree() {
	let root = root();
	let anonymous = Widget::new_child(&root, None);
	let child = Widget::new_child(&anonymous, Some("child"));
	let grandchild = Widget::new_child(&child, Some("grandchild"));

	assert_eq!(anonymous.path(), None);
	assert_eq!(child.path(), None);
	assert_eq!(grandchild.path(), None);
	assert!(Rc::ptr_eq(&anonymous.resolve("child").unwrap(), &child));
	assert_eq!(grandchild.target_uri(Some("/x"), true, false), Err(Rejected::Unaddressable));
}

#[test]
fn empty_path_does_not_extend() {
	let root = root();
	let empty = Widget::new_child(&root, Some(""));
	let below = Widget::new_child(&empty, Some("below"));

	assert_eq!(empty.path(), Some(""));
	assert_eq!(below.path(), None);
}

#[test]
fn context_is_shared() {
	let root = root();
	let nav = Widget::new_child(&root, Some("nav"));
	let menu = Widget::new_child(&nav, Some("menu"));
	assert!(Rc::ptr_eq(root.context(), menu.context()));
}

#[test]
fn reusing_an_id_replaces_the_child() {
	let root = root();
	let first = Widget::new_child(&root, Some("nav"));
	let second = Widget::new_child(&root, Some("nav"));

	assert!(!Rc::ptr_eq(&first, &second));
	assert!(Rc::ptr_eq(&root.child("nav").unwrap(), &second));
}

#[test]
fn children_live_as_long_as_their_parent() {
	let root = root();
	let weak = Rc::downgrade(&Widget::new_child(&root, Some("nav")));
	assert!(weak.upgrade().is_some());
	drop(root);
	assert!(weak.upgrade().is_none());
}

#[test]
fn target_uris() {
	let root = root();
	let menu = Widget::new_child(&Widget::new_child(&root, Some("nav")), Some("menu"));

	assert_eq!(
		menu.target_uri(None, false, false).unwrap(),
		"http://h/p;session=S&focus=nav$2Fmenu&frame=nav$2Fmenu"
	);
	assert_eq!(
		menu.target_uri(Some("/items?page=2"), true, false).unwrap(),
		"http://h/p;session=S&focus=nav$2Fmenu&frame=nav$2Fmenu&path=$2Fitems&page=2"
	);
	assert_eq!(
		menu.target_uri(None, true, true).unwrap(),
		"http://h/p;session=S&focus=nav$2Fmenu&frame=nav$2Fmenu&save=1"
	);
}
