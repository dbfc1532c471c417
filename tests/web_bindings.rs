#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use widget_refresh::bindings::{widget_uri, JsWidgetRegistry};

wasm_bindgen_test_configure!(run_in_browser);

fn s(value: &str) -> Option<String> {
	Some(value.to_owned())
}

#[wasm_bindgen_test]
fn widget_uri_from_script() {
	assert_eq!(
		widget_uri(s("http://h/p"), "S".to_owned(), None, s("A"), s("frame"), s("/x?y=1"), None, None).as_deref(),
		Some("http://h/p;session=S&focus=A&frame=A&path=$2Fx&y=1")
	);
	assert_eq!(widget_uri(None, "S".to_owned(), None, s("A"), None, None, None, None), None);
	assert_eq!(widget_uri(s("http://h/p"), "S".to_owned(), None, s("A"), s("bogus"), None, None, None), None);
	assert_eq!(widget_uri(s("http://h/p"), "S".to_owned(), None, None, None, None, s("de"), None).as_deref(), Some("http://h/p;session=S&translate=de"));
}

#[wasm_bindgen_test]
fn registry_from_script() {
	let mut registry = JsWidgetRegistry::new();
	let widget = registry.register("http://h/p", "S", s("outer"), "outer/inner");
	assert_eq!(widget.path(), "outer/inner");

	assert_eq!(widget.url(None, None, None, None).as_deref(), Some("http://h/p;session=S&focus=outer$2Finner&frame=outer$2Finner"));
	assert_eq!(widget.url(None, s("focus"), None, s("print")).as_deref(), Some("http://h/p;session=S&focus=outer$2Finner&frame=outer&view=print"));
	assert_eq!(widget.url(None, s("view"), None, None), None);

	assert_eq!(registry.get("outer/inner").map(|widget| widget.path()).as_deref(), Some("outer/inner"));
	assert!(registry.get("outer").is_none());
}
