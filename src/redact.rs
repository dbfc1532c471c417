/// Hides session identifiers, the URIs and argument blocks carrying them, and page content unless `dangerous-logging` is enabled.
pub(crate) fn sensitive(value: &str) -> &str {
	if cfg!(feature = "dangerous-logging") {
		value
	} else {
		"<redacted>"
	}
}
