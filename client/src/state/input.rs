use session::InputSink;

/// The host page's text input element.
pub struct HostInput(web_sys::HtmlInputElement);

impl HostInput {
    #[must_use]
    pub fn new(element: web_sys::HtmlInputElement) -> Self {
        Self(element)
    }
}

impl InputSink for HostInput {
    fn value(&self) -> String {
        self.0.value()
    }

    fn clear(&mut self) {
        self.0.set_value("");
    }
}
