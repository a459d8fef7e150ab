use crate::render::ResultDisplay;

/// Presentation layer driven by `SubmissionController`.
///
/// The controller decides what to show and in which order; a view only
/// decides how. Implementations exist for the console, the terminal form
/// and test doubles.
pub trait SubmissionView {
    /// Replace the visible input value, e.g. with its normalized form.
    fn set_input(&mut self, value: &str);

    /// Hide the form and any previous result, show the loading indicator.
    fn show_loading(&mut self, url: &str);

    fn hide_loading(&mut self);

    fn show_result(&mut self, result: &ResultDisplay);

    /// Surface a notice. The form must be usable afterwards.
    fn show_error(&mut self, message: &str);

    /// Input was rejected before any request. `input` is what was entered,
    /// trimmed.
    fn show_rejected(&mut self, _input: &str, message: &str) {
        self.show_error(message);
    }

    /// Clear the input, show the form, hide result and error, focus input.
    fn reset(&mut self);
}

impl<V: SubmissionView + ?Sized> SubmissionView for Box<V> {
    fn set_input(&mut self, value: &str) {
        (**self).set_input(value)
    }

    fn show_loading(&mut self, url: &str) {
        (**self).show_loading(url)
    }

    fn hide_loading(&mut self) {
        (**self).hide_loading()
    }

    fn show_result(&mut self, result: &ResultDisplay) {
        (**self).show_result(result)
    }

    fn show_error(&mut self, message: &str) {
        (**self).show_error(message)
    }

    fn show_rejected(&mut self, input: &str, message: &str) {
        (**self).show_rejected(input, message)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
