use phishguard_core::{ResultDisplay, SubmissionView};

/// Screen model of the terminal form. Drawing reads it, the controller
/// writes it, and key handling edits the input line.
#[derive(Debug, Clone)]
pub struct TuiView {
    pub input: String,
    pub cursor_position: usize,
    pub form_visible: bool,
    pub loading_url: Option<String>,
    pub result: Option<ResultDisplay>,
    pub notice: Option<String>,
}

impl TuiView {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor_position: 0,
            form_visible: true,
            loading_url: None,
            result: None,
            notice: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading_url.is_some()
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_index = self.byte_index();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let byte_index = self.byte_index();
        self.input.remove(byte_index);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.input.chars().count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input.chars().count();
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input.len())
    }
}

impl Default for TuiView {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionView for TuiView {
    fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.move_cursor_end();
    }

    fn show_loading(&mut self, url: &str) {
        self.form_visible = false;
        self.result = None;
        self.notice = None;
        self.loading_url = Some(url.to_string());
    }

    fn hide_loading(&mut self) {
        self.loading_url = None;
    }

    fn show_result(&mut self, result: &ResultDisplay) {
        self.notice = None;
        self.result = Some(result.clone());
    }

    fn show_error(&mut self, message: &str) {
        self.form_visible = true;
        self.notice = Some(message.to_string());
    }

    fn reset(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.form_visible = true;
        self.loading_url = None;
        self.result = None;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_multibyte_input() {
        let mut view = TuiView::new();
        for c in "héllo".chars() {
            view.insert_char(c);
        }
        view.move_cursor_left();
        view.move_cursor_left();
        view.delete_char();
        assert_eq!(view.input, "hélo");
        assert_eq!(view.cursor_position, 2);
    }

    #[test]
    fn test_set_input_moves_cursor_to_end() {
        let mut view = TuiView::new();
        view.set_input("https://example.com");
        assert_eq!(view.cursor_position, "https://example.com".len());
    }

    #[test]
    fn test_error_restores_form() {
        let mut view = TuiView::new();
        view.show_loading("https://example.com");
        assert!(!view.form_visible);

        view.show_error("An error occurred");
        view.hide_loading();
        assert!(view.form_visible);
        assert!(!view.is_loading());
        assert_eq!(view.notice.as_deref(), Some("An error occurred"));
    }
}
