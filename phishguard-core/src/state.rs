use serde::Serialize;

/// Which of the four screens the front end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    ResultShown,
    ErrorShown,
}

impl SubmissionState {
    /// The input form is usable in every state except `Loading` and
    /// `ResultShown`, where it is hidden until a reset.
    pub fn form_visible(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::ErrorShown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Loading => "loading",
            SubmissionState::ResultShown => "result",
            SubmissionState::ErrorShown => "error",
        }
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
