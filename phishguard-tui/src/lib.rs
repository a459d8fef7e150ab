pub mod view;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use phishguard_client::{ClassificationResponse, ClassificationService, ServiceError};
use phishguard_core::{SubmissionController, SubmissionState, Variant};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::debug;

pub use view::TuiView;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Outcome of a classification task, delivered back to the event loop.
#[derive(Debug)]
pub struct Completion {
    pub url: String,
    pub outcome: Result<ClassificationResponse, ServiceError>,
}

pub struct App<S: ?Sized> {
    controller: SubmissionController<S, TuiView>,
    runtime: Handle,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    tick: usize,
    should_quit: bool,
}

impl<S> App<S>
where
    S: ClassificationService + ?Sized + 'static,
{
    pub fn new(service: Arc<S>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            controller: SubmissionController::new(service, TuiView::new()),
            runtime,
            tx,
            rx,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.controller.state()
    }

    pub fn view(&self) -> &TuiView {
        self.controller.view()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Validate the input line and, if it is a URL, classify it on the
    /// runtime. Invalid input is reported without a network call.
    pub fn submit(&mut self) {
        let input = self.controller.view().input.clone();
        let Ok(url) = self.controller.begin(&input) else {
            return;
        };

        let service = self.controller.service();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = service.classify(&url).await;
            // The receiver is gone only when the form has been closed.
            let _ = tx.send(Completion { url, outcome });
        });
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Apply every finished classification without blocking.
    pub fn process_messages(&mut self) {
        while let Ok(Completion { url, outcome }) = self.rx.try_recv() {
            debug!("Classification of {} finished", url);
            let _ = self.controller.finish(&url, outcome);
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => match self.controller.state() {
                SubmissionState::Loading => {}
                SubmissionState::ResultShown => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('n')) {
                        self.reset();
                    } else if key.code == KeyCode::Char('q') {
                        self.should_quit = true;
                    }
                }
                SubmissionState::Idle | SubmissionState::ErrorShown => self.edit_input(key.code),
            },
        }
    }

    fn edit_input(&mut self, code: KeyCode) {
        if code == KeyCode::Enter {
            self.submit();
            return;
        }

        let view = self.controller.view_mut();
        match code {
            KeyCode::Char(c) => view.insert_char(c),
            KeyCode::Backspace => view.delete_char(),
            KeyCode::Left => view.move_cursor_left(),
            KeyCode::Right => view.move_cursor_right(),
            KeyCode::Home => view.move_cursor_home(),
            KeyCode::End => view.move_cursor_end(),
            _ => {}
        }
    }
}

pub fn run<S>(service: Arc<S>, runtime: Handle) -> Result<()>
where
    S: ClassificationService + ?Sized + 'static,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(service, runtime);

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: ClassificationService + ?Sized + 'static,
{
    loop {
        app.process_messages();
        terminal.draw(|f| ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
        app.on_tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

pub fn ui<S>(f: &mut Frame, app: &App<S>)
where
    S: ClassificationService + ?Sized + 'static,
{
    let view = app.controller.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Input form or loading line
            Constraint::Length(3), // Notice
            Constraint::Min(6),    // Result
            Constraint::Length(1), // Hints
        ])
        .split(f.area());

    render_title(f, chunks[0]);

    if let Some(url) = &view.loading_url {
        let frame = SPINNER_FRAMES[app.tick % SPINNER_FRAMES.len()];
        let loading = Paragraph::new(Line::from(vec![
            Span::styled(frame, Style::default().fg(Color::Cyan)),
            Span::raw(" Analyzing "),
            Span::styled(url.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]))
        .block(Block::default().borders(Borders::ALL).title(" Checking "));
        f.render_widget(loading, chunks[1]);
    } else if view.form_visible {
        render_form(f, chunks[1], view);
    }

    if let Some(notice) = &view.notice {
        let notice = Paragraph::new(notice.clone())
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error "),
            );
        f.render_widget(notice, chunks[2]);
    }

    if let Some(result) = &view.result {
        render_result(f, chunks[3], result);
    }

    render_hints(f, chunks[4], app.controller.state());
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "PhishGuard",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  check a URL before you click it"),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, area);
}

fn render_form(f: &mut Frame, area: Rect, view: &TuiView) {
    let inner_width = area.width.saturating_sub(2);
    let offset = input_scroll(view.cursor_position, inner_width);

    let input = Paragraph::new(view.input.clone())
        .style(Style::default().fg(Color::Yellow))
        .scroll((0, offset))
        .block(Block::default().borders(Borders::ALL).title(" URL "));
    f.render_widget(input, area);

    let column = view.cursor_position.saturating_sub(offset as usize);
    let column = u16::try_from(column).unwrap_or(u16::MAX).min(inner_width.saturating_sub(1));
    f.set_cursor_position((area.x + 1 + column, area.y + 1));
}

/// Horizontal scroll that keeps the cursor inside a box `inner_width` wide.
fn input_scroll(cursor_position: usize, inner_width: u16) -> u16 {
    let visible = usize::from(inner_width.max(1));
    let offset = cursor_position.saturating_sub(visible - 1);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn render_result(f: &mut Frame, area: Rect, result: &phishguard_core::ResultDisplay) {
    let (color, icon) = match result.variant {
        Variant::Danger => (Color::Red, "⚠"),
        Variant::Safe => (Color::Green, "✓"),
    };
    let risk_color = match result.risk_level.as_str() {
        "high" => Color::Red,
        "medium" => Color::Yellow,
        "low" => Color::Green,
        _ => Color::Gray,
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("{} {}", icon, result.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(result.message.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Confidence: ", Style::default().fg(Color::Gray)),
            Span::styled(result.confidence.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Risk Level: ", Style::default().fg(Color::Gray)),
            Span::styled(
                result.risk_label.clone(),
                Style::default().fg(risk_color).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", result.url)),
    );
    f.render_widget(panel, area);
}

fn render_hints(f: &mut Frame, area: Rect, state: SubmissionState) {
    let key = |k: &'static str| {
        Span::styled(k, Style::default().fg(Color::Black).bg(Color::Gray))
    };

    let hints = match state {
        SubmissionState::ResultShown => Line::from(vec![
            key(" Enter "),
            Span::raw(" Check another  "),
            key(" Esc "),
            Span::raw(" Quit"),
        ]),
        SubmissionState::Loading => Line::from(vec![key(" Esc "), Span::raw(" Quit")]),
        SubmissionState::Idle | SubmissionState::ErrorShown => Line::from(vec![
            key(" Enter "),
            Span::raw(" Check  "),
            key(" Ctrl+R "),
            Span::raw(" Clear  "),
            key(" Esc "),
            Span::raw(" Quit"),
        ]),
    };

    f.render_widget(Paragraph::new(hints), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use phishguard_client::{HealthStatus, Prediction};
    use ratatui::backend::TestBackend;

    struct FixedService;

    #[async_trait]
    impl ClassificationService for FixedService {
        async fn classify(&self, _url: &str) -> Result<ClassificationResponse, ServiceError> {
            Ok(ClassificationResponse {
                prediction: Prediction::Phishing,
                confidence: 0.957,
                risk_level: "high".to_string(),
                message: "This URL is predicted to be phishing.".to_string(),
            })
        }

        async fn health(&self) -> Result<HealthStatus, ServiceError> {
            Ok(HealthStatus {
                status: None,
                model_loaded: true,
            })
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text<S: ClassificationService + ?Sized + 'static>(app: &mut App<S>, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    async fn wait_for_completion<S: ClassificationService + ?Sized + 'static>(app: &mut App<S>) {
        for _ in 0..100 {
            app.process_messages();
            if app.state() != SubmissionState::Loading {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!("classification never completed");
    }

    #[tokio::test]
    async fn test_submit_and_render_result() {
        let mut app = App::new(Arc::new(FixedService), Handle::current());
        type_text(&mut app, "example.com");
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.state(), SubmissionState::Loading);
        assert_eq!(app.view().input, "https://example.com");

        wait_for_completion(&mut app).await;
        assert_eq!(app.state(), SubmissionState::ResultShown);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let screen = screen_text(&terminal);
        assert!(screen.contains("Warning: Phishing Detected!"));
        assert!(screen.contains("95.7%"));
        assert!(screen.contains("High"));
    }

    #[tokio::test]
    async fn test_empty_submit_shows_notice() {
        let mut app = App::new(Arc::new(FixedService), Handle::current());
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.state(), SubmissionState::ErrorShown);
        assert_eq!(app.view().notice.as_deref(), Some("Please enter a URL"));
        assert!(app.view().form_visible);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        assert!(screen_text(&terminal).contains("Please enter a URL"));
    }

    #[tokio::test]
    async fn test_enter_on_result_checks_another() {
        let mut app = App::new(Arc::new(FixedService), Handle::current());
        type_text(&mut app, "example.com");
        app.handle_key(press(KeyCode::Enter));
        wait_for_completion(&mut app).await;

        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.state(), SubmissionState::Idle);
        assert_eq!(app.view().input, "");
        assert!(app.view().result.is_none());
        assert!(app.view().form_visible);
    }

    #[tokio::test]
    async fn test_typing_is_ignored_while_loading() {
        let mut app = App::new(Arc::new(FixedService), Handle::current());
        type_text(&mut app, "example.com");
        app.handle_key(press(KeyCode::Enter));
        type_text(&mut app, "zzz");

        assert_eq!(app.view().input, "https://example.com");
        wait_for_completion(&mut app).await;
    }

    #[test]
    fn test_input_scroll() {
        assert_eq!(input_scroll(0, 28), 0);
        assert_eq!(input_scroll(27, 28), 0);
        assert_eq!(input_scroll(28, 28), 1);
        assert_eq!(input_scroll(60, 28), 33);
        assert_eq!(input_scroll(5, 0), 5);
    }

    #[tokio::test]
    async fn test_long_input_keeps_cursor_in_box() {
        let mut app = App::new(Arc::new(FixedService), Handle::current());
        let long = format!("https://example.com/{}-end", "a".repeat(36));
        type_text(&mut app, &long);

        let mut terminal = Terminal::new(TestBackend::new(30, 20)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.x, 28);
        assert_eq!(cursor.y, 4);
        assert!(screen_text(&terminal).contains("aaa-end"));
    }

    #[tokio::test]
    async fn test_escape_quits() {
        let mut app = App::new(Arc::new(FixedService), Handle::current());
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }
}
