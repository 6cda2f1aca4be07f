use crate::remote::RepoSlug;
use crate::review::PullRequestRow;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Focused,
    Unfocused,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Focused => Focus::Unfocused,
            Focus::Unfocused => Focus::Focused,
        }
    }
}

/// Everything the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    ToggleFocus,
    Quit,
    Open,
    Up,
    Down,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    Top,
    Bottom,
    Other,
}

impl Input {
    pub fn from_key(key: KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Input::Quit,
            KeyCode::Char('u') if ctrl => Input::HalfPageUp,
            KeyCode::Char('d') if ctrl => Input::HalfPageDown,
            _ if ctrl => Input::Other,

            KeyCode::Esc => Input::ToggleFocus,
            KeyCode::Char('q') => Input::Quit,
            KeyCode::Enter => Input::Open,

            KeyCode::Up | KeyCode::Char('k') => Input::Up,
            KeyCode::Down | KeyCode::Char('j') => Input::Down,
            KeyCode::PageUp | KeyCode::Char('b') => Input::PageUp,
            KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char(' ') => Input::PageDown,
            KeyCode::Char('u') => Input::HalfPageUp,
            KeyCode::Char('d') => Input::HalfPageDown,
            KeyCode::Home | KeyCode::Char('g') => Input::Top,
            KeyCode::End | KeyCode::Char('G') => Input::Bottom,
            _ => Input::Other,
        }
    }

    fn is_navigation(self) -> bool {
        matches!(
            self,
            Input::Up
                | Input::Down
                | Input::PageUp
                | Input::PageDown
                | Input::HalfPageUp
                | Input::HalfPageDown
                | Input::Top
                | Input::Bottom
        )
    }
}

/// What the runner has to do after an input was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Open(String),
}

pub struct App {
    pub repo: RepoSlug,
    pub rows: Vec<PullRequestRow>,
    pub table_state: TableState,
    pub focus: Focus,
    pub page_size: usize,
    pub flash_message: Option<String>,
}

impl App {
    pub fn new(repo: RepoSlug, rows: Vec<PullRequestRow>, page_size: usize) -> Self {
        let mut table_state = TableState::default();
        if !rows.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            repo,
            rows,
            table_state,
            focus: Focus::Focused,
            page_size: page_size.max(1),
            flash_message: None,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focus == Focus::Focused
    }

    pub fn selected_row(&self) -> Option<&PullRequestRow> {
        self.table_state.selected().and_then(|i| self.rows.get(i))
    }

    /// Apply one input and report what the runner should do
    pub fn handle(&mut self, input: Input) -> Action {
        self.flash_message = None;

        match input {
            Input::Quit => Action::Quit,
            Input::ToggleFocus => {
                self.focus = self.focus.toggled();
                Action::None
            }
            Input::Open => match self.selected_row().and_then(PullRequestRow::open_url) {
                Some(url) => Action::Open(url.to_string()),
                None => Action::None,
            },
            nav if nav.is_navigation() => {
                if self.is_focused() {
                    self.navigate(nav);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn navigate(&mut self, input: Input) {
        let Some(last) = self.rows.len().checked_sub(1) else {
            return;
        };
        let current = self.table_state.selected().unwrap_or(0).min(last);
        let half_page = (self.page_size / 2).max(1);

        let next = match input {
            Input::Up => current.saturating_sub(1),
            Input::Down => current + 1,
            Input::PageUp => current.saturating_sub(self.page_size),
            Input::PageDown => current + self.page_size,
            Input::HalfPageUp => current.saturating_sub(half_page),
            Input::HalfPageDown => current + half_page,
            Input::Top => 0,
            Input::Bottom => last,
            _ => current,
        };
        self.table_state.select(Some(next.min(last)));
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::PullRequest;
    use crate::review::project;

    fn rows(count: u64) -> Vec<PullRequestRow> {
        project(
            (1..=count)
                .map(|n| PullRequest {
                    number: n,
                    title: format!("PR {}", n),
                    author: "octocat".to_string(),
                    labels: Vec::new(),
                    created_at: None,
                    url: format!("https://github.com/acme/widgets/pull/{}", n),
                })
                .collect(),
        )
    }

    fn app(count: u64) -> App {
        App::new(RepoSlug::new("acme", "widgets"), rows(count), 7)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_initial_state() {
        let app = app(3);
        assert_eq!(app.focus, Focus::Focused);
        assert_eq!(app.table_state.selected(), Some(0));
        assert_eq!(app.flash_message, None);
    }

    #[test]
    fn test_empty_table_has_no_selection() {
        let mut app = app(0);
        assert_eq!(app.table_state.selected(), None);
        assert_eq!(app.handle(Input::Down), Action::None);
        assert_eq!(app.handle(Input::Open), Action::None);
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    fn test_toggle_focus_is_its_own_inverse() {
        let mut app = app(2);
        app.handle(Input::ToggleFocus);
        assert_eq!(app.focus, Focus::Unfocused);
        app.handle(Input::ToggleFocus);
        assert_eq!(app.focus, Focus::Focused);
    }

    #[test]
    fn test_quit_in_either_focus_state() {
        let mut app = app(2);
        assert_eq!(app.handle(Input::Quit), Action::Quit);

        let mut app = self::app(2);
        app.handle(Input::ToggleFocus);
        assert_eq!(app.handle(Input::Quit), Action::Quit);
    }

    #[test]
    fn test_open_yields_url_of_row_under_cursor() {
        let mut app = app(10);
        for i in 0..10 {
            app.table_state.select(Some(i));
            assert_eq!(
                app.handle(Input::Open),
                Action::Open(format!("https://github.com/acme/widgets/pull/{}", i + 1))
            );
        }
    }

    #[test]
    fn test_open_after_navigation() {
        let mut app = app(5);
        app.handle(Input::Down);
        app.handle(Input::Down);
        assert_eq!(
            app.handle(Input::Open),
            Action::Open("https://github.com/acme/widgets/pull/3".to_string())
        );
    }

    #[test]
    fn test_open_skips_non_web_url() {
        let mut app = app(1);
        app.rows[0].pr.url = "mailto:someone@example.com".to_string();
        assert_eq!(app.handle(Input::Open), Action::None);
    }

    #[test]
    fn test_open_works_when_unfocused() {
        let mut app = app(2);
        app.handle(Input::ToggleFocus);
        assert!(matches!(app.handle(Input::Open), Action::Open(_)));
    }

    #[test]
    fn test_navigation_ignored_when_unfocused() {
        let mut app = app(5);
        app.handle(Input::ToggleFocus);
        app.handle(Input::Down);
        app.handle(Input::Bottom);
        assert_eq!(app.table_state.selected(), Some(0));

        app.handle(Input::ToggleFocus);
        app.handle(Input::Down);
        assert_eq!(app.table_state.selected(), Some(1));
    }

    #[test]
    fn test_navigation_clamps() {
        let mut app = app(3);
        app.handle(Input::Up);
        assert_eq!(app.table_state.selected(), Some(0));

        app.handle(Input::Bottom);
        assert_eq!(app.table_state.selected(), Some(2));
        app.handle(Input::Down);
        assert_eq!(app.table_state.selected(), Some(2));

        app.handle(Input::Top);
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_paging() {
        let mut app = app(20);
        app.handle(Input::PageDown);
        assert_eq!(app.table_state.selected(), Some(7));
        app.handle(Input::HalfPageDown);
        assert_eq!(app.table_state.selected(), Some(10));
        app.handle(Input::HalfPageUp);
        assert_eq!(app.table_state.selected(), Some(7));
        app.handle(Input::PageUp);
        assert_eq!(app.table_state.selected(), Some(0));
        app.handle(Input::PageDown);
        app.handle(Input::PageDown);
        app.handle(Input::PageDown);
        assert_eq!(app.table_state.selected(), Some(19));
    }

    #[test]
    fn test_any_input_clears_flash() {
        let mut app = app(1);
        app.show_flash("Failed to open browser".to_string());
        app.handle(Input::Other);
        assert_eq!(app.flash_message, None);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Input::from_key(key(KeyCode::Esc)), Input::ToggleFocus);
        assert_eq!(Input::from_key(key(KeyCode::Char('q'))), Input::Quit);
        assert_eq!(
            Input::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Input::Quit
        );
        assert_eq!(Input::from_key(key(KeyCode::Char('c'))), Input::Other);
        assert_eq!(Input::from_key(key(KeyCode::Enter)), Input::Open);
        assert_eq!(Input::from_key(key(KeyCode::Char('j'))), Input::Down);
        assert_eq!(Input::from_key(key(KeyCode::Up)), Input::Up);
        assert_eq!(Input::from_key(key(KeyCode::Char('G'))), Input::Bottom);
        assert_eq!(
            Input::from_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Input::HalfPageDown
        );
        assert_eq!(Input::from_key(key(KeyCode::Tab)), Input::Other);
    }
}
