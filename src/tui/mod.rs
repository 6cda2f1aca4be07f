pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::{Action, App, Focus, Input};
pub use theme::Theme;

use anyhow::Context;
use event::{Event, EventHandler};
use ratatui::DefaultTerminal;

/// Full-screen mode of the controlling terminal
pub trait Screen {
    fn enter(&mut self) -> std::io::Result<DefaultTerminal>;
    fn leave(&mut self);
}

/// The real terminal, driven through crossterm
pub struct CrosstermScreen;

impl Screen for CrosstermScreen {
    fn enter(&mut self) -> std::io::Result<DefaultTerminal> {
        // Sets up panic hooks automatically
        ratatui::try_init()
    }

    fn leave(&mut self) {
        ratatui::restore();
    }
}

/// Run the interactive session until the user quits
///
/// Log output is held back while the terminal is in full-screen mode and
/// printed once it has been restored.
pub async fn run_tui(app: App, theme: Theme) -> anyhow::Result<()> {
    crate::stderr_buffer::activate();
    let result = run_on(&mut CrosstermScreen, app, theme).await;
    crate::stderr_buffer::flush_to_stderr();
    result
}

/// Run the session on `screen`, leaving full-screen mode on every exit path
pub async fn run_on<S: Screen>(screen: &mut S, mut app: App, theme: Theme) -> anyhow::Result<()> {
    let mut terminal = match screen.enter() {
        Ok(terminal) => terminal,
        Err(e) => {
            // Raw mode may already be on when a later init step failed
            screen.leave();
            return Err(e).context("Failed to initialize terminal");
        }
    };

    let result = event_loop(screen, &mut terminal, &mut app, &theme).await;
    screen.leave();
    result
}

async fn event_loop<S: Screen>(
    screen: &mut S,
    terminal: &mut DefaultTerminal,
    app: &mut App,
    theme: &Theme,
) -> anyhow::Result<()> {
    let mut events = EventHandler::new();

    loop {
        terminal.draw(|frame| ui::draw(frame, app, theme))?;

        let input = match events.next().await? {
            Some(event) => match input_for(event) {
                Some(input) => input,
                None => continue,
            },
            None => break,
        };

        match app.handle(input) {
            Action::None => {}
            Action::Quit => break,
            Action::Open(url) => {
                // Nothing may read the terminal while the browser owns it
                drop(events);
                let (resumed, opened) = hand_off(screen, &url, crate::browser::open_url)?;
                *terminal = resumed;
                events = EventHandler::new();

                if let Err(e) = opened {
                    tracing::warn!("{:#}", e);
                    app.show_flash(format!("Failed to open browser: {}", e));
                }
            }
        }
    }

    Ok(())
}

/// Map a terminal event to a session input; resizes only trigger a redraw
fn input_for(event: Event) -> Option<Input> {
    match event {
        Event::Key(key) => Some(Input::from_key(key)),
        Event::Interrupt => Some(Input::Quit),
        Event::Resize => None,
    }
}

/// Give the terminal to `open` for `url`, then take it back
///
/// The opener's own failure is returned alongside the resumed terminal;
/// failing to resume is an error of the session.
fn hand_off<S, F>(
    screen: &mut S,
    url: &str,
    open: F,
) -> anyhow::Result<(DefaultTerminal, anyhow::Result<()>)>
where
    S: Screen,
    F: FnOnce(&str) -> anyhow::Result<()>,
{
    screen.leave();
    let opened = open(url);
    let terminal = screen
        .enter()
        .context("Failed to restore terminal after opening the browser")?;
    Ok((terminal, opened))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RepoSlug;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// A terminal that can never be put into full-screen mode
    #[derive(Default)]
    struct NoTty {
        entered: usize,
        left: usize,
    }

    impl Screen for NoTty {
        fn enter(&mut self) -> std::io::Result<DefaultTerminal> {
            self.entered += 1;
            Err(std::io::Error::other("No such device or address"))
        }

        fn leave(&mut self) {
            self.left += 1;
        }
    }

    #[tokio::test]
    async fn test_init_failure_is_an_error() {
        let mut screen = NoTty::default();
        let app = App::new(RepoSlug::new("acme", "widgets"), Vec::new(), 7);

        let result = run_on(&mut screen, app, Theme::default()).await;

        let err = match result {
            Ok(()) => panic!("expected terminal init to fail"),
            Err(e) => e,
        };
        assert!(format!("{:#}", err).contains("Failed to initialize terminal"));
        assert_eq!(screen.entered, 1);
        assert_eq!(screen.left, 1);
    }

    #[test]
    fn test_resume_failure_after_hand_off_is_an_error() {
        let mut screen = NoTty::default();
        let mut opened_url = None;

        let result = hand_off(&mut screen, "https://github.com/acme/widgets/pull/1", |url| {
            opened_url = Some(url.to_string());
            Ok(())
        });

        let err = match result {
            Ok(_) => panic!("expected resume to fail"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("after opening the browser"));
        assert_eq!(
            opened_url.as_deref(),
            Some("https://github.com/acme/widgets/pull/1")
        );
        assert_eq!(screen.left, 1);
        assert_eq!(screen.entered, 1);
    }

    #[test]
    fn test_interrupt_quits() {
        assert_eq!(input_for(Event::Interrupt), Some(Input::Quit));

        let mut app = App::new(RepoSlug::new("acme", "widgets"), Vec::new(), 7);
        assert_eq!(app.handle(Input::Quit), Action::Quit);
    }

    #[test]
    fn test_input_for_keys_and_resize() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(input_for(Event::Key(key)), Some(Input::Quit));
        assert_eq!(input_for(Event::Resize), None);
    }
}
