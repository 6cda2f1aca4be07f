use anyhow::{Context, Result};
use crossterm::event::{EventStream, KeyEvent, KeyEventKind};
use futures::future::BoxFuture;
use futures::{FutureExt, StreamExt};

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Interrupt, // SIGINT / console Ctrl-C from outside the raw-mode terminal
}

/// Terminal input and interrupt source
///
/// Reads directly from the crossterm stream, so nothing consumes terminal
/// input while the loop is not awaiting `next`. Drop it before handing the
/// terminal to another process.
pub struct EventHandler {
    reader: EventStream,
    interrupt: BoxFuture<'static, std::io::Result<()>>,
}

impl EventHandler {
    pub fn new() -> Self {
        EventHandler {
            reader: EventStream::new(),
            interrupt: tokio::signal::ctrl_c().boxed(),
        }
    }

    /// Wait for the next key press, resize or interrupt signal
    ///
    /// Returns `None` once the input stream has ended.
    pub async fn next(&mut self) -> Result<Option<Event>> {
        loop {
            tokio::select! {
                maybe_event = self.reader.next() => {
                    let Some(evt) = maybe_event else {
                        return Ok(None);
                    };
                    match evt.context("Failed to read terminal input")? {
                        // Filter for Press only (Windows compatibility)
                        crossterm::event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                            return Ok(Some(Event::Key(key)));
                        }
                        crossterm::event::Event::Resize(_, _) => return Ok(Some(Event::Resize)),
                        _ => {}
                    }
                }
                signal = &mut self.interrupt => {
                    signal.context("Failed to listen for interrupt signal")?;
                    tracing::info!("interrupted");
                    return Ok(Some(Event::Interrupt));
                }
            }
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
