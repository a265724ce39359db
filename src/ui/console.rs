//! Console event sink
//!
//! Renders game events as themed terminal text.

use std::io::{self, Write};
use std::sync::Mutex;

use detective_quest::domain::ports::{GameEvent, GameEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::play::render_event;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(io::stdout(), ui)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, ui: UiContext) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            ui,
        }
    }
}

impl GameEventSink for ConsoleEventSink {
    fn on_event(&self, event: GameEvent) {
        let Some(text) = render_event(&event, &self.ui) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }

    fn wants_diagnostics(&self) -> bool {
        self.ui.verbose > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::TerminalCapabilities;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn ui(verbose: u8) -> UiContext {
        UiContext::from_caps(
            false,
            verbose,
            None,
            None,
            TerminalCapabilities {
                is_tty: false,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
            },
        )
    }

    #[test]
    fn writes_rendered_events() {
        let buf = SharedBuf::default();
        let sink = ConsoleEventSink::with_writer(buf.clone(), ui(0));
        sink.on_event(GameEvent::Entered {
            room: "Hall".into(),
        });
        sink.on_event(GameEvent::NoClue {
            room: "Hall".into(),
        });
        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(out, "\nYou are in: Hall\nNo clue in this room.\n");
    }

    #[test]
    fn verbosity_controls_diagnostics() {
        let buf = SharedBuf::default();
        assert!(!ConsoleEventSink::with_writer(buf.clone(), ui(0)).wants_diagnostics());
        assert!(ConsoleEventSink::with_writer(buf, ui(1)).wants_diagnostics());
    }
}
