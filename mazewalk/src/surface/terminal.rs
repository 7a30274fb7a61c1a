use std::{
    io::{self, stdout, Stdout, Write as _},
    panic, thread,
    time::Duration,
};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::{self, Color},
    terminal, QueueableCommand, SynchronizedUpdate,
};
use mazecore::dims::Dims;

use crate::{logging::get_logger, settings::ColorScheme};

use super::{Canvas, Glyph, Line, Stroke, Surface};

pub fn term_size() -> Dims {
    terminal::size().unwrap_or((100, 100)).into()
}

/// Surface drawn into the terminal.
///
/// The last row is kept for the status line, everything else is the canvas. Only rows which
/// changed since the last redraw are written out.
pub struct Terminal {
    hidden: Canvas,
    shown: Canvas,
    scheme: ColorScheme,
    status: Option<String>,
    full_redraw: bool,
    closed: bool,
    out: Stdout,
}

impl Terminal {
    pub fn new(scheme: ColorScheme) -> io::Result<Self> {
        let size = Self::canvas_size(term_size());
        let mut term = Terminal {
            hidden: Canvas::new(size),
            shown: Canvas::new(size),
            scheme,
            status: None,
            full_redraw: true,
            closed: false,
            out: stdout(),
        };

        term.turn_on()?;

        Ok(term)
    }

    fn canvas_size(term_size: Dims) -> Dims {
        term_size - Dims(0, 1)
    }

    fn turn_on(&mut self) -> io::Result<()> {
        self.register_panic_hook();

        terminal::enable_raw_mode()?;
        execute!(self.out, cursor::Hide, terminal::EnterAlternateScreen)?;

        Ok(())
    }

    fn turn_off(&mut self) -> io::Result<()> {
        self.unregister_panic_hook();

        execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn register_panic_hook(&self) {
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show);
            let _ = terminal::disable_raw_mode();

            prev(info)
        }));
    }

    fn unregister_panic_hook(&self) {
        if !thread::panicking() {
            let _ = panic::take_hook();
        }
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => {
                let ctrl_c = code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                    log::info!("Close requested");
                    self.closed = true;
                }
            }
            // the canvas keeps its size, the whole picture just has to be written again
            Event::Resize(..) => self.full_redraw = true,
            _ => {}
        }
    }

    fn show(&mut self) -> io::Result<()> {
        let status = get_logger().status_line();
        let status_changed = status != self.status;
        let height = self.hidden.size().1;
        let width = self.hidden.size().0.max(0) as usize;

        let Self {
            hidden,
            shown,
            scheme,
            full_redraw,
            out,
            ..
        } = self;

        out.sync_update(|tty| {
            let mut color = Color::Reset;
            tty.queue(style::ResetColor)?;

            for y in 0..height {
                if hidden.row_eq(shown, y) && !*full_redraw {
                    continue;
                }

                tty.queue(cursor::MoveTo(0, y as u16))?;
                for Glyph { character, stroke } in hidden.row(y) {
                    let glyph_color = color_of(scheme, stroke);
                    if glyph_color != color {
                        tty.queue(style::SetForegroundColor(glyph_color))?;
                        color = glyph_color;
                    }
                    tty.queue(style::Print(character))?;
                }
            }

            if status_changed || *full_redraw {
                tty.queue(cursor::MoveTo(0, height.max(0) as u16))?;
                tty.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
                if let Some(status) = &status {
                    let status = status.chars().take(width).collect::<String>();
                    tty.queue(style::SetForegroundColor(scheme.text.into()))?;
                    tty.queue(style::Print(status))?;
                }
            }

            tty.queue(style::ResetColor)?;
            tty.flush()
        })??;

        self.shown.clone_from(&self.hidden);
        self.status = status;
        self.full_redraw = false;

        Ok(())
    }

    fn poll_events(&mut self, timeout: Duration) -> io::Result<()> {
        let mut timeout = timeout;
        while event::poll(timeout)? {
            let event = event::read()?;
            self.on_event(event);

            // just so we read all pending events
            timeout = Duration::ZERO;
        }
        Ok(())
    }
}

fn color_of(scheme: &ColorScheme, stroke: Option<Stroke>) -> Color {
    match stroke {
        Some(Stroke::Wall) => scheme.walls.into(),
        Some(Stroke::Path) => scheme.path.into(),
        Some(Stroke::Undo) => scheme.undo.into(),
        Some(Stroke::Erase) | None => Color::Reset,
    }
}

impl Surface for Terminal {
    fn size(&self) -> Dims {
        self.hidden.size()
    }

    fn draw_line(&mut self, line: Line, stroke: Stroke) {
        self.hidden.draw_line(line, stroke);
    }

    fn redraw(&mut self) -> io::Result<()> {
        self.show()
    }

    fn is_closed(&mut self) -> io::Result<bool> {
        self.poll_events(Duration::ZERO)?;
        Ok(self.closed)
    }

    fn wait_for_close(&mut self) -> io::Result<()> {
        while !self.closed {
            self.poll_events(Duration::from_millis(250))?;
            // keeps the status line fresh while waiting, logs decay
            self.show()?;
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.turn_off();
    }
}
