use std::io::{self, Stdout, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Size, Terminal};

use crate::error::{AppError, Result};

/// The browser's hold on the terminal.
///
/// Created only after the scan has finished, so scan errors print to a
/// normal screen. Dropping it (or calling [`Tui::restore`]) hands the
/// terminal back, whether the loop ended by quit or by error.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse_enabled: bool,
    active: bool,
}

impl Tui {
    /// Switch to raw mode on the alternate screen.
    ///
    /// With `enable_mouse`, wheel and click events are delivered too.
    pub fn new(enable_mouse: bool) -> Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen)?;
        if enable_mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        tracing::debug!(mouse = enable_mouse, "terminal acquired");
        Ok(Self {
            terminal,
            mouse_enabled: enable_mouse,
            active: true,
        })
    }

    /// Initial viewport, before the first resize event arrives.
    pub fn size(&self) -> Result<Size> {
        self.terminal
            .size()
            .map_err(|e| AppError::Terminal(format!("cannot query terminal size: {e}")))
    }

    /// Hand the terminal back. Only the first call does anything.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        leave(self.terminal.backend_mut(), self.mouse_enabled)?;
        self.terminal.show_cursor()?;
        tracing::debug!("terminal restored");
        Ok(())
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Undo what [`Tui::new`] set up.
fn leave(out: &mut impl Write, mouse_enabled: bool) -> io::Result<()> {
    if mouse_enabled {
        execute!(out, DisableMouseCapture)?;
    }
    terminal::disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen)
}

/// Make a panic inside the loop leave a usable shell behind.
///
/// The message is printed by the previous hook, after the screen is back.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave(&mut io::stdout(), true);
        previous(info);
    }));
}
