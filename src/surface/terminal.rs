use std::{
    io::{stdout, Write},
    sync::Mutex,
};

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::{
    misc::log::targets,
    surface::{markup, Surface},
};

/// A surface on standard output.
///
/// Markup is translated to terminal attributes unless `raw_markup` is set, in which case it is written as is.
/// A clear only clears the screen if `clear_screen` is set, and otherwise starts a new line when anything has been shown.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    pub clear_screen: bool,
    pub raw_markup: bool,

    /// Whether something has been shown since the last clear.
    dirty: Mutex<bool>,
}

impl TerminalSurface {
    pub fn new(clear_screen: bool, raw_markup: bool) -> Self {
        TerminalSurface {
            clear_screen,
            raw_markup,
            dirty: Mutex::new(false),
        }
    }

    fn set_dirty(&self, value: bool) -> bool {
        match self.dirty.lock() {
            Ok(mut dirty) => std::mem::replace(&mut *dirty, value),
            Err(poisoned) => std::mem::replace(&mut *poisoned.into_inner(), value),
        }
    }

    fn write_clear(&self) -> std::io::Result<()> {
        let mut stdout = stdout();
        match self.clear_screen {
            true => {
                stdout.queue(terminal::Clear(terminal::ClearType::All))?;
                stdout.queue(cursor::MoveTo(0, 0))?;
            }
            false => {
                stdout.queue(Print('\n'))?;
            }
        }
        stdout.flush()
    }

    fn write_markup(&self, markup: &str) -> std::io::Result<()> {
        let mut stdout = stdout().lock();

        if self.raw_markup {
            stdout.write_all(markup.as_bytes())?;
            return stdout.flush();
        }

        for segment in markup::segments(markup) {
            if segment.bold {
                stdout.queue(SetAttribute(Attribute::Bold))?;
            }
            if segment.italic {
                stdout.queue(SetAttribute(Attribute::Italic))?;
            }
            stdout.queue(Print(&segment.text))?;
            if segment.bold || segment.italic {
                stdout.queue(SetAttribute(Attribute::Reset))?;
            }
        }
        stdout.flush()
    }
}

impl Surface for TerminalSurface {
    fn clear(&self) {
        let was_dirty = self.set_dirty(false);
        if self.clear_screen || was_dirty {
            if let Err(e) = self.write_clear() {
                log::warn!(target: targets::RENDER, "Failed to clear the terminal: {e}");
            }
        }
    }

    fn show(&self, markup: &str) {
        self.set_dirty(true);
        if let Err(e) = self.write_markup(markup) {
            log::warn!(target: targets::RENDER, "Failed to write to the terminal: {e}");
        }
    }
}
