//! Terminal-backed [`Canvas`].
//!
//! Tasks write into a persistent framebuffer; `refresh` pushes the changes to
//! the terminal. Key events are drained on demand by `read_controls`.

use std::io;

use anyhow::Result;

use crate::border::{draw_border, BorderParams};
use crate::core::Canvas;
use crate::fb::FrameBuffer;
use crate::input::KeyReader;
use crate::renderer::TerminalRenderer;
use crate::types::{Attr, Controls};

pub struct TerminalCanvas {
    fb: FrameBuffer,
    renderer: TerminalRenderer,
    keys: KeyReader,
    bell: bool,
    /// Input failure seen by `read_controls`, reported by the next refresh.
    input_error: Option<io::Error>,
}

impl TerminalCanvas {
    /// Canvas sized to the current terminal.
    pub fn new() -> Result<Self> {
        let (w, h) = crossterm::terminal::size()?;
        Ok(Self::with_size(w, h))
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            renderer: TerminalRenderer::new(),
            keys: KeyReader::new(),
            bell: false,
            input_error: None,
        }
    }

    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        self.renderer.invalidate();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn draw_border(&mut self, params: &BorderParams) {
        draw_border(&mut self.fb, params);
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }
}

impl Canvas for TerminalCanvas {
    fn size(&self) -> (i32, i32) {
        (self.fb.height() as i32, self.fb.width() as i32)
    }

    fn put_char(&mut self, row: i32, col: i32, ch: char, attr: Attr) {
        self.fb.put_char_at(row, col, ch, attr);
    }

    fn refresh(&mut self) -> io::Result<()> {
        if let Some(err) = self.input_error.take() {
            return Err(err);
        }
        let bell = std::mem::take(&mut self.bell);
        self.renderer.draw(&self.fb, bell)
    }

    fn read_controls(&mut self) -> Controls {
        match self.keys.read() {
            Ok(controls) => controls,
            Err(err) => {
                log::warn!("reading terminal input failed: {}", err);
                self.input_error = Some(err);
                Controls::default()
            }
        }
    }

    fn beep(&mut self) {
        self.bell = true;
    }

    fn interrupted(&self) -> bool {
        self.keys.quit_requested()
    }
}
