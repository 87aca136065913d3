//! The render collaborator the game loop draws through.
//!
//! The loop only ever pushes finished frames, moves the text cursor and
//! sleeps; it never reads anything back. [`crate::TerminalRenderer`] is the
//! real implementation, [`HeadlessSurface`] records frames for tests.

use std::time::Duration;

use anyhow::Result;

use crate::fb::FrameBuffer;

pub trait Surface {
    /// Show a finished frame. Implementations may swap `fb` with their
    /// previous frame, so callers must fully re-render before each call.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;

    /// Blank the screen; the next frame is drawn in full.
    fn clear(&mut self) -> Result<()>;

    fn show_cursor_at(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn sleep(&mut self, duration: Duration);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        (**self).present(fb)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn show_cursor_at(&mut self, x: u16, y: u16) -> Result<()> {
        (**self).show_cursor_at(x, y)
    }

    fn hide_cursor(&mut self) -> Result<()> {
        (**self).hide_cursor()
    }

    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// In-memory surface: never sleeps, remembers what was shown.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    last: FrameBuffer,
    frames: usize,
    clears: usize,
    cursor: Option<(u16, u16)>,
    slept: Duration,
    history: Option<Vec<String>>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            last: FrameBuffer::new(0, 0),
            frames: 0,
            clears: 0,
            cursor: None,
            slept: Duration::ZERO,
            history: None,
        }
    }

    /// Also keep the text of every presented frame.
    pub fn recording() -> Self {
        Self {
            history: Some(Vec::new()),
            ..Self::new()
        }
    }

    pub fn last_frame(&self) -> &FrameBuffer {
        &self.last
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Total time the loop asked to sleep
    pub fn slept(&self) -> Duration {
        self.slept
    }

    /// Recorded frames, oldest first (empty unless built with `recording`)
    pub fn history(&self) -> &[String] {
        self.history.as_deref().unwrap_or(&[])
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for HeadlessSurface {
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.last.clone_from(fb);
        self.frames += 1;
        if let Some(history) = self.history.as_mut() {
            history.push(fb.to_text());
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn show_cursor_at(&mut self, x: u16, y: u16) -> Result<()> {
        self.cursor = Some((x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.cursor = None;
        Ok(())
    }

    fn sleep(&mut self, duration: Duration) {
        self.slept += duration;
    }
}
