//! Frame-driven marquee scrolling for text that overflows its viewport.
//!
//! The animation is frame-based rather than wall-clock-based: one column
//! per frame, with a fixed-frame pause at each extreme. Widths are display
//! columns, so double-width characters count as two.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Frames to hold still at each edge, roughly one second at 60 Hz.
pub const EDGE_PAUSE_FRAMES: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn delta(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

#[derive(Debug)]
pub struct Marquee {
    text: String,
    viewport: u16,
    offset: f32,
    direction: Direction,
    pause_remaining: u32,
    running: bool,
}

impl Marquee {
    pub fn new(viewport: u16) -> Self {
        Self {
            text: String::new(),
            viewport,
            offset: 0.0,
            direction: Direction::Forward,
            pause_remaining: EDGE_PAUSE_FRAMES,
            running: false,
        }
    }

    /// Replace the text and restart the animation from the left edge.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.offset = 0.0;
        self.direction = Direction::Forward;
        self.pause_remaining = EDGE_PAUSE_FRAMES;
    }

    pub fn set_viewport(&mut self, columns: u16) {
        self.viewport = columns;
    }

    /// Subscribe to frame ticks; called when the element becomes visible.
    /// Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Unsubscribe from frame ticks; called when the element is hidden.
    /// Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Columns the text overflows the viewport by; zero or negative means
    /// the content fits and the marquee holds still.
    pub fn max_scroll(&self) -> f32 {
        self.text.width() as f32 - f32::from(self.viewport)
    }

    /// Advance one frame. Does nothing while stopped.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        let max_scroll = self.max_scroll();
        if max_scroll <= 0.0 {
            self.offset = 0.0;
            return;
        }

        if self.pause_remaining > 0 {
            self.pause_remaining -= 1;
            return;
        }

        self.offset += self.direction.delta();

        if self.offset >= max_scroll {
            self.offset = max_scroll;
            self.direction = Direction::Backward;
            self.pause_remaining = EDGE_PAUSE_FRAMES;
        } else if self.offset <= 0.0 {
            self.offset = 0.0;
            self.direction = Direction::Forward;
            self.pause_remaining = EDGE_PAUSE_FRAMES;
        }
    }

    /// The currently visible slice of the text, starting at the scroll
    /// offset and spanning at most the viewport width.
    pub fn window(&self) -> String {
        let skip = self.offset.floor() as usize;
        let viewport = usize::from(self.viewport);

        let mut result = String::new();
        let mut column = 0;
        let mut taken = 0;
        for ch in self.text.chars() {
            let width = ch.width().unwrap_or(0);
            if column + width <= skip {
                column += width;
                continue;
            }
            if taken + width > viewport {
                break;
            }
            result.push(ch);
            taken += width;
            column += width;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_marquee(text: &str, viewport: u16) -> Marquee {
        let mut marquee = Marquee::new(viewport);
        marquee.set_text(text);
        marquee.start();
        marquee
    }

    #[test]
    fn test_fitting_text_never_scrolls() {
        let mut marquee = running_marquee("short", 20);

        for _ in 0..500 {
            marquee.tick();
        }
        assert_eq!(marquee.offset(), 0.0);
    }

    #[test]
    fn test_initial_pause_then_one_column_per_frame() {
        let mut marquee = running_marquee(&"x".repeat(30), 10);

        for _ in 0..EDGE_PAUSE_FRAMES {
            marquee.tick();
            assert_eq!(marquee.offset(), 0.0);
        }
        marquee.tick();
        assert_eq!(marquee.offset(), 1.0);
        marquee.tick();
        assert_eq!(marquee.offset(), 2.0);
    }

    #[test]
    fn test_bounce_at_both_edges_resets_pause() {
        // Content 30 columns in a 10-column viewport: max scroll 20
        let mut marquee = running_marquee(&"x".repeat(30), 10);
        assert_eq!(marquee.max_scroll(), 20.0);

        for _ in 0..(EDGE_PAUSE_FRAMES + 20) {
            marquee.tick();
        }
        assert_eq!(marquee.offset(), 20.0);

        // Paused at the far edge for the full constant
        for _ in 0..EDGE_PAUSE_FRAMES {
            marquee.tick();
            assert_eq!(marquee.offset(), 20.0);
        }

        // Now scrolling back toward zero
        marquee.tick();
        assert_eq!(marquee.offset(), 19.0);
        for _ in 0..19 {
            marquee.tick();
        }
        assert_eq!(marquee.offset(), 0.0);

        // And paused again at the near edge
        marquee.tick();
        assert_eq!(marquee.offset(), 0.0);
    }

    #[test]
    fn test_set_text_resets_animation() {
        let mut marquee = running_marquee(&"x".repeat(30), 10);
        for _ in 0..(EDGE_PAUSE_FRAMES + 7) {
            marquee.tick();
        }
        assert_eq!(marquee.offset(), 7.0);

        marquee.set_text("y".repeat(40));

        assert_eq!(marquee.offset(), 0.0);
        marquee.tick();
        // Pause counter was reset, so the first frame holds still again
        assert_eq!(marquee.offset(), 0.0);
    }

    #[test]
    fn test_start_stop_idempotent() {
        let mut marquee = running_marquee(&"x".repeat(30), 10);
        marquee.start();
        marquee.start();
        assert!(marquee.is_running());

        marquee.stop();
        marquee.stop();
        assert!(!marquee.is_running());

        // Stopped marquees ignore ticks entirely
        for _ in 0..200 {
            marquee.tick();
        }
        assert_eq!(marquee.offset(), 0.0);
    }

    #[test]
    fn test_window_follows_offset() {
        let mut marquee = running_marquee("abcdefghij", 4);
        assert_eq!(marquee.window(), "abcd");

        for _ in 0..(EDGE_PAUSE_FRAMES + 3) {
            marquee.tick();
        }
        assert_eq!(marquee.offset(), 3.0);
        assert_eq!(marquee.window(), "defg");
    }

    #[test]
    fn test_window_counts_display_columns() {
        // CJK characters occupy two columns each
        let marquee = running_marquee("日本語のタイトル", 4);
        assert_eq!(marquee.window(), "日本");
    }
}
