//! Capability traits and in-process implementations.

use krynica_types::error::Result;

// ---------------------------------------------------------------------------
// Navigation adapter
// ---------------------------------------------------------------------------

/// Abstraction over the host's location/history surface.
///
/// The router reads the current path from here and pushes new entries
/// through it; external back/forward navigation is delivered to the
/// router as a history-change notification, after which it re-reads
/// `current_path`.
pub trait NavigationAdapter {
    /// Path of the current history entry, starting with `/`.
    fn current_path(&self) -> String;

    /// Push a new history entry for `path` and make it current.
    fn push_path(&mut self, path: &str) -> Result<()>;
}

/// In-process history stack. The desktop/export builds and every test
/// use this; a browser shell would adapt the native history API instead.
#[derive(Debug, Clone)]
pub struct InMemoryHistory {
    entries: Vec<String>,
    current: usize,
}

impl InMemoryHistory {
    /// Start the history at `initial_path`.
    pub fn new(initial_path: &str) -> Self {
        Self {
            entries: vec![initial_path.to_string()],
            current: 0,
        }
    }

    /// Simulate external back navigation. Returns false at the oldest
    /// entry.
    pub fn back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Simulate external forward navigation. Returns false at the
    /// newest entry.
    pub fn forward(&mut self) -> bool {
        if self.current + 1 >= self.entries.len() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Number of entries on the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NavigationAdapter for InMemoryHistory {
    fn current_path(&self) -> String {
        self.entries[self.current].clone()
    }

    fn push_path(&mut self, path: &str) -> Result<()> {
        // A push discards any forward entries, like a browser does.
        self.entries.truncate(self.current + 1);
        self.entries.push(path.to_string());
        self.current = self.entries.len() - 1;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Abstraction over viewport scrolling.
pub trait Viewport {
    /// Scroll the viewport back to the top.
    fn scroll_to_top(&mut self);

    /// Current vertical scroll offset in pixels.
    fn scroll_y(&self) -> i32;
}

/// Viewport that records scroll requests; sufficient for the headless
/// builds and for asserting the router's scroll side effect in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewport {
    scroll_y: i32,
    /// Number of times `scroll_to_top` has been called.
    pub scrolls_to_top: usize,
}

impl RecordingViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user scrolling to `y`.
    pub fn set_scroll_y(&mut self, y: i32) {
        self.scroll_y = y;
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to_top(&mut self) {
        self.scroll_y = 0;
        self.scrolls_to_top += 1;
    }

    fn scroll_y(&self) -> i32 {
        self.scroll_y
    }
}

// ---------------------------------------------------------------------------
// Clipboard and legacy copy
// ---------------------------------------------------------------------------

/// Abstraction over the async clipboard surface.
pub trait Clipboard {
    /// Write `text` to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Legacy selection-based copy, used when [`Clipboard`] fails.
pub trait LegacyCopy {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by a plain string buffer.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClipboard {
    contents: Option<String>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last written text, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for InMemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

impl LegacyCopy for InMemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Share sheet
// ---------------------------------------------------------------------------

/// Abstraction over a native share sheet. Availability is expressed by
/// injecting `Some(&mut dyn ShareSheet)` or `None`, never by inline
/// feature detection.
pub trait ShareSheet {
    /// Open the native share UI for `url` titled `title`.
    fn share(&mut self, url: &str, title: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Media element
// ---------------------------------------------------------------------------

/// Native playback notifications. The playback controller treats the
/// last received event as the source of truth for its displayed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback actually started.
    Playing,
    /// Playback stopped (pause).
    Paused,
    /// Playback reached the end of the media.
    Ended,
}

/// Abstraction over a single media element's command surface.
///
/// Commands are requests only; whether playback really starts is
/// reported back through [`MediaEvent`]s.
pub trait MediaElement {
    fn request_play(&mut self) -> Result<()>;
    fn request_pause(&mut self) -> Result<()>;
}

/// Media element that records requested commands.
#[derive(Debug, Clone, Default)]
pub struct RecordingMediaElement {
    pub play_requests: usize,
    pub pause_requests: usize,
}

impl RecordingMediaElement {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MediaElement for RecordingMediaElement {
    fn request_play(&mut self) -> Result<()> {
        self.play_requests += 1;
        Ok(())
    }

    fn request_pause(&mut self) -> Result<()> {
        self.pause_requests += 1;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-module tests
// ---------------------------------------------------------------------------
