//! Local engagement state for the viewer widget.

/// Per-session viewer state. Not persisted anywhere; a fresh widget
/// starts over from the construction values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementState {
    /// Mirror of the playback controller's displayed state, kept here
    /// so the widget renders from one snapshot.
    pub is_playing: bool,
    pub like_count: u32,
    pub is_liked: bool,
}

impl EngagementState {
    pub fn new(like_count: u32) -> Self {
        Self {
            is_playing: false,
            like_count,
            is_liked: false,
        }
    }

    /// Flip the like flag and move the count by one in the matching
    /// direction. An unliked state always precedes a liked one, so the
    /// decrement never runs against a zero count.
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.like_count -= 1;
        } else {
            self.like_count += 1;
        }
        self.is_liked = !self.is_liked;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }
}
