//! Play/pause state reconciled against native media events.
//!
//! `toggle()` only issues a request to the underlying element; the
//! displayed state changes when the element reports back. Autoplay
//! restrictions and external controls can both reject or originate
//! transitions, so the element's events are the single source of truth.

use krynica_platform::{MediaElement, MediaEvent};
use krynica_types::Result;

#[derive(Debug, Default)]
pub struct PlaybackController {
    is_playing: bool,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Displayed playback state, as last confirmed by the element.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Ask the element to invert the displayed state. Does not touch
    /// `is_playing`; wait for [`Self::on_media_event`].
    pub fn toggle(&mut self, element: &mut dyn MediaElement) -> Result<()> {
        if self.is_playing {
            element.request_pause()
        } else {
            element.request_play()
        }
    }

    /// Native event from the element. `Ended` displays as paused.
    pub fn on_media_event(&mut self, event: MediaEvent) {
        self.is_playing = match event {
            MediaEvent::Playing => true,
            MediaEvent::Paused | MediaEvent::Ended => false,
        };
    }
}
