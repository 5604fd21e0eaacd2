//! Media state machines: image source fallback, video playback,
//! engagement counters, and injected-script sanitizing.
//!
//! Everything here is plain state driven by notifications from the host
//! environment through the [`krynica_platform`] adapter traits, so the
//! machines can be exercised in tests without any real media elements.

pub mod engagement;
pub mod image;
pub mod playback;
pub mod sanitizer;

pub use engagement::EngagementState;
pub use image::{ImageLoadState, ImageResolver, PLACEHOLDER_DATA_URI};
pub use playback::PlaybackController;
pub use sanitizer::{InsertedNode, SanitizerObserver, is_disallowed_script_src};
