//! Platform capability traits and in-process implementations.
//!
//! The engine never touches global browser-style state directly. Every
//! effectful surface (history stack, viewport, clipboard, native share
//! sheet, media element) is a small trait injected at the call site, so
//! the state machines in the other crates stay testable headless.

pub mod services;

pub use services::{
    Clipboard, InMemoryClipboard, InMemoryHistory, LegacyCopy, MediaElement, MediaEvent,
    NavigationAdapter, RecordingMediaElement, RecordingViewport, ShareSheet, Viewport,
};
