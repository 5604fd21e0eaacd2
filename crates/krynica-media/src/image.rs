//! Image source resolution with a fixed fallback chain.
//!
//! Every illustration renders from a three-rung chain: the primary URL,
//! an optional fallback URL, and finally an embedded placeholder that is
//! guaranteed to render. A resolver walks the chain downward on error
//! notifications and settles on the first rung that loads.

/// Inline SVG shown when every network source has failed. A data URI
/// cannot fail to load, so reaching it always settles the resolver.
pub const PLACEHOLDER_DATA_URI: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='400' height='300' viewBox='0 0 400 300'%3E%3Cdefs%3E%3ClinearGradient id='g' x1='0%25' y1='0%25' x2='100%25' y2='100%25'%3E%3Cstop offset='0%25' style='stop-color:%23e5e5ea'/%3E%3Cstop offset='100%25' style='stop-color:%23c7c7cc'/%3E%3C/linearGradient%3E%3C/defs%3E%3Crect fill='url(%23g)' width='400' height='300'/%3E%3Cg fill='%238e8e93' transform='translate(175,125)'%3E%3Crect x='0' y='10' width='50' height='40' rx='4'/%3E%3Ccircle cx='15' cy='25' r='6'/%3E%3Cpolygon points='10,45 25,30 40,45'/%3E%3C/g%3E%3C/svg%3E";

/// Observable loading state of one image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageLoadState {
    /// The currently selected source has finished loading.
    pub loaded: bool,
    /// The chain has advanced past the primary URL.
    pub used_fallback_url: bool,
    /// The chain is exhausted and the placeholder is showing.
    pub errored: bool,
}

/// Walks an image's source chain in response to load/error notifications.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    primary: String,
    fallback: Option<String>,
    state: ImageLoadState,
    settled: bool,
}

impl ImageResolver {
    pub fn new(primary: impl Into<String>, fallback: Option<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback,
            state: ImageLoadState::default(),
            settled: false,
        }
    }

    /// URL the host should render right now.
    pub fn current_source(&self) -> &str {
        if self.state.errored {
            PLACEHOLDER_DATA_URI
        } else if self.state.used_fallback_url {
            match &self.fallback {
                Some(url) => url,
                None => PLACEHOLDER_DATA_URI,
            }
        } else {
            &self.primary
        }
    }

    pub fn state(&self) -> ImageLoadState {
        self.state
    }

    /// The current source finished loading. No-op once settled.
    pub fn on_load(&mut self) {
        if self.settled {
            return;
        }
        self.state.loaded = true;
        self.settled = true;
    }

    /// The current source failed. Advances one rung down the chain.
    /// The placeholder rung cannot fail, so reaching it also marks the
    /// slot loaded. No-op once settled.
    pub fn on_error(&mut self) {
        if self.settled {
            return;
        }
        if !self.state.used_fallback_url && self.fallback.is_some() {
            log::debug!("primary image failed, trying fallback: {}", self.primary);
            self.state.used_fallback_url = true;
        } else {
            log::debug!("image chain exhausted, using placeholder: {}", self.primary);
            self.state.errored = true;
            self.state.loaded = true;
            self.settled = true;
        }
    }

    /// No further notifications can change the state.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Render hint: desaturate the slot when only the placeholder is left.
    pub fn grayscale(&self) -> bool {
        self.state.errored
    }

    /// Render hint: show the loading shimmer until something has loaded.
    pub fn show_skeleton(&self) -> bool {
        !self.state.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_loads_first_try() {
        let mut r = ImageResolver::new("https://img/a.jpg", None);
        assert_eq!(r.current_source(), "https://img/a.jpg");
        assert!(r.show_skeleton());
        r.on_load();
        assert!(r.state().loaded);
        assert!(!r.state().used_fallback_url);
        assert!(!r.grayscale());
        assert!(r.is_settled());
    }

    #[test]
    fn error_advances_to_fallback_then_placeholder() {
        let mut r =
            ImageResolver::new("https://img/a.jpg", Some("https://img/b.jpg".to_string()));
        r.on_error();
        assert_eq!(r.current_source(), "https://img/b.jpg");
        assert!(r.state().used_fallback_url);
        assert!(!r.state().errored);
        assert!(!r.is_settled());

        r.on_error();
        assert_eq!(r.current_source(), PLACEHOLDER_DATA_URI);
        assert!(r.state().errored);
        assert!(r.state().loaded);
        assert!(r.grayscale());
        assert!(r.is_settled());
    }

    #[test]
    fn missing_fallback_skips_straight_to_placeholder() {
        let mut r = ImageResolver::new("https://img/a.jpg", None);
        r.on_error();
        assert_eq!(r.current_source(), PLACEHOLDER_DATA_URI);
        assert!(r.state().errored);
        assert!(r.state().loaded);
        // No fallback URL was ever attempted, so the flag stays down.
        assert!(!r.state().used_fallback_url);
        assert!(r.is_settled());
    }

    #[test]
    fn used_fallback_url_tracks_an_actual_fallback_attempt() {
        let mut with = ImageResolver::new("p", Some("fb".to_string()));
        with.on_error();
        with.on_error();
        assert_eq!(
            with.state(),
            ImageLoadState {
                loaded: true,
                used_fallback_url: true,
                errored: true,
            }
        );

        let mut without = ImageResolver::new("p", None);
        without.on_error();
        assert_eq!(
            without.state(),
            ImageLoadState {
                loaded: true,
                used_fallback_url: false,
                errored: true,
            }
        );
    }

    #[test]
    fn fallback_load_settles_without_error_flag() {
        let mut r =
            ImageResolver::new("https://img/a.jpg", Some("https://img/b.jpg".to_string()));
        r.on_error();
        r.on_load();
        assert!(r.state().loaded);
        assert!(r.state().used_fallback_url);
        assert!(!r.state().errored);
        assert!(!r.grayscale());
        assert!(!r.show_skeleton());
    }

    #[test]
    fn notifications_after_settlement_are_ignored() {
        let mut r =
            ImageResolver::new("https://img/a.jpg", Some("https://img/b.jpg".to_string()));
        r.on_load();
        let settled = r.state();
        r.on_error();
        r.on_error();
        assert_eq!(r.state(), settled);
        assert_eq!(r.current_source(), "https://img/a.jpg");
    }

    #[test]
    fn placeholder_never_shows_skeleton() {
        let mut r = ImageResolver::new("bad", None);
        r.on_error();
        assert!(!r.show_skeleton());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Any notification sequence settles within two errors, and
            // the settled state is internally consistent.
            #[test]
            fn resolver_settles_and_stays_consistent(
                has_fallback in any::<bool>(),
                events in proptest::collection::vec(any::<bool>(), 0..12),
            ) {
                let fallback = has_fallback.then(|| "https://img/fb.jpg".to_string());
                let mut r = ImageResolver::new("https://img/p.jpg", fallback);
                let mut errors = 0u32;
                for is_error in events {
                    if is_error {
                        errors += 1;
                        r.on_error();
                    } else {
                        r.on_load();
                    }
                    // Settled after any load or after exhausting the chain.
                    if r.is_settled() {
                        prop_assert!(r.state().loaded);
                    }
                }
                if errors >= 2 {
                    prop_assert!(r.is_settled());
                }
                prop_assert_eq!(r.grayscale(), r.state().errored);
                prop_assert_eq!(r.show_skeleton(), !r.state().loaded);
                if !has_fallback {
                    // The flag means a fallback URL was attempted.
                    prop_assert!(!r.state().used_fallback_url);
                }
                if r.state().errored {
                    prop_assert_eq!(r.current_source(), PLACEHOLDER_DATA_URI);
                }
            }
        }
    }
}
