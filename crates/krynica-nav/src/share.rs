//! Outbound sharing: social share-link templates, percent-encoding, and
//! the copy-link action with its clipboard fallback chain.

use krynica_platform::{Clipboard, LegacyCopy, ShareSheet};

/// How long the "copied" confirmation stays up, in milliseconds.
pub const COPIED_RESET_MS: u32 = 2000;

/// Supported share endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Telegram,
    Twitter,
    Facebook,
    Vk,
}

impl ShareTarget {
    /// All targets, in display order.
    pub const ALL: [ShareTarget; 4] = [
        ShareTarget::Telegram,
        ShareTarget::Twitter,
        ShareTarget::Facebook,
        ShareTarget::Vk,
    ];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::Telegram => "Telegram",
            ShareTarget::Twitter => "Twitter",
            ShareTarget::Facebook => "Facebook",
            ShareTarget::Vk => "VK",
        }
    }

    /// Brand color used by the share button hover state.
    pub fn color(&self) -> &'static str {
        match self {
            ShareTarget::Telegram => "#0088cc",
            ShareTarget::Twitter => "#000000",
            ShareTarget::Facebook => "#1877f2",
            ShareTarget::Vk => "#0077ff",
        }
    }

    /// Build the outbound share URL for `url` titled `title`.
    ///
    /// Facebook's sharer takes the URL only; the other endpoints take
    /// both, URL-encoded.
    pub fn share_url(&self, url: &str, title: &str) -> String {
        let url = percent_encode(url);
        match self {
            ShareTarget::Telegram => {
                format!("https://t.me/share/url?url={url}&text={}", percent_encode(title))
            },
            ShareTarget::Twitter => format!(
                "https://twitter.com/intent/tweet?url={url}&text={}",
                percent_encode(title)
            ),
            ShareTarget::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={url}")
            },
            ShareTarget::Vk => {
                format!("https://vk.com/share.php?url={url}&title={}", percent_encode(title))
            },
        }
    }
}

/// Canonical shareable URL of an article page.
pub fn article_share_url(origin: &str, slug: &str) -> String {
    format!("{}/news/{slug}.html", origin.trim_end_matches('/'))
}

/// Percent-encode a string the way `encodeURIComponent` does: ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )` pass through, everything else
/// becomes `%XX` per UTF-8 byte.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => out.push(byte as char),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(byte as char)
            },
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// The share/copy-link action with its confirmation flag.
///
/// Failures are swallowed by design: a dismissed share sheet or a denied
/// clipboard never surfaces an error, the worst case is simply no
/// confirmation.
#[derive(Debug, Clone, Default)]
pub struct ShareAction {
    copied_remaining_ms: Option<u32>,
}

impl ShareAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the "copied" confirmation is currently shown.
    pub fn copied(&self) -> bool {
        self.copied_remaining_ms.is_some()
    }

    /// Share `url` through the native sheet when one is available,
    /// otherwise copy the link. Native share is best-effort: its failure
    /// is swallowed and does not fall through to the clipboard.
    pub fn share(
        &mut self,
        url: &str,
        title: &str,
        sheet: Option<&mut dyn ShareSheet>,
        clipboard: &mut dyn Clipboard,
        legacy: &mut dyn LegacyCopy,
    ) {
        match sheet {
            Some(sheet) => {
                if let Err(err) = sheet.share(url, title) {
                    log::debug!("native share failed: {err}");
                }
            },
            None => self.copy_link(url, clipboard, legacy),
        }
    }

    /// Copy `url`, trying the clipboard first and the legacy
    /// selection-based path second. Sets the confirmation flag on any
    /// success; a double failure is swallowed.
    pub fn copy_link(
        &mut self,
        url: &str,
        clipboard: &mut dyn Clipboard,
        legacy: &mut dyn LegacyCopy,
    ) {
        let copied = match clipboard.write_text(url) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("clipboard write failed, trying legacy copy: {err}");
                legacy.copy(url).is_ok()
            },
        };
        if copied {
            self.copied_remaining_ms = Some(COPIED_RESET_MS);
        }
    }

    /// Advance the confirmation timer by `elapsed_ms`; the flag resets
    /// once the full two seconds have passed.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some(remaining) = self.copied_remaining_ms {
            self.copied_remaining_ms = remaining.checked_sub(elapsed_ms).filter(|r| *r > 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krynica_platform::InMemoryClipboard;
    use krynica_types::KrynicaError;
    use krynica_types::error::Result;

    struct FailingClipboard;

    impl Clipboard for FailingClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(KrynicaError::Platform("denied".into()))
        }
    }

    struct FailingLegacyCopy;

    impl LegacyCopy for FailingLegacyCopy {
        fn copy(&mut self, _text: &str) -> Result<()> {
            Err(KrynicaError::Platform("execCommand returned false".into()))
        }
    }

    struct RecordingSheet {
        shares: Vec<(String, String)>,
        fail: bool,
    }

    impl ShareSheet for RecordingSheet {
        fn share(&mut self, url: &str, title: &str) -> Result<()> {
            if self.fail {
                return Err(KrynicaError::Platform("dismissed".into()));
            }
            self.shares.push((url.to_string(), title.to_string()));
            Ok(())
        }
    }

    const URL: &str = "https://minsk.example.by/news/niamiha.html";
    const TITLE: &str = "Немига: улица старше города";

    #[test]
    fn telegram_template() {
        assert_eq!(
            ShareTarget::Telegram.share_url("https://a.by/x", "заголовок и пробел"),
            "https://t.me/share/url?url=https%3A%2F%2Fa.by%2Fx&text=%D0%B7%D0%B0%D0%B3%D0%BE%D0%BB%D0%BE%D0%B2%D0%BE%D0%BA%20%D0%B8%20%D0%BF%D1%80%D0%BE%D0%B1%D0%B5%D0%BB"
        );
    }

    #[test]
    fn twitter_template() {
        assert_eq!(
            ShareTarget::Twitter.share_url("https://a.by/x", "t"),
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fa.by%2Fx&text=t"
        );
    }

    #[test]
    fn facebook_template_takes_url_only() {
        let url = ShareTarget::Facebook.share_url("https://a.by/x", "ignored title");
        assert_eq!(
            url,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fa.by%2Fx"
        );
        assert!(!url.contains("ignored"));
    }

    #[test]
    fn vk_template() {
        assert_eq!(
            ShareTarget::Vk.share_url("https://a.by/x", "t"),
            "https://vk.com/share.php?url=https%3A%2F%2Fa.by%2Fx&title=t"
        );
    }

    #[test]
    fn percent_encode_unreserved_passthrough() {
        assert_eq!(
            percent_encode("AZaz09-_.!~*'()"),
            "AZaz09-_.!~*'()"
        );
    }

    #[test]
    fn percent_encode_utf8_bytes() {
        assert_eq!(percent_encode("а б"), "%D0%B0%20%D0%B1");
        assert_eq!(percent_encode("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
    }

    #[test]
    fn article_share_url_joins_origin_and_slug() {
        assert_eq!(
            article_share_url("https://minsk.example.by", "niamiha"),
            "https://minsk.example.by/news/niamiha.html"
        );
        // A trailing slash on the origin does not double up.
        assert_eq!(
            article_share_url("https://minsk.example.by/", "niamiha"),
            "https://minsk.example.by/news/niamiha.html"
        );
    }

    #[test]
    fn share_prefers_native_sheet() {
        let mut action = ShareAction::new();
        let mut sheet = RecordingSheet {
            shares: vec![],
            fail: false,
        };
        let mut clipboard = InMemoryClipboard::new();
        let mut legacy = InMemoryClipboard::new();

        action.share(URL, TITLE, Some(&mut sheet), &mut clipboard, &mut legacy);
        assert_eq!(sheet.shares.len(), 1);
        assert!(clipboard.contents().is_none());
        assert!(!action.copied());
    }

    #[test]
    fn native_share_failure_is_swallowed() {
        let mut action = ShareAction::new();
        let mut sheet = RecordingSheet {
            shares: vec![],
            fail: true,
        };
        let mut clipboard = InMemoryClipboard::new();
        let mut legacy = InMemoryClipboard::new();

        action.share(URL, TITLE, Some(&mut sheet), &mut clipboard, &mut legacy);
        // Best-effort: no fallback to the clipboard, no panic.
        assert!(clipboard.contents().is_none());
        assert!(!action.copied());
    }

    #[test]
    fn share_without_sheet_copies_link() {
        let mut action = ShareAction::new();
        let mut clipboard = InMemoryClipboard::new();
        let mut legacy = InMemoryClipboard::new();

        action.share(URL, TITLE, None, &mut clipboard, &mut legacy);
        assert_eq!(clipboard.contents(), Some(URL));
        assert!(action.copied());
    }

    #[test]
    fn copy_falls_back_to_legacy_path() {
        let mut action = ShareAction::new();
        let mut clipboard = FailingClipboard;
        let mut legacy = InMemoryClipboard::new();

        action.copy_link(URL, &mut clipboard, &mut legacy);
        assert_eq!(legacy.contents(), Some(URL));
        assert!(action.copied());
    }

    #[test]
    fn double_copy_failure_is_swallowed() {
        let mut action = ShareAction::new();
        let mut clipboard = FailingClipboard;
        let mut legacy = FailingLegacyCopy;

        action.copy_link(URL, &mut clipboard, &mut legacy);
        assert!(!action.copied());
    }

    #[test]
    fn copied_flag_resets_after_two_seconds() {
        let mut action = ShareAction::new();
        let mut clipboard = InMemoryClipboard::new();
        let mut legacy = InMemoryClipboard::new();
        action.copy_link(URL, &mut clipboard, &mut legacy);
        assert!(action.copied());

        action.tick(1999);
        assert!(action.copied());
        action.tick(1);
        assert!(!action.copied());
    }

    #[test]
    fn tick_without_copy_is_a_noop() {
        let mut action = ShareAction::new();
        action.tick(5000);
        assert!(!action.copied());
    }

    #[test]
    fn recopy_rearms_the_timer() {
        let mut action = ShareAction::new();
        let mut clipboard = InMemoryClipboard::new();
        let mut legacy = InMemoryClipboard::new();
        action.copy_link(URL, &mut clipboard, &mut legacy);
        action.tick(1500);
        action.copy_link(URL, &mut clipboard, &mut legacy);
        action.tick(1500);
        assert!(action.copied());
        action.tick(500);
        assert!(!action.copied());
    }
}
