//! # logvocab popup
//!
//! Opens popup windows that cannot reach back into the page that opened
//! them (reverse tabnabbing).
//!
//! The platform window call sits behind [`WindowHost`]. [`open_popup`] always
//! requests `noopener,noreferrer` and clears the opener reference on any
//! window the host returns.
//!
//! ## Example
//!
//! ```rust
//! use logvocab_popup::{open_popup, PopupWindow, WindowHost};
//!
//! #[derive(Default)]
//! struct Window {
//!     has_opener: bool,
//! }
//!
//! impl PopupWindow for Window {
//!     fn clear_opener(&mut self) {
//!         self.has_opener = false;
//!     }
//! }
//!
//! struct Host;
//!
//! impl WindowHost for Host {
//!     type Window = Window;
//!
//!     fn open(&self, _url: &str, _name: Option<&str>, features: &str) -> Option<Window> {
//!         assert_eq!(features, "noopener,noreferrer,popup");
//!         Some(Window { has_opener: true })
//!     }
//! }
//!
//! let window = open_popup(&Host, "https://example.com", None, Some("popup")).unwrap();
//! assert!(!window.has_opener);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use tracing::debug;

/// Features forced onto every popup.
pub const SAFE_FEATURES: &str = "noopener,noreferrer";

/// A window created by a [`WindowHost`].
pub trait PopupWindow {
    /// Drops the new window's reference to the window that opened it.
    fn clear_opener(&mut self);
}

/// Platform call that opens a new browsing context.
pub trait WindowHost {
    /// Handle to an opened window.
    type Window: PopupWindow;

    /// Opens `url` in a window named `name` with a comma-separated feature
    /// list such as `popup,width=400`.
    ///
    /// Returns `None` when the platform refused to open the window, for
    /// example because a popup blocker intervened.
    fn open(&self, url: &str, name: Option<&str>, features: &str) -> Option<Self::Window>;
}

/// Returns the feature string passed to the host for the caller's features.
///
/// Empty or absent features add nothing after the safe defaults.
///
/// # Examples
///
/// ```rust
/// use logvocab_popup::popup_features;
///
/// assert_eq!(popup_features(None), "noopener,noreferrer");
/// assert_eq!(popup_features(Some("width=400")), "noopener,noreferrer,width=400");
/// ```
#[must_use]
pub fn popup_features(features: Option<&str>) -> String {
    match features {
        Some(extra) if !extra.is_empty() => format!("{SAFE_FEATURES},{extra}"),
        _ => SAFE_FEATURES.to_string(),
    }
}

/// Opens a popup with `noopener,noreferrer` forced on.
///
/// `url` accepts anything that views as a string, including `url::Url`.
/// If the host returns a window, its opener reference is cleared before it
/// is handed back.
pub fn open_popup<H, U>(
    host: &H,
    url: U,
    name: Option<&str>,
    features: Option<&str>,
) -> Option<H::Window>
where
    H: WindowHost,
    U: AsRef<str>,
{
    let url = url.as_ref();
    let features = popup_features(features);

    let Some(mut window) = host.open(url, name, &features) else {
        debug!(url, "Popup was blocked or failed to open");
        return None;
    };

    window.clear_opener();
    Some(window)
}
