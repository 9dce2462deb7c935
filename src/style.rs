//! Terminal styling utilities
//!
//! Semantic colors for human-facing CLI output. Colors are only emitted when
//! stdout is a terminal and `NO_COLOR` is unset, so piped output is plain text.
//! Machine-readable lines (the `list` rows, `ERROR:` messages) are never styled.

use crossterm::style::Stylize;
use std::io::IsTerminal;
use std::sync::OnceLock;

static COLOR_ENABLED: OnceLock<bool> = OnceLock::new();

/// Whether styled output should carry color escapes
#[must_use]
pub fn color_enabled() -> bool {
    *COLOR_ENABLED.get_or_init(|| {
        std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
    })
}

/// Extension trait for consistent autopulse styling
///
/// ```
/// use autopulse::style::AutopulseStyle;
///
/// println!("{} \"{}\"", "Switching to Hotplug Sink:".success(), "USB Headset");
/// ```
pub trait AutopulseStyle: Stylize {
    /// Style for completed actions (green)
    fn success(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        if color_enabled() { self.green() } else { self.stylize() }
    }

    /// Style for fallback actions (yellow)
    ///
    /// Use when autopulse did something other than the preferred choice, such
    /// as falling back to the default sink.
    fn warning(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        if color_enabled() { self.yellow() } else { self.stylize() }
    }
}

// Implement for all types that implement Stylize (String, &str, etc.)
impl<T: Stylize> AutopulseStyle for T {}
