/// Whether the environment currently prefers a dark color scheme.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeSignal {
    fn prefers_dark(&self) -> bool;
}

/// Reads the operating system's light/dark preference on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTheme;

impl ThemeSignal for SystemTheme {
    fn prefers_dark(&self) -> bool {
        match dark_light::detect() {
            dark_light::Mode::Dark => true,
            dark_light::Mode::Light | dark_light::Mode::Default => false,
        }
    }
}

/// A fixed preference, for previews and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedTheme(pub bool);

impl ThemeSignal for FixedTheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}
