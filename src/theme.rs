//! Light/dark theme handling.
//!
//! The theme is an explicitly passed value, not ambient state: the page
//! controller reads it from the request cookie and threads it into the
//! layout. Persistence is the cookie itself, written by the toggle route.

/// Name of the cookie carrying the theme preference.
pub const THEME_COOKIE: &str = "theme";

/// Color theme selected by the visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute on the document root.
    #[must_use]
    pub const fn attr(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The theme the toggle switches to.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parse a stored cookie value. Unknown values fall back to the default.
    #[must_use]
    pub fn from_cookie_value(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Read the theme from a `Cookie` request header value.
    #[must_use]
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Self::default();
        };

        header
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                (name == THEME_COOKIE).then(|| Self::from_cookie_value(value))
            })
            .next()
            .unwrap_or_default()
    }

    /// Build the `Set-Cookie` header value persisting this theme.
    #[must_use]
    pub fn set_cookie_value(&self) -> String {
        format!(
            "{THEME_COOKIE}={}; Path=/; Max-Age=31536000; SameSite=Lax",
            self.attr()
        )
    }
}
