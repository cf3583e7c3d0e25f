//! Core value types used by `OpenIC` state.

use std::fmt;

use crate::content::NavLabels;

/// Logical page shown in the body. Exactly one is current at any time.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Hero headline and introduction.
    #[default]
    Home,
    /// Process design kit options.
    Pdk,
    /// EDA toolchain.
    Tools,
    /// Prototyping flow steps.
    Flow,
    /// External links and roadmap.
    Resources,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Pdk,
        Self::Tools,
        Self::Flow,
        Self::Resources,
    ];

    /// Stable lowercase key, as accepted by `--page`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Pdk => "pdk",
            Self::Tools => "tools",
            Self::Flow => "flow",
            Self::Resources => "resources",
        }
    }

    /// Zero-based position in navigation order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Pdk => 1,
            Self::Tools => 2,
            Self::Flow => 3,
            Self::Resources => 4,
        }
    }

    /// What: Look up a page by its zero-based navigation position.
    ///
    /// Output:
    /// - `Some(Page)` for `0..=4`; `None` otherwise.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next page in navigation order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous page in navigation order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Localized tab label for this page.
    #[must_use]
    pub fn nav_label(self, nav: &NavLabels) -> &str {
        match self {
            Self::Home => &nav.home,
            Self::Pdk => &nav.pdk,
            Self::Tools => &nav.tools,
            Self::Flow => &nav.flow,
            Self::Resources => &nav.resources,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
