//! Per-page minimum-height configuration.
//!
//! Every deployment of the site carries a fixed table giving the smallest
//! height its content pane may take on each page. The table is configuration
//! data, not code: it ships as JSON next to the binary and as built-in
//! presets, and it is injected once at startup. Pages form a closed set, so
//! a lookup against the table cannot miss — unknown page *names* are handled
//! at the parsing edge instead.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use sizing::Px;

/// Logical page of the site; the key space of a [`MinHeightProfile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    VersionHistory,
    Installation,
    Screenshots,
    SourceCode,
    AuthorsContact,
    Contribute,
    License,
}

impl PageId {
    /// Every page, in site navigation order.
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::VersionHistory,
        Self::Installation,
        Self::Screenshots,
        Self::SourceCode,
        Self::AuthorsContact,
        Self::Contribute,
        Self::License,
    ];

    /// Parse the page name used in markup and configuration files.
    ///
    /// Returns `None` for names outside the closed set; callers decide the
    /// fallback (the height controller applies no floor in that case).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Self::Home),
            "version_history" => Some(Self::VersionHistory),
            "installation" => Some(Self::Installation),
            "screenshots" => Some(Self::Screenshots),
            "source_code" => Some(Self::SourceCode),
            "authors_contact" => Some(Self::AuthorsContact),
            "contribute" => Some(Self::Contribute),
            "license" => Some(Self::License),
            _ => None,
        }
    }

    /// Canonical page name; inverse of [`Self::from_name`].
    pub const fn as_name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::VersionHistory => "version_history",
            Self::Installation => "installation",
            Self::Screenshots => "screenshots",
            Self::SourceCode => "source_code",
            Self::AuthorsContact => "authors_contact",
            Self::Contribute => "contribute",
            Self::License => "license",
        }
    }
}

/// Minimum content-pane height per page, in whole CSS pixels.
///
/// One named field per page keeps the table total by construction: a profile
/// cannot be built with a page missing, whether from Rust or from JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinHeightProfile {
    pub home: u32,
    pub version_history: u32,
    pub installation: u32,
    pub screenshots: u32,
    pub source_code: u32,
    pub authors_contact: u32,
    pub contribute: u32,
    pub license: u32,
}

impl MinHeightProfile {
    /// Table used by current deployments.
    pub const DEFAULT: Self = Self {
        home: 940,
        version_history: 1450,
        installation: 3200,
        screenshots: 1050,
        source_code: 940,
        authors_contact: 940,
        contribute: 940,
        license: 940,
    };

    /// The original table, with the tallest floors.
    pub const TALL: Self = Self {
        home: 1040,
        version_history: 1850,
        installation: 3300,
        screenshots: 1250,
        source_code: 1040,
        authors_contact: 1040,
        contribute: 1040,
        license: 1040,
    };

    /// Long-serving table that trimmed the 1040px pages down to 940px.
    pub const CLASSIC: Self = Self {
        home: 940,
        version_history: 1850,
        installation: 3300,
        screenshots: 1250,
        source_code: 940,
        authors_contact: 940,
        contribute: 940,
        license: 940,
    };

    /// Small-screen table: one shared floor apart from the installation page.
    pub const COMPACT: Self = Self {
        home: 690,
        version_history: 690,
        installation: 3200,
        screenshots: 690,
        source_code: 690,
        authors_contact: 690,
        contribute: 690,
        license: 690,
    };

    /// Look up a built-in preset by its configuration name.
    pub fn preset(name: &str) -> Option<&'static Self> {
        match name {
            "default" => Some(&Self::DEFAULT),
            "tall" => Some(&Self::TALL),
            "classic" => Some(&Self::CLASSIC),
            "compact" => Some(&Self::COMPACT),
            _ => None,
        }
    }

    /// The floor for a page. Total: every page has an entry.
    pub const fn floor_px(&self, page: PageId) -> Px {
        Px::new(match page {
            PageId::Home => self.home,
            PageId::VersionHistory => self.version_history,
            PageId::Installation => self.installation,
            PageId::Screenshots => self.screenshots,
            PageId::SourceCode => self.source_code,
            PageId::AuthorsContact => self.authors_contact,
            PageId::Contribute => self.contribute,
            PageId::License => self.license,
        })
    }

    /// The floor for a raw page name; `None` when the name is not a site page.
    pub fn floor_for_name(&self, name: &str) -> Option<Px> {
        PageId::from_name(name).map(|page| self.floor_px(page))
    }

    /// Parse a profile from its JSON representation.
    ///
    /// # Errors
    /// Returns the underlying deserialization error for malformed JSON, a
    /// missing page, or an unknown key.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl Default for MinHeightProfile {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
