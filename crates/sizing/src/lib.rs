//! Content-pane sizing — used-height resolution against a configured floor.
//!
//! [Spec: CSS Sizing Module Level 3 §4.5](https://www.w3.org/TR/css-sizing-3/#min-size-properties)
//! [Spec: CSSOM View Module, the `Screen` interface](https://www.w3.org/TR/cssom-view-1/#the-screen-interface)
//!
//! The content pane fills the screen height the host environment reports,
//! unless the deployment configures a taller per-page floor; the floor then
//! wins. Only the min-constraint half of the sizing pipeline applies here,
//! and values stay in whole CSS pixels: both `screen.height` readings and
//! the hand-written configuration tables are integers, so no sub-pixel
//! precision is carried.

#![forbid(unsafe_code)]

use std::fmt;
use std::fmt::{Display, Formatter};

/// Whole-pixel height used for screen readings, floors, and used heights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Px(u32);

impl Px {
    pub const ZERO: Self = Self(0);

    /// Create from a whole pixel count.
    #[inline]
    pub const fn new(pixels: u32) -> Self {
        Self(pixels)
    }

    /// The raw pixel count.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Serialize as a CSS `<length>` in pixel units, e.g. `"940px"`.
    ///
    /// [Spec: CSS Values and Units Level 3 §6.1](https://www.w3.org/TR/css-values-3/#absolute-lengths)
    #[inline]
    pub fn to_css(self) -> String {
        format!("{}px", self.0)
    }
}

impl Display for Px {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Apply a configured floor to the reported screen height.
///
/// The min-constraint half of used-size computation (css-sizing-3 §4.5):
/// with a floor present the used height can never drop below it; without
/// one, the screen height passes through unchanged. Pages missing from a
/// deployment table carry no floor, so short screens keep their own height
/// instead of producing an undefined length.
#[inline]
pub fn apply_floor(screen_height: Px, floor: Option<Px>) -> Px {
    match floor {
        Some(min_height) => screen_height.max(min_height),
        None => screen_height,
    }
}
