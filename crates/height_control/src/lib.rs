//! Content-pane height control.
//!
//! Fits a page's content pane to the reported screen height, subject to the
//! deployment's per-page floors. The control flow mirrors what the site does
//! on page load: read `screen.height`, look up the current page's floor, and
//! write the winning value to the content element's inline `height`.
//!
//! The profile is injected once at construction and never mutated; each
//! application is synchronous and idempotent, so calling twice with the same
//! inputs leaves the same style value behind.

#![forbid(unsafe_code)]

use anyhow::{Result, anyhow};
use dom::Document;
use log::{debug, warn};
use page_profile::MinHeightProfile;
use sizing::{Px, apply_floor};

/// Id the content pane carries in every page's markup.
pub const CONTENT_ELEMENT_ID: &str = "content";

/// Receives the user-visible resize diagnostic before a floor is applied.
///
/// The message arrives presentation-ready (`"New size : 940"`); how it is
/// surfaced is up to the implementation — a blocking popup in a browser
/// shell, a log line in headless runs.
pub trait SizeNotifier {
    fn notify_resize(&mut self, message: &str);
}

/// Notifier that surfaces the diagnostic through the `log` facade.
pub struct LogNotifier;

impl SizeNotifier for LogNotifier {
    fn notify_resize(&mut self, message: &str) {
        warn!(target: "height_control", "{message}");
    }
}

/// Render the resize diagnostic for a floor about to be applied.
pub fn resize_notice(floor: Px) -> String {
    format!("New size : {floor}")
}

/// Applies per-page height floors to a document's content element.
pub struct HeightControl {
    profile: MinHeightProfile,
    content_id: String,
    notifier: Option<Box<dyn SizeNotifier>>,
}

impl HeightControl {
    /// Controller over the given deployment profile, targeting `#content`.
    pub fn new(profile: MinHeightProfile) -> Self {
        Self {
            profile,
            content_id: CONTENT_ELEMENT_ID.to_owned(),
            notifier: None,
        }
    }

    /// Target a different content-element id.
    #[must_use]
    pub fn with_content_id(mut self, id: &str) -> Self {
        self.content_id = id.to_owned();
        self
    }

    /// Enable the resize diagnostic.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Box<dyn SizeNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Height the content pane takes for `page_name` on a screen of
    /// `screen_height`, without touching any document.
    ///
    /// Unknown page names carry no floor: the screen height passes through
    /// unchanged rather than turning into a malformed length.
    pub fn used_height(&self, page_name: &str, screen_height: Px) -> Px {
        let floor = self.profile.floor_for_name(page_name);
        if floor.is_none() {
            warn!(target: "height_control", "no height floor configured for page `{page_name}`");
        }
        apply_floor(screen_height, floor)
    }

    /// Compute and apply the content-pane height for one page view.
    ///
    /// Overwrites the `height` declaration of the content element's inline
    /// style with the used value and returns it. When a notifier is
    /// configured and the floor wins over the screen height, the diagnostic
    /// fires before the style is written.
    ///
    /// # Errors
    /// Returns an error if the document has no element with the configured
    /// content id.
    pub fn apply(
        &mut self,
        document: &mut Document,
        page_name: &str,
        screen_height: Px,
    ) -> Result<Px> {
        let target = document
            .element_by_id(&self.content_id)
            .ok_or_else(|| anyhow!("no element with id `{}` in document", self.content_id))?;

        let used = self.used_height(page_name, screen_height);
        if used > screen_height
            && let Some(notifier) = self.notifier.as_mut()
        {
            notifier.notify_resize(&resize_notice(used));
        }

        document.set_style_property(target, "height", &used.to_css());
        debug!(
            target: "height_control",
            "page `{page_name}`: screen {screen_height}px -> content {used}px"
        );
        Ok(used)
    }
}
