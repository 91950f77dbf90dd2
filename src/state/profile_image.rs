//! Profile image with placeholder fallback.

#[cfg(test)]
#[path = "profile_image_test.rs"]
mod profile_image_test;

use crate::effect::{Effect, Target};

/// Load outcome of the profile image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStatus {
    /// No load signal yet; the image is assumed to be showing.
    #[default]
    Pending,
    Loaded,
    /// Terminal for this page view.
    Failed,
}

impl ImageStatus {
    /// `display` values for the image and the placeholder.
    #[must_use]
    pub fn display(self) -> (&'static str, &'static str) {
        match self {
            Self::Pending | Self::Loaded => ("block", "none"),
            Self::Failed => ("none", "flex"),
        }
    }

    /// Status after a load signal. A failure is never undone.
    #[must_use]
    pub fn on_signal(self, loaded: bool) -> Self {
        match (self, loaded) {
            (Self::Failed, _) => Self::Failed,
            (_, true) => Self::Loaded,
            (_, false) => Self::Failed,
        }
    }
}

/// Effects showing whichever of image/placeholder `status` calls for.
#[must_use]
pub fn apply(status: ImageStatus) -> Vec<Effect> {
    let (image, placeholder) = status.display();
    vec![
        Effect::SetStyle(Target::ProfileImage, "display", image.to_owned()),
        Effect::SetStyle(Target::ProfilePlaceholder, "display", placeholder.to_owned()),
    ]
}
