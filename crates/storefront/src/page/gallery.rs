//! Product image gallery.

use std::time::Duration;

/// How long the main image stays faded out while its source is swapped.
pub const FADE_DURATION: Duration = Duration::from_millis(200);

/// What the renderer should do after a thumbnail click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySwap {
    /// Thumbnail that now carries the active class.
    pub active: usize,
    /// New main image source, applied after [`FADE_DURATION`].
    pub src: String,
    pub fade: Duration,
}

/// Thumbnails plus the main product image they control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    thumbnails: Vec<String>,
    active: Option<usize>,
    main_image: String,
}

impl Gallery {
    /// A gallery with no thumbnail selected yet.
    #[must_use]
    pub fn new(thumbnails: Vec<String>, main_image: impl Into<String>) -> Self {
        Self {
            thumbnails,
            active: None,
            main_image: main_image.into(),
        }
    }

    /// Select thumbnail `index`. Out of range does nothing and returns `None`.
    pub fn select(&mut self, index: usize) -> Option<GallerySwap> {
        let src = self.thumbnails.get(index)?.clone();
        self.active = Some(index);
        self.main_image.clone_from(&src);
        Some(GallerySwap {
            active: index,
            src,
            fade: FADE_DURATION,
        })
    }

    /// Index of the active thumbnail, if any was clicked.
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Current main image source.
    #[must_use]
    pub fn main_image(&self) -> &str {
        &self.main_image
    }

    /// Thumbnail sources in page order.
    #[must_use]
    pub fn thumbnails(&self) -> &[String] {
        &self.thumbnails
    }
}
