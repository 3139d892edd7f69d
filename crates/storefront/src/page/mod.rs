//! Promotional page widgets.
//!
//! Each widget is a small state machine with no access to the page. The
//! renderer owns the timers and the DOM; it calls `tick`/event methods and
//! draws whatever state comes back. Widgets that stop on their own (the
//! countdown, the progress bar, the typewriter) report a terminal state so
//! the renderer can cancel its timer.

pub mod carousel;
pub mod contact;
pub mod countdown;
pub mod gallery;
pub mod navigation;
pub mod progress;
pub mod typewriter;

pub use carousel::Carousel;
pub use contact::{ContactError, ContactForm, ContactSubmission};
pub use countdown::{CountdownState, OfferCountdown, Remaining};
pub use gallery::{Gallery, GallerySwap};
pub use progress::SoldProgress;
pub use typewriter::Typewriter;
