//! Tag markup transforms.
//!
//! Pure string functions over the host's wiki markup: stripping a tag from
//! a block's text, testing whether a text mentions a tag, and rendering the
//! textual reference forms a rule can leave behind.

pub mod refs;
pub mod strip;

pub use refs::render_reference;
pub use strip::{mentions_tag, strip_tag};
