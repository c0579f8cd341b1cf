//! UI dump screenshot highlighter.
//!
//! Annotates a screenshot with highlight boxes around every leaf element of
//! its uiautomator UI-hierarchy dump. The dump pairs with the screenshot by
//! base name: `<path>.png` + `<path>.xml` produce `<path>-hl.png`.

pub mod bounds;
pub mod dump;
pub mod error;
pub mod highlight;
pub mod pipeline;

pub use error::{Error, Result};
