//! Pure mapping from dashboard state to render models, plus the sink those
//! models are written to.

pub mod format;
pub mod sink;
pub mod view;

pub use sink::{DisplaySink, TextSink};
