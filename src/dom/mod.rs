//! Minimal element tree standing in for a host document.
//!
//! Charts and the controller only need element creation, classes,
//! attributes, text, re-parenting, visibility and size; nothing here lays
//! anything out.

mod element;

pub use element::Element;
