//! Structural markup model for bootkit components.
//!
//! Components derive a tree of [`Element`] nodes instead of writing HTML
//! directly. Every element carries:
//! - a tag and a [`Role`] describing its structural purpose
//! - an ordered [`ClassList`] with empty tokens filtered out
//! - an ordered [`Attrs`] map where guarded attributes are simply absent
//! - child [`Node`]s
//!
//! The tree can be inspected (tests, host integrations) or serialized with
//! [`Element::to_html`].
//!
//! # Example
//!
//! ```
//! use bk_markup::{Element, Role};
//!
//! let link = Element::new("a", Role::Link)
//!     .class("nav-link")
//!     .class_if(true, "active")
//!     .attr("href", "#")
//!     .attr_if(true, "aria-current", "page")
//!     .text("Home");
//!
//! assert_eq!(
//!     link.to_html(),
//!     r##"<a class="nav-link active" href="#" aria-current="page">Home</a>"##
//! );
//! ```

mod attrs;
mod class;
mod content;
mod html;
mod node;

pub use attrs::Attrs;
pub use class::ClassList;
pub use content::Content;
pub use html::escape_html;
pub use node::{Descendants, Element, Node, Role};
