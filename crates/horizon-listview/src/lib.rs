//! Horizon ListView - the state and behavior core of an animated list widget.
//!
//! The crate manages an ordered collection of items, animates them in and
//! out, keeps per-item first/last/selected flags current, implements
//! none/single/multiple selection, and switches to a placeholder when the
//! list is empty. Rendering, layout and input are left to the host, which
//! plugs in through a few small traits.
//!
//! # Example
//!
//! ```
//! use horizon_listview::prelude::*;
//!
//! struct Contact {
//!     name: String,
//! }
//!
//! impl ListPayload for Contact {
//!     fn natural_size(&self) -> ItemSize {
//!         ItemSize::height(48.0)
//!     }
//! }
//!
//! fn main() -> horizon_listview::Result<()> {
//!     let tweener = Tweener::new();
//!     let mut contacts = ListView::new(
//!         ListViewOptions::default(),
//!         Box::new(tweener.clone()),
//!         Box::new(|_: &[ItemHandle]| {}),
//!         Box::new(|_: ContentView, _: &TransitionSpec| {}),
//!     )?;
//!
//!     contacts.inserted.connect(|event| {
//!         println!("{} contacts added at {}", event.count, event.index);
//!     });
//!
//!     contacts.insert(-1, Contact { name: "Ada".into() })?;
//!     assert_eq!(contacts.get(0)?.name, "Ada");
//!     Ok(())
//! }
//! ```

pub mod animation;
pub mod error;
pub mod model;
pub mod prelude;
pub mod widget;

pub use error::{ConfigurationError, ListViewError, RangeError, Result};
pub use horizon_listview_core::*;
