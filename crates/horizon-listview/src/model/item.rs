//! List items and the payload capability interface.

use slotmap::new_key_type;

use crate::animation::ItemSize;

new_key_type! {
    /// Opaque handle to an item's visual node.
    ///
    /// Created once when the item is inserted and never re-created while the
    /// item stays in the list. Handles are versioned: a handle to a removed
    /// item never aliases a later item, even if its slot is reused.
    pub struct ItemHandle;
}

/// A per-item state flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateFlag {
    /// Item is at index 0.
    First,
    /// Item is at the last index.
    Last,
    /// Item is selected.
    Selected,
}

impl StateFlag {
    /// All flags.
    pub const ALL: [StateFlag; 3] = [Self::First, Self::Last, Self::Selected];
}

/// Positional and selection flags of one item. All false at insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemState {
    /// Item is first in the list.
    pub first: bool,
    /// Item is last in the list.
    pub last: bool,
    /// Item is selected.
    pub selected: bool,
}

impl ItemState {
    /// Read a flag.
    pub fn get(&self, flag: StateFlag) -> bool {
        match flag {
            StateFlag::First => self.first,
            StateFlag::Last => self.last,
            StateFlag::Selected => self.selected,
        }
    }

    /// Write a flag, returning whether it changed.
    pub fn set(&mut self, flag: StateFlag, value: bool) -> bool {
        let slot = match flag {
            StateFlag::First => &mut self.first,
            StateFlag::Last => &mut self.last,
            StateFlag::Selected => &mut self.selected,
        };
        let changed = *slot != value;
        *slot = value;
        changed
    }
}

/// Optional capability: a payload whose look is driven by style classes.
pub trait StyleClasses {
    /// Add a class.
    fn add_class(&mut self, class: &str);
    /// Remove a class.
    fn remove_class(&mut self, class: &str);
}

/// The capability interface list payloads implement.
///
/// Only [`natural_size`](Self::natural_size) is required. The optional
/// capabilities default to "not supported" and are queried by the list
/// before use.
///
/// # Example
///
/// ```
/// use horizon_listview::animation::ItemSize;
/// use horizon_listview::model::{ListPayload, StyleClasses};
///
/// struct Row {
///     label: String,
///     classes: Vec<String>,
/// }
///
/// impl StyleClasses for Row {
///     fn add_class(&mut self, class: &str) {
///         self.classes.push(class.to_string());
///     }
///     fn remove_class(&mut self, class: &str) {
///         self.classes.retain(|c| c != class);
///     }
/// }
///
/// impl ListPayload for Row {
///     fn natural_size(&self) -> ItemSize {
///         ItemSize::height(44.0)
///     }
///     fn style_classes(&mut self) -> Option<&mut dyn StyleClasses> {
///         Some(self)
///     }
/// }
/// ```
pub trait ListPayload: 'static {
    /// Size the item animates to when it enters the list.
    fn natural_size(&self) -> ItemSize;

    /// Style-class capability, if the payload has one.
    fn style_classes(&mut self) -> Option<&mut dyn StyleClasses> {
        None
    }

    /// Whether activations (taps, clicks) on this payload drive selection.
    ///
    /// Return `false` for rows such as headers that never select.
    fn is_activatable(&self) -> bool {
        true
    }
}

/// One entry in the list.
#[derive(Debug)]
pub struct Item<P> {
    pub(crate) handle: ItemHandle,
    pub(crate) payload: P,
    pub(crate) state: ItemState,
}

impl<P> Item<P> {
    /// The item's visual handle.
    pub fn handle(&self) -> ItemHandle {
        self.handle
    }

    /// The payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Mutable access to the payload.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Current flags.
    pub fn state(&self) -> ItemState {
        self.state
    }

    /// Give the payload back.
    pub fn into_payload(self) -> P {
        self.payload
    }
}
