//! Switching between the item content and the empty-list placeholder.

use horizon_listview_core::logging::targets;

use crate::animation::TransitionSpec;

/// The two views a list can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentView {
    /// The items.
    Content,
    /// The placeholder shown while the list is empty.
    Placeholder,
}

/// Host-side container that shows one of the two views.
pub trait ContentSwitcher {
    /// Show `view`, animating the change with `transition`.
    fn show(&mut self, view: ContentView, transition: &TransitionSpec);
}

impl<F> ContentSwitcher for F
where
    F: FnMut(ContentView, &TransitionSpec),
{
    fn show(&mut self, view: ContentView, transition: &TransitionSpec) {
        self(view, transition)
    }
}

/// Tracks which view is shown and switches only on an actual change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSwitch {
    visible: bool,
}

impl Default for PlaceholderSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderSwitch {
    /// A switch with the placeholder showing.
    pub fn new() -> Self {
        Self { visible: true }
    }

    /// Whether the placeholder is showing.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Bring the shown view in line with `count` items.
    ///
    /// Calls the switcher only when the view must change and returns the
    /// view it switched to.
    pub fn evaluate(
        &mut self,
        count: usize,
        switcher: &mut dyn ContentSwitcher,
        show_transition: &TransitionSpec,
        hide_transition: &TransitionSpec,
    ) -> Option<ContentView> {
        let (view, transition) = match (count > 0, self.visible) {
            (true, true) => (ContentView::Content, hide_transition),
            (false, false) => (ContentView::Placeholder, show_transition),
            _ => return None,
        };

        self.visible = view == ContentView::Placeholder;
        tracing::debug!(target: targets::PLACEHOLDER, ?view, count, "switching view");
        switcher.show(view, transition);
        Some(view)
    }
}
