//! Menu open state owned by the landing page

use leptos::prelude::*;

/// Open state of the slide-out menu as seen by the rest of the page.
#[derive(Clone, Copy)]
pub struct MenuContext {
    pub open: RwSignal<bool>,
}

impl MenuContext {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn set_open(&self, open: bool) {
        self.open.set(open);
    }
}

impl Default for MenuContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_context_tracks_open_state() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MenuContext::default();
            assert!(!menu.is_open());
            menu.set_open(true);
            assert!(menu.is_open());
            menu.set_open(false);
            assert!(!menu.is_open());
        });
    }
}
