use crate::module::menu::surface::UiSurface;

/// Menu item whose panel gets the empty-state placeholder.
pub const MY_POSTS: &str = "my_posts";

pub const ACCOUNT_DETAILS: &str = "account_details";

pub const NO_POSTS_PLACEHOLDER: &str = "No posts yet";

/// Drives the account menu: at most one item's panel is visible and its
/// button bold at a time. Selection state lives entirely in the surface and
/// is recomputed in full on every call, never diffed.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuController {
    items: Vec<String>,
}

impl MenuController {
    pub fn new(items: Vec<String>) -> Self {
        MenuController { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Shows `selected`'s panel and bolds its button, hides and unbolds all
    /// the rest. An id outside the configured set deselects everything.
    pub fn select(&self, surface: &mut impl UiSurface, selected: &str) {
        log::debug!("account menu selection: {}", selected);
        for item in &self.items {
            let active = item == selected;
            surface.set_button_emphasis(item, active);
            surface.set_panel_visible(item, active);
        }
        if selected == MY_POSTS {
            self.check_posts_empty_state(surface);
        }
    }

    /// Injects the placeholder when the posts region exists and its trimmed
    /// text is empty. Page variants without a posts region are left alone.
    pub fn check_posts_empty_state(&self, surface: &mut impl UiSurface) {
        if let Some(text) = surface.posts_content_text() {
            if text.trim().is_empty() {
                surface.set_posts_content(NO_POSTS_PLACEHOLDER);
            }
        }
    }

    /// Called once by the host after the surface is up, so the posts panel
    /// never renders blank even if the user never touches the menu.
    pub fn on_ready(&self, surface: &mut impl UiSurface) {
        self.check_posts_empty_state(surface);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::module::menu::surface::UiSurface;

    /// Surface double recording every mutation, with an optional posts
    /// region so the tolerated-absence path is coverable.
    struct FakeSurface {
        panels: HashMap<String, bool>,
        buttons: HashMap<String, bool>,
        posts_content: Option<String>,
    }

    impl FakeSurface {
        fn new(posts_content: Option<&str>) -> Self {
            FakeSurface {
                panels: HashMap::new(),
                buttons: HashMap::new(),
                posts_content: posts_content.map(|s| s.to_string()),
            }
        }
    }

    impl UiSurface for FakeSurface {
        fn set_panel_visible(&mut self, item: &str, visible: bool) {
            self.panels.insert(item.to_string(), visible);
        }

        fn set_button_emphasis(&mut self, item: &str, bold: bool) {
            self.buttons.insert(item.to_string(), bold);
        }

        fn posts_content_text(&self) -> Option<String> {
            self.posts_content.clone()
        }

        fn set_posts_content(&mut self, text: &str) {
            self.posts_content = Some(text.to_string());
        }
    }

    fn controller() -> MenuController {
        MenuController::new(vec![MY_POSTS.to_string(), ACCOUNT_DETAILS.to_string()])
    }

    #[test]
    fn test_select_activates_exactly_one_item() {
        let controller = controller();
        let mut surface = FakeSurface::new(Some("hello world"));
        controller.select(&mut surface, ACCOUNT_DETAILS);
        assert_eq!(surface.panels[ACCOUNT_DETAILS], true);
        assert_eq!(surface.buttons[ACCOUNT_DETAILS], true);
        assert_eq!(surface.panels[MY_POSTS], false);
        assert_eq!(surface.buttons[MY_POSTS], false);
    }

    #[test]
    fn test_select_my_posts_fills_empty_region() {
        let controller = controller();
        let mut surface = FakeSurface::new(Some("  \n  "));
        controller.select(&mut surface, MY_POSTS);
        assert_eq!(surface.posts_content.as_deref(), Some(NO_POSTS_PLACEHOLDER));
    }

    #[test]
    fn test_select_my_posts_keeps_existing_posts() {
        let controller = controller();
        let mut surface = FakeSurface::new(Some("First post!"));
        controller.select(&mut surface, MY_POSTS);
        assert_eq!(surface.posts_content.as_deref(), Some("First post!"));
    }

    #[test]
    fn test_select_other_item_skips_posts_check() {
        let controller = controller();
        let mut surface = FakeSurface::new(Some(""));
        controller.select(&mut surface, ACCOUNT_DETAILS);
        assert_eq!(surface.posts_content.as_deref(), Some(""));
    }

    #[test]
    fn test_on_ready_fills_empty_region_without_selection() {
        let controller = controller();
        let mut surface = FakeSurface::new(Some(""));
        controller.on_ready(&mut surface);
        assert_eq!(surface.posts_content.as_deref(), Some(NO_POSTS_PLACEHOLDER));
        // no selection happened, so no panel or button was touched
        assert!(surface.panels.is_empty());
        assert!(surface.buttons.is_empty());
    }

    #[test]
    fn test_empty_state_check_is_idempotent() {
        let controller = controller();
        let mut surface = FakeSurface::new(Some(""));
        controller.check_posts_empty_state(&mut surface);
        controller.check_posts_empty_state(&mut surface);
        assert_eq!(surface.posts_content.as_deref(), Some(NO_POSTS_PLACEHOLDER));
    }

    #[test]
    fn test_missing_posts_region_is_tolerated() {
        let controller = controller();
        let mut surface = FakeSurface::new(None);
        controller.select(&mut surface, MY_POSTS);
        assert_eq!(surface.posts_content, None);
    }

    #[test]
    fn test_unknown_selection_deselects_everything() {
        let controller = controller();
        let mut surface = FakeSurface::new(Some(""));
        controller.select(&mut surface, "my_postz");
        assert_eq!(surface.panels[MY_POSTS], false);
        assert_eq!(surface.panels[ACCOUNT_DETAILS], false);
        assert_eq!(surface.buttons[MY_POSTS], false);
        assert_eq!(surface.buttons[ACCOUNT_DETAILS], false);
        // the unknown id never matches my_posts, so the region stays empty
        assert_eq!(surface.posts_content.as_deref(), Some(""));
    }
}
