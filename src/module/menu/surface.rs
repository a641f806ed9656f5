use std::collections::HashMap;

/// Fixed id of the element holding the rendered posts, separate from the
/// `my_posts` panel element that wraps it. Not every page variant has one.
pub const POSTS_CONTENT_ID: &str = "posts_content";

/// Returns the button element id for a menu item id.
pub fn button_id(item: &str) -> String {
    format!("{}_button", item)
}

/// Everything the menu controller does to the page. The rendered page and
/// the test doubles both implement this, so selection logic never touches
/// widget state directly.
pub trait UiSurface {
    fn set_panel_visible(&mut self, item: &str, visible: bool);
    fn set_button_emphasis(&mut self, item: &str, bold: bool);
    /// Text of the posts content region, or None when this page variant
    /// has no such region.
    fn posts_content_text(&self) -> Option<String>;
    fn set_posts_content(&mut self, text: &str);
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Element {
    visible: bool,
    bold: bool,
    content: String,
}

/// In-memory account page structure. Elements are addressed the way the
/// page derives their ids: `<item>` for the panel, `<item>_button` for the
/// button, plus the fixed posts content element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSurface {
    elements: HashMap<String, Element>,
}

impl PageSurface {
    /// Builds the page for the given menu items. The first item starts
    /// visible with a bold button, matching the page's default markup.
    pub fn new(items: &[String]) -> Self {
        let mut elements = HashMap::new();
        for (i, item) in items.iter().enumerate() {
            elements.insert(
                item.clone(),
                Element {
                    visible: i == 0,
                    ..Element::default()
                },
            );
            elements.insert(
                button_id(item),
                Element {
                    bold: i == 0,
                    ..Element::default()
                },
            );
        }
        elements.insert(POSTS_CONTENT_ID.to_string(), Element::default());
        PageSurface { elements }
    }

    pub fn panel_visible(&self, item: &str) -> bool {
        self.elements.get(item).map_or(false, |e| e.visible)
    }

    pub fn button_bold(&self, item: &str) -> bool {
        self.elements.get(&button_id(item)).map_or(false, |e| e.bold)
    }

    pub fn posts_content(&self) -> &str {
        self.elements
            .get(POSTS_CONTENT_ID)
            .map_or("", |e| e.content.as_str())
    }

    // A configured menu item without its elements is a page-structure
    // defect, not a runtime condition.
    fn element_mut(&mut self, id: &str) -> &mut Element {
        self.elements
            .get_mut(id)
            .unwrap_or_else(|| panic!("account page has no element `{}`", id))
    }
}

impl UiSurface for PageSurface {
    fn set_panel_visible(&mut self, item: &str, visible: bool) {
        self.element_mut(item).visible = visible;
    }

    fn set_button_emphasis(&mut self, item: &str, bold: bool) {
        self.element_mut(&button_id(item)).bold = bold;
    }

    fn posts_content_text(&self) -> Option<String> {
        self.elements
            .get(POSTS_CONTENT_ID)
            .map(|e| e.content.clone())
    }

    fn set_posts_content(&mut self, text: &str) {
        self.element_mut(POSTS_CONTENT_ID).content = text.to_owned();
    }
}
