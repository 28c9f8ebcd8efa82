//! Sequential keyboard focus.
//!
//! Models Tab / Shift+Tab across the focusable elements of a page, in
//! document order. Disabled elements and elements with a negative
//! `tab_index` are skipped. `None` means the document body holds focus.

/// One element that may take part in sequential focus navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Focusable {
    pub id: String,
    pub disabled: bool,
    pub tab_index: i32,
}

impl Focusable {
    /// An enabled element in the default tab order.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            disabled: false,
            tab_index: 0,
        }
    }

    /// Whether Tab can land on this element.
    pub fn is_tabbable(&self) -> bool {
        !self.disabled && self.tab_index >= 0
    }
}

/// Focus cursor over a list of elements.
#[derive(Clone, Debug, Default)]
pub struct FocusRing {
    elements: Vec<Focusable>,
    current: Option<usize>,
}

impl FocusRing {
    /// Start with focus on the document body.
    pub fn new(elements: Vec<Focusable>) -> Self {
        Self {
            elements,
            current: None,
        }
    }

    /// The focused element, or `None` for the body.
    pub fn focused(&self) -> Option<&Focusable> {
        self.current.and_then(|i| self.elements.get(i))
    }

    /// Move focus forward, wrapping past the last element.
    pub fn tab(&mut self) -> Option<&str> {
        let len = self.elements.len();
        let start = self.current.map(|i| i + 1).unwrap_or(0);
        let next = (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&i| self.elements[i].is_tabbable());
        self.move_to(next)
    }

    /// Move focus backward, wrapping past the first element.
    pub fn shift_tab(&mut self) -> Option<&str> {
        let len = self.elements.len();
        let start = self.current.unwrap_or(0) + len;
        let next = (1..=len)
            .map(|offset| (start - offset) % len)
            .find(|&i| self.elements[i].is_tabbable());
        self.move_to(next)
    }

    fn move_to(&mut self, next: Option<usize>) -> Option<&str> {
        // With nothing tabbable, focus stays where it was.
        if next.is_some() {
            self.current = next;
        }
        self.focused().map(|f| f.id.as_str())
    }
}
