use std::collections::BTreeMap;

/// Inline style properties the annotator writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    BackgroundColor,
    Opacity,
}

impl StyleProperty {
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::Opacity => "opacity",
        }
    }
}

/// A day cell element on the host calendar page.
pub trait DayCell {
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&mut self, name: &str, value: &str);

    fn remove_attribute(&mut self, name: &str);

    fn set_style(&mut self, property: StyleProperty, value: &str);

    fn remove_style(&mut self, property: StyleProperty);

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// Detached day cell, used for previews and tests.
///
/// Counts every style write so redundant restyling is observable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCell {
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<StyleProperty, String>,
    style_writes: usize,
}

impl MemoryCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn style(&self, property: StyleProperty) -> Option<&str> {
        self.styles.get(&property).map(String::as_str)
    }

    pub fn background(&self) -> Option<&str> {
        self.style(StyleProperty::BackgroundColor)
    }

    pub fn opacity(&self) -> Option<&str> {
        self.style(StyleProperty::Opacity)
    }

    /// The cell's inline `style` attribute text, e.g. `background-color: blue; opacity: 0.75`.
    pub fn inline_style(&self) -> String {
        self.styles
            .iter()
            .map(|(property, value)| format!("{}: {}", property.css_name(), value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn style_writes(&self) -> usize {
        self.style_writes
    }

    /// Mimic the host page re-rendering the cell: inline styles and any
    /// annotation attributes are gone, data attributes stay.
    pub fn rerender(&mut self, keep_attributes: &[&str]) {
        self.styles.clear();
        self.attributes
            .retain(|name, _| keep_attributes.contains(&name.as_str()));
    }
}

impl DayCell for MemoryCell {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    fn set_style(&mut self, property: StyleProperty, value: &str) {
        self.style_writes += 1;
        self.styles.insert(property, value.to_string());
    }

    fn remove_style(&mut self, property: StyleProperty) {
        self.style_writes += 1;
        self.styles.remove(&property);
    }
}
