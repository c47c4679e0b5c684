use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, Role, SelectOption};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub role: Role,

    // Content
    pub content: Content,

    // Accessibility
    /// Accessible name. Falls back to the text content when unset.
    pub aria_label: Option<String>,

    // Interaction
    pub clickable: bool,
    /// Disabled elements don't receive input.
    pub disabled: bool,

    // Custom data storage
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            role: Role::Generic,
            content: Content::None,
            aria_label: None,
            clickable: false,
            disabled: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            role: Role::Text,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn button(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            role: Role::Button,
            content: Content::Text(content.into()),
            clickable: true,
            ..Default::default()
        }
    }

    pub fn select(options: Vec<SelectOption>, value: impl Into<String>) -> Self {
        Self {
            id: generate_id("select"),
            role: Role::Select,
            content: Content::Select {
                options,
                value: value.into(),
            },
            clickable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    // Accessibility
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Queries
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The name assistive technology would announce for this node.
    pub fn accessible_name(&self) -> Option<&str> {
        self.aria_label.as_deref().or_else(|| self.text_content())
    }

    /// Current value of a select node.
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            Content::Select { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Choices of a select node, empty for anything else.
    pub fn options(&self) -> &[SelectOption] {
        match &self.content {
            Content::Select { options, .. } => options,
            _ => &[],
        }
    }

    /// The option matching the current value of a select node.
    pub fn selected_option(&self) -> Option<&SelectOption> {
        let value = self.value()?;
        self.options().iter().find(|option| option.value == value)
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
