//! Payload types shared with the HTTP layer.

use serde::{Deserialize, Serialize};

/// What a button does when clicked in the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    /// Navigate to another menu.
    Category,
    /// Send the value as a question.
    Query,
    /// Switch the widget to free-text input.
    ModeSwitch,
}

/// A button shown under a reply.
///
/// # Example
/// ```
/// use assistant::{ButtonKind, MenuNode};
/// let back = MenuNode::new("⬅ Back", "init", ButtonKind::Category);
/// assert_eq!(back.value, "init");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub label: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: ButtonKind,
}

impl MenuNode {
    pub fn new(label: impl Into<String>, value: impl Into<String>, kind: ButtonKind) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind,
        }
    }
}

/// Reply to a chat message: optional text plus the next set of buttons.
///
/// The top-level menu has no text, so `text` is omitted from JSON when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub buttons: Vec<MenuNode>,
}

impl ChatResponse {
    pub fn buttons_only(buttons: Vec<MenuNode>) -> Self {
        Self {
            text: None,
            buttons,
        }
    }

    pub fn with_text(text: impl Into<String>, buttons: Vec<MenuNode>) -> Self {
        Self {
            text: Some(text.into()),
            buttons,
        }
    }
}
