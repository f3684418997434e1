use peopledesk_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{Permission, PermissionTag};

/// Permission gate attached to a route or menu item.
///
/// On the wire a string is a single-permission gate and an array is an
/// ANY-of gate whose non-string entries are never held. Every other JSON
/// shape is kept as `Malformed` and denies. An absent requirement is modeled
/// as `Option::None` by the owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PermissionRequirement {
    /// Exactly one permission is required.
    Single(PermissionTag),
    /// At least one of the listed permissions is required.
    AnyOf(Vec<PermissionTag>),
    /// Unsupported shape received from outside.
    Malformed(Value),
}

impl PermissionRequirement {
    /// Creates a single-permission gate.
    #[must_use]
    pub fn single(permission: Permission) -> Self {
        Self::Single(PermissionTag::Known(permission))
    }

    /// Creates an ANY-of gate.
    #[must_use]
    pub fn any_of(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self::AnyOf(
            permissions
                .into_iter()
                .map(PermissionTag::Known)
                .collect(),
        )
    }
}

impl From<Value> for PermissionRequirement {
    fn from(value: Value) -> Self {
        match value {
            Value::String(tag) => Self::Single(PermissionTag::parse(&tag)),
            Value::Array(entries) => {
                Self::AnyOf(entries.into_iter().map(PermissionTag::from).collect())
            }
            other => Self::Malformed(other),
        }
    }
}

impl<'de> Deserialize<'de> for PermissionRequirement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Entry of a navigation menu section.
///
/// Only the permission gate is interpreted. Label, path, icon and any other
/// field belong to the UI and are carried through untouched, whatever keys
/// it uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    required_permission: Option<PermissionRequirement>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl MenuItem {
    /// Creates a menu item with a validated label and path.
    pub fn new(
        label: impl Into<String>,
        path: impl Into<String>,
        required_permission: Option<PermissionRequirement>,
    ) -> AppResult<Self> {
        let mut extra = Map::new();
        extra.insert("label".to_owned(), validated(label)?);
        extra.insert("path".to_owned(), validated(path)?);

        Ok(Self {
            required_permission,
            extra,
        })
    }

    /// Returns the item with an icon name attached.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        let icon = icon.into();
        let trimmed = icon.trim();
        if trimmed.is_empty() {
            self.extra.remove("icon");
        } else {
            self.extra
                .insert("icon".to_owned(), Value::String(trimmed.to_owned()));
        }
        self
    }

    /// Returns the display label when the UI uses the `label` key.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.extra.get("label").and_then(Value::as_str)
    }

    /// Returns the route path when the UI uses the `path` key.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.extra.get("path").and_then(Value::as_str)
    }

    /// Returns the icon name when present.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.extra.get("icon").and_then(Value::as_str)
    }

    /// Returns the permission gate, if any.
    #[must_use]
    pub fn required_permission(&self) -> Option<&PermissionRequirement> {
        self.required_permission.as_ref()
    }

    /// Returns UI-owned fields that are not interpreted here.
    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// Group of menu items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    #[serde(default)]
    items: Vec<MenuItem>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl MenuSection {
    /// Creates a menu section with a validated title.
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> AppResult<Self> {
        let mut extra = Map::new();
        extra.insert("title".to_owned(), validated(title)?);

        Ok(Self { items, extra })
    }

    /// Returns the section title when the UI uses the `title` key.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(Value::as_str)
    }

    /// Returns items in display order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Returns UI-owned fields that are not interpreted here.
    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Returns a copy of this section holding only the given items.
    #[must_use]
    pub fn with_items(&self, items: Vec<MenuItem>) -> Self {
        Self {
            items,
            extra: self.extra.clone(),
        }
    }
}

fn validated(value: impl Into<String>) -> AppResult<Value> {
    NonEmptyString::new(value).map(|value| Value::String(value.into()))
}
