//! Layout documents - the persisted form of a dock area
//!
//! A document lists one window object per root, the main window first. Each
//! window carries the root container flattened into it. Children are kept as
//! loose JSON values so a malformed entry can be skipped on load without
//! losing the rest of the document.

mod file;
mod load;
mod save;

pub use file::{load_layout, save_layout};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geometry::{Orientation, Rect};
use crate::panel::PanelPayload;

/// Window name of the embedded root
pub const MAIN_WINDOW: &str = "MainWindow";

/// Keys a view object reserves; panel payload fields never override them
pub const RESERVED_VIEW_KEYS: [&str; 3] = ["widgetType", "windowType", "windowId"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    /// One entry per root, main window first
    #[serde(default)]
    pub float_window_children: Vec<Value>,
}

impl LayoutDocument {
    pub fn is_empty(&self) -> bool {
        self.float_window_children.is_empty()
    }
}

/// Kind tag of a document node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WidgetType {
    #[serde(rename = "SPLITTER")]
    Splitter,
    #[serde(rename = "TABWIDGET")]
    TabWidget,
    #[serde(rename = "VIEW")]
    View,
}

impl WidgetType {
    pub fn name(self) -> &'static str {
        match self {
            WidgetType::Splitter => "SPLITTER",
            WidgetType::TabWidget => "TABWIDGET",
            WidgetType::View => "VIEW",
        }
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(WidgetType::Splitter),
            1 => Some(WidgetType::TabWidget),
            2 => Some(WidgetType::View),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "SPLITTER" => Some(WidgetType::Splitter),
            "TABWIDGET" => Some(WidgetType::TabWidget),
            "VIEW" => Some(WidgetType::View),
            _ => None,
        }
    }

    /// Kind tag of a loose document node, if it has a valid one
    pub fn of(node: &Value) -> Option<Self> {
        serde_json::from_value(node.get("widgetType")?.clone()).ok()
    }
}

/// Accepts the names and the legacy integer codes
impl<'de> Deserialize<'de> for WidgetType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(i64),
            Name(String),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Code(code) => WidgetType::from_code(code),
            Raw::Name(name) => WidgetType::from_name(&name),
        };
        parsed.ok_or_else(|| serde::de::Error::custom("unknown widgetType"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryEntry {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl From<Rect> for GeometryEntry {
    fn from(r: Rect) -> Self {
        Self {
            left: r.x,
            top: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

impl From<GeometryEntry> for Rect {
    fn from(g: GeometryEntry) -> Self {
        Rect::new(g.left, g.top, g.width, g.height)
    }
}

/// A root, with the window it is hosted in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowEntry {
    /// Frame rectangle of a floating window; absent for the main window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeometryEntry>,
    #[serde(default)]
    pub window_name: String,
    #[serde(flatten)]
    pub splitter: SplitterEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitterEntry {
    pub widget_type: WidgetType,
    pub orientation: Orientation,
    /// Extent along the parent's axis; 1 for a root
    #[serde(default = "default_size")]
    pub size: i32,
    /// Rectangle of a nested container; roots leave it to their window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeometryEntry>,
    /// `child_<i>_<KIND>` keys
    #[serde(default)]
    pub splitter_children: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabGroupEntry {
    pub widget_type: WidgetType,
    #[serde(default = "default_size")]
    pub size: i32,
    /// -1 when no tab is selected
    #[serde(default)]
    pub current_tab_index: i64,
    /// `Tab_<i>_VIEW` keys
    #[serde(default)]
    pub tab_widget_children: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewEntry {
    pub widget_type: WidgetType,
    /// Decimal panel type
    pub window_type: String,
    /// Pool slot the panel occupied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_id: Option<usize>,
    #[serde(flatten)]
    pub payload: PanelPayload,
}

fn default_size() -> i32 {
    1
}

/// Key of the `index`-th child of a container
pub fn child_key(index: usize, kind: WidgetType) -> String {
    format!("child_{}_{}", index, kind.name())
}

/// Key of the `index`-th view of a tab group
pub fn tab_key(index: usize) -> String {
    format!("Tab_{}_{}", index, WidgetType::View.name())
}

/// Children of a node in positional order.
///
/// The position is the number after the first underscore of the key. Keys
/// without one come last, in key order.
pub fn ordered_children(children: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<(Option<usize>, &String, &Value)> = children
        .iter()
        .map(|(key, value)| (position_of(key), key, value))
        .collect();
    entries.sort_by(|a, b| {
        let pa = a.0.unwrap_or(usize::MAX);
        let pb = b.0.unwrap_or(usize::MAX);
        pa.cmp(&pb).then_with(|| a.1.cmp(b.1))
    });
    entries.into_iter().map(|(_, k, v)| (k, v)).collect()
}

fn position_of(key: &str) -> Option<usize> {
    key.split('_').nth(1)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_widget_type_accepts_legacy_codes() {
        assert_eq!(WidgetType::of(&json!({"widgetType": 1})), Some(WidgetType::TabWidget));
        assert_eq!(
            WidgetType::of(&json!({"widgetType": "SPLITTER"})),
            Some(WidgetType::Splitter)
        );
        assert_eq!(WidgetType::of(&json!({"widgetType": 7})), None);
        assert_eq!(WidgetType::of(&json!({})), None);
    }

    #[test]
    fn test_children_order_is_numeric() {
        let mut map = Map::new();
        for i in [10, 2, 1] {
            map.insert(child_key(i, WidgetType::TabWidget), json!(i));
        }
        let order: Vec<&Value> = ordered_children(&map).into_iter().map(|(_, v)| v).collect();
        assert_eq!(order, vec![&json!(1), &json!(2), &json!(10)]);
    }
}
