//! UI Automation control type ids and their display names.

const FIRST_CONTROL_TYPE_ID: i32 = 50000;

const CONTROL_TYPE_NAMES: [&str; 41] = [
    "Button",
    "Calendar",
    "CheckBox",
    "ComboBox",
    "Edit",
    "Hyperlink",
    "Image",
    "ListItem",
    "List",
    "Menu",
    "MenuBar",
    "MenuItem",
    "ProgressBar",
    "RadioButton",
    "ScrollBar",
    "Slider",
    "Spinner",
    "StatusBar",
    "Tab",
    "TabItem",
    "Text",
    "ToolBar",
    "ToolTip",
    "Tree",
    "TreeItem",
    "Custom",
    "Group",
    "Thumb",
    "DataGrid",
    "DataItem",
    "Document",
    "SplitButton",
    "Window",
    "Pane",
    "Header",
    "HeaderItem",
    "Table",
    "TitleBar",
    "Separator",
    "SemanticZoom",
    "AppBar",
];

/// Resolve a numeric UIA control type id to its display name
pub fn name_for(id: i32) -> Option<&'static str> {
    let offset = id.checked_sub(FIRST_CONTROL_TYPE_ID)?;
    usize::try_from(offset)
        .ok()
        .and_then(|i| CONTROL_TYPE_NAMES.get(i))
        .copied()
}
