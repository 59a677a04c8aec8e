//! Role and state translation onto the AT-SPI2 vocabulary.
//!
//! Both translations are pure tables: identical inputs always produce
//! identical output. The numeric role ids and the two-word state bit
//! offsets below are the only place protocol-version-specific values
//! appear; everything above this module speaks [`AccessRole`] and
//! [`StateSet`].

use crate::node::{AccessNode, AccessRole, StateFlag};

/// AT-SPI2 role ids, as transmitted in GetRole replies and the Role
/// property.
pub(crate) mod role_id {
    pub const CHECK_BOX: u32 = 7;
    pub const COLOR_CHOOSER: u32 = 9;
    pub const COMBO_BOX: u32 = 11;
    pub const DATE_EDITOR: u32 = 12;
    pub const DIALOG: u32 = 16;
    pub const IMAGE: u32 = 27;
    pub const LIST: u32 = 31;
    pub const LIST_ITEM: u32 = 32;
    pub const MENU: u32 = 33;
    pub const MENU_BAR: u32 = 34;
    pub const MENU_ITEM: u32 = 35;
    pub const PAGE_TAB: u32 = 37;
    pub const PAGE_TAB_LIST: u32 = 38;
    pub const PANEL: u32 = 39;
    pub const PROGRESS_BAR: u32 = 42;
    pub const PUSH_BUTTON: u32 = 43;
    pub const RADIO_BUTTON: u32 = 44;
    pub const SCROLL_BAR: u32 = 48;
    pub const SCROLL_PANE: u32 = 49;
    pub const SLIDER: u32 = 51;
    pub const SPLIT_PANE: u32 = 53;
    pub const TABLE: u32 = 55;
    pub const TABLE_CELL: u32 = 56;
    pub const TEXT: u32 = 61;
    pub const TOGGLE_BUTTON: u32 = 62;
    pub const TOOL_BAR: u32 = 63;
    pub const TREE: u32 = 65;
    pub const APPLICATION: u32 = 75;
    pub const ENTRY: u32 = 79;
    pub const HEADING: u32 = 83;
    pub const LINK: u32 = 88;
    pub const TREE_ITEM: u32 = 91;
    pub const STATIC: u32 = 116;
}

/// Bit positions in the low state word.
mod state_lo {
    pub const ACTIVE: u32 = 1;
    pub const BUSY: u32 = 3;
    pub const CHECKED: u32 = 4;
    pub const EDITABLE: u32 = 7;
    pub const ENABLED: u32 = 8;
    pub const EXPANDED: u32 = 10;
    pub const FOCUSABLE: u32 = 11;
    pub const FOCUSED: u32 = 12;
    pub const MODAL: u32 = 16;
    pub const SENSITIVE: u32 = 21;
    pub const SELECTED: u32 = 23;
    pub const SHOWING: u32 = 24;
    pub const VISIBLE: u32 = 29;
}

/// Bit positions in the high state word.
mod state_hi {
    pub const REQUIRED: u32 = 1;
    pub const INVALID_ENTRY: u32 = 4;
    pub const READ_ONLY: u32 = 11;
}

/// Map an internal role onto its AT-SPI2 role id.
///
/// Total: every internal role has a mapping, and roles without a precise
/// counterpart (including [`AccessRole::Unknown`]) land on the generic
/// panel role.
pub fn map_role(role: AccessRole) -> u32 {
    match role {
        AccessRole::Unknown => role_id::PANEL,
        AccessRole::Button => role_id::PUSH_BUTTON,
        AccessRole::CheckBox => role_id::CHECK_BOX,
        AccessRole::ColorWell => role_id::COLOR_CHOOSER,
        AccessRole::ComboBox => role_id::COMBO_BOX,
        AccessRole::DateField => role_id::DATE_EDITOR,
        AccessRole::Dialog => role_id::DIALOG,
        AccessRole::Disclosure => role_id::TOGGLE_BUTTON,
        AccessRole::Grid => role_id::TABLE,
        AccessRole::GridCell => role_id::TABLE_CELL,
        AccessRole::Group => role_id::PANEL,
        AccessRole::Heading => role_id::HEADING,
        AccessRole::Image => role_id::IMAGE,
        AccessRole::Link => role_id::LINK,
        AccessRole::List => role_id::LIST,
        AccessRole::ListItem => role_id::LIST_ITEM,
        AccessRole::Menu => role_id::MENU,
        AccessRole::MenuBar => role_id::MENU_BAR,
        AccessRole::MenuItem => role_id::MENU_ITEM,
        AccessRole::ProgressBar => role_id::PROGRESS_BAR,
        AccessRole::RadioButton => role_id::RADIO_BUTTON,
        AccessRole::RadioGroup => role_id::PANEL,
        AccessRole::ScrollArea => role_id::SCROLL_PANE,
        AccessRole::ScrollBar => role_id::SCROLL_BAR,
        AccessRole::Slider => role_id::SLIDER,
        AccessRole::Splitter => role_id::SPLIT_PANE,
        AccessRole::Label => role_id::STATIC,
        AccessRole::Switch => role_id::TOGGLE_BUTTON,
        AccessRole::TabList => role_id::PAGE_TAB_LIST,
        AccessRole::Tab => role_id::PAGE_TAB,
        AccessRole::TextArea => role_id::TEXT,
        AccessRole::TextInput => role_id::ENTRY,
        AccessRole::ToolBar => role_id::TOOL_BAR,
        AccessRole::Tree => role_id::TREE,
        AccessRole::TreeItem => role_id::TREE_ITEM,
    }
}

/// Spoken name of the mapped AT-SPI2 role, served by GetRoleName.
pub fn role_name(role: AccessRole) -> &'static str {
    match map_role(role) {
        role_id::CHECK_BOX => "check box",
        role_id::COLOR_CHOOSER => "color chooser",
        role_id::COMBO_BOX => "combo box",
        role_id::DATE_EDITOR => "date editor",
        role_id::DIALOG => "dialog",
        role_id::IMAGE => "image",
        role_id::LIST => "list",
        role_id::LIST_ITEM => "list item",
        role_id::MENU => "menu",
        role_id::MENU_BAR => "menu bar",
        role_id::MENU_ITEM => "menu item",
        role_id::PAGE_TAB => "page tab",
        role_id::PAGE_TAB_LIST => "page tab list",
        role_id::PROGRESS_BAR => "progress bar",
        role_id::PUSH_BUTTON => "push button",
        role_id::RADIO_BUTTON => "radio button",
        role_id::SCROLL_BAR => "scroll bar",
        role_id::SCROLL_PANE => "scroll pane",
        role_id::SLIDER => "slider",
        role_id::SPLIT_PANE => "split pane",
        role_id::TABLE => "table",
        role_id::TABLE_CELL => "table cell",
        role_id::TEXT => "text",
        role_id::TOGGLE_BUTTON => "toggle button",
        role_id::TOOL_BAR => "tool bar",
        role_id::TREE => "tree",
        role_id::TREE_ITEM => "tree item",
        role_id::ENTRY => "entry",
        role_id::HEADING => "heading",
        role_id::LINK => "link",
        role_id::STATIC => "static",
        role_id::APPLICATION => "application",
        _ => "panel",
    }
}

/// Build the two-word AT-SPI2 state set for a node.
///
/// Base bits (visible, showing, enabled, sensitive) are always present.
/// Focusable follows `focus_id > 0`, focused follows `is_focused`, the
/// internal flags map 1:1 onto fixed positions, and editable is derived:
/// text-input roles that are not read-only.
pub fn build_state(node: &AccessNode, is_focused: bool) -> [u32; 2] {
    let mut lo = (1 << state_lo::VISIBLE)
        | (1 << state_lo::SHOWING)
        | (1 << state_lo::ENABLED)
        | (1 << state_lo::SENSITIVE);
    let mut hi = 0;

    if node.is_actionable() {
        lo |= 1 << state_lo::FOCUSABLE;
    }
    if is_focused {
        lo |= 1 << state_lo::FOCUSED;
    }

    let state = node.state;
    if state.contains(StateFlag::Expanded) {
        lo |= 1 << state_lo::EXPANDED;
    }
    if state.contains(StateFlag::Selected) {
        lo |= 1 << state_lo::SELECTED;
    }
    if state.contains(StateFlag::Checked) {
        lo |= 1 << state_lo::CHECKED;
    }
    if state.contains(StateFlag::Busy) {
        lo |= 1 << state_lo::BUSY;
    }
    if state.contains(StateFlag::Modal) {
        lo |= 1 << state_lo::MODAL;
    }
    if state.contains(StateFlag::Required) {
        hi |= 1 << state_hi::REQUIRED;
    }
    if state.contains(StateFlag::Invalid) {
        hi |= 1 << state_hi::INVALID_ENTRY;
    }
    if state.contains(StateFlag::ReadOnly) {
        hi |= 1 << state_hi::READ_ONLY;
    }

    let text_role = matches!(node.role, AccessRole::TextArea | AccessRole::TextInput);
    if text_role && !state.contains(StateFlag::ReadOnly) {
        lo |= 1 << state_lo::EDITABLE;
    }

    [lo, hi]
}

/// The fixed state pair of the application root: active, visible, showing,
/// enabled.
pub fn root_state() -> [u32; 2] {
    [
        (1 << state_lo::ACTIVE)
            | (1 << state_lo::VISIBLE)
            | (1 << state_lo::SHOWING)
            | (1 << state_lo::ENABLED),
        0,
    ]
}
