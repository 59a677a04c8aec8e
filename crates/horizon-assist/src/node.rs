//! The toolkit-facing accessibility vocabulary.
//!
//! The host toolkit describes its widget tree to the adapter as a flat list
//! of [`AccessNode`] records, one per widget, rebuilt every frame. Roles and
//! state flags use the internal vocabulary defined here; the translation to
//! AT-SPI2's numeric vocabulary happens at the protocol boundary in
//! [`crate::atspi`].
//!
//! # Example
//!
//! ```ignore
//! use horizon_assist::{AccessNode, AccessRole, StateFlag, StateSet};
//!
//! let button = AccessNode::new(AccessRole::Button)
//!     .with_label("Save")
//!     .with_bounds(10.0, 10.0, 80.0, 24.0)
//!     .with_focus_id(7);
//!
//! let check = AccessNode::new(AccessRole::CheckBox)
//!     .with_label("Remember me")
//!     .with_state(StateSet::empty().with(StateFlag::Checked))
//!     .with_parent(0)
//!     .with_focus_id(8);
//! ```

/// The accessibility role of a widget.
///
/// This is a simplified set of roles commonly used in GUI toolkits. It maps
/// onto the larger AT-SPI2 role vocabulary in [`crate::atspi::role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AccessRole {
    /// A generic widget with no specific role.
    #[default]
    Unknown,

    /// A push button.
    Button,

    /// A checkbox that can be checked or unchecked.
    CheckBox,

    /// A color swatch / color picker well.
    ColorWell,

    /// A combo box / dropdown.
    ComboBox,

    /// A date entry field.
    DateField,

    /// A dialog box.
    Dialog,

    /// A disclosure triangle / expander toggle.
    Disclosure,

    /// A data grid.
    Grid,

    /// A cell within a grid.
    GridCell,

    /// A group box or logical grouping of widgets.
    Group,

    /// A heading. See [`AccessNode::heading_level`].
    Heading,

    /// An image.
    Image,

    /// A hyperlink.
    Link,

    /// A list of items.
    List,

    /// An item within a list.
    ListItem,

    /// A menu (popup or submenu).
    Menu,

    /// A menu bar.
    MenuBar,

    /// A menu item.
    MenuItem,

    /// A progress indicator.
    ProgressBar,

    /// A radio button (mutually exclusive selection).
    RadioButton,

    /// A container grouping radio buttons.
    RadioGroup,

    /// A scrollable area.
    ScrollArea,

    /// A scroll bar.
    ScrollBar,

    /// A slider for selecting a value from a range.
    Slider,

    /// A splitter/divider between panes.
    Splitter,

    /// A static text label.
    Label,

    /// An on/off switch toggle.
    Switch,

    /// A tab list container.
    TabList,

    /// A single tab.
    Tab,

    /// A multi-line text editing area.
    TextArea,

    /// A single-line text input field.
    TextInput,

    /// A toolbar.
    ToolBar,

    /// A tree view.
    Tree,

    /// An item within a tree.
    TreeItem,
}

impl AccessRole {
    /// Construct a role from the raw ordinal the toolkit core emits.
    ///
    /// Unknown ordinals map to [`AccessRole::Unknown`], which the protocol
    /// boundary renders as a generic panel. This function is total.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Unknown,
            1 => Self::Button,
            2 => Self::CheckBox,
            3 => Self::ColorWell,
            4 => Self::ComboBox,
            5 => Self::DateField,
            6 => Self::Dialog,
            7 => Self::Disclosure,
            8 => Self::Grid,
            9 => Self::GridCell,
            10 => Self::Group,
            11 => Self::Heading,
            12 => Self::Image,
            13 => Self::Link,
            14 => Self::List,
            15 => Self::ListItem,
            16 => Self::Menu,
            17 => Self::MenuBar,
            18 => Self::MenuItem,
            19 => Self::ProgressBar,
            20 => Self::RadioButton,
            21 => Self::RadioGroup,
            22 => Self::ScrollArea,
            23 => Self::ScrollBar,
            24 => Self::Slider,
            25 => Self::Splitter,
            26 => Self::Label,
            27 => Self::Switch,
            28 => Self::TabList,
            29 => Self::Tab,
            30 => Self::TextArea,
            31 => Self::TextInput,
            32 => Self::ToolBar,
            33 => Self::Tree,
            34 => Self::TreeItem,
            _ => Self::Unknown,
        }
    }
}

/// A single boolean state a widget can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateFlag {
    /// The widget is expanded (trees, disclosures, combo boxes).
    Expanded,
    /// The widget is selected within its container.
    Selected,
    /// The widget is checked (checkboxes, radio buttons, switches).
    Checked,
    /// Input is required before submission.
    Required,
    /// The current value fails validation.
    Invalid,
    /// The widget is busy with a long-running operation.
    Busy,
    /// The widget's value cannot be edited.
    ReadOnly,
    /// The widget is modal and blocks interaction elsewhere.
    Modal,
}

/// A set of [`StateFlag`]s.
///
/// The set abstraction keeps protocol bit positions out of the toolkit
/// vocabulary; the AT-SPI2 encoding lives entirely in
/// [`crate::atspi::role::build_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StateSet(u16);

impl StateSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Whether the set contains `flag`.
    pub const fn contains(self, flag: StateFlag) -> bool {
        self.0 & (1 << flag as u16) != 0
    }

    /// Return a copy of the set with `flag` added.
    pub const fn with(self, flag: StateFlag) -> Self {
        Self(self.0 | (1 << flag as u16))
    }

    /// Add `flag` to the set.
    pub fn insert(&mut self, flag: StateFlag) {
        self.0 |= 1 << flag as u16;
    }

    /// Remove `flag` from the set.
    pub fn remove(&mut self, flag: StateFlag) {
        self.0 &= !(1 << flag as u16);
    }

    /// Whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<StateFlag> for StateSet {
    fn from(flag: StateFlag) -> Self {
        Self::empty().with(flag)
    }
}

impl FromIterator<StateFlag> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateFlag>>(iter: I) -> Self {
        let mut set = Self::empty();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

/// One widget record in the per-frame accessibility snapshot.
///
/// The host rebuilds the snapshot every update cycle and hands it to
/// [`crate::AtspiAdapter::sync`]. Node indices are only meaningful within
/// one snapshot; holding an index across a sync is invalid.
#[derive(Debug, Clone, Default)]
pub struct AccessNode {
    /// Index of the parent record, or `None` when the parent is the
    /// application root (the root itself is never a record).
    pub parent: Option<usize>,

    /// The widget's role.
    pub role: AccessRole,

    /// Boolean state flags.
    pub state: StateSet,

    /// Window-local x coordinate.
    pub x: f32,
    /// Window-local y coordinate.
    pub y: f32,
    /// Width in window-local units.
    pub width: f32,
    /// Height in window-local units.
    pub height: f32,

    /// Accessible name (what a screen reader speaks first).
    pub label: Option<String>,

    /// Longer accessible description.
    pub description: Option<String>,

    /// Textual rendering of the current value, if any.
    pub value_text: Option<String>,

    /// Current numeric value for range-valued controls.
    pub value: f64,
    /// Minimum of the value range.
    pub value_min: f64,
    /// Maximum of the value range.
    pub value_max: f64,

    /// Positive id routed back through the action sink when an assistive
    /// technology invokes this control; 0 means "not actionable".
    pub focus_id: u32,

    /// Heading level, relevant only to [`AccessRole::Heading`] nodes.
    ///
    /// Accepted into the data model for forward compatibility; no responder
    /// currently surfaces it.
    pub heading_level: u32,
}

impl AccessNode {
    /// Create a node with the given role and all other fields defaulted.
    pub fn new(role: AccessRole) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    /// Set the parent record index.
    pub fn with_parent(mut self, parent: usize) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the accessible name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the accessible description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the window-local bounds.
    pub fn with_bounds(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Set the state flag set.
    pub fn with_state(mut self, state: StateSet) -> Self {
        self.state = state;
        self
    }

    /// Set the numeric value triple for range-valued controls.
    pub fn with_range(mut self, value: f64, min: f64, max: f64) -> Self {
        self.value = value;
        self.value_min = min;
        self.value_max = max;
        self
    }

    /// Set the action-routing id. Positive ids mark the node actionable.
    pub fn with_focus_id(mut self, focus_id: u32) -> Self {
        self.focus_id = focus_id;
        self
    }

    /// Whether an assistive technology can invoke actions on this node.
    pub fn is_actionable(&self) -> bool {
        self.focus_id > 0
    }
}

/// Action codes delivered to the host's [`ActionSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Activate the control (click, toggle, follow).
    Press,
    /// Step a range-valued control up.
    Increment,
    /// Step a range-valued control down.
    Decrement,
}

/// Capability the host supplies to receive action invocations.
///
/// The adapter calls [`ActionSink::invoke`] synchronously while draining
/// inbound requests during [`crate::AtspiAdapter::sync`]; the sink runs on
/// the calling thread and must not block, since it stalls the host's
/// update cycle.
///
/// Closures work directly:
///
/// ```ignore
/// let adapter = AtspiAdapter::new(identity, Box::new(|action, focus_id| {
///     events.push((action, focus_id));
/// }));
/// ```
pub trait ActionSink {
    /// Deliver one action invocation for the control identified by
    /// `focus_id`.
    fn invoke(&mut self, action: ActionKind, focus_id: u32);
}

impl<F: FnMut(ActionKind, u32)> ActionSink for F {
    fn invoke(&mut self, action: ActionKind, focus_id: u32) {
        self(action, focus_id);
    }
}

/// Identity strings served for the application root object.
#[derive(Debug, Clone)]
pub struct ApplicationIdentity {
    /// Human-readable application name (the root's accessible name).
    pub name: String,
    /// Toolkit name reported through the Application interface.
    pub toolkit: String,
    /// Toolkit version reported through the Application interface.
    pub version: String,
}

impl ApplicationIdentity {
    /// Identity with the given application name and default toolkit fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for ApplicationIdentity {
    fn default() -> Self {
        Self {
            name: "Horizon Application".to_string(),
            toolkit: "horizon-assist".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_set_operations() {
        let mut set = StateSet::empty();
        assert!(set.is_empty());

        set.insert(StateFlag::Checked);
        set.insert(StateFlag::Busy);
        assert!(set.contains(StateFlag::Checked));
        assert!(set.contains(StateFlag::Busy));
        assert!(!set.contains(StateFlag::Modal));

        set.remove(StateFlag::Checked);
        assert!(!set.contains(StateFlag::Checked));
        assert!(set.contains(StateFlag::Busy));
    }

    #[test]
    fn test_state_set_with_is_pure() {
        let base = StateSet::empty().with(StateFlag::Selected);
        let extended = base.with(StateFlag::Expanded);
        assert!(base.contains(StateFlag::Selected));
        assert!(!base.contains(StateFlag::Expanded));
        assert!(extended.contains(StateFlag::Expanded));
    }

    #[test]
    fn test_role_from_raw_round_trip() {
        assert_eq!(AccessRole::from_raw(1), AccessRole::Button);
        assert_eq!(AccessRole::from_raw(24), AccessRole::Slider);
        assert_eq!(AccessRole::from_raw(34), AccessRole::TreeItem);
    }

    #[test]
    fn test_role_from_raw_unknown_falls_back() {
        assert_eq!(AccessRole::from_raw(35), AccessRole::Unknown);
        assert_eq!(AccessRole::from_raw(u32::MAX), AccessRole::Unknown);
    }

    #[test]
    fn test_node_builder_methods() {
        let node = AccessNode::new(AccessRole::Slider)
            .with_label("Volume")
            .with_bounds(4.0, 8.0, 120.0, 16.0)
            .with_range(30.0, 0.0, 100.0)
            .with_focus_id(5);

        assert_eq!(node.role, AccessRole::Slider);
        assert_eq!(node.label.as_deref(), Some("Volume"));
        assert_eq!(node.width, 120.0);
        assert_eq!(node.value_max, 100.0);
        assert!(node.is_actionable());
        assert!(AccessNode::new(AccessRole::Label).parent.is_none());
    }
}
