//! AT-SPI2 protocol boundary.
//!
//! Everything specific to the wire vocabulary lives under this module: the
//! role/state translation tables ([`role`]), the object-path codec
//! ([`path`]), and — on Linux, where the bus exists — the reply builders,
//! per-interface responders, and the dispatch filter. The rest of the crate
//! speaks only the internal vocabulary from [`crate::node`].

pub mod path;
pub mod role;

#[cfg(target_os = "linux")]
pub(crate) mod dispatcher;
#[cfg(target_os = "linux")]
pub(crate) mod reply;
#[cfg(target_os = "linux")]
pub(crate) mod responder;

/// Well-known name of the accessibility bus broker on the session bus.
pub const BUS_BROKER_NAME: &str = "org.a11y.Bus";
/// Object path of the accessibility bus broker.
pub const BUS_BROKER_PATH: &str = "/org/a11y/bus";
/// Interface of the accessibility bus broker.
pub const BUS_BROKER_IFACE: &str = "org.a11y.Bus";

/// Well-known name of the central accessibility registry.
pub const REGISTRY_NAME: &str = "org.a11y.atspi.Registry";
/// Object path of the central accessibility registry.
pub const REGISTRY_PATH: &str = "/org/a11y/atspi/registry";
/// Interface of the central accessibility registry.
pub const REGISTRY_IFACE: &str = "org.a11y.atspi.Registry";

/// Tree navigation and identity queries.
pub const IFACE_ACCESSIBLE: &str = "org.a11y.atspi.Accessible";
/// Root-only application identity queries.
pub const IFACE_APPLICATION: &str = "org.a11y.atspi.Application";
/// 2D geometry queries.
pub const IFACE_COMPONENT: &str = "org.a11y.atspi.Component";
/// Action enumeration and invocation.
pub const IFACE_ACTION: &str = "org.a11y.atspi.Action";
/// Numeric range value accessors.
pub const IFACE_VALUE: &str = "org.a11y.atspi.Value";
/// Generic D-Bus property access.
pub const IFACE_PROPERTIES: &str = "org.freedesktop.DBus.Properties";
/// Interface carrying object event signals.
pub const IFACE_EVENT_OBJECT: &str = "org.a11y.atspi.Event.Object";

/// Object path of the application root.
pub const ROOT_PATH: &str = "/org/a11y/atspi/accessible/root";
/// Prefix under which node records are addressed (`<prefix><index>`).
pub const NODE_PATH_PREFIX: &str = "/org/a11y/atspi/accessible/";

/// Interfaces every node object implements, in the order they are listed
/// to clients. The root additionally implements [`IFACE_APPLICATION`].
pub const NODE_INTERFACES: [&str; 4] = [
    IFACE_ACCESSIBLE,
    IFACE_COMPONENT,
    IFACE_ACTION,
    IFACE_VALUE,
];
