//! The toolkit-facing adapter.
//!
//! [`AtspiAdapter`] is the only object the host toolkit talks to: construct
//! it once at startup, call [`AtspiAdapter::sync`] every update cycle with
//! a fresh snapshot, and drop it (or call [`AtspiAdapter::shutdown`]) on
//! the way out. Construction never fails — when the accessibility bus is
//! unreachable the adapter is simply inert and every call becomes a
//! cheap no-op, because accessibility must never crash or block the
//! application.
//!
//! # Example
//!
//! ```ignore
//! use horizon_assist::{AtspiAdapter, ApplicationIdentity};
//!
//! let mut adapter = AtspiAdapter::new(
//!     ApplicationIdentity::new("My Editor"),
//!     Box::new(|action, focus_id| {
//!         // Route the action into the widget identified by focus_id.
//!     }),
//! );
//!
//! // Every frame/update:
//! adapter.sync(build_access_nodes(), focused_index);
//! ```
//!
//! # Platform Notes
//!
//! - **Linux**: full AT-SPI2 support over the accessibility bus.
//! - **Other platforms**: all entry points exist and trivially succeed;
//!   accessibility there is provided by different bridges.
//!
//! # Threading
//!
//! The adapter is single-threaded by design: create it and call every
//! method from the same thread (normally the UI thread). Action sinks run
//! synchronously inside `sync`.

use crate::node::{AccessNode, ActionSink, ApplicationIdentity};

#[cfg(target_os = "linux")]
use tracing::{debug, warn};

#[cfg(target_os = "linux")]
use crate::session::Session;
#[cfg(target_os = "linux")]
use crate::snapshot::TreeSnapshot;

#[cfg(target_os = "linux")]
const LOG_TARGET: &str = "horizon_assist::adapter";

/// Exposes the host's widget tree to screen readers.
///
/// See the [module documentation](self) for the lifecycle.
pub struct AtspiAdapter {
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    sink: Box<dyn ActionSink>,
    #[cfg(target_os = "linux")]
    session: Option<Session>,
}

impl AtspiAdapter {
    /// Connect to the accessibility bus and register the application.
    ///
    /// Never fails: when any part of session establishment does not work
    /// out (no session bus, no accessibility broker, empty bus address),
    /// the adapter comes up inert and stays that way.
    pub fn new(identity: ApplicationIdentity, sink: Box<dyn ActionSink>) -> Self {
        #[cfg(target_os = "linux")]
        {
            let session = match Session::open(identity) {
                Ok(session) => Some(session),
                Err(error) => {
                    warn!(target: LOG_TARGET, "accessibility unavailable: {error}");
                    None
                }
            };
            Self { sink, session }
        }

        #[cfg(not(target_os = "linux"))]
        {
            let _ = identity;
            Self { sink }
        }
    }

    /// Whether a live accessibility session exists.
    pub fn is_active(&self) -> bool {
        #[cfg(target_os = "linux")]
        {
            self.session.is_some()
        }
        #[cfg(not(target_os = "linux"))]
        {
            false
        }
    }

    /// Publish a fresh snapshot of the widget tree.
    ///
    /// Drains and answers queued screen-reader requests (invoking the
    /// action sink for any action requests among them), replaces the
    /// stored snapshot, and emits tree-changed and focus-changed signals.
    /// `focused` is the index of the focused record, if any. Without a
    /// live session this is a silent no-op.
    pub fn sync(&mut self, nodes: Vec<AccessNode>, focused: Option<usize>) {
        #[cfg(target_os = "linux")]
        {
            let alive = match &mut self.session {
                Some(session) => session.sync(TreeSnapshot::new(nodes), focused, &mut *self.sink),
                None => return,
            };
            if !alive {
                warn!(target: LOG_TARGET, "accessibility bus lost; adapter going inert");
                self.session = None;
            }
        }

        #[cfg(not(target_os = "linux"))]
        {
            let _ = (nodes, focused);
        }
    }

    /// Push a transient message for screen readers to speak.
    ///
    /// Best effort: empty text, an inert adapter, and protocol consumers
    /// too old to know the announcement signal all make this a no-op.
    pub fn announce(&self, text: &str) {
        #[cfg(target_os = "linux")]
        if let Some(session) = &self.session {
            session.announce(text);
        }

        #[cfg(not(target_os = "linux"))]
        {
            let _ = text;
        }
    }

    /// Deregister from the accessibility registry and drop the bus
    /// connection.
    ///
    /// Unconditionally safe: works whether or not the session ever came
    /// up, and repeated calls are no-ops. Dropping the adapter does this
    /// implicitly.
    pub fn shutdown(&mut self) {
        #[cfg(target_os = "linux")]
        if let Some(mut session) = self.session.take() {
            session.close();
            debug!(target: LOG_TARGET, "adapter shut down");
        }
    }
}

impl Drop for AtspiAdapter {
    fn drop(&mut self) {
        self.shutdown();
    }
}
