//! Accessibility bus session: discovery, registration, and the per-frame
//! sync/notify loop.
//!
//! Session establishment is the one place the adapter blocks, and each
//! round-trip is bounded: ask the session-bus broker for the accessibility
//! bus address, connect there, then fire-and-forget a registration with
//! the central registry. Everything afterwards is poll-driven — [`Session::sync`]
//! drains whatever the transport has already buffered, answers it against
//! the previous frame's snapshot, swaps in the new snapshot, and emits the
//! coarse change signals. Outbound messages are flushed as they are sent,
//! so nothing is left queued when sync returns.
//!
//! Once the bus connection dies there is no reconnection: the session
//! reports itself lost and the owning adapter goes inert for the rest of
//! its life.

use std::time::Duration;

use futures_util::{FutureExt, StreamExt};
use tracing::{debug, warn};
use zbus::message::{Message, Type as MessageType};
use zbus::zvariant::Value;
use zbus::{Connection, MessageStream};

use crate::atspi::responder::{Disposition, ResponderContext};
use crate::atspi::{
    dispatcher, path, reply, BUS_BROKER_IFACE, BUS_BROKER_NAME, BUS_BROKER_PATH, REGISTRY_IFACE,
    REGISTRY_NAME, REGISTRY_PATH, ROOT_PATH,
};
use crate::error::{AdapterError, AdapterResult};
use crate::node::{ActionSink, ApplicationIdentity};
use crate::snapshot::{ObjectTarget, TreeSnapshot};
use crate::wait;

const LOG_TARGET: &str = "horizon_assist::session";

/// Bound on each blocking round-trip during session establishment.
const BROKER_TIMEOUT: Duration = Duration::from_secs(1);

/// Edge-triggered focus signalling: remembers the last focus id that was
/// broadcast and reports when a newly observed one differs.
#[derive(Debug, Default)]
pub(crate) struct FocusTracker {
    last: Option<u32>,
}

impl FocusTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record the focus id resolved from the current sync. Returns `true`
    /// when a focus-changed signal must be emitted for it.
    pub(crate) fn observe(&mut self, current: Option<u32>) -> bool {
        if current == self.last {
            return false;
        }
        self.last = current;
        current.is_some()
    }
}

/// A live connection to the accessibility bus plus the state the
/// responders answer from.
pub(crate) struct Session {
    conn: Connection,
    stream: MessageStream,
    bus_name: String,
    identity: ApplicationIdentity,
    snapshot: TreeSnapshot,
    focused: Option<usize>,
    focus: FocusTracker,
}

impl Session {
    /// Establish the session: broker lookup, bus connection, registry
    /// registration. Any failure leaves no session behind.
    pub(crate) fn open(identity: ApplicationIdentity) -> AdapterResult<Self> {
        let session_bus = wait::block_on_deadline(Connection::session(), BROKER_TIMEOUT)
            .ok_or(AdapterError::BrokerTimeout)?
            .map_err(|error| AdapterError::SessionBus(error.to_string()))?;

        let address_reply = wait::block_on_deadline(
            session_bus.call_method(
                Some(BUS_BROKER_NAME),
                BUS_BROKER_PATH,
                Some(BUS_BROKER_IFACE),
                "GetAddress",
                &(),
            ),
            BROKER_TIMEOUT,
        )
        .ok_or(AdapterError::BrokerTimeout)??;
        let address: String = address_reply.body().deserialize()?;
        if address.is_empty() {
            return Err(AdapterError::EmptyAddress);
        }

        let conn = wait::block_on_deadline(
            async {
                zbus::connection::Builder::address(address.as_str())?
                    .build()
                    .await
            },
            BROKER_TIMEOUT,
        )
        .ok_or(AdapterError::BrokerTimeout)??;

        let bus_name = conn
            .unique_name()
            .map(|name| name.as_str().to_owned())
            .unwrap_or_default();

        // Attach the inbound stream before we become discoverable so no
        // request can slip past between registration and the first sync.
        let stream = MessageStream::from(&conn);

        let session = Self {
            conn,
            stream,
            bus_name,
            identity,
            snapshot: TreeSnapshot::empty(),
            focused: None,
            focus: FocusTracker::new(),
        };

        // Best effort: the tree stays queryable even if the registry
        // never learns about us.
        if let Err(error) = session.registry_call("RegisterApplication") {
            warn!(target: LOG_TARGET, "registry registration failed: {error}");
        }
        debug!(
            target: LOG_TARGET,
            "accessibility session established as {}", session.bus_name
        );
        Ok(session)
    }

    /// One host update cycle. Returns `false` when the bus connection is
    /// gone and the session must be discarded.
    pub(crate) fn sync(
        &mut self,
        snapshot: TreeSnapshot,
        focused: Option<usize>,
        sink: &mut dyn ActionSink,
    ) -> bool {
        // Queries drained here are answered against the previous frame's
        // snapshot; the replacement happens after the drain.
        if !self.drain(sink) {
            return false;
        }
        self.snapshot = snapshot;
        self.focused = focused;

        // Coarse invalidation: any update hints a full-subtree change on
        // the root rather than a precise diff.
        self.emit_children_changed();

        let focus_id = focused
            .and_then(|idx| self.snapshot.node(idx))
            .map(|node| node.focus_id);
        if self.focus.observe(focus_id)
            && let Some(idx) = focused
        {
            self.emit_focus_changed(idx);
        }
        true
    }

    /// Push a transient spoken message. Older protocol consumers silently
    /// ignore the signal.
    pub(crate) fn announce(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        match reply::event_signal(ROOT_PATH, "Announcement", "", 0, 0, Value::from(text)) {
            Ok(signal) => self.send(&signal),
            Err(error) => {
                warn!(target: LOG_TARGET, "failed to build announcement: {error}");
            }
        }
    }

    /// Deregister and let the dropped connection close the socket.
    pub(crate) fn close(&mut self) {
        if let Err(error) = self.registry_call("DeregisterApplication") {
            debug!(target: LOG_TARGET, "registry deregistration failed: {error}");
        }
        debug!(target: LOG_TARGET, "accessibility session closed");
    }

    /// Drain every fully received inbound message without blocking.
    fn drain(&mut self, sink: &mut dyn ActionSink) -> bool {
        loop {
            match self.stream.next().now_or_never() {
                // Nothing more buffered; never block the frame.
                None => return true,
                Some(Some(Ok(msg))) => self.handle_message(&msg, sink),
                Some(Some(Err(error))) => {
                    warn!(target: LOG_TARGET, "accessibility bus read failed: {error}");
                    return false;
                }
                Some(None) => {
                    warn!(target: LOG_TARGET, "accessibility bus connection closed");
                    return false;
                }
            }
        }
    }

    fn handle_message(&self, msg: &Message, sink: &mut dyn ActionSink) {
        let ctx = ResponderContext {
            snapshot: &self.snapshot,
            focused: self.focused,
            bus_name: &self.bus_name,
            identity: &self.identity,
        };
        match dispatcher::dispatch(&ctx, sink, msg) {
            Ok(Disposition::Handled(response)) => self.send(&response),
            Ok(Disposition::NotHandled) => {
                // Declined method calls get the fault the reference bus
                // synthesizes for unanswered calls.
                if msg.message_type() == MessageType::MethodCall {
                    match reply::unknown_method(msg) {
                        Ok(fault) => self.send(&fault),
                        Err(error) => {
                            warn!(target: LOG_TARGET, "failed to build fault reply: {error}");
                        }
                    }
                }
            }
            // Degrade by skipping this reply rather than risking the
            // framing of everything behind it.
            Err(error) => warn!(target: LOG_TARGET, "dropping reply: {error}"),
        }
    }

    fn emit_children_changed(&self) {
        let root_ref = match reply::object_ref(&self.bus_name, ObjectTarget::Root) {
            Ok(root_ref) => root_ref,
            Err(error) => {
                warn!(target: LOG_TARGET, "failed to build root reference: {error}");
                return;
            }
        };
        match reply::event_signal(
            ROOT_PATH,
            "ChildrenChanged",
            "add",
            0,
            self.snapshot.len() as i32,
            Value::from(root_ref),
        ) {
            Ok(signal) => self.send(&signal),
            Err(error) => {
                warn!(target: LOG_TARGET, "failed to build children-changed signal: {error}");
            }
        }
    }

    fn emit_focus_changed(&self, idx: usize) {
        let object_path = path::encode(ObjectTarget::Node(idx));
        match reply::event_signal(&object_path, "StateChanged", "focused", 1, 0, Value::from("")) {
            Ok(signal) => self.send(&signal),
            Err(error) => {
                warn!(target: LOG_TARGET, "failed to build focus signal: {error}");
            }
        }
    }

    /// Fire-and-forget call to the central registry; the reply, if any,
    /// is ignored when drained.
    fn registry_call(&self, member: &str) -> zbus::Result<()> {
        let root = reply::object_ref(&self.bus_name, ObjectTarget::Root)?;
        let msg = Message::method(REGISTRY_PATH, member)?
            .destination(REGISTRY_NAME)?
            .interface(REGISTRY_IFACE)?
            .build(&(root,))?;
        pollster::block_on(self.conn.send(&msg))
    }

    /// Sends complete synchronously; the transport flushes per send.
    fn send(&self, msg: &Message) {
        if let Err(error) = pollster::block_on(self.conn.send(msg)) {
            warn!(target: LOG_TARGET, "accessibility bus send failed: {error}");
        }
    }
}
