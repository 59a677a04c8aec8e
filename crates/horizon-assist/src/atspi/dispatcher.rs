//! Inbound request classification and routing.
//!
//! The dispatcher is the single entry point for every message drained from
//! the bus. It has exactly two outcomes per message: declined
//! ([`Disposition::NotHandled`] — not addressed to one of our objects, or
//! an unsupported member) and handled (a reply message to send). Path
//! resolution happens once, here; responders receive the already-resolved
//! [`ObjectTarget`].
//!
//! Messages declaring the generic property-access interface route straight
//! to the property sub-handlers and their verdict is final. The four
//! domain interfaces are each tried only when the message declares that
//! interface or declares none at all, in a fixed order; the first responder
//! that claims the member terminates dispatch. No two responders claim the
//! same member for the same interface.

use zbus::message::{Message, Type as MessageType};

use super::responder::{self, Disposition, ResponderContext};
use super::{path, IFACE_ACCESSIBLE, IFACE_ACTION, IFACE_COMPONENT, IFACE_PROPERTIES, IFACE_VALUE};
use crate::node::ActionSink;

/// Route one inbound message. Declines everything that is not a method
/// call addressed to a recognized object path.
pub(crate) fn dispatch(
    ctx: &ResponderContext<'_>,
    sink: &mut dyn ActionSink,
    msg: &Message,
) -> zbus::Result<Disposition> {
    if msg.message_type() != MessageType::MethodCall {
        return Ok(Disposition::NotHandled);
    }

    let header = msg.header();
    let Some(msg_path) = header.path() else {
        return Ok(Disposition::NotHandled);
    };
    let Some(member) = header.member() else {
        return Ok(Disposition::NotHandled);
    };
    let Some(target) = path::decode(msg_path.as_str(), ctx.snapshot.len()) else {
        return Ok(Disposition::NotHandled);
    };
    let member = member.as_str();
    let iface = header.interface().map(|iface| iface.as_str());

    if iface == Some(IFACE_PROPERTIES) {
        return match member {
            "Get" => responder::properties_get(ctx, target, msg),
            "GetAll" => responder::properties_get_all(msg),
            _ => Ok(Disposition::NotHandled),
        };
    }

    if iface.is_none() || iface == Some(IFACE_ACCESSIBLE) {
        if let handled @ Disposition::Handled(_) = responder::accessible(ctx, target, member, msg)?
        {
            return Ok(handled);
        }
    }
    if iface.is_none() || iface == Some(IFACE_COMPONENT) {
        if let handled @ Disposition::Handled(_) = responder::component(ctx, target, member, msg)? {
            return Ok(handled);
        }
    }
    if iface.is_none() || iface == Some(IFACE_ACTION) {
        if let handled @ Disposition::Handled(_) =
            responder::action(ctx, target, member, msg, sink)?
        {
            return Ok(handled);
        }
    }
    if iface.is_none() || iface == Some(IFACE_VALUE) {
        if let handled @ Disposition::Handled(_) = responder::value(ctx, target, member, msg)? {
            return Ok(handled);
        }
    }

    Ok(Disposition::NotHandled)
}
