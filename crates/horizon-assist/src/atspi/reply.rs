//! Wire shapes and message construction helpers.
//!
//! Everything the responders put on the bus goes through here, so the
//! D-Bus signatures live in one place: object references are `(so)`
//! structs, state sets are two-element `au` arrays, property reads are
//! single variants, and AT-SPI event signals carry
//! `(detail, detail1, detail2, any_data)`.

use serde::{Deserialize, Serialize};
use zbus::message::Message;
use zbus::zvariant::{DynamicType, ObjectPath, OwnedObjectPath, Type, Value};

use super::{path, IFACE_EVENT_OBJECT};
use crate::snapshot::ObjectTarget;

/// An AT-SPI2 object reference: bus name plus object path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Type, Value)]
pub(crate) struct ObjectRef {
    pub name: String,
    pub path: OwnedObjectPath,
}

/// Build the object reference for `target` as served by `bus_name`.
pub(crate) fn object_ref(bus_name: &str, target: ObjectTarget) -> zbus::Result<ObjectRef> {
    let object_path = ObjectPath::try_from(path::encode(target))?;
    Ok(ObjectRef {
        name: bus_name.to_string(),
        path: object_path.into(),
    })
}

/// An object reference pointing at another bus name entirely (used for the
/// root's parent, which is the accessibility registry).
pub(crate) fn foreign_ref(bus_name: &str, object_path: &str) -> zbus::Result<ObjectRef> {
    let object_path = ObjectPath::try_from(object_path)?;
    Ok(ObjectRef {
        name: bus_name.to_string(),
        path: object_path.into(),
    })
}

/// Build a method-return message for `call` carrying `body`.
pub(crate) fn method_return<B>(call: &Message, body: &B) -> zbus::Result<Message>
where
    B: Serialize + DynamicType,
{
    Message::method_reply(call)?.build(body)
}

/// Build the standard unknown-method fault for a declined method call.
pub(crate) fn unknown_method(call: &Message) -> zbus::Result<Message> {
    Message::method_error(call, "org.freedesktop.DBus.Error.UnknownMethod")?
        .build(&("Unknown method",))
}

/// Build an AT-SPI object event signal on `object_path`.
///
/// All object events share the `(detail, detail1, detail2, any_data)`
/// payload; `any_data` is a variant whose contents depend on the event.
pub(crate) fn event_signal(
    object_path: &str,
    member: &str,
    detail: &str,
    detail1: i32,
    detail2: i32,
    any_data: Value<'_>,
) -> zbus::Result<Message> {
    Message::signal(object_path, IFACE_EVENT_OBJECT, member)?
        .build(&(detail, detail1, detail2, any_data))
}
