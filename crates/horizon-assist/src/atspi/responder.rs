//! Per-interface request handlers.
//!
//! Each handler resolves one member of one AT-SPI2 interface against the
//! current snapshot and builds a single reply message. Handlers never
//! mutate process state and never suspend, with one deliberate exception:
//! `DoAction` invokes the host's [`ActionSink`] synchronously before the
//! success reply is built. Root-addressed queries synthesize fixed
//! application semantics, since the root has no snapshot record.

use std::collections::HashMap;

use serde::Serialize;
use zbus::message::Message;
use zbus::zvariant::{DynamicType, Value};

use super::reply::{self, ObjectRef};
use super::role::{self, role_id};
use super::{
    BUS_BROKER_NAME, IFACE_ACCESSIBLE, IFACE_APPLICATION, IFACE_VALUE, NODE_INTERFACES,
    REGISTRY_PATH,
};
use crate::node::{AccessNode, AccessRole, ActionKind, ActionSink, ApplicationIdentity};
use crate::snapshot::{ObjectTarget, TreeSnapshot};

/// Component stacking layer reported for every widget.
const LAYER_WIDGET: u32 = 3;

/// Outcome of offering a message to a handler.
#[derive(Debug)]
pub(crate) enum Disposition {
    /// Not our message; other handlers (or the bus fault path) decide.
    NotHandled,
    /// Handled; the contained reply must be sent.
    Handled(Message),
}

/// Read-only view of the session state the responders answer from.
pub(crate) struct ResponderContext<'a> {
    pub snapshot: &'a TreeSnapshot,
    pub focused: Option<usize>,
    pub bus_name: &'a str,
    pub identity: &'a ApplicationIdentity,
}

impl ResponderContext<'_> {
    fn state_words(&self, target: ObjectTarget) -> [u32; 2] {
        match target.index().and_then(|idx| Some((idx, self.snapshot.node(idx)?))) {
            Some((idx, node)) => role::build_state(node, Some(idx) == self.focused),
            None => role::root_state(),
        }
    }

    fn role_id(&self, target: ObjectTarget) -> u32 {
        match self.snapshot.resolve(target) {
            Some(node) => role::map_role(node.role),
            None => role_id::APPLICATION,
        }
    }

    fn role_name(&self, target: ObjectTarget) -> &'static str {
        match self.snapshot.resolve(target) {
            Some(node) => role::role_name(node.role),
            None => "application",
        }
    }

    fn interfaces(&self, target: ObjectTarget) -> Vec<&'static str> {
        let mut interfaces = NODE_INTERFACES.to_vec();
        if matches!(target, ObjectTarget::Root) {
            interfaces.push(IFACE_APPLICATION);
        }
        interfaces
    }
}

fn handled<B>(call: &Message, body: &B) -> zbus::Result<Disposition>
where
    B: Serialize + DynamicType,
{
    Ok(Disposition::Handled(reply::method_return(call, body)?))
}

// -------------------------------------------------------------------------
// org.a11y.atspi.Accessible
// -------------------------------------------------------------------------

pub(crate) fn accessible(
    ctx: &ResponderContext<'_>,
    target: ObjectTarget,
    member: &str,
    call: &Message,
) -> zbus::Result<Disposition> {
    match member {
        "GetChildAtIndex" => {
            let Ok(requested) = call.body().deserialize::<i32>() else {
                return Ok(Disposition::NotHandled);
            };
            let child = usize::try_from(requested)
                .ok()
                .and_then(|n| ctx.snapshot.nth_child(target, n));
            // Out-of-range requests answer with the root reference.
            let child_ref = match child {
                Some(idx) => reply::object_ref(ctx.bus_name, ObjectTarget::Node(idx))?,
                None => reply::object_ref(ctx.bus_name, ObjectTarget::Root)?,
            };
            handled(call, &(child_ref,))
        }
        "GetChildren" => {
            let children = ctx
                .snapshot
                .children(target)
                .map(|idx| reply::object_ref(ctx.bus_name, ObjectTarget::Node(idx)))
                .collect::<zbus::Result<Vec<ObjectRef>>>()?;
            handled(call, &(children,))
        }
        "GetIndexInParent" => {
            let position = target
                .index()
                .and_then(|idx| ctx.snapshot.index_in_parent(idx))
                .map_or(-1, |p| p as i32);
            handled(call, &(position,))
        }
        "GetState" => handled(call, &(ctx.state_words(target).to_vec(),)),
        "GetRole" => handled(call, &(ctx.role_id(target),)),
        "GetRoleName" | "GetLocalizedRoleName" => handled(call, &(ctx.role_name(target),)),
        "GetApplication" => {
            handled(call, &(reply::object_ref(ctx.bus_name, ObjectTarget::Root)?,))
        }
        "GetInterfaces" => handled(call, &(ctx.interfaces(target),)),
        _ => Ok(Disposition::NotHandled),
    }
}

// -------------------------------------------------------------------------
// org.a11y.atspi.Component
// -------------------------------------------------------------------------

pub(crate) fn component(
    ctx: &ResponderContext<'_>,
    target: ObjectTarget,
    member: &str,
    call: &Message,
) -> zbus::Result<Disposition> {
    // The root has no geometry of its own.
    let Some(node) = ctx.snapshot.resolve(target) else {
        return Ok(Disposition::NotHandled);
    };
    let (x, y, w, h) = (
        node.x as i32,
        node.y as i32,
        node.width as i32,
        node.height as i32,
    );

    match member {
        "GetExtents" => {
            // The coord_type argument is ignored; extents are window-local.
            handled(call, &((x, y, w, h),))
        }
        "GetPosition" => handled(call, &(x, y)),
        "GetSize" => handled(call, &(w, h)),
        "Contains" => {
            let Ok((cx, cy, _coord_type)) = call.body().deserialize::<(i32, i32, u32)>() else {
                return Ok(Disposition::NotHandled);
            };
            let inside = cx >= x && cx < x + w && cy >= y && cy < y + h;
            handled(call, &(inside,))
        }
        "GetLayer" => handled(call, &(LAYER_WIDGET,)),
        "GetMDIZOrder" => handled(call, &(0i32,)),
        _ => Ok(Disposition::NotHandled),
    }
}

// -------------------------------------------------------------------------
// org.a11y.atspi.Action
// -------------------------------------------------------------------------

/// Number of actions a node exposes: press only, or press plus
/// increment/decrement for range-valued roles, and nothing at all for
/// non-actionable nodes.
fn action_count(node: &AccessNode) -> usize {
    if !node.is_actionable() {
        return 0;
    }
    match node.role {
        AccessRole::Slider | AccessRole::ProgressBar => 3,
        _ => 1,
    }
}

/// Action codes by invocation index; anything unknown presses.
fn action_kind(index: i32) -> ActionKind {
    match index {
        1 => ActionKind::Increment,
        2 => ActionKind::Decrement,
        _ => ActionKind::Press,
    }
}

fn action_name(index: i32) -> &'static str {
    match index {
        0 => "press",
        1 => "increment",
        2 => "decrement",
        _ => "",
    }
}

pub(crate) fn action(
    ctx: &ResponderContext<'_>,
    target: ObjectTarget,
    member: &str,
    call: &Message,
    sink: &mut dyn ActionSink,
) -> zbus::Result<Disposition> {
    let Some(node) = ctx.snapshot.resolve(target) else {
        return Ok(Disposition::NotHandled);
    };

    match member {
        "GetNActions" => handled(call, &(action_count(node) as i32,)),
        "DoAction" => {
            let Ok(index) = call.body().deserialize::<i32>() else {
                return Ok(Disposition::NotHandled);
            };
            let invoked = node.is_actionable();
            if invoked {
                sink.invoke(action_kind(index), node.focus_id);
            }
            handled(call, &(invoked,))
        }
        "GetName" | "GetDescription" => {
            let index = call.body().deserialize::<i32>().unwrap_or(0);
            handled(call, &(action_name(index),))
        }
        "GetKeyBinding" => handled(call, &("",)),
        "GetActions" => {
            const TABLE: [(&str, &str, &str); 3] = [
                ("press", "Press", ""),
                ("increment", "Increment", ""),
                ("decrement", "Decrement", ""),
            ];
            let actions: Vec<(&str, &str, &str)> =
                TABLE.iter().copied().take(action_count(node)).collect();
            handled(call, &(actions,))
        }
        _ => Ok(Disposition::NotHandled),
    }
}

// -------------------------------------------------------------------------
// org.a11y.atspi.Value
// -------------------------------------------------------------------------

/// Step size suggested to assistive technologies: one percent of the
/// range, or zero when the range is empty.
fn minimum_increment(node: &AccessNode) -> f64 {
    let range = node.value_max - node.value_min;
    if range > 0.0 { range / 100.0 } else { 0.0 }
}

pub(crate) fn value(
    ctx: &ResponderContext<'_>,
    target: ObjectTarget,
    member: &str,
    call: &Message,
) -> zbus::Result<Disposition> {
    let Some(node) = ctx.snapshot.resolve(target) else {
        return Ok(Disposition::NotHandled);
    };

    match member {
        // The value model is read-only; writes fail explicitly rather than
        // silently succeeding.
        "SetCurrentValue" => handled(call, &(false,)),
        "GetCurrentValue" => handled(call, &(node.value,)),
        "GetMinimumValue" => handled(call, &(node.value_min,)),
        "GetMaximumValue" => handled(call, &(node.value_max,)),
        "GetMinimumIncrement" => handled(call, &(minimum_increment(node),)),
        _ => Ok(Disposition::NotHandled),
    }
}

// -------------------------------------------------------------------------
// org.freedesktop.DBus.Properties
// -------------------------------------------------------------------------

/// `Properties.Get`: re-dispatch named property reads onto the same node
/// data the domain interfaces serve, wrapped in a variant.
pub(crate) fn properties_get(
    ctx: &ResponderContext<'_>,
    target: ObjectTarget,
    call: &Message,
) -> zbus::Result<Disposition> {
    let Ok((iface, property)) = call.body().deserialize::<(String, String)>() else {
        return Ok(Disposition::NotHandled);
    };
    let node = ctx.snapshot.resolve(target);

    if iface == IFACE_APPLICATION {
        if !matches!(target, ObjectTarget::Root) {
            return Ok(Disposition::NotHandled);
        }
        let value = match property.as_str() {
            "ToolkitName" => Value::from(ctx.identity.toolkit.clone()),
            "Version" => Value::from(ctx.identity.version.clone()),
            "Id" => Value::from(0i32),
            _ => return Ok(Disposition::NotHandled),
        };
        return handled(call, &(value,));
    }

    if iface == IFACE_VALUE {
        let Some(node) = node else {
            return Ok(Disposition::NotHandled);
        };
        let value = match property.as_str() {
            "CurrentValue" => node.value,
            "MinimumValue" => node.value_min,
            "MaximumValue" => node.value_max,
            "MinimumIncrement" => minimum_increment(node),
            _ => return Ok(Disposition::NotHandled),
        };
        return handled(call, &(Value::from(value),));
    }

    if iface != IFACE_ACCESSIBLE {
        return Ok(Disposition::NotHandled);
    }
    let value = match property.as_str() {
        "Name" => match node {
            Some(node) => Value::from(node.label.clone().unwrap_or_default()),
            None => Value::from(ctx.identity.name.clone()),
        },
        "Description" => Value::from(node.and_then(|n| n.description.clone()).unwrap_or_default()),
        "Parent" => match target.index() {
            Some(idx) => {
                let parent = ctx.snapshot.parent_of(idx).unwrap_or(ObjectTarget::Root);
                Value::from(reply::object_ref(ctx.bus_name, parent)?)
            }
            // The root's parent is the desktop, owned by the registry.
            None => Value::from(reply::foreign_ref(BUS_BROKER_NAME, REGISTRY_PATH)?),
        },
        "ChildCount" => Value::from(ctx.snapshot.child_count(target) as i32),
        "Role" => Value::from(ctx.role_id(target)),
        "State" => Value::from(ctx.state_words(target).to_vec()),
        "Interfaces" => Value::from(ctx.interfaces(target)),
        _ => return Ok(Disposition::NotHandled),
    };
    handled(call, &(value,))
}

/// `Properties.GetAll`: minimal — an empty dict; clients fall back to
/// individual `Get` calls.
pub(crate) fn properties_get_all(call: &Message) -> zbus::Result<Disposition> {
    let empty: HashMap<&str, Value<'_>> = HashMap::new();
    handled(call, &(empty,))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atspi::{path, IFACE_ACTION, IFACE_COMPONENT, IFACE_PROPERTIES, IFACE_VALUE};

    fn identity() -> ApplicationIdentity {
        ApplicationIdentity::new("Test App")
    }

    fn snapshot() -> TreeSnapshot {
        TreeSnapshot::new(vec![
            AccessNode::new(AccessRole::Group).with_label("toolbar row"),
            AccessNode::new(AccessRole::Button)
                .with_parent(0)
                .with_label("Save")
                .with_bounds(10.0, 20.0, 80.0, 24.0)
                .with_focus_id(7),
            AccessNode::new(AccessRole::Slider)
                .with_parent(0)
                .with_label("Volume")
                .with_range(30.0, 0.0, 100.0)
                .with_focus_id(5),
        ])
    }

    fn call_on<B>(target: ObjectTarget, iface: &str, member: &str, body: &B) -> Message
    where
        B: serde::Serialize + zbus::zvariant::DynamicType,
    {
        Message::method(path::encode(target).as_str(), member)
            .unwrap()
            .interface(iface)
            .unwrap()
            .build(body)
            .unwrap()
    }

    struct Recorder(Vec<(ActionKind, u32)>);

    impl ActionSink for Recorder {
        fn invoke(&mut self, action: ActionKind, focus_id: u32) {
            self.0.push((action, focus_id));
        }
    }

    fn reply_of(disposition: Disposition) -> Message {
        match disposition {
            Disposition::Handled(msg) => msg,
            Disposition::NotHandled => panic!("expected a reply"),
        }
    }

    #[test]
    fn test_action_count_scenarios() {
        let slider = AccessNode::new(AccessRole::Slider).with_focus_id(5);
        assert_eq!(action_count(&slider), 3);

        let inert_slider = AccessNode::new(AccessRole::Slider);
        assert_eq!(action_count(&inert_slider), 0);

        let button = AccessNode::new(AccessRole::Button).with_focus_id(7);
        assert_eq!(action_count(&button), 1);

        let progress = AccessNode::new(AccessRole::ProgressBar).with_focus_id(2);
        assert_eq!(action_count(&progress), 3);
    }

    #[test]
    fn test_minimum_increment_heuristic() {
        let full = AccessNode::new(AccessRole::Slider).with_range(0.0, 0.0, 100.0);
        assert_eq!(minimum_increment(&full), 1.0);

        let empty = AccessNode::new(AccessRole::Slider).with_range(50.0, 50.0, 50.0);
        assert_eq!(minimum_increment(&empty), 0.0);

        let inverted = AccessNode::new(AccessRole::Slider).with_range(0.0, 10.0, 0.0);
        assert_eq!(minimum_increment(&inverted), 0.0);
    }

    #[test]
    fn test_get_n_actions_reply() {
        let snap = snapshot();
        let ctx = ResponderContext {
            snapshot: &snap,
            focused: None,
            bus_name: ":1.7",
            identity: &identity(),
        };
        let mut sink = Recorder(Vec::new());

        let call = call_on(ObjectTarget::Node(2), IFACE_ACTION, "GetNActions", &());
        let reply = reply_of(action(&ctx, ObjectTarget::Node(2), "GetNActions", &call, &mut sink).unwrap());
        assert_eq!(reply.body().deserialize::<i32>().unwrap(), 3);

        let call = call_on(ObjectTarget::Node(1), IFACE_ACTION, "GetNActions", &());
        let reply = reply_of(action(&ctx, ObjectTarget::Node(1), "GetNActions", &call, &mut sink).unwrap());
        assert_eq!(reply.body().deserialize::<i32>().unwrap(), 1);
    }

    #[test]
    fn test_do_action_invokes_sink() {
        let snap = snapshot();
        let ctx = ResponderContext {
            snapshot: &snap,
            focused: None,
            bus_name: ":1.7",
            identity: &identity(),
        };
        let mut sink = Recorder(Vec::new());

        let call = call_on(ObjectTarget::Node(2), IFACE_ACTION, "DoAction", &(1i32,));
        let reply = reply_of(action(&ctx, ObjectTarget::Node(2), "DoAction", &call, &mut sink).unwrap());
        assert!(reply.body().deserialize::<bool>().unwrap());
        assert_eq!(sink.0, vec![(ActionKind::Increment, 5)]);

        // Unknown indices fall back to press.
        let call = call_on(ObjectTarget::Node(1), IFACE_ACTION, "DoAction", &(9i32,));
        let reply = reply_of(action(&ctx, ObjectTarget::Node(1), "DoAction", &call, &mut sink).unwrap());
        assert!(reply.body().deserialize::<bool>().unwrap());
        assert_eq!(sink.0.last(), Some(&(ActionKind::Press, 7)));
    }

    #[test]
    fn test_do_action_on_non_actionable_node_fails() {
        let snap = snapshot();
        let ctx = ResponderContext {
            snapshot: &snap,
            focused: None,
            bus_name: ":1.7",
            identity: &identity(),
        };
        let mut sink = Recorder(Vec::new());

        let call = call_on(ObjectTarget::Node(0), IFACE_ACTION, "DoAction", &(0i32,));
        let reply = reply_of(action(&ctx, ObjectTarget::Node(0), "DoAction", &call, &mut sink).unwrap());
        assert!(!reply.body().deserialize::<bool>().unwrap());
        assert!(sink.0.is_empty());
    }

    #[test]
    fn test_set_current_value_is_rejected() {
        let snap = snapshot();
        let ctx = ResponderContext {
            snapshot: &snap,
            focused: None,
            bus_name: ":1.7",
            identity: &identity(),
        };
        let call = call_on(ObjectTarget::Node(2), IFACE_VALUE, "SetCurrentValue", &(55.0f64,));
        let reply = reply_of(value(&ctx, ObjectTarget::Node(2), "SetCurrentValue", &call).unwrap());
        assert!(!reply.body().deserialize::<bool>().unwrap());
    }

    #[test]
    fn test_value_reads() {
        let snap = snapshot();
        let ctx = ResponderContext {
            snapshot: &snap,
            focused: None,
            bus_name: ":1.7",
            identity: &identity(),
        };
        let target = ObjectTarget::Node(2);
        for (member, expected) in [
            ("GetCurrentValue", 30.0),
            ("GetMinimumValue", 0.0),
            ("GetMaximumValue", 100.0),
            ("GetMinimumIncrement", 1.0),
        ] {
            let call = call_on(target, IFACE_VALUE, member, &());
            let reply = reply_of(value(&ctx, target, member, &call).unwrap());
            assert_eq!(reply.body().deserialize::<f64>().unwrap(), expected, "{member}");
        }
    }

    #[test]
    fn test_accessible_navigation_replies() {
        let snap = snapshot();
        let ctx = ResponderContext {
            snapshot: &snap,
            focused: None,
            bus_name: ":1.7",
            identity: &identity(),
        };

        let call = call_on(ObjectTarget::Node(0), IFACE_ACCESSIBLE, "GetChildAtIndex", &(1i32,));
        let reply = reply_of(accessible(&ctx, ObjectTarget::Node(0), "GetChildAtIndex", &call).unwrap());
        let child: ObjectRef = reply.body().deserialize().unwrap();
        assert_eq!(child.path.as_str(), "/org/a11y/atspi/accessible/2");

        // Out of range answers with the root reference.
        let call = call_on(ObjectTarget::Node(0), IFACE_ACCESSIBLE, "GetChildAtIndex", &(5i32,));
        let reply = reply_of(accessible(&ctx, ObjectTarget::Node(0), "GetChildAtIndex", &call).unwrap());
        let child: ObjectRef = reply.body().deserialize().unwrap();
        assert_eq!(child.path.as_str(), crate::atspi::ROOT_PATH);

        let call = call_on(ObjectTarget::Root, IFACE_ACCESSIBLE, "GetChildren", &());
        let reply = reply_of(accessible(&ctx, ObjectTarget::Root, "GetChildren", &call).unwrap());
        let children: Vec<ObjectRef> = reply.body().deserialize().unwrap();
        assert_eq!(children.len(), 1);

        let call = call_on(ObjectTarget::Node(2), IFACE_ACCESSIBLE, "GetIndexInParent", &());
        let reply = reply_of(accessible(&ctx, ObjectTarget::Node(2), "GetIndexInParent", &call).unwrap());
        assert_eq!(reply.body().deserialize::<i32>().unwrap(), 1);
    }

    #[test]
    fn test_accessible_role_and_state_replies() {
        let snap = snapshot();
        let ctx = ResponderContext {
            snapshot: &snap,
            focused: Some(1),
            bus_name: ":1.7",
            identity: &identity(),
        };

        let call = call_on(ObjectTarget::Node(1), IFACE_ACCESSIBLE, "GetRole", &());
        let reply = reply_of(accessible(&ctx, ObjectTarget::Node(1), "GetRole", &call).unwrap());
        assert_eq!(reply.body().deserialize::<u32>().unwrap(), 43);

        let call = call_on(ObjectTarget::Root, IFACE_ACCESSIBLE, "GetRole", &());
        let reply = reply_of(accessible(&ctx, ObjectTarget::Root, "GetRole", &call).unwrap());
        assert_eq!(reply.body().deserialize::<u32>().unwrap(), 75);

        let call = call_on(ObjectTarget::Node(1), IFACE_ACCESSIBLE, "GetState", &());
        let reply = reply_of(accessible(&ctx, ObjectTarget::Node(1), "GetState", &call).unwrap());
        let words: Vec<u32> = reply.body().deserialize().unwrap();
        assert_eq!(words.len(), 2);
        assert_ne!(words[0] & (1 << 12), 0, "focused node reports focused");

        let call = call_on(ObjectTarget::Root, IFACE_ACCESSIBLE, "GetInterfaces", &());
        let reply = reply_of(accessible(&ctx, ObjectTarget::Root, "GetInterfaces", &call).unwrap());
        let interfaces: Vec<String> = reply.body().deserialize().unwrap();
        assert!(interfaces.contains(&IFACE_APPLICATION.to_string()));
    }

    #[test]
    fn test_component_geometry_replies() {
        let snap = snapshot();
        let ctx = ResponderContext {
            snapshot: &snap,
            focused: None,
            bus_name: ":1.7",
            identity: &identity(),
        };
        let target = ObjectTarget::Node(1);

        let call = call_on(target, IFACE_COMPONENT, "GetExtents", &(0u32,));
        let reply = reply_of(component(&ctx, target, "GetExtents", &call).unwrap());
        let extents: (i32, i32, i32, i32) = reply.body().deserialize().unwrap();
        assert_eq!(extents, (10, 20, 80, 24));

        let call = call_on(target, IFACE_COMPONENT, "Contains", &(15i32, 25i32, 0u32));
        let reply = reply_of(component(&ctx, target, "Contains", &call).unwrap());
        assert!(reply.body().deserialize::<bool>().unwrap());

        let call = call_on(target, IFACE_COMPONENT, "Contains", &(90i32, 25i32, 0u32));
        let reply = reply_of(component(&ctx, target, "Contains", &call).unwrap());
        assert!(!reply.body().deserialize::<bool>().unwrap());

        // Root has no geometry.
        let call = call_on(ObjectTarget::Root, IFACE_COMPONENT, "GetPosition", &());
        assert!(matches!(
            component(&ctx, ObjectTarget::Root, "GetPosition", &call).unwrap(),
            Disposition::NotHandled
        ));
    }

    #[test]
    fn test_properties_get_name_and_parent() {
        let snap = snapshot();
        let ctx = ResponderContext {
            snapshot: &snap,
            focused: None,
            bus_name: ":1.7",
            identity: &identity(),
        };

        let call = call_on(
            ObjectTarget::Node(1),
            IFACE_PROPERTIES,
            "Get",
            &(IFACE_ACCESSIBLE, "Name"),
        );
        let reply = reply_of(properties_get(&ctx, ObjectTarget::Node(1), &call).unwrap());
        let body = reply.body();
        let name: Value = body.deserialize().unwrap();
        assert_eq!(name, Value::from("Save"));

        let call = call_on(
            ObjectTarget::Root,
            IFACE_PROPERTIES,
            "Get",
            &(IFACE_ACCESSIBLE, "Name"),
        );
        let reply = reply_of(properties_get(&ctx, ObjectTarget::Root, &call).unwrap());
        let body = reply.body();
        let name: Value = body.deserialize().unwrap();
        assert_eq!(name, Value::from("Test App"));

        let call = call_on(
            ObjectTarget::Node(1),
            IFACE_PROPERTIES,
            "Get",
            &(IFACE_ACCESSIBLE, "Parent"),
        );
        let reply = reply_of(properties_get(&ctx, ObjectTarget::Node(1), &call).unwrap());
        let body = reply.body();
        let parent: Value = body.deserialize::<Value>().unwrap().try_to_owned().unwrap().into();
        let parent = ObjectRef::try_from(parent).unwrap();
        assert_eq!(parent.path.as_str(), "/org/a11y/atspi/accessible/0");
    }

    #[test]
    fn test_properties_get_application_group_is_root_only() {
        let snap = snapshot();
        let ctx = ResponderContext {
            snapshot: &snap,
            focused: None,
            bus_name: ":1.7",
            identity: &identity(),
        };

        let call = call_on(
            ObjectTarget::Root,
            IFACE_PROPERTIES,
            "Get",
            &(IFACE_APPLICATION, "ToolkitName"),
        );
        let reply = reply_of(properties_get(&ctx, ObjectTarget::Root, &call).unwrap());
        let body = reply.body();
        let toolkit: Value = body.deserialize().unwrap();
        assert_eq!(toolkit, Value::from("horizon-assist"));

        let call = call_on(
            ObjectTarget::Node(1),
            IFACE_PROPERTIES,
            "Get",
            &(IFACE_APPLICATION, "ToolkitName"),
        );
        assert!(matches!(
            properties_get(&ctx, ObjectTarget::Node(1), &call).unwrap(),
            Disposition::NotHandled
        ));
    }

    #[test]
    fn test_properties_get_all_is_empty_dict() {
        let call = call_on(ObjectTarget::Root, IFACE_PROPERTIES, "GetAll", &(IFACE_ACCESSIBLE,));
        let reply = reply_of(properties_get_all(&call).unwrap());
        let body = reply.body();
        let dict: HashMap<String, Value> = body.deserialize().unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn test_unknown_member_declines() {
        let snap = snapshot();
        let ctx = ResponderContext {
            snapshot: &snap,
            focused: None,
            bus_name: ":1.7",
            identity: &identity(),
        };
        let call = call_on(ObjectTarget::Node(1), IFACE_ACCESSIBLE, "GetAttributes", &());
        assert!(matches!(
            accessible(&ctx, ObjectTarget::Node(1), "GetAttributes", &call).unwrap(),
            Disposition::NotHandled
        ));
    }
}
