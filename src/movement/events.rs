//! Movement domain: input and outcome messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Logical actions delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PogoAction {
    LeanLeft,
    LeanRight,
    Charge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionPhase {
    Started,
    Canceled,
}

/// A discrete input occurrence. Queued by the input layer and drained once
/// at the start of the controller's frame step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PogoInput {
    pub action: PogoAction,
    pub phase: ActionPhase,
}

impl PogoInput {
    pub fn started(action: PogoAction) -> Self {
        Self {
            action,
            phase: ActionPhase::Started,
        }
    }

    pub fn canceled(action: PogoAction) -> Self {
        Self {
            action,
            phase: ActionPhase::Canceled,
        }
    }
}

impl Message for PogoInput {}

/// Fired when a released charge turns into an impulse
#[derive(Debug, Clone, Copy)]
pub struct PogoLaunched {
    pub entity: Entity,
    pub impulse: Vec2,
}

impl Message for PogoLaunched {}

/// Fired on the airborne -> grounded edge
#[derive(Debug, Clone, Copy)]
pub struct PogoLanded {
    pub entity: Entity,
}

impl Message for PogoLanded {}
