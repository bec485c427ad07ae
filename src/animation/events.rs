//! Animation domain: messages between the walking driver and the backdrop.

use bevy::ecs::message::Message;

/// Fired once, on the tick the character reaches the backdrop.
#[derive(Debug)]
pub struct BackdropTriggered {
    pub position_x: f64,
}

impl Message for BackdropTriggered {}
