//! Movement domain: system modules for pogo locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{detect_ground, sync_anchors};
pub(crate) use input::{apply_input, read_input};
pub(crate) use movement::{
    accumulate_charge, apply_launch_impulses, reset_momentum_on_landing, update_lean,
};
