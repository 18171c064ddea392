//! Pointer proximity tracking
//!
//! Each frame a plant probes the pointer against last frame's joints and
//! eases its push toward the result.

pub mod pointer;

pub use pointer::{ContactProbe, PushState, PushTarget, closest_joint, push_target};
