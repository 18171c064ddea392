//! Easing helpers for plant growth and pointer settle
//!
//! Leaves and flower heads fade in with a smoothstep over a slice of the
//! stem's growth; pointer push eases exponentially toward its target.

mod easing;

pub use easing::{smoothstep, approach, reveal};
