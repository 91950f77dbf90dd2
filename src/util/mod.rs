//! Helpers shared by the core and the browser layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate persistence and static assets from the state
//! machines so both can be swapped or tested on their own.

pub mod storage;
pub mod styles;
