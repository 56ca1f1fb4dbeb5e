// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the UI state logic separated from the component
//! structs, following the principle of separation of concerns.

pub mod drag;
pub mod scroll_lock;
pub mod zoom;

pub use drag::DragState;
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use zoom::{Scale, WheelDirection};
