//! Pointer input forwarded by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => *position,
        }
    }
}

/// What the controller did with a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    /// Input is disabled; the host should apply its default handling.
    Ignored,
    /// Consumed without changing the rating.
    Handled,
    /// Consumed and the rating changed to the given value.
    Changed(f64),
}

impl PointerOutcome {
    /// Whether the controller consumed the event.
    pub fn is_handled(&self) -> bool {
        !matches!(self, PointerOutcome::Ignored)
    }

    pub fn changed(&self) -> bool {
        matches!(self, PointerOutcome::Changed(_))
    }
}
