//! Static key binding table for the camera editor.
//!
//! Each row maps a numeric-pad key, under one [`ControlTarget`], to the axis
//! it nudges and in which direction. Modifiers are not part of the key:
//! Ctrl flips the sign and Alt doubles the magnitude, for every row alike.
//!
//! | Key  | Viewport   | Position | Up / Forward | Projection |
//! |------|------------|----------|--------------|------------|
//! | KP 6 | right +    | x +      | x +          | right +    |
//! | KP 4 | left -     | x -      | x -          | left -     |
//! | KP 8 | top +      | y +      | y +          | top +      |
//! | KP 2 | bottom -   | y -      | y -          | bottom -   |
//! | KP 7 | width +    | z -      | z -          | near -     |
//! | KP 9 | height +   | z +      | z +          | far +      |

use raylib::prelude::KeyboardKey;
use rustc_hash::FxHashMap;

use crate::resources::camerastate::{Axis, ControlTarget};

/// Default base step for viewport, position, and projection deltas.
pub const DEFAULT_DISCRETE_STEP: f32 = 5.0;
/// Default base step for up and forward vector deltas.
pub const DEFAULT_VECTOR_STEP: f32 = 0.05;

/// Numeric-pad keys the editor listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumpadKey {
    Kp2,
    Kp4,
    Kp6,
    Kp7,
    Kp8,
    Kp9,
}

impl NumpadKey {
    pub const ALL: [NumpadKey; 6] = [
        NumpadKey::Kp2,
        NumpadKey::Kp4,
        NumpadKey::Kp6,
        NumpadKey::Kp7,
        NumpadKey::Kp8,
        NumpadKey::Kp9,
    ];

    /// The raylib key code for this key.
    pub fn keyboard_key(self) -> KeyboardKey {
        match self {
            NumpadKey::Kp2 => KeyboardKey::KEY_KP_2,
            NumpadKey::Kp4 => KeyboardKey::KEY_KP_4,
            NumpadKey::Kp6 => KeyboardKey::KEY_KP_6,
            NumpadKey::Kp7 => KeyboardKey::KEY_KP_7,
            NumpadKey::Kp8 => KeyboardKey::KEY_KP_8,
            NumpadKey::Kp9 => KeyboardKey::KEY_KP_9,
        }
    }

    /// Map a raylib key code back to a numpad key, if it is one we bind.
    pub fn from_keyboard_key(key: KeyboardKey) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.keyboard_key() == key)
    }
}

/// Modifier flags carried by a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            alt: false,
        }
    }

    pub fn alt() -> Self {
        Self {
            ctrl: false,
            alt: true,
        }
    }

    /// `-1` with Ctrl held, `1` otherwise.
    pub fn sign(self) -> f32 {
        if self.ctrl { -1.0 } else { 1.0 }
    }

    /// `2` with Alt held, `1` otherwise.
    pub fn scale(self) -> f32 {
        if self.alt { 2.0 } else { 1.0 }
    }
}

/// Which base step a binding uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Pixel/world-unit step for bounds and positions.
    Discrete,
    /// Small fractional step for direction vectors.
    Vector,
}

/// The two base step magnitudes.
///
/// They are independent constants; neither is derived from the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSizes {
    pub discrete: f32,
    pub vector: f32,
}

impl Default for StepSizes {
    fn default() -> Self {
        Self {
            discrete: DEFAULT_DISCRETE_STEP,
            vector: DEFAULT_VECTOR_STEP,
        }
    }
}

impl StepSizes {
    pub fn base(&self, kind: StepKind) -> f32 {
        match kind {
            StepKind::Discrete => self.discrete,
            StepKind::Vector => self.vector,
        }
    }
}

/// What a bound key does: nudge `axis` by `direction * base step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDelta {
    pub axis: Axis,
    /// `1.0` or `-1.0`, before modifiers.
    pub direction: f32,
    pub step: StepKind,
}

impl AxisDelta {
    const fn plus(axis: Axis, step: StepKind) -> Self {
        Self {
            axis,
            direction: 1.0,
            step,
        }
    }

    const fn minus(axis: Axis, step: StepKind) -> Self {
        Self {
            axis,
            direction: -1.0,
            step,
        }
    }

    /// Signed amount to add for the given modifiers and step sizes.
    pub fn amount(&self, modifiers: Modifiers, steps: &StepSizes) -> f32 {
        self.direction * modifiers.sign() * steps.base(self.step) * modifiers.scale()
    }
}

use Axis::*;
use ControlTarget::*;
use NumpadKey::*;
use StepKind::{Discrete as D, Vector as V};

const DEFAULT_BINDINGS: &[(ControlTarget, NumpadKey, AxisDelta)] = &[
    (Viewport, Kp6, AxisDelta::plus(Right, D)),
    (Viewport, Kp4, AxisDelta::minus(Left, D)),
    (Viewport, Kp8, AxisDelta::plus(Top, D)),
    (Viewport, Kp2, AxisDelta::minus(Bottom, D)),
    (Viewport, Kp7, AxisDelta::plus(Width, D)),
    (Viewport, Kp9, AxisDelta::plus(Height, D)),
    (Position, Kp6, AxisDelta::plus(X, D)),
    (Position, Kp4, AxisDelta::minus(X, D)),
    (Position, Kp8, AxisDelta::plus(Y, D)),
    (Position, Kp2, AxisDelta::minus(Y, D)),
    (Position, Kp7, AxisDelta::minus(Z, D)),
    (Position, Kp9, AxisDelta::plus(Z, D)),
    (Up, Kp6, AxisDelta::plus(X, V)),
    (Up, Kp4, AxisDelta::minus(X, V)),
    (Up, Kp8, AxisDelta::plus(Y, V)),
    (Up, Kp2, AxisDelta::minus(Y, V)),
    (Up, Kp7, AxisDelta::minus(Z, V)),
    (Up, Kp9, AxisDelta::plus(Z, V)),
    (Forward, Kp6, AxisDelta::plus(X, V)),
    (Forward, Kp4, AxisDelta::minus(X, V)),
    (Forward, Kp8, AxisDelta::plus(Y, V)),
    (Forward, Kp2, AxisDelta::minus(Y, V)),
    (Forward, Kp7, AxisDelta::minus(Z, V)),
    (Forward, Kp9, AxisDelta::plus(Z, V)),
    (Projection, Kp6, AxisDelta::plus(Right, D)),
    (Projection, Kp4, AxisDelta::minus(Left, D)),
    (Projection, Kp8, AxisDelta::plus(Top, D)),
    (Projection, Kp2, AxisDelta::minus(Bottom, D)),
    (Projection, Kp7, AxisDelta::minus(Near, D)),
    (Projection, Kp9, AxisDelta::plus(Far, D)),
];

/// Lookup table from `(target, key)` to the delta it applies.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: FxHashMap<(ControlTarget, NumpadKey), AxisDelta>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_rows(DEFAULT_BINDINGS)
    }
}

impl KeyBindings {
    /// Build a table from explicit rows. Later rows win on duplicate keys.
    pub fn from_rows(rows: &[(ControlTarget, NumpadKey, AxisDelta)]) -> Self {
        let map = rows
            .iter()
            .map(|(target, key, delta)| ((*target, *key), *delta))
            .collect();
        Self { map }
    }

    pub fn lookup(&self, target: ControlTarget, key: NumpadKey) -> Option<AxisDelta> {
        self.map.get(&(target, key)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_binds_every_key_for_every_target() {
        let bindings = KeyBindings::default();
        assert_eq!(DEFAULT_BINDINGS.len(), 30);
        for target in ControlTarget::ALL {
            for key in NumpadKey::ALL {
                assert!(
                    bindings.lookup(target, key).is_some(),
                    "{target:?} {key:?} unbound"
                );
            }
        }
    }

    #[test]
    fn test_vector_targets_use_vector_step() {
        let bindings = KeyBindings::default();
        for key in NumpadKey::ALL {
            assert_eq!(bindings.lookup(Up, key).map(|d| d.step), Some(V));
            assert_eq!(bindings.lookup(Forward, key).map(|d| d.step), Some(V));
            assert_eq!(bindings.lookup(Position, key).map(|d| d.step), Some(D));
        }
    }

    #[test]
    fn test_kp6_grows_viewport_right() {
        let delta = KeyBindings::default().lookup(Viewport, Kp6);
        assert_eq!(delta, Some(AxisDelta::plus(Right, D)));
    }

    #[test]
    fn test_amount_applies_modifiers() {
        let steps = StepSizes::default();
        let delta = AxisDelta::plus(Right, D);
        assert_eq!(delta.amount(Modifiers::NONE, &steps), 5.0);
        assert_eq!(delta.amount(Modifiers::ctrl(), &steps), -5.0);
        assert_eq!(delta.amount(Modifiers::alt(), &steps), 10.0);
        let both = Modifiers {
            ctrl: true,
            alt: true,
        };
        assert_eq!(delta.amount(both, &steps), -10.0);
    }

    #[test]
    fn test_amount_minus_direction() {
        let steps = StepSizes::default();
        let delta = AxisDelta::minus(Left, D);
        assert_eq!(delta.amount(Modifiers::NONE, &steps), -5.0);
        assert_eq!(delta.amount(Modifiers::ctrl(), &steps), 5.0);
    }

    #[test]
    fn test_numpad_key_round_trip_through_raylib() {
        for key in NumpadKey::ALL {
            assert_eq!(NumpadKey::from_keyboard_key(key.keyboard_key()), Some(key));
        }
        assert_eq!(NumpadKey::from_keyboard_key(KeyboardKey::KEY_A), None);
    }

    #[test]
    fn test_from_rows_later_row_wins() {
        let rows = [
            (Viewport, Kp6, AxisDelta::plus(Right, D)),
            (Viewport, Kp6, AxisDelta::minus(Width, D)),
        ];
        let bindings = KeyBindings::from_rows(&rows);
        assert_eq!(bindings.lookup(Viewport, Kp4), None);
        assert_eq!(
            bindings.lookup(Viewport, Kp6),
            Some(AxisDelta::minus(Width, D))
        );
    }
}
