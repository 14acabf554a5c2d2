//! Editable camera parameters.
//!
//! [`CameraState`] is the record the camera editor mutates. It keeps one small
//! numeric vector per [`ControlTarget`]: the viewport bounds, the 3D position,
//! the up and forward vectors, and the six projection planes. Fields are only
//! reachable through accessors and the single [`CameraState::adjust`] entry
//! point, so callers never touch the representation directly.

use std::fmt;

use raylib::prelude::Vector3;

/// The camera parameter group currently receiving key-driven deltas.
///
/// Targets form a cycle: [`ControlTarget::next`] after `Projection` wraps to
/// `Viewport`, and [`ControlTarget::previous`] before `Viewport` wraps to
/// `Projection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlTarget {
    /// Pixel rectangle the camera renders into.
    #[default]
    Viewport,
    /// Camera position in world space.
    Position,
    /// Camera up vector.
    Up,
    /// Camera forward vector.
    Forward,
    /// Orthographic projection planes.
    Projection,
}

impl ControlTarget {
    /// All targets in cycle order.
    pub const ALL: [ControlTarget; 5] = [
        ControlTarget::Viewport,
        ControlTarget::Position,
        ControlTarget::Up,
        ControlTarget::Forward,
        ControlTarget::Projection,
    ];

    /// Position of this target in [`ControlTarget::ALL`].
    pub fn index(self) -> usize {
        match self {
            ControlTarget::Viewport => 0,
            ControlTarget::Position => 1,
            ControlTarget::Up => 2,
            ControlTarget::Forward => 3,
            ControlTarget::Projection => 4,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Human-readable name used when reporting the selection.
    pub fn name(self) -> &'static str {
        match self {
            ControlTarget::Viewport => "VIEWPORT SIZE",
            ControlTarget::Position => "CAMERA POSITION",
            ControlTarget::Up => "CAMERA UP",
            ControlTarget::Forward => "CAMERA FORWARD",
            ControlTarget::Projection => "PROJECTION",
        }
    }
}

impl fmt::Display for ControlTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single scalar field inside one target's vector.
///
/// Not every axis exists on every target: `Width`/`Height` belong to the
/// viewport, `Near`/`Far` to the projection, and `X`/`Y`/`Z` to the three
/// vector targets. `Left`/`Right`/`Top`/`Bottom` exist on both the viewport
/// and the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Left,
    Right,
    Top,
    Bottom,
    Width,
    Height,
    Near,
    Far,
    X,
    Y,
    Z,
}

/// Viewport bounds in bottom-up screen pixels.
///
/// The six values are tracked independently; editing `right` does not move
/// `width` and vice versa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Viewport covering a whole `width x height` screen.
    pub fn full(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            right: width,
            top: height,
            bottom: 0.0,
            width,
            height,
        }
    }

    /// Viewport from a `(left, bottom, width, height)` rectangle.
    pub fn from_rect(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            right: left + width,
            top: bottom + height,
            bottom,
            width,
            height,
        }
    }

    fn field_mut(&mut self, axis: Axis) -> Option<&mut f32> {
        match axis {
            Axis::Left => Some(&mut self.left),
            Axis::Right => Some(&mut self.right),
            Axis::Top => Some(&mut self.top),
            Axis::Bottom => Some(&mut self.bottom),
            Axis::Width => Some(&mut self.width),
            Axis::Height => Some(&mut self.height),
            _ => None,
        }
    }
}

/// The six planes bounding the camera's visible volume, in world units
/// relative to the camera position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPlanes {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl ProjectionPlanes {
    /// Projection centred on the camera, one world unit per pixel.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            left: -width / 2.0,
            right: width / 2.0,
            top: height / 2.0,
            bottom: -height / 2.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    fn field_mut(&mut self, axis: Axis) -> Option<&mut f32> {
        match axis {
            Axis::Left => Some(&mut self.left),
            Axis::Right => Some(&mut self.right),
            Axis::Top => Some(&mut self.top),
            Axis::Bottom => Some(&mut self.bottom),
            Axis::Near => Some(&mut self.near),
            Axis::Far => Some(&mut self.far),
            _ => None,
        }
    }
}

const DEFAULT_NEAR: f32 = -100.0;
const DEFAULT_FAR: f32 = 100.0;

fn vector_field_mut(v: &mut Vector3, axis: Axis) -> Option<&mut f32> {
    match axis {
        Axis::X => Some(&mut v.x),
        Axis::Y => Some(&mut v.y),
        Axis::Z => Some(&mut v.z),
        _ => None,
    }
}

/// Live camera parameters owned by the editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    viewport: Viewport,
    position: Vector3,
    up: Vector3,
    forward: Vector3,
    projection: ProjectionPlanes,
}

impl CameraState {
    /// Default camera for a `width x height` screen: full-screen viewport,
    /// origin position, +Y up, looking down -Z, centred projection.
    pub fn for_screen(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::full(width, height),
            position: Vector3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            forward: Vector3::new(0.0, 0.0, -1.0),
            projection: ProjectionPlanes::centered(width, height),
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    pub fn with_up(mut self, up: Vector3) -> Self {
        self.up = up;
        self
    }

    pub fn with_forward(mut self, forward: Vector3) -> Self {
        self.forward = forward;
        self
    }

    pub fn with_projection(mut self, projection: ProjectionPlanes) -> Self {
        self.projection = projection;
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn forward(&self) -> Vector3 {
        self.forward
    }

    pub fn projection(&self) -> ProjectionPlanes {
        self.projection
    }

    /// Move the camera in the world plane, keeping its depth.
    pub fn set_position_xy(&mut self, x: f32, y: f32) {
        self.position.x = x;
        self.position.y = y;
    }

    /// Stretch the viewport and projection by `sx` horizontally and `sy`
    /// vertically, so a resized window shows more of the world at the same
    /// zoom.
    pub fn rescale(&mut self, sx: f32, sy: f32) {
        let v = &mut self.viewport;
        v.left *= sx;
        v.right *= sx;
        v.width *= sx;
        v.top *= sy;
        v.bottom *= sy;
        v.height *= sy;

        let p = &mut self.projection;
        p.left *= sx;
        p.right *= sx;
        p.top *= sy;
        p.bottom *= sy;
    }

    /// Read one scalar field, or `None` if `axis` is not part of `target`.
    pub fn get(&self, target: ControlTarget, axis: Axis) -> Option<f32> {
        let mut copy = *self;
        copy.field_mut(target, axis).map(|v| *v)
    }

    /// Add `delta` to one scalar field of `target`.
    ///
    /// Returns `false` and leaves the state untouched when `axis` does not
    /// belong to `target`.
    pub fn adjust(&mut self, target: ControlTarget, axis: Axis, delta: f32) -> bool {
        match self.field_mut(target, axis) {
            Some(field) => {
                *field += delta;
                true
            }
            None => false,
        }
    }

    fn field_mut(&mut self, target: ControlTarget, axis: Axis) -> Option<&mut f32> {
        match target {
            ControlTarget::Viewport => self.viewport.field_mut(axis),
            ControlTarget::Position => vector_field_mut(&mut self.position, axis),
            ControlTarget::Up => vector_field_mut(&mut self.up, axis),
            ControlTarget::Forward => vector_field_mut(&mut self.forward, axis),
            ControlTarget::Projection => self.projection.field_mut(axis),
        }
    }

    /// One-line description of `target`'s current values.
    pub fn describe(&self, target: ControlTarget) -> String {
        match target {
            ControlTarget::Viewport => {
                let v = self.viewport;
                format!(
                    "Viewport (left, right, top, bottom, width, height): ({}, {}, {}, {}, {}, {})",
                    v.left, v.right, v.top, v.bottom, v.width, v.height
                )
            }
            ControlTarget::Position => {
                let p = self.position;
                format!("Camera Position (x, y, z): ({}, {}, {})", p.x, p.y, p.z)
            }
            ControlTarget::Up => {
                let u = self.up;
                format!("Camera Up (x, y, z): ({:.2}, {:.2}, {:.2})", u.x, u.y, u.z)
            }
            ControlTarget::Forward => {
                let f = self.forward;
                format!(
                    "Camera Forward (x, y, z): ({:.2}, {:.2}, {:.2})",
                    f.x, f.y, f.z
                )
            }
            ControlTarget::Projection => {
                let p = self.projection;
                format!(
                    "Projection (left, right, top, bottom, near, far): ({}, {}, {}, {}, {}, {})",
                    p.left, p.right, p.top, p.bottom, p.near, p.far
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_viewport() {
        assert_eq!(ControlTarget::Projection.next(), ControlTarget::Viewport);
    }

    #[test]
    fn test_previous_wraps_to_projection() {
        assert_eq!(ControlTarget::Viewport.previous(), ControlTarget::Projection);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, target) in ControlTarget::ALL.iter().enumerate() {
            assert_eq!(target.index(), i);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ControlTarget::Viewport.to_string(), "VIEWPORT SIZE");
        assert_eq!(ControlTarget::Forward.to_string(), "CAMERA FORWARD");
    }

    #[test]
    fn test_for_screen_defaults() {
        let state = CameraState::for_screen(1000.0, 800.0);
        assert_eq!(state.viewport(), Viewport::full(1000.0, 800.0));
        assert_eq!(state.position(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(state.up(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(state.forward(), Vector3::new(0.0, 0.0, -1.0));
        let p = state.projection();
        assert_eq!((p.left, p.right), (-500.0, 500.0));
        assert_eq!((p.bottom, p.top), (-400.0, 400.0));
        assert_eq!((p.near, p.far), (-100.0, 100.0));
    }

    #[test]
    fn test_viewport_from_rect() {
        let v = Viewport::from_rect(700.0, 0.0, 700.0, 1000.0);
        assert_eq!(v.right, 1400.0);
        assert_eq!(v.top, 1000.0);
    }

    #[test]
    fn test_adjust_touches_only_one_field() {
        let mut state = CameraState::for_screen(100.0, 100.0);
        let before = state;
        assert!(state.adjust(ControlTarget::Viewport, Axis::Right, 5.0));
        assert_eq!(state.viewport().right, 105.0);
        assert_eq!(state.viewport().left, before.viewport().left);
        assert_eq!(state.viewport().width, before.viewport().width);
        assert_eq!(state.position(), before.position());
        assert_eq!(state.projection(), before.projection());
    }

    #[test]
    fn test_adjust_rejects_foreign_axis() {
        let mut state = CameraState::for_screen(100.0, 100.0);
        let before = state;
        assert!(!state.adjust(ControlTarget::Position, Axis::Width, 5.0));
        assert!(!state.adjust(ControlTarget::Viewport, Axis::Near, 5.0));
        assert!(!state.adjust(ControlTarget::Projection, Axis::X, 5.0));
        assert_eq!(state, before);
    }

    #[test]
    fn test_adjust_vector_targets_are_independent() {
        let mut state = CameraState::for_screen(100.0, 100.0);
        state.adjust(ControlTarget::Up, Axis::X, 0.05);
        assert_eq!(state.up().x, 0.05);
        assert_eq!(state.forward().x, 0.0);
        assert_eq!(state.position().x, 0.0);
    }

    #[test]
    fn test_get_reads_field() {
        let state = CameraState::for_screen(100.0, 50.0);
        assert_eq!(state.get(ControlTarget::Viewport, Axis::Height), Some(50.0));
        assert_eq!(state.get(ControlTarget::Forward, Axis::Z), Some(-1.0));
        assert_eq!(state.get(ControlTarget::Up, Axis::Far), None);
    }

    #[test]
    fn test_set_position_xy_keeps_depth() {
        let mut state =
            CameraState::for_screen(100.0, 100.0).with_position(Vector3::new(1.0, 2.0, 3.0));
        state.set_position_xy(10.0, 20.0);
        assert_eq!(state.position(), Vector3::new(10.0, 20.0, 3.0));
    }

    #[test]
    fn test_rescale_keeps_depth_and_position() {
        let mut state = CameraState::for_screen(400.0, 600.0)
            .with_viewport(Viewport::from_rect(400.0, 0.0, 400.0, 600.0))
            .with_position(Vector3::new(10.0, 20.0, 5.0));
        state.rescale(1.25, 0.5);

        let v = state.viewport();
        assert_eq!((v.left, v.right, v.width), (500.0, 1000.0, 500.0));
        assert_eq!((v.bottom, v.top, v.height), (0.0, 300.0, 300.0));
        let p = state.projection();
        assert_eq!((p.left, p.right), (-250.0, 250.0));
        assert_eq!((p.bottom, p.top), (-150.0, 150.0));
        assert_eq!((p.near, p.far), (DEFAULT_NEAR, DEFAULT_FAR));
        assert_eq!(state.position(), Vector3::new(10.0, 20.0, 5.0));
    }

    #[test]
    fn test_describe_mentions_values() {
        let state = CameraState::for_screen(100.0, 50.0);
        let text = state.describe(ControlTarget::Viewport);
        assert!(text.starts_with("Viewport"));
        assert!(text.contains("100"));
    }
}
