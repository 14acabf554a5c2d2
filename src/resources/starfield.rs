//! Procedural background.
//!
//! Stands in for a background texture: a fixed set of points scattered over
//! the world rectangle, drawn behind everything in each camera view.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Color, Vector2};

#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub pos: Vector2,
    /// Pixel radius, 1 or 2.
    pub size: f32,
    pub color: Color,
}

#[derive(Resource, Debug, Clone)]
pub struct Starfield {
    pub stars: Vec<Star>,
    pub width: f32,
    pub height: f32,
}

impl Starfield {
    /// Scatter `count` stars over a `width x height` world rectangle whose
    /// bottom-left corner is the origin.
    pub fn generate(count: u32, width: f32, height: f32, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let stars = (0..count)
            .map(|_| {
                let shade = rng.u8(160..=255);
                Star {
                    pos: Vector2 {
                        x: rng.f32() * width,
                        y: rng.f32() * height,
                    },
                    size: if rng.u8(0..10) == 0 { 2.0 } else { 1.0 },
                    color: Color::new(shade, shade, 255, 255),
                }
            })
            .collect();
        Self {
            stars,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count_and_bounds() {
        let field = Starfield::generate(100, 640.0, 360.0, Some(1));
        assert_eq!(field.stars.len(), 100);
        for star in &field.stars {
            assert!((0.0..640.0).contains(&star.pos.x));
            assert!((0.0..360.0).contains(&star.pos.y));
            assert!(star.size == 1.0 || star.size == 2.0);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = Starfield::generate(20, 100.0, 100.0, Some(42));
        let b = Starfield::generate(20, 100.0, 100.0, Some(42));
        for (sa, sb) in a.stars.iter().zip(b.stars.iter()) {
            assert_eq!(sa.pos, sb.pos);
            assert_eq!(sa.color.b, sb.color.b);
        }
    }
}
