//! Deep-space background: twinkling parallax stars, pulsing nebulae and
//! shooting stars on fixed cycles.
//!
//! All animation here is a pure function of `(time_ms, scroll_y)`, so the
//! renderer can draw any frame without mutating the scene.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParallaxLayer {
    Far,
    Mid,
    Near,
}

impl ParallaxLayer {
    #[inline]
    pub fn multiplier(self) -> f32 {
        match self {
            Self::Far => PARALLAX_MULTIPLIERS[0],
            Self::Mid => PARALLAX_MULTIPLIERS[1],
            Self::Near => PARALLAX_MULTIPLIERS[2],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarTint {
    White,
    Cool,
    Warm,
}

impl StarTint {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::White => [255, 255, 255],
            Self::Cool => [220, 235, 255],
            Self::Warm => [255, 245, 220],
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub x: f32,
    /// Position within a strip three viewport heights tall.
    pub y: f32,
    pub size: f32,
    pub brightness: f32,
    pub twinkle_speed: f32,
    pub twinkle_offset: f32,
    pub layer: ParallaxLayer,
}

impl Star {
    pub fn brightness_at(&self, time_ms: f64) -> f32 {
        let phase = time_ms * 0.001 * self.twinkle_speed as f64 + self.twinkle_offset as f64;
        self.brightness * (0.7 + 0.3 * phase.sin() as f32)
    }

    /// Screen-space y after parallax scrolling, wrapped into the strip.
    pub fn screen_y(&self, scroll_y: f32, viewport_height: f32) -> f32 {
        let strip = viewport_height * STAR_FIELD_HEIGHT_SCREENS;
        if strip <= 0.0 {
            return self.y;
        }
        (self.y - scroll_y * self.layer.multiplier()).rem_euclid(strip)
    }

    pub fn tint(&self) -> StarTint {
        let v = self.twinkle_offset.sin();
        if v > 0.7 {
            StarTint::Cool
        } else if v < -0.7 {
            StarTint::Warm
        } else {
            StarTint::White
        }
    }

    /// Larger stars get a soft glow drawn underneath.
    #[inline]
    pub fn has_glow(&self) -> bool {
        self.size > 1.5
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Nebula {
    pub center: Vec2,
    pub radius_x: f32,
    pub radius_y: f32,
    pub rotation: f32,
    pub hue: f32,
    pub opacity: f32,
}

impl Nebula {
    pub fn pulse_at(&self, time_ms: f64) -> f32 {
        1.0 + 0.2 * (time_ms * 0.0005 + self.rotation as f64).sin() as f32
    }

    pub fn screen_y(&self, scroll_y: f32) -> f32 {
        self.center.y - scroll_y * NEBULA_SCROLL_FACTOR
    }

    pub fn is_visible(&self, scroll_y: f32, viewport_height: f32) -> bool {
        let y = self.screen_y(scroll_y);
        let margin = self.radius_y * 2.0;
        y >= -margin && y <= viewport_height + margin
    }
}

/// A shooting star defined by its own repeating timer and a fixed path in
/// viewport-relative coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShootingStar {
    pub period_ms: f64,
    pub offset_ms: f64,
    pub start: [f32; 2],
    pub end: [f32; 2],
}

pub const SHOOTING_STARS: [ShootingStar; 5] = [
    ShootingStar { period_ms: 4000.0, offset_ms: 0.0, start: [0.85, 0.05], end: [0.15, 0.35] },
    ShootingStar { period_ms: 5500.0, offset_ms: 2000.0, start: [0.7, 0.1], end: [0.3, 0.5] },
    ShootingStar { period_ms: 3500.0, offset_ms: 1000.0, start: [0.95, 0.2], end: [0.4, 0.45] },
    ShootingStar { period_ms: 6000.0, offset_ms: 3500.0, start: [0.6, 0.02], end: [0.1, 0.25] },
    ShootingStar { period_ms: 4500.0, offset_ms: 500.0, start: [0.75, 0.15], end: [0.25, 0.55] },
];

/// The visible segment of a shooting star for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Streak {
    pub head: Vec2,
    pub tail: Vec2,
    /// Fades from 1 to 0 over the visible part of the cycle.
    pub alpha: f32,
}

impl ShootingStar {
    /// Position in the cycle in `[0, 1)`.
    pub fn cycle_position(&self, time_ms: f64) -> f64 {
        (time_ms + self.offset_ms).rem_euclid(self.period_ms) / self.period_ms
    }

    pub fn streak_at(&self, time_ms: f64, width: f32, height: f32) -> Option<Streak> {
        let cycle = self.cycle_position(time_ms);
        if cycle >= SHOOTING_STAR_VISIBLE_FRACTION {
            return None;
        }
        let progress = (cycle / SHOOTING_STAR_VISIBLE_FRACTION) as f32;
        let start = Vec2::new(width * self.start[0], height * self.start[1]);
        let end = Vec2::new(width * self.end[0], height * self.end[1]);
        let head = start.lerp(end, progress);
        let back = (start - end).normalize_or_zero();
        let tail = head + back * SHOOTING_STAR_TAIL_PX * (1.0 - progress);
        Some(Streak {
            head,
            tail,
            alpha: 1.0 - progress,
        })
    }
}

pub struct Starfield {
    stars: Vec<Star>,
    nebulae: Vec<Nebula>,
    size: Vec2,
    rng: StdRng,
}

impl Starfield {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            stars: Vec::new(),
            nebulae: Vec::new(),
            size: Vec2::new(width, height),
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.populate();
    }

    fn populate(&mut self) {
        let (w, h) = (self.size.x.max(0.0), self.size.y.max(0.0));
        let count = ((w * h) / STAR_AREA_PER_STAR).floor() as usize;
        let rng = &mut self.rng;

        self.stars.clear();
        self.stars.reserve(count);
        for _ in 0..count {
            let layer = if rng.gen::<f32>() < 0.6 {
                ParallaxLayer::Far
            } else if rng.gen::<f32>() < 0.7 {
                ParallaxLayer::Mid
            } else {
                ParallaxLayer::Near
            };
            let size = match layer {
                ParallaxLayer::Far => rng.gen::<f32>() + 0.5,
                ParallaxLayer::Mid => rng.gen::<f32>() * 1.5 + 0.8,
                ParallaxLayer::Near => rng.gen::<f32>() * 2.0 + 1.2,
            };
            self.stars.push(Star {
                x: rng.gen::<f32>() * w,
                y: rng.gen::<f32>() * h * STAR_FIELD_HEIGHT_SCREENS,
                size,
                brightness: rng.gen::<f32>() * 0.5 + 0.5,
                twinkle_speed: rng.gen::<f32>() * 2.0 + 1.0,
                twinkle_offset: rng.gen::<f32>() * std::f32::consts::TAU,
                layer,
            });
        }

        self.nebulae.clear();
        for _ in 0..NEBULA_COUNT {
            // blue or purple
            let hue = if rng.gen::<f32>() < 0.5 {
                220.0 + rng.gen::<f32>() * 40.0
            } else {
                280.0 + rng.gen::<f32>() * 40.0
            };
            self.nebulae.push(Nebula {
                center: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h * 2.0),
                radius_x: rng.gen::<f32>() * 300.0 + 200.0,
                radius_y: rng.gen::<f32>() * 200.0 + 150.0,
                rotation: rng.gen::<f32>() * std::f32::consts::PI,
                hue,
                opacity: rng.gen::<f32>() * 0.06 + 0.03,
            });
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn nebulae(&self) -> &[Nebula] {
        &self.nebulae
    }

    pub fn streaks_at(&self, time_ms: f64) -> impl Iterator<Item = Streak> + '_ {
        SHOOTING_STARS
            .iter()
            .filter_map(move |s| s.streak_at(time_ms, self.size.x, self.size.y))
    }
}
