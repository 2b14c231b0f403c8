//! Declarative animation descriptors and the spring used by the cursor follower.
//!
//! Looping motion is rendered to CSS (`@keyframes` plus an `animation`
//! declaration) so the browser drives the timers; only the spring is
//! integrated in Rust, one animation frame at a time.

use std::fmt::Write as _;

pub const LOOP_SECONDS: f64 = 20.0;
pub const STAGGER_SECONDS: f64 = -5.0;
pub const CARD_HOVER_LIFT_PX: f64 = -5.0;

const STOP_EPSILON: f64 = 1e-9;

/// Evenly spaced keyframe values, linearly interpolated between stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track(pub &'static [f64]);

impl Track {
    pub fn stops(self) -> impl Iterator<Item = f64> {
        let segments = self.0.len().saturating_sub(1).max(1) as f64;
        (0..self.0.len()).map(move |index| index as f64 / segments)
    }

    pub fn sample(self, t: f64) -> f64 {
        match self.0 {
            [] => 0.0,
            [only] => *only,
            values => {
                let segments = (values.len() - 1) as f64;
                let scaled = t.clamp(0.0, 1.0) * segments;
                let index = (scaled.floor() as usize).min(values.len() - 2);
                let frac = scaled - index as f64;
                values[index] + (values[index + 1] - values[index]) * frac
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Path {
    pub x: Track,
    pub y: Track,
    pub rotate: Option<Track>,
}

impl Path {
    pub const BLOB: Path = Path {
        x: Track(&[0.0, 50.0, -50.0, 0.0]),
        y: Track(&[0.0, -50.0, 50.0, 0.0]),
        rotate: None,
    };

    pub const ICON: Path = Path {
        x: Track(&[0.0, 50.0, -50.0, 0.0]),
        y: Track(&[0.0, -50.0, 50.0, 0.0]),
        rotate: Some(Track(&[0.0, 90.0, 180.0, 270.0, 360.0])),
    };

    /// Union of every track's stops, ascending.
    pub fn stops(&self) -> Vec<f64> {
        let mut stops: Vec<f64> = self
            .x
            .stops()
            .chain(self.y.stops())
            .chain(self.rotate.into_iter().flat_map(Track::stops))
            .collect();
        stops.sort_by(f64::total_cmp);
        stops.dedup_by(|a, b| (*a - *b).abs() < STOP_EPSILON);
        stops
    }

    pub fn transform_at(&self, t: f64) -> String {
        let mut transform = format!(
            "translate({:.2}px, {:.2}px)",
            self.x.sample(t),
            self.y.sample(t)
        );
        if let Some(rotate) = self.rotate {
            let _ = write!(transform, " rotate({:.2}deg)", rotate.sample(t));
        }
        transform
    }

    pub fn keyframes_css(&self, name: &str) -> String {
        let mut css = format!("@keyframes {name} {{");
        for stop in self.stops() {
            let _ = write!(
                css,
                " {:.2}% {{ transform: {}; }}",
                stop * 100.0,
                self.transform_at(stop)
            );
        }
        css.push_str(" }");
        css
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
}

impl Easing {
    fn as_css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "ease-out",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoopAnimation {
    pub name: &'static str,
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl LoopAnimation {
    /// The shared 20 second linear loop, phase-shifted by `index`.
    pub fn staggered(name: &'static str, index: usize) -> Self {
        Self {
            name,
            duration: LOOP_SECONDS,
            delay: stagger_delay(index),
            easing: Easing::Linear,
        }
    }

    /// Loops never terminate.
    pub fn css(&self) -> String {
        format!(
            "animation: {} {} {} {} infinite;",
            self.name,
            seconds(self.duration),
            self.easing.as_css(),
            seconds(self.delay)
        )
    }
}

pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_SECONDS
}

fn seconds(value: f64) -> String {
    // -0.0 would otherwise print as "-0s"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}s")
}

/// Fade plus upward slide played once when an element first becomes visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub offset_px: f64,
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            offset_px: 20.0,
            duration: 0.5,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }
}

impl Entrance {
    pub fn delayed(delay: f64) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn css(&self) -> String {
        format!(
            "--reveal-offset: {}px; --reveal-duration: {}; --reveal-delay: {}; --reveal-easing: {}; --hover-lift: {}px;",
            self.offset_px,
            seconds(self.duration),
            seconds(self.delay),
            self.easing.as_css(),
            CARD_HOVER_LIFT_PX
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub const CURSOR: Spring = Spring {
        stiffness: 150.0,
        damping: 15.0,
        mass: 0.5,
    };

    const MAX_SUBSTEP: f64 = 1.0 / 240.0;
    const MAX_FRAME: f64 = 0.1;
    const REST_DELTA: f64 = 0.01;
    const REST_SPEED: f64 = 0.01;

    fn step(&self, axis: &mut SpringAxis, target: f64, dt: f64) {
        let displacement = axis.position - target;
        let acceleration = (-self.stiffness * displacement - self.damping * axis.velocity) / self.mass;
        axis.velocity += acceleration * dt;
        axis.position += axis.velocity * dt;
    }

    fn is_at_rest(&self, axis: &SpringAxis, target: f64) -> bool {
        (axis.position - target).abs() < Self::REST_DELTA && axis.velocity.abs() < Self::REST_SPEED
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringAxis {
    pub position: f64,
    pub velocity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringPoint {
    spring: Spring,
    x: SpringAxis,
    y: SpringAxis,
}

impl SpringPoint {
    pub fn at(spring: Spring, (x, y): (f64, f64)) -> Self {
        Self {
            spring,
            x: SpringAxis {
                position: x,
                velocity: 0.0,
            },
            y: SpringAxis {
                position: y,
                velocity: 0.0,
            },
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x.position, self.y.position)
    }

    pub fn snap(&mut self, target: (f64, f64)) {
        *self = Self::at(self.spring, target);
    }

    /// Integrates `dt` seconds towards `target` and reports whether the
    /// point has come to rest there.
    pub fn advance(&mut self, target: (f64, f64), dt: f64) -> bool {
        let dt = dt.clamp(0.0, Spring::MAX_FRAME);
        let substeps = (dt / Spring::MAX_SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / f64::from(substeps);

        for _ in 0..substeps {
            self.spring.step(&mut self.x, target.0, h);
            self.spring.step(&mut self.y, target.1, h);
        }

        let settled =
            self.spring.is_at_rest(&self.x, target.0) && self.spring.is_at_rest(&self.y, target.1);
        if settled {
            self.snap(target);
        }
        settled
    }
}
