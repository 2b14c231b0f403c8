pub const MARGIN_PERCENT: f64 = 10.0;
pub const SPAN_PERCENT: f64 = 80.0;

/// Uniform draws in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl UnitSource for fastrand::Rng {
    fn next_unit(&mut self) -> f64 {
        self.f64()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
}

impl Placement {
    pub fn style(&self) -> String {
        format!("top: {:.2}%; left: {:.2}%;", self.top, self.left)
    }
}

fn percent(source: &mut impl UnitSource) -> f64 {
    source.next_unit().clamp(0.0, 1.0) * SPAN_PERCENT + MARGIN_PERCENT
}

/// Places `count` items inside the central 80% of the viewport, drawing
/// `top` before `left` for each item.
pub fn scatter(count: usize, source: &mut impl UnitSource) -> Vec<Placement> {
    (0..count)
        .map(|_| {
            let top = percent(source);
            let left = percent(source);
            Placement { top, left }
        })
        .collect()
}

/// Generator for one mount of the background: seeded when a caller asks
/// for a repeatable layout, fresh entropy otherwise.
pub fn placement_rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    }
}
