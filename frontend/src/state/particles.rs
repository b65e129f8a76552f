//! Decorative particle field and confetti burst.
//!
//! Randomness is injected as a `FnMut() -> f64` yielding values in [0, 1),
//! `js_sys::Math::random` in the browser.

pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_COLORS: [&str; 2] = ["#FF1B8D", "#7209B7"];

pub const CONFETTI_COUNT: usize = 100;
pub const CONFETTI_COLORS: [&str; 5] = ["#FF1B8D", "#7209B7", "#ffffff", "#00FFFF", "#F472B6"];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: &'static str,
}

impl Particle {
    fn spawn(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: rng() * width,
            y: rng() * height,
            radius: rng() * 3.0,
            vx: rng() - 0.5,
            vy: rng() - 0.5,
            color: if rng() > 0.5 {
                PARTICLE_COLORS[0]
            } else {
                PARTICLE_COLORS[1]
            },
        }
    }

    fn step(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x > width || self.x < 0.0 {
            self.vx = -self.vx;
        }
        if self.y > height || self.y < 0.0 {
            self.vy = -self.vy;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(width, height, rng))
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub left_vw: f64,
    pub duration_s: f64,
    pub color: &'static str,
    pub round: bool,
}

impl ConfettiPiece {
    pub fn style(&self) -> String {
        let shape = if self.round {
            "border-radius: 50%;"
        } else {
            "width: 8px; height: 12px;"
        };
        format!(
            "left: {}vw; top: -10px; background-color: {}; animation-duration: {}s; {}",
            self.left_vw, self.color, self.duration_s, shape
        )
    }
}

pub fn confetti_burst(rng: &mut impl FnMut() -> f64) -> Vec<ConfettiPiece> {
    (0..CONFETTI_COUNT)
        .map(|_| {
            let left_vw = rng() * 100.0;
            let duration_s = rng() * 2.0 + 2.0;
            let color_index = ((rng() * CONFETTI_COLORS.len() as f64) as usize)
                .min(CONFETTI_COLORS.len() - 1);
            ConfettiPiece {
                left_vw,
                duration_s,
                color: CONFETTI_COLORS[color_index],
                round: rng() > 0.5,
            }
        })
        .collect()
}

/// Identifies one piece: the burst it came from and its position in it.
pub type PieceKey = (u32, usize);

/// Pieces still falling. Each leaves on its own once its animation ends.
#[derive(Debug, Clone, Default)]
pub struct ConfettiLayer {
    falling: Vec<(PieceKey, ConfettiPiece)>,
}

impl ConfettiLayer {
    pub fn add_burst(&mut self, burst: u32, pieces: Vec<ConfettiPiece>) {
        self.falling
            .extend(pieces.into_iter().enumerate().map(|(i, piece)| ((burst, i), piece)));
    }

    /// Removes a piece that finished falling. Returns false for unknown keys.
    pub fn land(&mut self, key: PieceKey) -> bool {
        let before = self.falling.len();
        self.falling.retain(|(k, _)| *k != key);
        self.falling.len() != before
    }

    pub fn pieces(&self) -> impl Iterator<Item = &(PieceKey, ConfettiPiece)> {
        self.falling.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.falling.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn particles_bounce_off_edges() {
        let mut particle = Particle {
            x: 99.8,
            y: 0.2,
            radius: 1.0,
            vx: 0.4,
            vy: -0.4,
            color: PARTICLE_COLORS[0],
        };
        particle.step(100.0, 100.0);
        assert!(particle.vx < 0.0);
        assert!(particle.vy > 0.0);
    }

    #[test]
    fn field_spawns_inside_bounds() {
        let mut rng = sequence(&[0.0, 0.25, 0.5, 0.75, 0.99]);
        let field = ParticleField::new(800.0, 600.0, &mut rng);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((0.0..3.0).contains(&p.radius));
            assert!((-0.5..0.5).contains(&p.vx));
        }
    }

    #[test]
    fn confetti_ranges() {
        let mut rng = sequence(&[0.999, 0.0, 0.5, 0.3]);
        let pieces = confetti_burst(&mut rng);
        assert_eq!(pieces.len(), CONFETTI_COUNT);
        for piece in &pieces {
            assert!((0.0..100.0).contains(&piece.left_vw));
            assert!((2.0..4.0).contains(&piece.duration_s));
            assert!(CONFETTI_COLORS.contains(&piece.color));
        }
    }

    #[test]
    fn pieces_leave_one_at_a_time() {
        let mut rng = sequence(&[0.1, 0.9, 0.4, 0.6]);
        let mut layer = ConfettiLayer::default();
        layer.add_burst(1, confetti_burst(&mut rng));
        layer.add_burst(2, confetti_burst(&mut rng));
        assert_eq!(layer.pieces().count(), 2 * CONFETTI_COUNT);

        assert!(layer.land((1, 0)));
        assert!(!layer.land((1, 0)));
        assert_eq!(layer.pieces().count(), 2 * CONFETTI_COUNT - 1);
        // The rest of both bursts keeps falling.
        assert!(layer.pieces().any(|(key, _)| *key == (1, 1)));
        assert!(layer.pieces().any(|(key, _)| *key == (2, 0)));

        for i in 0..CONFETTI_COUNT {
            layer.land((2, i));
        }
        for i in 1..CONFETTI_COUNT {
            layer.land((1, i));
        }
        assert!(layer.is_empty());
    }

    #[test]
    fn confetti_style_reflects_shape() {
        let piece = ConfettiPiece {
            left_vw: 10.0,
            duration_s: 2.5,
            color: "#ffffff",
            round: false,
        };
        let style = piece.style();
        assert!(style.contains("left: 10vw"));
        assert!(style.contains("animation-duration: 2.5s"));
        assert!(style.contains("width: 8px; height: 12px;"));
    }
}
