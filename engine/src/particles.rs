//! Ambient particle field behind the hero section.
//!
//! A fixed-size set of point particles drifts across a real-valued surface
//! sized to the render viewport (in braille-dot units, 2x4 dots per terminal
//! cell). Each tick advances every particle by its velocity and reflects the
//! velocity component on any axis where the position has crossed a surface
//! boundary. Positions are never clamped, so a particle may sit out of bounds
//! for at most one tick after a bounce; the renderer tolerates that.
//!
//! Particles within `link_threshold` of each other are joined by a connector
//! whose opacity decays linearly with distance. Pair enumeration is O(N^2)
//! per frame; at the default N=50 that is cheap enough that no spatial
//! partitioning is warranted.

/// Tuning knobs for the field. Velocity and radius are drawn once per
/// particle at creation; count is fixed for the field's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    pub count: usize,
    /// Width of the symmetric velocity range: components land in
    /// `(-max_speed / 2, max_speed / 2)` dots per tick.
    pub max_speed: f64,
    /// Radii land in `[0, max_radius)`.
    pub max_radius: f64,
    /// Distance at and beyond which no connector is drawn.
    pub link_threshold: f64,
    /// Peak connector opacity, reached as distance approaches zero.
    pub link_opacity: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 50,
            max_speed: 0.6,
            max_radius: 2.0,
            link_threshold: 24.0,
            link_opacity: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// A proximity connector between two particles.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// In `(0, link_opacity]`; pairs at or beyond the threshold produce no link.
    pub opacity: f64,
}

#[derive(Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Allocate a field over a `width` x `height` surface with positions
    /// uniform over the surface and velocities/radii drawn once.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_config(width, height, FieldConfig::default())
    }

    #[must_use]
    pub fn with_config(width: f64, height: f64, config: FieldConfig) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle {
                x: rand::random::<f64>() * width,
                y: rand::random::<f64>() * height,
                vx: (rand::random::<f64>() - 0.5) * config.max_speed,
                vy: (rand::random::<f64>() - 0.5) * config.max_speed,
                radius: rand::random::<f64>() * config.max_radius,
            })
            .collect();
        Self {
            width,
            height,
            config,
            particles,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every particle one tick: move, then elastic wall bounce.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }

    /// Re-bound the surface to a new viewport size.
    ///
    /// Positions are pulled into the new bounds so the bounce invariant
    /// holds immediately after a shrink.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for p in &mut self.particles {
            p.x = p.x.clamp(0.0, width);
            p.y = p.y.clamp(0.0, height);
        }
    }

    /// Connector opacity for a pair at `distance`: linear decay from
    /// `link_opacity` at distance zero down to zero at the threshold.
    #[must_use]
    pub fn link_opacity(&self, distance: f64) -> f64 {
        if distance >= self.config.link_threshold {
            return 0.0;
        }
        self.config.link_opacity * (1.0 - distance / self.config.link_threshold)
    }

    /// Enumerate every unordered pair within the proximity threshold.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, p1) in self.particles.iter().enumerate() {
            for p2 in &self.particles[i + 1..] {
                let dx = p1.x - p2.x;
                let dy = p1.y - p2.y;
                let distance = (dx * dx + dy * dy).sqrt();
                let opacity = self.link_opacity(distance);
                if opacity > 0.0 {
                    links.push(Link {
                        x1: p1.x,
                        y1: p1.y,
                        x2: p2.x,
                        y2: p2.y,
                        opacity,
                    });
                }
            }
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldConfig, ParticleField};

    #[test]
    fn positions_stay_within_bounds_plus_one_step() {
        let mut field = ParticleField::new(120.0, 80.0);
        for _ in 0..2_000 {
            field.tick();
            for p in field.particles() {
                let step_x = p.vx.abs();
                let step_y = p.vy.abs();
                assert!(p.x >= -step_x && p.x <= field.width() + step_x, "x={} escaped", p.x);
                assert!(p.y >= -step_y && p.y <= field.height() + step_y, "y={} escaped", p.y);
            }
        }
    }

    #[test]
    fn empty_field_ticks_without_particles() {
        let config = FieldConfig {
            count: 0,
            ..FieldConfig::default()
        };
        let mut field = ParticleField::with_config(60.0, 40.0, config);
        for _ in 0..10 {
            field.tick();
        }
        assert!(field.particles().is_empty());
        assert!(field.links().is_empty());
    }

    #[test]
    fn link_opacity_zero_at_and_beyond_threshold() {
        let field = ParticleField::new(100.0, 100.0);
        let threshold = field.config().link_threshold;
        assert_eq!(field.link_opacity(threshold), 0.0);
        assert_eq!(field.link_opacity(threshold * 2.0), 0.0);
    }

    #[test]
    fn link_opacity_monotonically_decreasing_with_distance() {
        let field = ParticleField::new(100.0, 100.0);
        let threshold = field.config().link_threshold;
        let mut prev = field.link_opacity(0.0);
        assert!(prev > 0.0);
        for i in 1..100 {
            let d = threshold * f64::from(i) / 100.0;
            let opacity = field.link_opacity(d);
            assert!(opacity > 0.0);
            assert!(opacity < prev, "opacity must strictly decrease toward the threshold");
            prev = opacity;
        }
    }

    #[test]
    fn resize_clamps_positions_into_new_bounds() {
        let mut field = ParticleField::new(200.0, 200.0);
        field.resize(50.0, 50.0);
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x <= 50.0);
            assert!(p.y >= 0.0 && p.y <= 50.0);
        }
        // The bounce invariant must hold from the first post-resize tick.
        field.tick();
        for p in field.particles() {
            assert!(p.x >= -p.vx.abs() && p.x <= 50.0 + p.vx.abs());
        }
    }

    #[test]
    fn velocities_and_radii_within_configured_ranges() {
        let config = FieldConfig::default();
        let field = ParticleField::new(100.0, 100.0);
        for p in field.particles() {
            assert!(p.vx.abs() <= config.max_speed / 2.0);
            assert!(p.vy.abs() <= config.max_speed / 2.0);
            assert!(p.radius >= 0.0 && p.radius < config.max_radius);
        }
    }
}
