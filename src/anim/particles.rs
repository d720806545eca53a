//! Decorative particle field: generation, pointer influence and the
//! pairwise connection lines. Pure functions over viewport dimensions and
//! an injected random source, so the whole thing tests without a DOM.

use crate::config::MOBILE_BREAKPOINT;

/// Pointer influence reaches this far, decaying linearly to zero.
pub const POINTER_RADIUS: f64 = 150.0;

/// Particles closer than this are joined by a line.
pub const LINK_DISTANCE: f64 = 100.0;

/// Fraction of the particle-to-pointer gap a fully influenced particle
/// closes.
const POINTER_PULL: f64 = 0.1;

pub const PALETTE: [&str; 4] = ["#3B82F6", "#8B5CF6", "#06B6D4", "#10B981"];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

/// Density policy: the O(N²) connection pass keeps N in the tens, and
/// narrow viewports get fewer still.
pub fn count_for_width(width: f64) -> usize {
    if width < MOBILE_BREAKPOINT {
        24
    } else {
        48
    }
}

/// Scatter `count` particles uniformly over the viewport. `rng` supplies
/// values in `[0, 1)`; positions, size, opacity and palette color all draw
/// from it.
pub fn generate(width: f64, height: f64, count: usize, mut rng: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let color_index = ((rng() * PALETTE.len() as f64) as usize).min(PALETTE.len() - 1);
            Particle {
                x: rng() * width,
                y: rng() * height,
                size: rng() * 3.0 + 1.0,
                opacity: rng() * 0.5 + 0.1,
                color: PALETTE[color_index],
            }
        })
        .collect()
}

/// Linear decay weight for pointer proximity: 1 at the pointer, 0 at
/// `POINTER_RADIUS` and beyond.
pub fn influence(distance: f64) -> f64 {
    (POINTER_RADIUS - distance).max(0.0) / POINTER_RADIUS
}

pub fn influence_at(particle: &Particle, pointer: (f64, f64)) -> f64 {
    let (px, py) = pointer;
    influence(((px - particle.x).powi(2) + (py - particle.y).powi(2)).sqrt())
}

/// Rendered position: a lerp from the particle's home toward the pointer,
/// weighted by its influence. Particles outside the radius do not move.
pub fn displaced(particle: &Particle, pointer: Option<(f64, f64)>) -> (f64, f64) {
    match pointer {
        Some((px, py)) => {
            let weight = influence_at(particle, (px, py)) * POINTER_PULL;
            (
                particle.x + (px - particle.x) * weight,
                particle.y + (py - particle.y) * weight,
            )
        }
        None => (particle.x, particle.y),
    }
}

/// Exactly the particle pairs within `threshold` of each other, with line
/// opacity decaying linearly over that distance.
pub fn connections(particles: &[Particle], threshold: f64) -> Vec<Link> {
    let mut links = Vec::new();
    for (a, first) in particles.iter().enumerate() {
        for (offset, second) in particles[a + 1..].iter().enumerate() {
            let distance = ((first.x - second.x).powi(2) + (first.y - second.y).powi(2)).sqrt();
            if distance < threshold {
                links.push(Link {
                    a,
                    b: a + 1 + offset,
                    opacity: (threshold - distance) / threshold * 0.2,
                });
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for `Math.random`.
    fn sequence(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut index = 0;
        move || {
            let value = values[index % values.len()];
            index += 1;
            value
        }
    }

    fn at(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            size: 2.0,
            opacity: 0.3,
            color: PALETTE[0],
        }
    }

    #[test]
    fn density_policy_shrinks_on_narrow_viewports() {
        assert_eq!(count_for_width(1440.0), 48);
        assert_eq!(count_for_width(768.0), 48);
        assert_eq!(count_for_width(767.0), 24);
        assert_eq!(count_for_width(320.0), 24);
    }

    #[test]
    fn generated_particles_stay_inside_the_viewport() {
        let particles = generate(1280.0, 720.0, 48, sequence(&[0.0, 0.25, 0.5, 0.75, 0.999]));
        assert_eq!(particles.len(), 48);
        for p in &particles {
            assert!((0.0..1280.0).contains(&p.x));
            assert!((0.0..720.0).contains(&p.y));
            assert!((1.0..4.0).contains(&p.size));
            assert!((0.1..0.6).contains(&p.opacity));
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn rng_at_the_top_of_range_never_overruns_the_palette() {
        let particles = generate(100.0, 100.0, 4, sequence(&[0.999_999]));
        assert_eq!(particles[0].color, PALETTE[3]);
    }

    #[test]
    fn influence_decays_linearly_to_zero() {
        assert_eq!(influence(0.0), 1.0);
        assert!((influence(75.0) - 0.5).abs() < 1e-12);
        assert_eq!(influence(150.0), 0.0);
        assert_eq!(influence(400.0), 0.0);
    }

    #[test]
    fn displacement_pulls_toward_the_pointer() {
        let particle = at(100.0, 100.0);

        // Pointer right on top: full influence, one pull-step closer.
        let (x, y) = displaced(&particle, Some((200.0, 100.0)));
        assert!(x > 100.0 && x < 200.0);
        assert_eq!(y, 100.0);

        // Out of radius: untouched.
        assert_eq!(displaced(&particle, Some((500.0, 100.0))), (100.0, 100.0));

        // No pointer yet: untouched.
        assert_eq!(displaced(&particle, None), (100.0, 100.0));
    }

    #[test]
    fn closer_particles_move_more() {
        let near = at(100.0, 100.0);
        let far = at(230.0, 100.0);
        let pointer = Some((90.0, 100.0));
        let near_shift = (displaced(&near, pointer).0 - near.x).abs();
        let far_shift = (displaced(&far, pointer).0 - far.x).abs();
        assert!(near_shift > far_shift);
        assert!(far_shift > 0.0);
    }

    #[test]
    fn connections_are_exactly_the_close_pairs() {
        let particles = vec![
            at(0.0, 0.0),
            at(60.0, 0.0),   // 60 from #0
            at(60.0, 80.0),  // 100 from #0, 80 from #1
            at(500.0, 500.0),
        ];
        let links = connections(&particles, LINK_DISTANCE);
        let pairs: Vec<(usize, usize)> = links.iter().map(|l| (l.a, l.b)).collect();
        // (0,2) sits exactly on the threshold and is excluded.
        assert_eq!(pairs, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn link_opacity_decays_with_distance() {
        let particles = vec![at(0.0, 0.0), at(10.0, 0.0), at(10.0, 90.0)];
        let links = connections(&particles, LINK_DISTANCE);
        let short = links.iter().find(|l| (l.a, l.b) == (0, 1)).unwrap();
        let long = links.iter().find(|l| (l.a, l.b) == (1, 2)).unwrap();
        assert!(short.opacity > long.opacity);
        assert!((short.opacity - 0.18).abs() < 1e-12);
    }

    #[test]
    fn empty_field_has_no_connections() {
        assert!(connections(&[], LINK_DISTANCE).is_empty());
    }
}
