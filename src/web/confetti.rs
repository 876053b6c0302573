// Confetti burst shown on every reveal. Fire-and-forget: each particle removes
// itself after the configured lifetime.
use rand::Rng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

const COLORS: [&str; 5] = ["#e94560", "#6b9080", "#a8dadc", "#e07a5f", "#ffd166"];

pub struct ConfettiBurst {
    window: Window,
    document: Document,
    container: Element,
    particles: u32,
    lifetime_ms: u32,
    rng: SmallRng,
}

impl ConfettiBurst {
    pub fn new(
        window: Window,
        document: Document,
        container: Element,
        particles: u32,
        lifetime_ms: u32,
        rng: SmallRng,
    ) -> Self {
        Self {
            window,
            document,
            container,
            particles,
            lifetime_ms,
            rng,
        }
    }

    pub fn burst(&mut self) -> Result<(), JsValue> {
        let lifetime = i32::try_from(self.lifetime_ms).unwrap_or(i32::MAX);
        for _ in 0..self.particles {
            let particle = self.document.create_element("div")?;
            particle.set_class_name("confetti-particle");
            particle.set_attribute("style", &particle_style(&mut self.rng))?;
            self.container.append_child(&particle)?;

            let remove = Closure::once_into_js(move || particle.remove());
            self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref(),
                lifetime,
            )?;
        }
        Ok(())
    }
}

/// Inline style for one particle: random column, colour, 5-15 px square and
/// up to half a second of animation delay.
pub fn particle_style<R: Rng + ?Sized>(rng: &mut R) -> String {
    let left = rng.gen_range(0.0..100.0);
    let color = COLORS[rng.gen_range(0..COLORS.len())];
    let size = rng.gen_range(5.0..15.0);
    let delay = rng.gen_range(0.0..0.5);
    format!(
        "left:{left:.2}%; top:-10px; background:{color}; \
         width:{size:.1}px; height:{size:.1}px; animation-delay:{delay:.2}s;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn particle_style_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let style = particle_style(&mut rng);
            assert!(style.contains("top:-10px"));
            assert!(COLORS.iter().any(|c| style.contains(c)), "{style}");

            let width: f64 = style
                .split("width:")
                .nth(1)
                .and_then(|rest| rest.split("px").next())
                .and_then(|n| n.parse().ok())
                .unwrap();
            assert!((5.0..=15.0).contains(&width), "{style}");
        }
    }
}
