//! Shade ramps and weight slot binding
//!
//! A shade ramp keeps the seed color's hue and saturation and swaps in a
//! list of lightness targets. HSL lightness is not perceptual, so the ramp
//! is an approximation of a designed palette, not a replacement for one.

use tint_color::{hex_to_rgb, Hsl};

/// Weight slot keys, lightest to darkest
pub const WEIGHT_SLOTS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Lightness targets (percent) used for the primary ramp
pub const PRIMARY_STEPS: [f64; 9] = [95.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0];

/// [`PRIMARY_STEPS`] plus a tenth target so every weight slot is bound
pub const EXTENDED_STEPS: [f64; 10] = [95.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 10.0];

/// How ramp entries are bound to weight slots
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RampBinding {
    /// Nine steps for ten slots. The `900` slot is left unbound by the
    /// ramp and only set by the convenience override.
    #[default]
    Reference,
    /// Ten steps, one per slot.
    Extended,
}

impl RampBinding {
    /// Stable id for config/CLI
    pub fn id(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Extended => "extended",
        }
    }

    /// Lightness steps this binding generates
    pub fn steps(self) -> &'static [f64] {
        match self {
            Self::Reference => &PRIMARY_STEPS,
            Self::Extended => &EXTENDED_STEPS,
        }
    }
}

/// Colors derived from one seed, one per requested lightness step
#[derive(Clone, Debug, PartialEq)]
pub struct ShadeRamp {
    seed: Hsl,
    entries: Vec<(f64, String)>,
}

impl ShadeRamp {
    /// HSL of the seed color
    pub fn seed(&self) -> Hsl {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hex color at `index`, if the ramp is that long
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(_, hex)| hex.as_str())
    }

    /// `(lightness step, hex)` pairs in request order
    pub fn iter(&self) -> impl Iterator<Item = (f64, &str)> {
        self.entries.iter().map(|(step, hex)| (*step, hex.as_str()))
    }

    /// Hex colors in request order
    pub fn colors(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, hex)| hex.as_str()).collect()
    }
}

/// Derive a shade ramp from `seed_hex`.
///
/// Each step is a target HSL lightness in percent; hue and saturation stay
/// those of the seed. Malformed seeds are not rejected, they just produce
/// the ramp of whatever color [`hex_to_rgb`] reads them as.
pub fn generate_shades(seed_hex: &str, steps: &[f64]) -> ShadeRamp {
    let seed = hex_to_rgb(seed_hex).to_hsl();
    let entries = steps
        .iter()
        .map(|&step| (step, seed.with_lightness(step).to_hex()))
        .collect();

    ShadeRamp { seed, entries }
}

/// One weight slot and the shade bound to it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotBinding {
    pub weight: u16,
    /// `None` when the ramp is shorter than the slot list
    pub shade: Option<String>,
}

impl SlotBinding {
    /// Style variable name, e.g. `--primary-500`
    pub fn variable_name(&self) -> String {
        format!("--primary-{}", self.weight)
    }
}

/// Bind ramp entries to [`WEIGHT_SLOTS`] by position.
///
/// Always returns one binding per slot; slots past the end of the ramp
/// have no shade.
pub fn bind_slots(ramp: &ShadeRamp) -> Vec<SlotBinding> {
    WEIGHT_SLOTS
        .iter()
        .enumerate()
        .map(|(index, &weight)| SlotBinding {
            weight,
            shade: ramp.get(index).map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tint_color::Rgb;

    #[test]
    fn ramp_has_one_entry_per_step() {
        let ramp = generate_shades("#10B981", &PRIMARY_STEPS);
        assert_eq!(ramp.len(), 9);
        assert_eq!(
            ramp.iter().map(|(step, _)| step).collect::<Vec<_>>(),
            PRIMARY_STEPS.to_vec()
        );
    }

    #[test]
    fn ramp_keeps_seed_hue_and_saturation() {
        let ramp = generate_shades("#10B981", &[50.0]);
        let seed = ramp.seed();
        let hsl = hex_to_rgb(ramp.get(0).unwrap()).to_hsl();
        assert!((hsl.h - seed.h).abs() < 1.0, "hue drifted: {hsl}");
        assert!((hsl.s - seed.s).abs() < 1.0, "saturation drifted: {hsl}");
        assert!((hsl.l - 50.0).abs() < 0.5, "lightness off: {hsl}");
    }

    #[test]
    fn entries_are_the_seed_at_each_lightness() {
        let ramp = generate_shades("#7c3aed", &[85.0, 45.0]);
        let seed = hex_to_rgb("#7c3aed").to_hsl();
        assert_eq!(
            ramp.colors(),
            vec![
                seed.with_lightness(85.0).to_hex(),
                seed.with_lightness(45.0).to_hex()
            ]
        );
    }

    #[test]
    fn ramp_reaches_white_and_black() {
        let ramp = generate_shades("#10B981", &[100.0, 0.0]);
        assert_eq!(ramp.colors(), vec!["#ffffff", "#000000"]);
    }

    #[test]
    fn gray_seed_gives_gray_ramp() {
        let ramp = generate_shades("#808080", &PRIMARY_STEPS);
        for (_, hex) in ramp.iter() {
            let rgb = hex_to_rgb(hex);
            assert!(rgb.r == rgb.g && rgb.g == rgb.b, "{hex} is not gray");
        }
    }

    #[test]
    fn empty_step_list_gives_empty_ramp() {
        let ramp = generate_shades("#10B981", &[]);
        assert!(ramp.is_empty());
        assert_eq!(ramp.get(0), None);
    }

    #[test]
    fn malformed_seed_still_produces_a_ramp() {
        let ramp = generate_shades("tomato", &PRIMARY_STEPS);
        assert_eq!(ramp.len(), 9);
        // Reads as black, which has no hue: the ramp is grays
        assert_eq!(ramp.get(5), Some("#808080"));
    }

    #[test]
    fn reference_binding_leaves_900_unbound() {
        let ramp = generate_shades("#10B981", RampBinding::Reference.steps());
        let slots = bind_slots(&ramp);

        assert_eq!(slots.len(), WEIGHT_SLOTS.len());
        assert_eq!(slots[8].weight, 800);
        assert_eq!(slots[8].shade.as_deref(), ramp.get(8));
        assert_eq!(
            slots[9],
            SlotBinding {
                weight: 900,
                shade: None
            }
        );
    }

    #[test]
    fn extended_binding_fills_every_slot() {
        let ramp = generate_shades("#10B981", RampBinding::Extended.steps());
        let slots = bind_slots(&ramp);

        assert!(slots.iter().all(|slot| slot.shade.is_some()));
        let darkest = hex_to_rgb(slots[9].shade.as_deref().unwrap()).to_hsl();
        assert!((darkest.l - 10.0).abs() < 0.5);
    }

    #[test]
    fn slot_variable_names() {
        let slot = SlotBinding {
            weight: 50,
            shade: None,
        };
        assert_eq!(slot.variable_name(), "--primary-50");
    }

    #[test]
    fn lightest_shade_is_a_tint_of_the_seed() {
        let ramp = generate_shades("#10B981", &PRIMARY_STEPS);
        let lightest = hex_to_rgb(ramp.get(0).unwrap());
        // 95% lightness: every channel close to white, green still dominant
        assert!(lightest.channel_distance(Rgb::WHITE) < 40);
        assert!(lightest.g > lightest.r);
    }
}
