//! Theme application
//!
//! One linear pass per call: resolve roles, derive the primary ramp, bind
//! it to weight slots, write everything to the sink. Nothing is cached
//! between calls, so applying the same record twice produces the same
//! writes.

use tracing::{debug, error, trace};

use crate::config::ThemeConfig;
use crate::error::ThemeApplyError;
use crate::ramp::{bind_slots, generate_shades, RampBinding, ShadeRamp, SlotBinding};
use crate::roles::ThemeRoles;
use crate::sink::StyleSink;

/// Everything derived from one theme record, before it is written
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTheme {
    pub binding: RampBinding,
    pub roles: ThemeRoles,
    pub ramp: ShadeRamp,
    pub slots: Vec<SlotBinding>,
}

impl ResolvedTheme {
    pub fn resolve(config: &ThemeConfig, binding: RampBinding) -> Self {
        let roles = ThemeRoles::resolve(config);
        let ramp = generate_shades(&roles.primary, binding.steps());
        let slots = bind_slots(&ramp);

        Self {
            binding,
            roles,
            ramp,
            slots,
        }
    }

    /// Variable writes in the order they reach the sink.
    ///
    /// 1. Every bound weight slot as `--primary-<weight>` (unbound slots
    ///    are skipped)
    /// 2. `--primary-500`, `--primary-600` and `--primary-900` again, each
    ///    with its own fallback when the ramp is too short
    /// 3. `--accent-500`, `--text-color`, `--background-color`
    pub fn variables(&self) -> Vec<(String, String)> {
        let mut writes: Vec<(String, String)> = self
            .slots
            .iter()
            .filter_map(|slot| {
                slot.shade
                    .as_ref()
                    .map(|shade| (slot.variable_name(), shade.clone()))
            })
            .collect();

        let roles = &self.roles;
        let primary_500 = self.ramp.get(5).unwrap_or(&roles.primary);
        let primary_600 = self.ramp.get(6).unwrap_or(&roles.secondary);
        let primary_900 = self
            .ramp
            .get(9)
            .or_else(|| self.ramp.get(8))
            .unwrap_or(&roles.secondary);

        for (name, value) in [
            ("--primary-500", primary_500),
            ("--primary-600", primary_600),
            ("--primary-900", primary_900),
            ("--accent-500", roles.accent.as_str()),
            ("--text-color", roles.text.as_str()),
            ("--background-color", roles.background.as_str()),
        ] {
            writes.push((name.to_string(), value.to_string()));
        }

        writes
    }

    /// Write the variables, then the document colors. Stops at the first
    /// failed write.
    pub fn write_to(&self, sink: &mut dyn StyleSink) -> Result<(), ThemeApplyError> {
        for (name, value) in self.variables() {
            trace!(name = %name, value = %value, "set style variable");
            sink.set_variable(&name, &value)
                .map_err(|source| ThemeApplyError::Variable { name, source })?;
        }

        sink.set_body_colors(&self.roles.text, &self.roles.background)
            .map_err(ThemeApplyError::BodyColors)
    }
}

/// Applies theme records to style sinks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeApplier {
    binding: RampBinding,
}

impl ThemeApplier {
    /// Applier with the reference slot binding
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binding(binding: RampBinding) -> Self {
        Self { binding }
    }

    pub fn binding(&self) -> RampBinding {
        self.binding
    }

    /// Resolve a record without writing anything
    pub fn resolve(&self, config: &ThemeConfig) -> ResolvedTheme {
        ResolvedTheme::resolve(config, self.binding)
    }

    /// Apply a theme record, reporting sink failures.
    ///
    /// A missing record is not an error: nothing is written and `Ok(())`
    /// is returned.
    pub fn try_apply(
        &self,
        config: Option<&ThemeConfig>,
        sink: &mut dyn StyleSink,
    ) -> Result<(), ThemeApplyError> {
        let Some(config) = config else {
            debug!("no theme configuration; leaving styles untouched");
            return Ok(());
        };

        let theme = self.resolve(config);
        debug!(
            binding = self.binding.id(),
            primary = %theme.roles.primary,
            shades = theme.ramp.len(),
            "applying theme"
        );
        theme.write_to(sink)
    }

    /// Apply a theme record. Failures are logged and swallowed so a broken
    /// theme never blocks rendering.
    pub fn apply(&self, config: Option<&ThemeConfig>, sink: &mut dyn StyleSink) {
        if let Err(err) = self.try_apply(config, sink) {
            let cause = std::error::Error::source(&err).map(ToString::to_string);
            error!(error = %err, cause = ?cause, "failed to apply theme; keeping default styles");
        }
    }
}

/// Apply a theme record with the reference binding, never failing
pub fn apply_theme(config: Option<&ThemeConfig>, sink: &mut dyn StyleSink) {
    ThemeApplier::new().apply(config, sink);
}
