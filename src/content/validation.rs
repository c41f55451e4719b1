//! Validation for tuning values before they reach the controller.

use super::data::{PogoTuningDef, TUNING_SCHEMA_VERSION};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub rule: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tuning field '{}' = {} must be {}",
            self.field, self.value, self.rule
        )
    }
}

/// Helper macro for checking a value is finite and above zero
macro_rules! check_positive {
    ($errors:expr, $def:expr, $field:ident) => {
        if !($def.$field.is_finite() && $def.$field > 0.0) {
            $errors.push(ValidationError {
                field: stringify!($field),
                value: $def.$field,
                rule: "a positive number",
            });
        }
    };
}

/// Validate tuning values.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(def: &PogoTuningDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if def.schema_version != TUNING_SCHEMA_VERSION {
        errors.push(ValidationError {
            field: "schema_version",
            value: def.schema_version as f32,
            rule: "the supported schema version",
        });
    }

    check_positive!(errors, def, charge_speed);
    check_positive!(errors, def, max_charge);
    check_positive!(errors, def, jump_force);
    check_positive!(errors, def, lean_speed);
    check_positive!(errors, def, lean_return_speed);
    check_positive!(errors, def, ground_radius);
    check_positive!(errors, def, body_mass);
    check_positive!(errors, def, gravity);
    check_positive!(errors, def, pixels_per_unit);

    // A full lean must still point the jump upward
    if !(def.max_lean_angle > 0.0 && def.max_lean_angle < 90.0) {
        errors.push(ValidationError {
            field: "max_lean_angle",
            value: def.max_lean_angle,
            rule: "between 0 and 90 degrees",
        });
    }

    errors
}
