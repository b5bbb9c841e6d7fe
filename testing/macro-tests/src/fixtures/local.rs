use macro_utils::prelude::*;

define_local_enum!(pub Phase, IDLE, RUNNING, DONE);

define_local_enum_without_invalid!(pub Step, ONE = 1, TWO);

/// Public surface over the private lookups.
#[must_use]
pub fn describe(phase: Phase, step: Step) -> String {
    format!("{}:{}", phase_to_string(phase), step_to_string(step))
}
