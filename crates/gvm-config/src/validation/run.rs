//! Run section validation (steps, delay).

use crate::schema::GvmConfig;

use super::helpers::validate_range;

pub(crate) fn validate_run(errors: &mut Vec<String>, config: &GvmConfig) {
    validate_range(errors, "run.steps", config.run.steps, 1, 1_000_000);
    validate_range(errors, "run.delay", config.run.delay, 0, 1000);
}
