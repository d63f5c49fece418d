//! Modal form handling: field state, validation, and envelope submission.

mod descriptor;
mod submit;
mod validate;

pub use descriptor::{Field, FieldKind, FormState};
pub use submit::{submit, SubmitError, SubmitMethod, SubmitSpec};
pub use validate::{validate, ValidationResult};
