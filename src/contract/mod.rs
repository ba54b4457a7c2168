//! The validation-error contract: the envelope an API returns for invalid
//! input, and the checks applied to it.

mod assertions;
mod envelope;

pub use assertions::{FieldExpectation, check_validation_response};
pub use envelope::{DetailEntry, ErrorBody, ErrorEnvelope, VALIDATION_MESSAGE, VALIDATION_STATUS};
