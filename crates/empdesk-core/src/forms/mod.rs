mod field;
mod payload;
mod schema;
mod validate;

pub use field::{FieldKind, FieldRule, FieldSpec};
pub use payload::{FieldValue, FormPayload, RawInputs};
pub use schema::{
    AuthScheme, Endpoint, FormKind, FormSchema, Navigation, NavigationTarget, SuccessPolicy,
};
pub use validate::{is_valid_email, is_valid_phone, validate, validate_blur, ValidationResult};
