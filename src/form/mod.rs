//! Booking form slot validation: normalizers, the per-field rule table, and
//! the stateless pipeline the Dialogue Engine calls once per turn.

pub mod normalize;
pub mod pipeline;
pub mod validate;

pub use pipeline::{
    confirmation, extract, finalize, finalize_at, next_field, state_from_raw, status, summarize,
    validate_slots, FormError, FormStatus, SlotUpdate,
};
pub use validate::{validate, Validation};
