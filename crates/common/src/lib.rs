//! Substitution codec, input validation, protocol types, and errors shared
//! across `vowelsub-svc` crates.

pub mod codec;
pub mod error;
pub mod protocol;
pub mod validate;

pub use codec::SubstitutionCodec;
pub use error::ServiceError;
