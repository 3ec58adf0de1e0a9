//! Password policy rules
//!
//! Each rule inspects one [`PasswordRecord`](crate::PasswordRecord) and
//! answers whether it complies.

mod occurrence;
mod positional;

pub use occurrence::occurrence_policy;
pub use positional::positional_policy;
