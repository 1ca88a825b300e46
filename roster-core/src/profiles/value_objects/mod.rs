//! Profile value objects
//! Validated on creation and immutable afterwards. Each one checks only its
//! own shape; cross-field consistency is the builder's concern.

mod age;
mod profile_name;

pub use age::{Age, AgeError};
pub use profile_name::{MAX_PROFILE_NAME_LEN, ProfileName, ProfileNameError};
