//! Profile construction
//!
//! - [`Profile`]: the immutable record
//! - [`ProfileBuilder`]: field accumulator with a validating `build()`
//! - [`ProfileFactory`]: registry-aware facade producing complete profiles

mod builder;
mod factory;
mod fields;
mod profile;
pub mod value_objects;

pub use builder::ProfileBuilder;
pub use factory::ProfileFactory;
pub use fields::{ExplicitFields, GeneratedFields, ProfileFields};
pub use profile::Profile;
pub use value_objects::{Age, AgeError, ProfileName, ProfileNameError};
