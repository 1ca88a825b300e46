use crate::config::AgeRange;
use crate::generation::{AgeGenerator, NameGenerator};

/// Source of the non-role fields of a profile.
pub trait ProfileFields {
    /// Display name for the profile.
    fn name(&self) -> String;
    /// Age in years.
    fn age(&self) -> u32;
}

/// Caller-supplied name and age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitFields {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
}

impl ExplicitFields {
    /// Fields with the given name and age.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl ProfileFields for ExplicitFields {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn age(&self) -> u32 {
        self.age
    }
}

/// Name and age drawn from injected generators.
pub struct GeneratedFields<'a> {
    names: &'a dyn NameGenerator,
    ages: &'a dyn AgeGenerator,
    range: AgeRange,
}

impl std::fmt::Debug for GeneratedFields<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedFields")
            .field("names", &"&dyn NameGenerator")
            .field("ages", &"&dyn AgeGenerator")
            .field("range", &self.range)
            .finish()
    }
}

impl<'a> GeneratedFields<'a> {
    /// Draw ages from `range`.
    pub fn new(
        names: &'a dyn NameGenerator,
        ages: &'a dyn AgeGenerator,
        range: AgeRange,
    ) -> Self {
        Self { names, ages, range }
    }
}

impl ProfileFields for GeneratedFields<'_> {
    fn name(&self) -> String {
        self.names.generate_name()
    }

    fn age(&self) -> u32 {
        self.ages.generate_age(self.range.min, self.range.max)
    }
}
