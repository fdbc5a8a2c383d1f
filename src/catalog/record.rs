use std::fmt;

/// Stable identifier of a puppy. Used as lookup key and navigation argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuppyId(pub u32);

impl fmt::Display for PuppyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a bundled image asset. Never interpreted by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef(pub &'static str);

/// Display-only tag rendered on list cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

/// A single adoptable puppy.
///
/// Trait scores are normalized to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuppyRecord {
    pub id: PuppyId,
    pub image: ImageRef,
    pub name: &'static str,
    pub barkability: f32,
    pub cuddliness: f32,
    pub guardability: f32,
    pub description: &'static str,
    pub gender: Option<Gender>,
}
