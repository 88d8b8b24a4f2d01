//! Class-coverage check for sampled candidates.

use crate::charset::{CharClass, ClassSet};

/// Returns the classes that occur at least once in `candidate`.
pub fn present_classes(candidate: &str) -> ClassSet {
    candidate.chars().filter_map(CharClass::classify).collect()
}

/// Returns the classes in `required` that `candidate` does not contain.
pub fn missing_classes(candidate: &str, required: ClassSet) -> ClassSet {
    let present = present_classes(candidate);
    required
        .iter()
        .filter(|class| !present.contains(*class))
        .collect()
}

/// Returns true if `candidate` contains a character of every class in
/// `required`.
pub fn meets_requirements(candidate: &str, required: ClassSet) -> bool {
    missing_classes(candidate, required).is_empty()
}
