//! Rejection-sampling password generator.
//!
//! Every position is drawn uniformly from the same alphabet and only
//! whole candidates are rejected, so the required characters are not
//! biased toward any position.

use super::requirements::meets_requirements;
use crate::charset::{Alphabet, ClassSet};
use crate::policy::{Policy, PolicyError};
use rand::distributions::{Distribution, Uniform};
use rand_core::{CryptoRng, OsRng, RngCore};

/// Generates passwords satisfying a validated [`Policy`].
///
/// The generator holds only immutable state, so a single instance can
/// be shared across threads and `generate` called concurrently.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    policy: Policy,
    classes: ClassSet,
    alphabet: Alphabet,
    index: Uniform<usize>,
}

impl PasswordGenerator {
    /// Creates a generator for `policy`.
    ///
    /// Fails if the policy has zero length or requires more classes than
    /// it has positions; sampling for such a policy would never finish.
    pub fn new(policy: Policy) -> Result<Self, PolicyError> {
        policy.validate()?;

        let classes = policy.classes();
        let alphabet = Alphabet::from_classes(classes);
        // Non-empty: a valid policy has at least one class
        let index = Uniform::from(0..alphabet.len());

        tracing::debug!(
            length = policy.length,
            classes = ?classes,
            alphabet_len = alphabet.len(),
            "Password generator configured"
        );

        Ok(Self {
            policy,
            classes,
            alphabet,
            index,
        })
    }

    /// Generates a password using operating system entropy.
    pub fn generate(&self) -> String {
        self.generate_with(&mut OsRng)
    }

    /// Generates a password drawing from `rng`.
    pub fn generate_with<R: RngCore + CryptoRng>(&self, rng: &mut R) -> String {
        let mut rejected: u64 = 0;
        loop {
            let candidate = self.sample(rng);
            if meets_requirements(&candidate, self.classes) {
                tracing::trace!(rejected, "Candidate accepted");
                return candidate;
            }
            rejected += 1;
        }
    }

    /// Generates `count` passwords using operating system entropy.
    pub fn generate_many(&self, count: usize) -> Vec<String> {
        self.generate_many_with(&mut OsRng, count)
    }

    /// Generates `count` passwords drawing from `rng`.
    pub fn generate_many_with<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Vec<String> {
        (0..count).map(|_| self.generate_with(rng)).collect()
    }

    /// Draws one candidate of the policy length.
    fn sample<R: RngCore>(&self, rng: &mut R) -> String {
        let chars = self.alphabet.as_bytes();
        (0..self.policy.length)
            .map(|_| chars[self.index.sample(rng)] as char)
            .collect()
    }

    /// The policy this generator was built from.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Effective required classes, after normalization.
    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    /// The alphabet passwords are drawn from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharClass;
    use crate::rng::SessionRng;

    #[test]
    fn test_letters_and_digits_policy() {
        let generator = PasswordGenerator::new(Policy::new(8, true, true, true, false)).unwrap();
        let password = generator.generate();

        assert_eq!(password.len(), 8);
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(!password.chars().any(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_no_classes_yields_lowercase() {
        let generator =
            PasswordGenerator::new(Policy::new(1, false, false, false, false)).unwrap();
        let password = generator.generate();

        assert_eq!(password.len(), 1);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_no_classes_matches_lowercase_only() {
        let none = PasswordGenerator::new(Policy::new(12, false, false, false, false)).unwrap();
        let lower = PasswordGenerator::new(Policy::new(12, false, true, false, false)).unwrap();

        assert_eq!(none.alphabet(), lower.alphabet());
        assert_eq!(none.classes(), lower.classes());
    }

    #[test]
    fn test_unsatisfiable_policy_fails_fast() {
        let result = PasswordGenerator::new(Policy::new(3, true, true, true, true));
        assert!(matches!(
            result,
            Err(PolicyError::Unsatisfiable {
                length: 3,
                required: 4
            })
        ));
    }

    #[test]
    fn test_zero_length_fails() {
        let result = PasswordGenerator::new(Policy::default().with_length(0));
        assert!(matches!(result, Err(PolicyError::ZeroLength)));
    }

    #[test]
    fn test_minimum_length_one_of_each() {
        let generator = PasswordGenerator::new(Policy::new(4, true, true, true, true)).unwrap();

        for _ in 0..20 {
            let password = generator.generate();
            assert_eq!(password.len(), 4);
            for class in CharClass::ALL {
                let count = password.chars().filter(|c| class.contains(*c)).count();
                assert_eq!(count, 1, "{} in {:?}", class, password);
            }
        }
    }

    #[test]
    fn test_successive_calls_differ() {
        let generator = PasswordGenerator::new(Policy::default()).unwrap();
        assert_ne!(generator.generate(), generator.generate());
    }

    #[test]
    fn test_same_seed_reproduces_password() {
        let generator = PasswordGenerator::new(Policy::default()).unwrap();
        let mut rng1 = SessionRng::from_seed_for_testing([0x42; 32]);
        let mut rng2 = SessionRng::from_seed_for_testing([0x42; 32]);

        assert_eq!(
            generator.generate_with(&mut rng1),
            generator.generate_with(&mut rng2)
        );
    }

    #[test]
    fn test_generate_many() {
        let generator = PasswordGenerator::new(Policy::default().with_length(10)).unwrap();
        let mut rng = SessionRng::from_seed_for_testing([0x07; 32]);
        let passwords = generator.generate_many_with(&mut rng, 5);

        assert_eq!(passwords.len(), 5);
        for password in &passwords {
            assert_eq!(password.len(), 10);
            assert!(meets_requirements(password, generator.classes()));
        }
        assert!(generator.generate_many(0).is_empty());
    }

    #[test]
    fn test_generator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PasswordGenerator>();

        let generator = PasswordGenerator::new(Policy::default()).unwrap();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let password = generator.generate();
                    assert_eq!(password.len(), 16);
                });
            }
        });
    }
}
