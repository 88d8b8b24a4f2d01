//! Property tests for password generation over arbitrary policies.

use proptest::prelude::*;
use secure_passgen::{meets_requirements, CharClass, PasswordGenerator, Policy, PolicyError};

/// Strategy: policies that some password can satisfy.
fn arb_valid_policy() -> impl Strategy<Value = Policy> {
    (any::<[bool; 4]>(), 0usize..40).prop_map(|(flags, extra)| {
        let [upper, lower, digits, symbols] = flags;
        let policy = Policy::new(1, upper, lower, digits, symbols);
        let required = policy.classes().len();
        policy.with_length(required + extra)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn password_has_requested_length(policy in arb_valid_policy()) {
        let generator = PasswordGenerator::new(policy.clone()).unwrap();
        let password = generator.generate();
        prop_assert_eq!(password.chars().count(), policy.length);
    }

    #[test]
    fn password_covers_every_active_class(policy in arb_valid_policy()) {
        let generator = PasswordGenerator::new(policy.clone()).unwrap();
        let password = generator.generate();

        for class in policy.classes().iter() {
            prop_assert!(
                password.chars().any(|c| class.contains(c)),
                "{} missing from {:?}", class, password
            );
        }
        prop_assert!(meets_requirements(&password, generator.classes()));
    }

    #[test]
    fn password_stays_inside_alphabet(policy in arb_valid_policy()) {
        let generator = PasswordGenerator::new(policy.clone()).unwrap();
        let password = generator.generate();
        let classes = policy.classes();

        for c in password.chars() {
            prop_assert!(generator.alphabet().contains(c));
            let class = CharClass::classify(c);
            prop_assert!(class.map_or(false, |class| classes.contains(class)));
        }
    }

    #[test]
    fn no_classes_behaves_like_lowercase(length in 1usize..64) {
        let none = PasswordGenerator::new(Policy::new(length, false, false, false, false)).unwrap();
        let lower = PasswordGenerator::new(Policy::new(length, false, true, false, false)).unwrap();

        prop_assert_eq!(none.alphabet(), lower.alphabet());
        prop_assert_eq!(none.classes(), lower.classes());
        prop_assert!(none.generate().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn too_short_policy_is_rejected(flags in any::<[bool; 4]>()) {
        let [upper, lower, digits, symbols] = flags;
        let policy = Policy::new(1, upper, lower, digits, symbols);
        let required = policy.classes().len();

        for length in 0..required {
            let result = PasswordGenerator::new(policy.clone().with_length(length));
            prop_assert!(result.is_err());
            if length == 0 {
                prop_assert!(matches!(result, Err(PolicyError::ZeroLength)));
            } else {
                prop_assert!(
                    matches!(result, Err(PolicyError::Unsatisfiable { .. })),
                    "length {} should be unsatisfiable", length
                );
            }
        }
    }
}

#[test]
fn four_character_policy_uses_each_class_once() {
    let generator = PasswordGenerator::new(Policy::new(4, true, true, true, true)).unwrap();
    let password = generator.generate();

    let mut seen: Vec<CharClass> = password.chars().filter_map(CharClass::classify).collect();
    seen.sort();
    assert_eq!(seen, CharClass::ALL.to_vec());
}

#[test]
fn three_character_policy_with_all_classes_fails() {
    let result = PasswordGenerator::new(Policy::new(3, true, true, true, true));
    assert_eq!(
        result.unwrap_err(),
        PolicyError::Unsatisfiable {
            length: 3,
            required: 4
        }
    );
}
