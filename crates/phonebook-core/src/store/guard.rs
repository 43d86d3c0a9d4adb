//! Duplicate guard
//!
//! Validation run on every submission, before any create request is sent.
//! Names and numbers are compared exactly (case-sensitive), unlike the
//! case-insensitive search filter.

use crate::error::ValidationError;
use crate::model::{Contact, NewContact};

/// Validation gate preventing two contacts from sharing a name or a number
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateGuard;

impl DuplicateGuard {
    /// Validate a candidate against the current list
    ///
    /// # Returns
    ///
    /// - `Ok(NewContact)`: the candidate, ready to be sent
    /// - `Err(ValidationError)`: the first violation, in the order
    ///   missing field, duplicate name, duplicate number
    pub fn check(
        name: &str,
        number: &str,
        contacts: &[Contact],
    ) -> Result<NewContact, ValidationError> {
        match Self::violations(name, number, contacts).into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(NewContact::new(name, number)),
        }
    }

    /// Evaluate every check over the whole list
    ///
    /// Empty fields short-circuit: an empty value is never reported as a
    /// duplicate.
    pub fn violations(name: &str, number: &str, contacts: &[Contact]) -> Vec<ValidationError> {
        if name.is_empty() || number.is_empty() {
            return vec![ValidationError::MissingField];
        }

        let mut name_taken = false;
        let mut number_taken = false;
        for contact in contacts {
            name_taken |= contact.name == name;
            number_taken |= contact.number == number;
        }

        let mut violations = Vec::new();
        if name_taken {
            violations.push(ValidationError::DuplicateName {
                name: name.to_string(),
            });
        }
        if number_taken {
            violations.push(ValidationError::DuplicateNumber {
                number: number.to_string(),
            });
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts() -> Vec<Contact> {
        vec![
            Contact::new("1", "Ann", "123"),
            Contact::new("2", "Bob", "456"),
        ]
    }

    #[test]
    fn test_accepts_fresh_contact() {
        let accepted = DuplicateGuard::check("Cy", "789", &contacts()).unwrap();
        assert_eq!(accepted, NewContact::new("Cy", "789"));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            DuplicateGuard::check("", "789", &contacts()),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            DuplicateGuard::check("Cy", "", &contacts()),
            Err(ValidationError::MissingField)
        );
        assert_eq!(DuplicateGuard::check("", "", &[]), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_duplicate_name_wins_over_number() {
        let violations = DuplicateGuard::violations("Ann", "456", &contacts());
        assert_eq!(
            violations,
            vec![
                ValidationError::DuplicateName {
                    name: "Ann".to_string()
                },
                ValidationError::DuplicateNumber {
                    number: "456".to_string()
                },
            ]
        );
        assert!(matches!(
            DuplicateGuard::check("Ann", "456", &contacts()),
            Err(ValidationError::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_name_comparison_is_case_sensitive() {
        assert!(DuplicateGuard::check("ann", "999", &contacts()).is_ok());
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert!(DuplicateGuard::check("Ann ", "999", &contacts()).is_ok());
    }
}
