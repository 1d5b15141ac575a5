use crate::core::{FIELDS, Field, Value};
use crate::form::values::FormValues;
use indexmap::IndexMap;

// Error messages, one per rule, exactly as the server-side contract words them.
pub const USERNAME_REQUIRED: &str = "username is required";
pub const USERNAME_MIN: &str = "username must be at least 3 characters";
pub const USERNAME_MAX: &str = "username cannot exceed 20 characters";
pub const FAV_LANGUAGE_REQUIRED: &str = "favLanguage is required";
pub const FAV_LANGUAGE_OPTIONS: &str = "favLanguage must be either javascript or rust";
pub const FAV_FOOD_REQUIRED: &str = "favFood is required";
pub const FAV_FOOD_OPTIONS: &str = "favFood must be either broccoli, spaghetti or pizza";
pub const AGREEMENT_REQUIRED: &str = "agreement is required";
pub const AGREEMENT_OPTIONS: &str = "agreement must be accepted";

/// One constraint in a field's rule chain, carrying the exact message to
/// emit when it is the first rule violated.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required { message: String },
    MinLength { min: usize, message: String },
    MaxLength { max: usize, message: String },
    OneOf { options: Vec<String>, message: String },
    Equals { expected: bool, message: String },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::MaxLength {
            max,
            message: message.into(),
        }
    }

    pub fn one_of<I, S>(options: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf {
            options: options.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    pub fn equals(expected: bool, message: impl Into<String>) -> Self {
        Self::Equals {
            expected,
            message: message.into(),
        }
    }

    /// Check `value` against this rule. The caller passes the trimmed form.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match self {
            Self::Required { message } => {
                if value.is_empty() {
                    return Err(message.clone());
                }
                Ok(())
            }
            Self::MinLength { min, message } => match value.as_text() {
                Some(text) if text.chars().count() < *min => Err(message.clone()),
                _ => Ok(()),
            },
            Self::MaxLength { max, message } => match value.as_text() {
                Some(text) if text.chars().count() > *max => Err(message.clone()),
                _ => Ok(()),
            },
            Self::OneOf { options, message } => match value.as_text() {
                Some(text) if options.iter().any(|option| option == text) => Ok(()),
                _ => Err(message.clone()),
            },
            Self::Equals { expected, message } => {
                if value.to_bool() == Some(*expected) {
                    return Ok(());
                }
                Err(message.clone())
            }
        }
    }
}

/// Ordered rule chain for one field. Evaluation stops at the first
/// violation; its message is the field's error.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRules {
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn check(&self, value: &Value) -> Result<(), String> {
        let trimmed = value.trimmed();
        for rule in &self.rules {
            rule.check(&trimmed)?;
        }
        Ok(())
    }
}

/// The declarative schema: every field's rule chain, in declaration order.
pub struct FormSchema {
    fields: IndexMap<Field, FieldRules>,
}

impl FormSchema {
    /// The registration schema for the four fields.
    pub fn registration() -> Self {
        let mut fields = IndexMap::new();
        fields.insert(
            Field::Username,
            FieldRules::new(vec![
                Rule::required(USERNAME_REQUIRED),
                Rule::min_length(3, USERNAME_MIN),
                Rule::max_length(20, USERNAME_MAX),
            ]),
        );
        fields.insert(
            Field::FavLanguage,
            FieldRules::new(vec![
                Rule::required(FAV_LANGUAGE_REQUIRED),
                Rule::one_of(["javascript", "rust"], FAV_LANGUAGE_OPTIONS),
            ]),
        );
        fields.insert(
            Field::FavFood,
            FieldRules::new(vec![
                Rule::required(FAV_FOOD_REQUIRED),
                Rule::one_of(["broccoli", "spaghetti", "pizza"], FAV_FOOD_OPTIONS),
            ]),
        );
        fields.insert(
            Field::Agreement,
            FieldRules::new(vec![
                Rule::required(AGREEMENT_REQUIRED),
                Rule::equals(true, AGREEMENT_OPTIONS),
            ]),
        );
        Self { fields }
    }

    /// Run only `field`'s rule chain against `value`.
    pub fn validate_field(&self, field: Field, value: &Value) -> Result<(), String> {
        match self.fields.get(&field) {
            Some(rules) => rules.check(value),
            None => Ok(()),
        }
    }

    /// Validate the complete value set. Used to derive the submit flag.
    pub fn is_valid(&self, values: &FormValues) -> bool {
        FIELDS
            .iter()
            .all(|field| self.validate_field(*field, &values.get(*field)).is_ok())
    }
}
