use crate::core::{Field, Value};
use serde::{Deserialize, Serialize};

/// The current form values; also the JSON body of the registration request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub username: String,
    pub fav_language: String,
    pub fav_food: String,
    pub agreement: bool,
}

impl FormValues {
    pub fn get(&self, field: Field) -> Value {
        match field {
            Field::Username => Value::text(self.username.clone()),
            Field::FavLanguage => Value::text(self.fav_language.clone()),
            Field::FavFood => Value::text(self.fav_food.clone()),
            Field::Agreement => Value::Bool(self.agreement),
        }
    }

    /// Set one field; the other three are untouched.
    pub fn set(&mut self, field: Field, value: Value) {
        match field {
            Field::Username => self.username = text_of(value),
            Field::FavLanguage => self.fav_language = text_of(value),
            Field::FavFood => self.fav_food = text_of(value),
            Field::Agreement => self.agreement = value.to_bool().unwrap_or(false),
        }
    }
}

fn text_of(value: Value) -> String {
    value.as_text().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::FormValues;
    use crate::core::{Field, Value};

    #[test]
    fn payload_keys_are_camel_case() {
        let values = FormValues {
            username: "bob".into(),
            fav_language: "rust".into(),
            fav_food: "pizza".into(),
            agreement: true,
        };
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "bob",
                "favLanguage": "rust",
                "favFood": "pizza",
                "agreement": true,
            })
        );
    }

    #[test]
    fn set_leaves_other_fields_alone() {
        let mut values = FormValues::default();
        values.set(Field::Username, Value::text("bob"));
        values.set(Field::Agreement, Value::Bool(true));

        assert_eq!(values.username, "bob");
        assert_eq!(values.fav_language, "");
        assert_eq!(values.fav_food, "");
        assert!(values.agreement);

        values.set(Field::FavFood, Value::text("pizza"));
        assert_eq!(values.username, "bob");
        assert!(values.agreement);
    }
}
