use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Company,
    Email,
    ProjectType,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Company,
        Field::Email,
        Field::ProjectType,
        Field::Message,
    ];

    /// Maps an input's `name` attribute to a field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "company" => Some(Field::Company),
            "email" => Some(Field::Email),
            "type" | "projectType" => Some(Field::ProjectType),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Company => "company",
            Field::Email => "email",
            Field::ProjectType => "type",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Company => "Company",
            Field::Email => "Email",
            Field::ProjectType => "Type of Project",
            Field::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Message)
    }
}

/// Contact form values, serialized as the relay template's parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub message: String,
}

impl ContactForm {
    /// Stores `value` verbatim.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Email => &self.email,
            Field::ProjectType => &self.project_type,
            Field::Message => &self.message,
        }
    }

    /// Required fields that are empty, in form order. Same rule as the
    /// browser's `required` attribute: whitespace counts as a value.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Company => &mut self.company,
            Field::Email => &mut self.email,
            Field::ProjectType => &mut self.project_type,
            Field::Message => &mut self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_names_resolve_to_fields() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("projectType"), Some(Field::ProjectType));
        assert_eq!(Field::from_name("phone"), None);
    }

    #[test]
    fn values_are_stored_verbatim() {
        let mut form = ContactForm::default();
        form.update_field(Field::Message, "  <b>hi</b>\n");
        assert_eq!(form.get(Field::Message), "  <b>hi</b>\n");
    }

    #[test]
    fn only_required_fields_are_reported_missing() {
        let mut form = ContactForm::default();
        assert_eq!(
            form.missing_required(),
            vec![Field::Name, Field::Email, Field::Message]
        );

        form.update_field(Field::Name, "Jane");
        form.update_field(Field::Email, "a@b.com");
        assert_eq!(form.missing_required(), vec![Field::Message]);

        form.update_field(Field::Message, "hi");
        assert!(form.missing_required().is_empty());
    }

    #[test]
    fn whitespace_satisfies_required_like_the_browser() {
        let mut form = ContactForm::default();
        form.update_field(Field::Name, " ");
        form.update_field(Field::Email, "a@b.com");
        form.update_field(Field::Message, "   ");
        assert!(form.missing_required().is_empty());
    }

    #[test]
    fn serializes_with_template_keys() {
        let mut form = ContactForm::default();
        form.update_field(Field::Name, "Jane");
        form.update_field(Field::ProjectType, "MLOps");
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({
                "name": "Jane",
                "company": "",
                "email": "",
                "type": "MLOps",
                "message": "",
            })
        );
    }
}
