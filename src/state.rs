//! Page View State
//!
//! Pure state types and transitions for the create-point page. Everything
//! here is plain data, so the form logic stays testable off the browser.

use crate::models::NewPoint;

/// Contact fields, merged generically by input name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

impl ContactForm {
    /// Merge a single field keyed by the input's `name` attribute.
    /// Unknown names are ignored.
    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "whatsapp" => self.whatsapp = value,
            _ => {}
        }
    }
}

/// Toggle an item id: remove when present, append when absent.
pub fn toggle_item(selected: &mut Vec<u32>, id: u32) {
    if let Some(index) = selected.iter().position(|&it| it == id) {
        selected.remove(index);
    } else {
        selected.push(id);
    }
}

/// Parse a `<select>` value into a selection. The placeholder option has an
/// empty value, which means unselected.
pub fn parse_selection(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Generation counter guarding the dependent cities fetch: a response is
/// applied only while its token is still the newest one issued, so a late
/// response for a previously selected state cannot overwrite a newer list.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestGuard {
    current: u32,
}

impl RequestGuard {
    /// Start a new request and return its token, invalidating earlier ones.
    pub fn begin(&mut self) -> u32 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    pub fn is_current(&self, token: u32) -> bool {
        self.current == token
    }
}

/// Assemble the submit payload. Unselected UF/city become empty strings;
/// no validation happens here.
pub fn assemble_point(
    form: &ContactForm,
    uf: Option<String>,
    city: Option<String>,
    position: (f64, f64),
    items: Vec<u32>,
) -> NewPoint {
    let (latitude, longitude) = position;
    NewPoint {
        name: form.name.clone(),
        email: form.email.clone(),
        whatsapp: form.whatsapp.clone(),
        uf: uf.unwrap_or_default(),
        city: city.unwrap_or_default(),
        latitude,
        longitude,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn toggling_twice_restores_the_selection() {
        let mut selected = vec![1, 3];

        toggle_item(&mut selected, 2);
        assert_eq!(selected, vec![1, 3, 2]);

        toggle_item(&mut selected, 2);
        assert_eq!(selected, vec![1, 3]);
    }

    #[test]
    fn toggling_a_selected_id_removes_it_in_place() {
        let mut selected = vec![1, 2, 3];

        toggle_item(&mut selected, 2);
        assert_eq!(selected, vec![1, 3]);
    }

    #[test]
    fn set_field_touches_only_the_named_field() {
        let mut form = ContactForm {
            name: "Acme".to_string(),
            email: String::new(),
            whatsapp: "123".to_string(),
        };

        form.set_field("email", "a@a.com".to_string());

        assert_eq!(form.name, "Acme");
        assert_eq!(form.email, "a@a.com");
        assert_eq!(form.whatsapp, "123");
    }

    #[test]
    fn set_field_ignores_unknown_names() {
        let mut form = ContactForm::default();
        form.set_field("company", "Acme".to_string());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn empty_select_value_means_unselected() {
        assert_eq!(parse_selection(String::new()), None);
        assert_eq!(parse_selection("SP".to_string()), Some("SP".to_string()));
    }

    #[test]
    fn guard_rejects_tokens_superseded_by_a_newer_request() {
        let mut guard = RequestGuard::default();

        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn assembled_payload_matches_the_wire_format() {
        let form = ContactForm {
            name: "Acme".to_string(),
            email: "a@a.com".to_string(),
            whatsapp: "123".to_string(),
        };

        let point = assemble_point(
            &form,
            Some("SP".to_string()),
            Some("São Paulo".to_string()),
            (-23.5, -46.6),
            vec![1, 3],
        );

        assert_eq!(
            serde_json::to_value(&point).unwrap(),
            json!({
                "name": "Acme",
                "email": "a@a.com",
                "whatsapp": "123",
                "uf": "SP",
                "city": "São Paulo",
                "latitude": -23.5,
                "longitude": -46.6,
                "items": [1, 3]
            })
        );
    }

    #[test]
    fn unselected_geography_serializes_as_empty_strings() {
        let point = assemble_point(&ContactForm::default(), None, None, (0.0, 0.0), Vec::new());
        assert_eq!(point.uf, "");
        assert_eq!(point.city, "");
    }
}
