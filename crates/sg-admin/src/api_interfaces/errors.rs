use serde::Deserialize;

/// Error body returned by the provider on rejected requests.
#[derive(Deserialize, Debug)]
pub struct Response {
    pub errors: Vec<Item>,
}

#[derive(Deserialize, Debug)]
pub struct Item {
    pub field: Option<String>,
    pub message: String,
}

impl Item {
    pub fn describe(&self) -> String {
        match self.field.as_deref() {
            Some(field) if !field.is_empty() => format!("{} (field: {})", self.message, field),
            _ => self.message.clone(),
        }
    }
}
