// SPDX-License-Identifier: MPL-2.0
//! Payload handed to the cipher service once the form is valid.

use serde::{Deserialize, Serialize};

/// HTTP method the form declares.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormMethod {
    Get,
    #[default]
    Post,
}

impl FormMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FormMethod::Get => "GET",
            FormMethod::Post => "POST",
        }
    }
}

/// One submitted name/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedField {
    pub name: &'static str,
    pub value: String,
}

/// A validated cipher request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Target the form posts to (e.g. `/encrypt`).
    pub action: String,
    pub method: FormMethod,
    pub fields: Vec<SubmittedField>,
}

impl Submission {
    /// Returns the submitted value for `name`, if it was sent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FormMethod::Post).expect("serialize"),
            "\"post\""
        );
        assert_eq!(FormMethod::Get.as_str(), "GET");
    }

    #[test]
    fn get_finds_submitted_values() {
        let submission = Submission {
            action: "/encrypt".into(),
            method: FormMethod::Post,
            fields: vec![SubmittedField {
                name: "message",
                value: "HELLO".into(),
            }],
        };
        assert_eq!(submission.get("message"), Some("HELLO"));
        assert_eq!(submission.get("rail_fence_key"), None);
    }
}
