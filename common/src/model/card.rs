use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Department options offered by the original enrollment form. Shells may
/// present these as a fixed choice list; the store accepts any text.
pub const DEPARTMENTS: &[&str] = &[
    "Computer",
    "IT",
    "ECS",
    "EXTC",
    "Automobile",
    "Mechanical",
    "Commerce",
    "Science",
    "Arts",
];

/// A single card-generation request as collected by the presentation shell.
///
/// `name` and `student_id` are mandatory; all other text fields may be left
/// empty and render as blank values after their label. The three image paths
/// are optional assets; an absent or unreadable path is a normal input
/// state, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRequest {
    pub name: String,
    pub student_id: String,
    pub course: String,
    pub year: String,
    pub department: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub background: Option<PathBuf>,
    #[serde(default)]
    pub logo: Option<PathBuf>,
    #[serde(default)]
    pub photo: Option<PathBuf>,
}

impl CardRequest {
    /// Mandatory-field check: rendering must not proceed without both.
    pub fn has_mandatory_fields(&self) -> bool {
        !self.name.trim().is_empty() && !self.student_id.trim().is_empty()
    }
}

/// A persisted row of the `ids` table.
///
/// Created on an explicit save or PDF export, never updated. `student_id` is
/// the natural key for lookup and delete but carries no uniqueness
/// constraint, so several rows may share one id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: Option<i64>,
    pub name: String,
    pub student_id: String,
    pub course: String,
    pub year: String,
    pub department: String,
    pub phone: String,
    pub email: String,
    /// Empty when the record was saved without producing a PDF.
    pub pdf_path: String,
}

impl CardRecord {
    pub fn from_request(request: &CardRequest, pdf_path: &str) -> Self {
        Self {
            id: None,
            name: request.name.clone(),
            student_id: request.student_id.clone(),
            course: request.course.clone(),
            year: request.year.clone(),
            department: request.department.clone(),
            phone: request.phone.clone(),
            email: request.email.clone(),
            pdf_path: pdf_path.to_string(),
        }
    }

    /// Rebuild a request from a stored record, e.g. for re-exporting a card.
    /// Image assets are not persisted, so the request carries none.
    pub fn to_request(&self) -> CardRequest {
        CardRequest {
            name: self.name.clone(),
            student_id: self.student_id.clone(),
            course: self.course.clone(),
            year: self.year.clone(),
            department: self.department.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            background: None,
            logo: None,
            photo: None,
        }
    }
}
