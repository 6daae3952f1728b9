use serde::{Deserialize, Serialize};

/// Academic levels a material can belong to.
pub const LEVELS: [u32; 4] = [100, 200, 300, 400];

/// A single course material as served by the API. Immutable once fetched;
/// the catalog is replaced wholesale on every fetch, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Academic level (100, 200, 300, 400).
    pub level: u32,
    pub course_code: String,
    pub course_title: String,
    pub description: String,
    /// URL of the uploaded file (e.g. a PDF).
    #[serde(rename = "material")]
    pub file_url: String,
    /// ISO-8601 timestamps as sent by the server. The client never
    /// computes with them, only displays them.
    pub created_at: String,
    pub updated_at: String,
}

impl Material {
    /// Case-insensitive substring match of `term` against the three
    /// searchable fields. An empty term matches everything.
    pub fn matches_term(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.course_code.to_lowercase().contains(&needle)
            || self.course_title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    pub fn matches_level(&self, level: Option<u32>) -> bool {
        level.is_none_or(|l| self.level == l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Material {
        Material {
            id: "m1".to_string(),
            level: 200,
            course_code: "CSC 249.2".to_string(),
            course_title: "Data Structures".to_string(),
            description: "Linked lists and trees".to_string(),
            file_url: "https://files.example/m1.pdf".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-02T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn term_matching_is_case_insensitive_across_fields() {
        let m = sample();
        assert!(m.matches_term("csc"));
        assert!(m.matches_term("STRUCTURES"));
        assert!(m.matches_term("linked LIST"));
        assert!(!m.matches_term("quantum"));
        assert!(m.matches_term(""));
    }

    #[test]
    fn level_predicate() {
        let m = sample();
        assert!(m.matches_level(None));
        assert!(m.matches_level(Some(200)));
        assert!(!m.matches_level(Some(400)));
    }

    #[test]
    fn deserializes_wire_field_names() {
        let json = r#"{
            "_id": "abc",
            "level": 300,
            "courseCode": "PHY 301",
            "courseTitle": "Waves",
            "description": "Lecture notes",
            "material": "https://files.example/waves.pdf",
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-01T10:00:00Z"
        }"#;
        let m: Material = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, "abc");
        assert_eq!(m.course_code, "PHY 301");
        assert_eq!(m.file_url, "https://files.example/waves.pdf");
    }
}
