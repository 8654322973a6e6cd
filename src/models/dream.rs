use serde::Serialize;

/// A dream-number interpretation, managed as plain CRUD content by the
/// operator and read-only for public listings. The number columns stay
/// operator-entered comma strings, matching the stored shape.
#[derive(Debug, Clone, Serialize)]
pub struct DreamEntry {
    pub id: i64,            // ⇔ dreams.id (INTEGER PK)
    pub dream: String,      // ⇔ dreams.dream (TEXT, the dream description)
    pub direct: String,     // ⇔ dreams.direct (TEXT, comma-joined)
    pub house: String,      // ⇔ dreams.house (TEXT)
    pub ending: String,     // ⇔ dreams.ending (TEXT)
    pub created_at: String, // ⇔ dreams.created_at (TEXT, ISO8601)
}

impl DreamEntry {
    pub fn new(dream: String, direct: String, house: String, ending: String) -> Self {
        Self {
            id: 0,
            dream,
            direct,
            house,
            ending,
            created_at: chrono::Local::now().to_rfc3339(),
        }
    }
}
