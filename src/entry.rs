use chrono::Local;

/// Format of the creation timestamp stored in the `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, second precision, in [`DATE_FORMAT`]
pub fn timestamp_now() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// The four free-text fields a user fills in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFields {
    pub topic: String,
    pub what_i_know: String,
    pub questions: String,
    pub aha_moments: String,
}

impl EntryFields {
    pub fn new(
        topic: impl Into<String>,
        what_i_know: impl Into<String>,
        questions: impl Into<String>,
        aha_moments: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            what_i_know: what_i_know.into(),
            questions: questions.into(),
            aha_moments: aha_moments.into(),
        }
    }
}

/// One journal record as stored in the `entries` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    /// Set once at creation, never touched by edits
    pub date: String,
    pub topic: String,
    pub what_i_know: String,
    pub questions: String,
    pub aha_moments: String,
}

impl Entry {
    /// Parse `date` back into a timestamp. Rows written by other tools may not
    /// follow [`DATE_FORMAT`], so this yields `None` rather than failing.
    #[cfg(test)]
    pub(crate) fn created_at(&self) -> Option<chrono::NaiveDateTime> {
        chrono::NaiveDateTime::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Current values of the mutable fields
    pub fn fields(&self) -> EntryFields {
        EntryFields {
            topic: self.topic.clone(),
            what_i_know: self.what_i_know.clone(),
            questions: self.questions.clone(),
            aha_moments: self.aha_moments.clone(),
        }
    }
}
