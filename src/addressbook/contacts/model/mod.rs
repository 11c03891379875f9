use serde::Serialize;

/// Identifier of a person in the store (`ABPerson.ROWID`). It is the join key
/// between a person and their multi-value attributes.
pub type PersonKey = i64;

/// Header of both output files, in output order.
pub const COLUMNS: [&str; 10] = [
    "Name",
    "DOB",
    "Organization",
    "Title",
    "Note",
    "Phone1",
    "Phone2",
    "Phone3",
    "Email1",
    "Email2",
];

/// Raw birthday as found in the store.
#[derive(Debug, Clone, PartialEq)]
pub enum BirthdayRaw {
    /// Numeric seconds relative to the store's reference epoch.
    Seconds(f64),
    /// Text that still has to be parsed as seconds.
    Text(String),
}

/// Scalar fields of a person. Every field is optional in the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonRecord {
    pub prefix: Option<String>,
    pub first: Option<String>,
    pub middle: Option<String>,
    pub last: Option<String>,
    pub suffix: Option<String>,
    pub birthday: Option<BirthdayRaw>,
    pub organization: Option<String>,
    pub job_title: Option<String>,
    pub note: Option<String>,
}

impl PersonRecord {
    /// Fills every field that is still absent from `other`. Fields that are
    /// already present keep their first-seen value.
    pub fn absorb(&mut self, other: PersonRecord) {
        fill(&mut self.prefix, other.prefix);
        fill(&mut self.first, other.first);
        fill(&mut self.middle, other.middle);
        fill(&mut self.last, other.last);
        fill(&mut self.suffix, other.suffix);
        fill(&mut self.birthday, other.birthday);
        fill(&mut self.organization, other.organization);
        fill(&mut self.job_title, other.job_title);
        fill(&mut self.note, other.note);
    }
}

fn fill<T>(slot: &mut Option<T>, candidate: Option<T>) {
    if slot.is_none() {
        *slot = candidate;
    }
}

/// One row of the person/attribute left join: a person plus at most one
/// attribute value (absent when the person has no attributes).
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub key: PersonKey,
    pub person: PersonRecord,
    pub value: Option<String>,
}

/// A person with every attribute value the store returned for them, in store
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedPerson {
    pub key: PersonKey,
    pub person: PersonRecord,
    pub values: Vec<String>,
}

/// Output row of the contact list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedContact {
    /// Person key, used only to order contacts sharing a name.
    #[serde(skip)]
    pub key: PersonKey,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "DOB")]
    pub dob: String,
    #[serde(rename = "Organization")]
    pub organization: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Note")]
    pub note: String,
    #[serde(rename = "Phone1")]
    pub phone1: String,
    #[serde(rename = "Phone2")]
    pub phone2: String,
    #[serde(rename = "Phone3")]
    pub phone3: String,
    #[serde(rename = "Email1")]
    pub email1: String,
    #[serde(rename = "Email2")]
    pub email2: String,
}

impl NormalizedContact {
    /// Cell values in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 10] {
        [
            self.name.as_str(),
            self.dob.as_str(),
            self.organization.as_str(),
            self.title.as_str(),
            self.note.as_str(),
            self.phone1.as_str(),
            self.phone2.as_str(),
            self.phone3.as_str(),
            self.email1.as_str(),
            self.email2.as_str(),
        ]
    }
}

/// A table that will be materialised as an Excel sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Name of the worksheet holding the contact list.
pub const CONTACTS_SHEET: &str = "Contacts";

impl SheetTable {
    /// Lays the contacts out as a single sheet with the [`COLUMNS`] header.
    pub fn from_contacts(contacts: &[NormalizedContact]) -> Self {
        let rows = contacts
            .iter()
            .map(|contact| contact.cells().iter().map(|cell| cell.to_string()).collect())
            .collect();

        Self {
            sheet_name: CONTACTS_SHEET.to_string(),
            columns: COLUMNS.iter().map(|column| column.to_string()).collect(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_keeps_first_seen_values() {
        let mut record = PersonRecord {
            first: Some("Jane".into()),
            ..PersonRecord::default()
        };
        record.absorb(PersonRecord {
            first: Some("Janet".into()),
            last: Some("Doe".into()),
            ..PersonRecord::default()
        });

        assert_eq!(record.first.as_deref(), Some("Jane"));
        assert_eq!(record.last.as_deref(), Some("Doe"));
    }

    #[test]
    fn sheet_table_follows_column_order() {
        let contact = NormalizedContact {
            key: 7,
            name: "Jane Doe ".into(),
            phone1: "15551234567".into(),
            email2: "jane@x.com".into(),
            ..NormalizedContact::default()
        };
        let table = SheetTable::from_contacts(&[contact]);

        assert_eq!(table.sheet_name, CONTACTS_SHEET);
        assert_eq!(table.columns, COLUMNS);
        assert_eq!(table.rows[0][0], "Jane Doe ");
        assert_eq!(table.rows[0][5], "15551234567");
        assert_eq!(table.rows[0][9], "jane@x.com");
    }
}
