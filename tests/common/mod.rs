use std::path::Path;

use rusqlite::{Connection, params};

/// Minimal `ABPerson`/`ABMultiValue` store for tests.
pub struct StoreFixture {
    conn: Connection,
}

#[derive(Default)]
pub struct Person<'a> {
    pub prefix: Option<&'a str>,
    pub first: Option<&'a str>,
    pub middle: Option<&'a str>,
    pub last: Option<&'a str>,
    pub suffix: Option<&'a str>,
    pub birthday: Option<f64>,
    pub organization: Option<&'a str>,
    pub job_title: Option<&'a str>,
    pub note: Option<&'a str>,
}

impl StoreFixture {
    pub fn create(path: &Path) -> Self {
        let conn = Connection::open(path).expect("fixture store opened");
        conn.execute_batch(
            "CREATE TABLE ABPerson (
                ROWID INTEGER PRIMARY KEY AUTOINCREMENT,
                Prefix TEXT, First TEXT, Middle TEXT, Last TEXT, Suffix TEXT,
                Birthday TEXT, Organization TEXT, JobTitle TEXT, Note TEXT
            );
            CREATE TABLE ABMultiValue (
                UID INTEGER PRIMARY KEY,
                record_id INTEGER,
                property INTEGER,
                value TEXT
            );",
        )
        .expect("fixture schema created");
        Self { conn }
    }

    pub fn add_person(&self, rowid: i64, person: Person<'_>, values: &[&str]) {
        self.conn
            .execute(
                "INSERT INTO ABPerson
                    (ROWID, Prefix, First, Middle, Last, Suffix, Birthday, Organization, JobTitle, Note)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    rowid,
                    person.prefix,
                    person.first,
                    person.middle,
                    person.last,
                    person.suffix,
                    person.birthday,
                    person.organization,
                    person.job_title,
                    person.note,
                ],
            )
            .expect("person inserted");

        for value in values {
            self.add_value(rowid, Some(*value));
        }
    }

    pub fn add_value(&self, rowid: i64, value: Option<&str>) {
        self.conn
            .execute(
                "INSERT INTO ABMultiValue (record_id, property, value) VALUES (?1, 3, ?2)",
                params![rowid, value],
            )
            .expect("multi-value inserted");
    }
}
