//! Transform stages between the store rows and the exported contact list.
//!
//! Each stage takes its input by value and hands a new value to the next one:
//! [`aggregate`] groups join rows per person, [`classify`] splits attribute
//! values into phone and email slots, [`normalize_person`] produces the typed
//! output row, and [`project`] filters and orders the final list.

pub mod aggregate;
pub mod birthday;
pub mod classify;
pub mod name;
pub mod phone;
pub mod project;

pub use aggregate::aggregate;
pub use birthday::format_birthday;
pub use classify::{CappedList, ContactBuckets, EMAIL_SLOTS, PHONE_SLOTS, classify};
pub use name::assemble_name;
pub use phone::{normalize_phone, strip_formatting};
pub use project::project;

use tracing::{debug, info, instrument};

use crate::addressbook::contacts::config::PipelineOptions;
use crate::addressbook::contacts::error::Result;
use crate::addressbook::contacts::model::{AggregatedPerson, NormalizedContact, RawRow};

/// Counters gathered while building the contact list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub rows: usize,
    pub people: usize,
    pub contacts: usize,
    pub unnamed: usize,
    pub phones_dropped: usize,
    pub emails_dropped: usize,
}

/// Result of running every stage over a row set.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactList {
    pub contacts: Vec<NormalizedContact>,
    pub report: PipelineReport,
}

/// Runs the full transform over the loaded join rows.
#[instrument(level = "debug", skip_all, fields(row_count = rows.len()))]
pub fn build_contact_list(rows: Vec<RawRow>, options: &PipelineOptions) -> Result<ContactList> {
    let mut report = PipelineReport {
        rows: rows.len(),
        ..PipelineReport::default()
    };

    let people = aggregate(rows);
    report.people = people.len();
    debug!(people = report.people, "aggregated rows by person");

    let mut contacts = Vec::with_capacity(people.len());
    for person in people {
        let (contact, buckets) = normalize_person(person, options)?;
        report.phones_dropped += buckets.phones.dropped();
        report.emails_dropped += buckets.emails.dropped();
        contacts.push(contact);
    }

    let contacts = project(contacts);
    report.contacts = contacts.len();
    report.unnamed = report.people - report.contacts;

    info!(
        people = report.people,
        contacts = report.contacts,
        unnamed = report.unnamed,
        phones_dropped = report.phones_dropped,
        emails_dropped = report.emails_dropped,
        "contact list built"
    );
    Ok(ContactList { contacts, report })
}

/// Turns one aggregated person into an output row. The classified buckets
/// are returned alongside so callers can inspect truncation.
pub fn normalize_person(
    person: AggregatedPerson,
    options: &PipelineOptions,
) -> Result<(NormalizedContact, ContactBuckets)> {
    let AggregatedPerson {
        key,
        person,
        values,
    } = person;

    let buckets = classify(values);
    let dob = format_birthday(key, person.birthday.as_ref(), options.zone)?;
    let name = assemble_name(&person, options.trim_names);

    let phone = |index: usize| normalize_phone(buckets.phones.slot(index));
    let email = |index: usize| buckets.emails.slot(index).to_string();

    let contact = NormalizedContact {
        key,
        name,
        dob,
        organization: person.organization.unwrap_or_default(),
        title: person.job_title.unwrap_or_default(),
        note: person.note.unwrap_or_default(),
        phone1: phone(0),
        phone2: phone(1),
        phone3: phone(2),
        email1: email(0),
        email2: email(1),
    };
    Ok((contact, buckets))
}
