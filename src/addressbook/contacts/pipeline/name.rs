use crate::addressbook::contacts::model::PersonRecord;

/// Joins prefix, first, middle, last, and suffix into one display name.
///
/// Each non-empty part is followed by a single space, so the result keeps a
/// trailing space unless `trim` is set. All-empty parts yield an empty name.
pub fn assemble_name(person: &PersonRecord, trim: bool) -> String {
    let parts = [
        &person.prefix,
        &person.first,
        &person.middle,
        &person.last,
        &person.suffix,
    ];

    let mut name = String::new();
    for part in parts.into_iter().flatten() {
        if part.is_empty() {
            continue;
        }
        name.push_str(part);
        name.push(' ');
    }

    if trim {
        name.truncate(name.trim_end().len());
    }
    name
}
