use std::collections::BTreeMap;

use crate::addressbook::contacts::model::{AggregatedPerson, PersonKey, RawRow};

/// Groups join rows by person key.
///
/// Scalar fields keep the first non-null value seen for the key; attribute
/// values are collected in row order with nulls skipped. People come back in
/// ascending key order.
pub fn aggregate(rows: Vec<RawRow>) -> Vec<AggregatedPerson> {
    let mut people: BTreeMap<PersonKey, AggregatedPerson> = BTreeMap::new();

    for row in rows {
        let entry = people.entry(row.key).or_insert_with(|| AggregatedPerson {
            key: row.key,
            person: Default::default(),
            values: Vec::new(),
        });
        entry.person.absorb(row.person);
        if let Some(value) = row.value {
            entry.values.push(value);
        }
    }

    people.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressbook::contacts::model::PersonRecord;

    fn row(key: PersonKey, first: &str, value: Option<&str>) -> RawRow {
        RawRow {
            key,
            person: PersonRecord {
                first: Some(first.to_string()),
                ..PersonRecord::default()
            },
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn groups_values_per_person_in_row_order() {
        let rows = vec![
            row(2, "Bob", Some("bob@x.com")),
            row(1, "Ann", Some("5551234")),
            row(2, "Bob", None),
            row(2, "Bob", Some("2065550100")),
            row(3, "Cy", None),
        ];

        let people = aggregate(rows);

        assert_eq!(people.len(), 3);
        assert_eq!(people[0].key, 1);
        assert_eq!(people[0].values, vec!["5551234"]);
        assert_eq!(people[1].person.first.as_deref(), Some("Bob"));
        assert_eq!(people[1].values, vec!["bob@x.com", "2065550100"]);
        assert!(people[2].values.is_empty());
    }
}
