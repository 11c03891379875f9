use crate::addressbook::contacts::model::NormalizedContact;

/// Drops contacts without a name and orders the rest by name.
///
/// Names compare byte-wise, so uppercase sorts before lowercase. Contacts
/// sharing a name are ordered by ascending person key.
pub fn project(contacts: Vec<NormalizedContact>) -> Vec<NormalizedContact> {
    let mut named: Vec<NormalizedContact> = contacts
        .into_iter()
        .filter(|contact| !contact.name.is_empty())
        .collect();
    named.sort_by(|lhs, rhs| lhs.name.cmp(&rhs.name).then_with(|| lhs.key.cmp(&rhs.key)));
    named
}
