/// Most phone numbers kept per contact.
pub const PHONE_SLOTS: usize = 3;
/// Most email addresses kept per contact.
pub const EMAIL_SLOTS: usize = 2;

/// Append-only list holding at most `N` items. The first `N` pushes win;
/// later ones are counted and discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CappedList<const N: usize> {
    items: Vec<String>,
    dropped: usize,
}

impl<const N: usize> CappedList<N> {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(N),
            dropped: 0,
        }
    }

    /// Appends `value` when a slot is free. Returns whether it was kept.
    pub fn push(&mut self, value: String) -> bool {
        if self.items.len() < N {
            self.items.push(value);
            true
        } else {
            self.dropped += 1;
            false
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of values discarded because every slot was taken.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Item in slot `index`, or an empty string for an unused slot.
    pub fn slot(&self, index: usize) -> &str {
        self.items.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn into_items(self) -> Vec<String> {
        self.items
    }
}

/// Attribute values of one person split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBuckets {
    pub phones: CappedList<PHONE_SLOTS>,
    pub emails: CappedList<EMAIL_SLOTS>,
}

/// Partitions attribute values into phone and email candidates in one pass.
///
/// A value containing `@` is an email; any other non-empty value is a phone
/// candidate. Empty values are skipped.
pub fn classify(values: Vec<String>) -> ContactBuckets {
    let mut buckets = ContactBuckets {
        phones: CappedList::new(),
        emails: CappedList::new(),
    };

    for value in values {
        if value.is_empty() {
            continue;
        }
        if value.contains('@') {
            buckets.emails.push(value);
        } else {
            buckets.phones.push(value);
        }
    }

    buckets
}
