use lazy_static::lazy_static;

// Single allow-listed user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowListEntry {
    pub username: String,
    pub time_order: bool, // opaque per-user flag, returned as-is
}

impl AllowListEntry {
    pub fn new(username: impl Into<String>, time_order: bool) -> Self {
        Self {
            username: username.into(),
            time_order,
        }
    }
}

// Ordered, read-only list of users
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    entries: Vec<AllowListEntry>,
}

impl AllowList {
    pub fn new(entries: Vec<AllowListEntry>) -> Self {
        Self { entries }
    }

    // Built-in list, same order as deployed
    pub fn builtin() -> Self {
        Self::new(vec![
            AllowListEntry::new("gianitsi", false),
            AllowListEntry::new("panopoulosparis", true),
            AllowListEntry::new("panopoulouannax", true),
            AllowListEntry::new("troupas1985", true),
            AllowListEntry::new("siapa", true),
            AllowListEntry::new("dimakons", true),
        ])
    }

    // Exact, case-sensitive match. First entry wins on duplicates.
    pub fn find(&self, username: &str) -> Option<&AllowListEntry> {
        self.entries.iter().find(|entry| entry.username == username)
    }

    // Time order flag for a user, None when not listed
    pub fn time_order(&self, username: Option<&str>) -> Option<bool> {
        username
            .and_then(|name| self.find(name))
            .map(|entry| entry.time_order)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[AllowListEntry] {
        &self.entries
    }
}

// Built once at startup, never mutated afterwards
lazy_static! {
    pub static ref BUILTIN_ALLOW_LIST: AllowList = AllowList::builtin();
}
