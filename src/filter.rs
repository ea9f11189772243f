use crate::catalog::ItemRecord;

/// The four independent filter criteria. Empty string means the criterion is
/// inactive and always passes; active criteria combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively against name or id.
    pub query: String,
    /// Exact class membership.
    pub klasa: String,
    /// Exact type equality.
    pub typ: String,
    /// Exact quality equality.
    pub jakosc: String,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
            || !self.klasa.is_empty()
            || !self.typ.is_empty()
            || !self.jakosc.is_empty()
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    /// Visibility decision for one record. Records are never mutated; the
    /// query matches against the display name (placeholder included) or the
    /// id, the selectors match exactly.
    pub fn matches(&self, item: &ItemRecord) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() {
            let name = item.display_name().to_lowercase();
            let id = item.id.to_lowercase();
            if !name.contains(&query) && !id.contains(&query) {
                return false;
            }
        }

        if !self.klasa.is_empty() && !item.klasy.iter().any(|k| *k == self.klasa) {
            return false;
        }

        if !self.typ.is_empty() && item.typ.as_deref() != Some(self.typ.as_str()) {
            return false;
        }

        if !self.jakosc.is_empty() && item.jakosc.as_deref() != Some(self.jakosc.as_str()) {
            return false;
        }

        true
    }

    pub fn count_visible<'a, I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = &'a ItemRecord>,
    {
        items.into_iter().filter(|item| self.matches(item)).count()
    }
}
