use super::ValueRecord;

use std::iter::FusedIterator;

/// Iterator over a field's records, newest first.
#[derive(Debug, Clone)]
pub struct History<'a> {
    next: Option<&'a ValueRecord>,
}

impl<'a> History<'a> {
    pub(super) fn new(head: Option<&'a ValueRecord>) -> Self {
        Self { next: head }
    }
}

impl<'a> Iterator for History<'a> {
    type Item = &'a ValueRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.next?;
        self.next = record.previous().map(|previous| &**previous);
        Some(record)
    }
}

impl FusedIterator for History<'_> {}
