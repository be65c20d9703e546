use std::collections::BTreeMap;

use crate::Question;

/// Questions grouped into form pages.
///
/// Pages are a partition derived from each question's resolved page
/// number, not a stored entity. Gaps in the numbering are preserved
/// as-is: page indices between 1 and [`Pages::max_page`] may have no
/// questions, and navigation is allowed to land on them.
#[derive(Debug, Clone, Default)]
pub struct Pages {
    buckets: BTreeMap<u32, Vec<Question>>,
    max_page: u32,
}

impl Pages {
    /// Group questions by their resolved page number.
    ///
    /// Questions are stable-sorted by `order` first, so within every
    /// page the sequence is ascending by `order` with delivery order
    /// breaking ties.
    pub fn group(mut questions: Vec<Question>) -> Self {
        questions.sort_by_key(|q| q.order);

        let mut buckets: BTreeMap<u32, Vec<Question>> = BTreeMap::new();
        let mut max_page = 1;
        for question in questions {
            let page = question.page();
            if page > max_page {
                max_page = page;
            }
            buckets.entry(page).or_default().push(question);
        }

        Self { buckets, max_page }
    }

    /// The questions on a page, in order. Empty for gap pages.
    pub fn questions_on(&self, page: u32) -> &[Question] {
        self.buckets.get(&page).map_or(&[], Vec::as_slice)
    }

    /// The highest page number observed, minimum 1.
    pub fn max_page(&self) -> u32 {
        self.max_page
    }

    /// Iterate over populated pages in ascending page order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[Question])> {
        self.buckets.iter().map(|(page, qs)| (*page, qs.as_slice()))
    }

    /// All questions across all pages, in page then order sequence.
    pub fn all_questions(&self) -> impl Iterator<Item = &Question> {
        self.buckets.values().flatten()
    }

    /// Total number of questions across all pages.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
