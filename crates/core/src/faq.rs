//! Frequently asked questions shown on the `/faq` page.

use serde::Deserialize;

use crate::error::CoreError;
use crate::validation::{self, MAX_LONG_TEXT, MAX_SHORT_TEXT};

#[derive(Debug, Clone, Deserialize)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl FaqDraft {
    pub fn validate(self) -> Result<Self, CoreError> {
        Ok(Self {
            question: validation::required_text("Question", &self.question, MAX_LONG_TEXT)?,
            answer: validation::required_text("Answer", &self.answer, MAX_LONG_TEXT)?,
            category: validation::required_text("Category", &self.category, MAX_SHORT_TEXT)?,
        })
    }
}

/// A category heading together with the indices of the FAQs filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub members: Vec<usize>,
}

/// Group items by category, categories in first-appearance order.
///
/// Returns indices into `categories` so callers keep ownership of their rows.
pub fn group_by_category<'a, I>(categories: I) -> Vec<CategoryGroup>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for (idx, category) in categories.into_iter().enumerate() {
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.members.push(idx),
            None => groups.push(CategoryGroup {
                category: category.to_string(),
                members: vec![idx],
            }),
        }
    }
    groups
}
