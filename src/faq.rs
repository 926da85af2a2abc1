//! Frequently asked questions.
//!
//! A fixed table of questions and answers plus the accordion state that keeps
//! at most one entry expanded.

use crate::logging;

/// A single question with its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        question: "Why use the 30% rule for rent calculations?",
        answer: "The 30% rule is a widely accepted financial guideline that suggests you shouldn't spend more than 30% of your gross monthly income on housing expenses. While not a strict rule, it helps ensure you have enough money left for other essential expenses and savings.",
    },
    FaqEntry {
        question: "Should I include utilities in my rent calculation?",
        answer: "Yes, ideally you should factor in utilities when calculating affordable rent. Consider setting aside an additional 10% of your rent budget for utilities, making your total housing costs closer to 40% of your income.",
    },
    FaqEntry {
        question: "What if I live in an expensive city?",
        answer: "In expensive cities, you might need to allocate more than 30% of your income to rent. In such cases, you may need to make adjustments in other areas of your budget or consider having roommates to share costs.",
    },
    FaqEntry {
        question: "Does the calculator account for taxes?",
        answer: "This calculator uses gross (pre-tax) annual income. Your actual disposable income will be lower after taxes, so consider this when making housing decisions.",
    },
    FaqEntry {
        question: "What other expenses should I consider besides rent?",
        answer: "Besides rent, consider: utilities, renters insurance, security deposits, moving costs, furniture, and maintenance fees. Also budget for other living expenses like food, transportation, and savings.",
    },
];

/// Accordion over a static list of entries; zero or one entry is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    entries: &'static [FaqEntry],
    open_index: Option<usize>,
}

impl Accordion {
    /// Accordion over the built-in FAQ, all entries collapsed
    pub fn new() -> Self {
        Self::with_entries(&FAQ_ENTRIES)
    }

    pub fn with_entries(entries: &'static [FaqEntry]) -> Self {
        Self {
            entries,
            open_index: None,
        }
    }

    pub fn entries(&self) -> &'static [FaqEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_index == Some(index)
    }

    /// Collapse `index` if it is open, otherwise open it and collapse the rest
    pub fn toggle(&mut self, index: usize) {
        if index >= self.entries.len() {
            logging::warn_log(&format!("Ignoring toggle of FAQ entry {}", index));
            return;
        }

        self.open_index = if self.open_index == Some(index) {
            None
        } else {
            Some(index)
        };
        logging::debug_log(&format!("FAQ open entry: {:?}", self.open_index));
    }
}

impl Default for Accordion {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let accordion = Accordion::new();
        assert_eq!(accordion.open_index(), None);
        assert_eq!(accordion.len(), 5);
        assert!(!accordion.is_empty());
        assert!((0..accordion.len()).all(|idx| !accordion.is_open(idx)));
    }

    #[test]
    fn test_toggle_scenario() {
        let mut accordion = Accordion::new();

        accordion.toggle(0);
        assert_eq!(accordion.open_index(), Some(0));

        accordion.toggle(2);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));

        accordion.toggle(2);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn test_at_most_one_entry_open() {
        let mut accordion = Accordion::new();
        for idx in [4, 1, 3, 3, 0, 2] {
            accordion.toggle(idx);
            let open_count = (0..accordion.len())
                .filter(|&i| accordion.is_open(i))
                .count();
            assert!(open_count <= 1);
        }
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut accordion = Accordion::new();
        accordion.toggle(1);
        accordion.toggle(FAQ_ENTRIES.len());
        assert_eq!(accordion.open_index(), Some(1));
    }

    #[test]
    fn test_faq_table() {
        assert_eq!(
            FAQ_ENTRIES[0].question,
            "Why use the 30% rule for rent calculations?"
        );
        assert!(FAQ_ENTRIES
            .iter()
            .all(|entry| !entry.question.is_empty() && !entry.answer.is_empty()));
    }

    #[test]
    fn test_custom_entries() {
        static ENTRIES: [FaqEntry; 1] = [FaqEntry {
            question: "Q?",
            answer: "A.",
        }];
        let mut accordion = Accordion::with_entries(&ENTRIES);
        accordion.toggle(0);
        assert_eq!(accordion.entries()[0].answer, "A.");
        assert!(accordion.is_open(0));
    }
}
