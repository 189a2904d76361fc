//! Help center FAQ with category filtering and free-text search.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaqCategory {
    All,
    Setup,
    Configuration,
    Moderation,
    Troubleshooting,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 5] = [
        FaqCategory::All,
        FaqCategory::Setup,
        FaqCategory::Configuration,
        FaqCategory::Moderation,
        FaqCategory::Troubleshooting,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FaqCategory::All => "All Topics",
            FaqCategory::Setup => "Setup & Installation",
            FaqCategory::Configuration => "Configuration",
            FaqCategory::Moderation => "Moderation",
            FaqCategory::Troubleshooting => "Troubleshooting",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FaqCategory::All => "📋",
            FaqCategory::Setup => "🚀",
            FaqCategory::Configuration => "⚙️",
            FaqCategory::Moderation => "🛡️",
            FaqCategory::Troubleshooting => "🔧",
        }
    }
}

pub struct Faq {
    pub id: u32,
    pub category: FaqCategory,
    pub question: &'static str,
    /// Markdown.
    pub answer: &'static str,
    pub tags: &'static [&'static str],
}

impl Faq {
    fn matches_query(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle)
            || self.answer.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Entries in `category` matching `query` case-insensitively against the
/// question, answer and tags. A blank query matches everything.
pub fn filter_faqs(category: FaqCategory, query: &str) -> Vec<&'static Faq> {
    let needle = query.trim().to_lowercase();

    FAQS.iter()
        .filter(|faq| category == FaqCategory::All || faq.category == category)
        .filter(|faq| needle.is_empty() || faq.matches_query(&needle))
        .collect()
}

pub const FAQS: &[Faq] = &[
    Faq {
        id: 1,
        category: FaqCategory::Setup,
        question: "How do I add CommunityClara to my Discord server?",
        answer: "\
1. **Open the invite link** from the home page.
2. **Pick your server** in the Discord dialog.
3. **Grant the permissions** the bot asks for:
   - Manage Messages, needed to delete violations
   - Read Message History, needed for analysis
   - Moderate Members, needed for timeouts
4. **Sign in to the dashboard** with Discord to configure it.

Protection starts as soon as the bot joins.",
        tags: &["setup", "discord", "installation", "permissions"],
    },
    Faq {
        id: 2,
        category: FaqCategory::Configuration,
        question: "How do I adjust the sensitivity?",
        answer: "\
Open **Settings** for your server and move the threshold sliders:

| Range | Behaviour |
|-------|-----------|
| 0.1 - 0.4 | Strict, more false positives |
| 0.5 - 0.7 | Balanced (recommended) |
| 0.8 - 1.0 | Lenient, only severe content |

Click **Save Configuration** to apply. `!clara status` shows the values in Discord.",
        tags: &["sensitivity", "thresholds", "configuration", "moderation"],
    },
    Faq {
        id: 3,
        category: FaqCategory::Moderation,
        question: "What happens when content is flagged?",
        answer: "\
Each message is scored by the model. When the score passes your threshold:

- with **Auto Delete** on, the message is removed;
- the author gets a warning on the first and second violation;
- on the third, the author is timed out (5 minutes by default) and the count resets.

Every action appears in the dashboard, where you can mark it as a **false positive** to improve detection.",
        tags: &["moderation", "violations", "actions", "enforcement"],
    },
    Faq {
        id: 4,
        category: FaqCategory::Troubleshooting,
        question: "The bot is not responding. What should I check?",
        answer: "\
1. Run `!clara checkperms` for a permission self-check.
2. Make sure the bot's role sits **above** the members it moderates.
3. Run `!clara status` or `!clara test`.
4. Check that the channel is not listed under exempt channels.

Re-inviting the bot fixes most broken permission setups.",
        tags: &["troubleshooting", "not working", "permissions", "bot offline"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter() {
        assert_eq!(filter_faqs(FaqCategory::All, "").len(), FAQS.len());

        let setup = filter_faqs(FaqCategory::Setup, "");
        assert_eq!(setup.len(), 1);
        assert_eq!(setup[0].id, 1);
    }

    #[test]
    fn search_covers_question_answer_and_tags() {
        // Question
        assert_eq!(filter_faqs(FaqCategory::All, "SENSITIVITY")[0].id, 2);
        // Answer only
        assert_eq!(filter_faqs(FaqCategory::All, "third")[0].id, 3);
        // Tag only
        assert_eq!(filter_faqs(FaqCategory::All, "bot offline")[0].id, 4);

        assert!(filter_faqs(FaqCategory::Setup, "threshold").is_empty());
    }
}
