//! Per-platform content formatting.
//!
//! Formatting is a pure function of `(content, platform, options)`. All
//! lengths are counted in chars and truncation never splits a char.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::platform::{ContentFormat, Platform};
use crate::routes::Route;

/// Separator placed between thread segments.
pub const THREAD_SEPARATOR: &str = "\n\n---\n\n";

pub(crate) const PROFESSIONAL_OPENING: &str = "💡 Professional Insight:\n\n";
pub(crate) const PROFESSIONAL_CLOSING: &str =
    "\n\nWhat are your thoughts on this? Let's discuss in the comments! 👇";

/// Sentences at or below this many chars are treated as noise.
const MIN_SENTENCE_CHARS: usize = 10;
const SHORT_FORM_MAX_SENTENCES: usize = 3;
const ELLIPSIS: &str = "...";

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));

/// Caller-supplied formatting metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Falls back to [`Platform::default_max_length`] when absent.
    #[serde(default)]
    pub max_length: Option<usize>,
}

impl FormatOptions {
    /// Options carrying a route's own hashtags and length budget.
    #[must_use]
    pub fn for_route(route: &Route) -> Self {
        Self {
            hashtags: route.hashtags.clone(),
            max_length: Some(route.max_length),
        }
    }
}

/// Platform-shaped text plus metadata, ready for posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedContent {
    pub text: String,
    pub platform: Platform,
    pub format: ContentFormat,
    /// Char count of `text`.
    pub length: usize,
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_count: Option<usize>,
    pub suggestions: BTreeMap<String, Vec<String>>,
}

/// Formats `content` for `platform`.
#[must_use]
pub fn format_content(
    content: &str,
    platform: Platform,
    options: &FormatOptions,
) -> FormattedContent {
    let max_length = options
        .max_length
        .unwrap_or_else(|| platform.default_max_length());
    let hashtag_line = options.hashtags.join(" ");

    let (text, thread_count) = match platform {
        Platform::TikTok => (short_form(content, &hashtag_line, max_length), None),
        Platform::Threads => {
            let (text, count) = thread(content, &hashtag_line, max_length);
            (text, Some(count))
        }
        Platform::LinkedIn => (professional(content, &hashtag_line, max_length), None),
        Platform::Twitter => (tweet(content, &hashtag_line, max_length), None),
    };

    FormattedContent {
        length: text.chars().count(),
        text,
        platform,
        format: platform.content_format(),
        hashtags: options.hashtags.clone(),
        thread_count,
        suggestions: suggestions(platform),
    }
}

/// Splits on runs of `.`, `!` and `?`, keeping trimmed sentences longer
/// than [`MIN_SENTENCE_CHARS`].
#[must_use]
pub fn key_sentences(content: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(content)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .collect()
}

fn short_form(content: &str, hashtag_line: &str, max_length: usize) -> String {
    let body = key_sentences(content)
        .into_iter()
        .take(SHORT_FORM_MAX_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ");
    // blank line between body and hashtags
    let available = max_length.saturating_sub(hashtag_line.chars().count() + 2);
    let body = truncate_with_ellipsis(&body, available);
    append_block(body, "\n\n", hashtag_line)
}

fn tweet(content: &str, hashtag_line: &str, max_length: usize) -> String {
    let available = max_length.saturating_sub(hashtag_line.chars().count() + 1);
    let body = truncate_with_ellipsis(content, available);
    append_block(body, " ", hashtag_line)
}

fn thread(content: &str, hashtag_line: &str, max_length: usize) -> (String, usize) {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for sentence in key_sentences(content) {
        let sentence_len = sentence.chars().count();
        // An oversized sentence still opens its own segment; it is never split.
        if !current.is_empty() && current_len + sentence_len + 1 > max_length {
            segments.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(sentence);
        current.push('.');
        current_len += sentence_len + 1;
    }
    if !current.is_empty() {
        segments.push(current);
    }

    let count = segments.len();
    (
        append_block(segments.join(THREAD_SEPARATOR), "\n\n", hashtag_line),
        count,
    )
}

fn professional(content: &str, hashtag_line: &str, max_length: usize) -> String {
    let overhead = PROFESSIONAL_OPENING.chars().count()
        + PROFESSIONAL_CLOSING.chars().count()
        + hashtag_line.chars().count()
        + 3;
    let available = max_length.saturating_sub(overhead);
    let (main, _) = truncate_chars(content, available);
    let body = format!("{PROFESSIONAL_OPENING}{main}{PROFESSIONAL_CLOSING}");
    append_block(body, "\n\n", hashtag_line)
}

/// Returns the first `max` chars of `s` and whether anything was cut.
fn truncate_chars(s: &str, max: usize) -> (&str, bool) {
    match s.char_indices().nth(max) {
        Some((idx, _)) => (&s[..idx], true),
        None => (s, false),
    }
}

fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let (kept, truncated) = truncate_chars(s, max);
    if truncated {
        format!("{kept}{ELLIPSIS}")
    } else {
        kept.to_owned()
    }
}

fn append_block(body: String, separator: &str, block: &str) -> String {
    if block.is_empty() {
        body
    } else if body.is_empty() {
        block.to_owned()
    } else {
        format!("{body}{separator}{block}")
    }
}

fn suggestions(platform: Platform) -> BTreeMap<String, Vec<String>> {
    let categories: &[(&str, &[&str])] = match platform {
        Platform::TikTok => &[("videoIdeas", VIDEO_IDEAS), ("hooks", HOOKS)],
        Platform::Threads => &[
            ("engagement", ENGAGEMENT_TIPS),
            ("callToAction", CALLS_TO_ACTION),
        ],
        Platform::LinkedIn => &[
            ("networking", NETWORKING_TIPS),
            ("industryInsights", INDUSTRY_INSIGHTS),
        ],
        Platform::Twitter => &[
            ("retweetable", RETWEETABLE),
            ("trending", TRENDING_TOPICS),
        ],
    };

    categories
        .iter()
        .map(|(category, items)| {
            (
                (*category).to_string(),
                items.iter().map(|s| (*s).to_string()).collect(),
            )
        })
        .collect()
}

const VIDEO_IDEAS: &[&str] = &[
    "Screen recording of the code in action",
    "Split screen: problem vs solution",
    "Quick tutorial with voiceover",
    "Before/after comparison",
];

const HOOKS: &[&str] = &[
    "You won't believe what happened when...",
    "This one trick changed everything...",
    "Developers hate this simple mistake...",
    "I wish I knew this earlier...",
];

const ENGAGEMENT_TIPS: &[&str] = &[
    "Ask a question at the end",
    "Share a personal experience",
    "Include a poll or survey",
    "Tag relevant people or companies",
];

const CALLS_TO_ACTION: &[&str] = &[
    "What's your experience with this?",
    "Share your thoughts below!",
    "Have you tried this approach?",
    "Let me know if this helps!",
];

const NETWORKING_TIPS: &[&str] = &[
    "Connect with industry professionals",
    "Join relevant groups and communities",
    "Share your expertise regularly",
    "Engage with others' content",
];

const INDUSTRY_INSIGHTS: &[&str] = &[
    "Market trends and predictions",
    "Salary and career progression data",
    "Technology adoption rates",
    "Industry challenges and solutions",
];

const RETWEETABLE: &[&str] = &[
    "Shareable quotes and insights",
    "Quick tips and tricks",
    "Industry news and updates",
    "Motivational content for developers",
];

const TRENDING_TOPICS: &[&str] = &[
    "#AI",
    "#MachineLearning",
    "#WebDev",
    "#DataScience",
    "#CloudComputing",
    "#DevOps",
    "#Cybersecurity",
    "#Blockchain",
];

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
