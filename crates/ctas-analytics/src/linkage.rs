use std::sync::LazyLock;

use regex::Regex;

use ctas_core::CtasLevel;
use ctas_core::models::FeedbackRecord;

static LEVEL_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)CTAS\s*([1-5])").expect("level mention pattern is valid"));

/// Every "CTAS n" mention in `text`, in order of appearance.
pub fn level_mentions(text: &str) -> impl Iterator<Item = CtasLevel> + '_ {
    LEVEL_MENTION.captures_iter(text).filter_map(|caps| {
        let digit = caps.get(1)?.as_str().parse::<u8>().ok()?;
        CtasLevel::new(digit).ok()
    })
}

/// The first "CTAS n" mention in `text`.
pub fn first_level_mention(text: &str) -> Option<CtasLevel> {
    level_mentions(text).next()
}

/// The level a feedback record refers to: its explicit level if set,
/// otherwise the first level mentioned in its reason. `None` means the
/// record is unlinked.
pub fn feedback_level(record: &FeedbackRecord) -> Option<CtasLevel> {
    record
        .ctas_level
        .or_else(|| first_level_mention(&record.reason))
}
