//! Article ordering, sectioning, and sequential navigation.
//!
//! The one logic-bearing corner of the build: given the flat set of article
//! records, produce the derived views every list-rendering page needs.
//!
//! - [`sorted_collection`] — stable total order of one collection
//! - [`section_partition`] — per-section sub-lists for a sectioned index
//! - [`grouped_rows`] — display rows with group-label insertion and
//!   continuous 1-based numbering
//! - [`next_article`] — the "Next:" pointer for sequential navigation
//!
//! All four are pure functions over immutable input. Results are rebuilt on
//! every call — collections are tutorial-sized, and freshness beats caching.
//! The group-boundary cursor in [`grouped_rows`] is a local variable, so
//! concurrent renders (rayon in the generate stage) can never contaminate
//! each other.

use crate::types::{ArticleRecord, Section};

/// All articles tagged `tag`, ascending by `path_stem`.
///
/// Plain string comparison, not numeric-aware: `10-x` sorts before `2-x`,
/// which is why content files use zero-padded prefixes. An unknown tag
/// yields an empty vector, not an error.
pub fn sorted_collection<'a>(articles: &'a [ArticleRecord], tag: &str) -> Vec<&'a ArticleRecord> {
    let mut collection: Vec<&ArticleRecord> =
        articles.iter().filter(|a| a.tags == tag).collect();
    collection.sort_by(|a, b| a.path_stem.cmp(&b.path_stem));
    collection
}

/// Pair each declared section with its sorted member articles.
///
/// Sections come out in declaration order — that order is authoritative at
/// the section level, regardless of where members fall in `path_stem` order.
/// Articles whose `section_index` matches no declared section appear in no
/// partition.
pub fn section_partition<'a, 's>(
    articles: &'a [ArticleRecord],
    tag: &str,
    sections: &'s [Section],
) -> Vec<(&'s Section, Vec<&'a ArticleRecord>)> {
    let sorted = sorted_collection(articles, tag);
    sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let members = sorted
                .iter()
                .copied()
                .filter(|a| a.section_index == Some(i))
                .collect();
            (section, members)
        })
        .collect()
}

/// One display row of a grouped article list.
#[derive(Debug, PartialEq)]
pub enum Row<'a> {
    /// A group heading, emitted before the first article of a group run.
    Label(&'a str),
    /// An article with its continuous 1-based display number.
    Article {
        number: usize,
        record: &'a ArticleRecord,
    },
}

/// Walk a section's sorted articles and interleave group-label rows.
///
/// A label row is emitted whenever an article's `group_index` differs from
/// the previous article's — including the first article, since the cursor
/// starts at `None`. Articles without a `group_index` never trigger a label;
/// they are silently numbered without a heading. Numbering increments per
/// article and never resets at a group boundary.
///
/// Labels resolve through `sections[section_index].groups[group_index]`. An
/// unresolvable label is skipped: the scan stage has already rejected
/// out-of-range indices in authored content, so a miss here only happens on
/// hand-built records and must not panic a render.
pub fn grouped_rows<'a>(records: &[&'a ArticleRecord], sections: &'a [Section]) -> Vec<Row<'a>> {
    let mut rows = Vec::with_capacity(records.len() + sections.len());
    let mut prev_group: Option<u32> = None;
    for (i, record) in records.iter().enumerate() {
        if record.group_index.is_some()
            && record.group_index != prev_group
            && let Some(label) = group_label(record, sections)
        {
            rows.push(Row::Label(label));
        }
        prev_group = record.group_index;
        rows.push(Row::Article {
            number: i + 1,
            record,
        });
    }
    rows
}

fn group_label<'a>(record: &ArticleRecord, sections: &'a [Section]) -> Option<&'a str> {
    let section = sections.get(record.section_index?)?;
    section
        .groups
        .get(&record.group_index?)
        .map(String::as_str)
}

/// The article to read after `current_path_stem`, if any.
///
/// Unlisted articles are removed from the sequence first, then the first
/// record whose stem strictly exceeds the current one wins. `None` means the
/// current article is last (or itself past the end) and callers render no
/// next-link. Linear scan of a freshly sorted list — collections are small.
pub fn next_article<'a>(
    articles: &'a [ArticleRecord],
    tag: &str,
    current_path_stem: &str,
) -> Option<&'a ArticleRecord> {
    sorted_collection(articles, tag)
        .into_iter()
        .filter(|a| !a.unlisted)
        .find(|a| a.path_stem.as_str() > current_path_stem)
}
