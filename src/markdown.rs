//! Markdown to HTML conversion with heading anchors.
//!
//! Uses [pulldown-cmark](https://docs.rs/pulldown-cmark) with tables,
//! strikethrough, and footnotes enabled. Every heading gets a slug id and is
//! wrapped in a self-link (`<h2 id="setup"><a href="#setup">Setup</a></h2>`),
//! so readers can deep-link into long tutorial chapters. Duplicate heading
//! texts get a numeric suffix (`setup`, `setup-1`, ...).

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use std::collections::HashSet;

/// Convert a markdown body to an HTML fragment.
pub fn to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_HEADING_ATTRIBUTES;
    let events: Vec<Event> = Parser::new_ext(markdown, options).collect();
    let mut out = String::new();
    html::push_html(&mut out, anchor_headings(events).into_iter());
    out
}

/// Rewrite heading events: assign slug ids and wrap contents in self-links.
fn anchor_headings(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut seen = HashSet::new();
    let mut iter = events.into_iter();

    while let Some(event) = iter.next() {
        let Event::Start(Tag::Heading {
            level,
            id,
            classes,
            attrs,
        }) = event
        else {
            out.push(event);
            continue;
        };

        let mut inner = Vec::new();
        for e in iter.by_ref() {
            if matches!(e, Event::End(TagEnd::Heading(_))) {
                break;
            }
            inner.push(e);
        }

        // An explicit `{#id}` attribute wins over the derived slug
        let slug = match &id {
            Some(explicit) => explicit.to_string(),
            None => unique_slug(&heading_text(&inner), &mut seen),
        };

        out.push(Event::Start(Tag::Heading {
            level,
            id: Some(CowStr::from(slug.clone())),
            classes,
            attrs,
        }));
        out.push(Event::Html(format!("<a href=\"#{slug}\">").into()));
        out.extend(inner);
        out.push(Event::Html("</a>".into()));
        out.push(Event::End(TagEnd::Heading(level)));
    }
    out
}

/// Plain text of a heading: concatenated text and inline-code events.
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

fn unique_slug(text: &str, seen: &mut HashSet<String>) -> String {
    let base = slug::slugify(text);
    let base = if base.is_empty() {
        "section".to_string()
    } else {
        base
    };
    let mut candidate = base.clone();
    let mut counter = 1;
    while !seen.insert(candidate.clone()) {
        candidate = format!("{base}-{counter}");
        counter += 1;
    }
    candidate
}
