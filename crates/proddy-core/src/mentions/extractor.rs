//! Mention extractor
//!
//! Two encodings are recognised and unioned:
//! - `data-member-id="<id>"` markers left by the editor's mention chips
//! - the literal substring `@<display name>`
//!
//! Name matching is a case-sensitive substring test with no word boundary,
//! so `@Albert` also matches a member called `Al`. Clients rely on this.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::roster::MemberRoster;
use crate::value_objects::{MessageBody, Snowflake};

static MEMBER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-member-id="([^"]+)""#).expect("member marker pattern is valid")
});

/// Ids named by `data-member-id` markers in `text`, whether known or not
pub fn member_markers(text: &str) -> impl Iterator<Item = Snowflake> + '_ {
    MEMBER_MARKER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|id| Snowflake::parse(id.as_str()).ok())
}

/// Members of `roster` addressed by `body`
///
/// Pure: the same body and roster always produce the same set.
pub fn extract_mentions(body: &MessageBody, roster: &MemberRoster) -> BTreeSet<Snowflake> {
    let mut found = BTreeSet::new();

    collect_markers(body.raw(), roster, &mut found);

    match body {
        MessageBody::RichText(rich) => {
            for fragment in rich.text_fragments() {
                collect_markers(fragment, roster, &mut found);
                collect_names(fragment, roster, &mut found);
            }
        }
        MessageBody::Plain(text) => collect_names(text, roster, &mut found),
    }

    found
}

fn collect_markers(text: &str, roster: &MemberRoster, found: &mut BTreeSet<Snowflake>) {
    found.extend(member_markers(text).filter(|id| roster.contains(*id)));
}

fn collect_names(text: &str, roster: &MemberRoster, found: &mut BTreeSet<Snowflake>) {
    if !text.contains('@') {
        return;
    }
    for (member_id, name) in roster.named_members() {
        if text.contains(&format!("@{name}")) {
            found.insert(member_id);
        }
    }
}
