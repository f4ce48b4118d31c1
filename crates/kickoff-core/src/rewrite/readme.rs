//! README rewriting
//!
//! The edits run in a fixed order. Several of them anchor on section headers
//! of the template README ("Requirements", "Deployment") that must still be
//! present verbatim when each edit runs, so none of the earlier edits touch
//! those headers.

use crate::types::ScaffoldParams;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Setext title: a text line followed by a line of `=`
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?P<title>[^\r\n]+)(?P<nl>\r?\n)=+[ \t]*(?P<eol>\r?)$")
        .expect("readme title regex is valid")
});

/// Everything between the title underline and the Requirements header
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)(?P<rule>^=+[ \t]*\r?\n).*?(?P<next>^(?:#+[ \t]*)?Requirements\b)")
        .expect("readme description regex is valid")
});

/// Installation header, its body, and the header that follows
static INSTALLATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ms)(?P<header>^(?:#+[ \t]*)?Installation[ \t]*\r?\n(?:-+[ \t]*\r?\n)?).*?(?P<next>^#+[ \t]*\S|^[^\r\n]+\r?\n[-=]+[ \t]*\r?$|\z)",
    )
    .expect("readme installation regex is valid")
});

/// Example clone command
static CLONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<cmd>git clone[ \t]+)\S+").expect("readme clone regex is valid")
});

/// License identifier mentioned in prose
static LICENSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bMIT\b").expect("readme license regex is valid"));

/// Usage section through to the Deployment header
static USAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^(?P<prefix>#+[ \t]*)?Usage\b.*?^(?:#+[ \t]*)?Deployment")
        .expect("readme usage regex is valid")
});

/// Apply every README edit in order
pub fn rewrite_readme(content: &str, params: &ScaffoldParams) -> String {
    let result = rewrite_title(content, &params.app_name);
    let result = rewrite_description(&result, &params.description);
    let result = collapse_installation(&result);
    let result = rewrite_clone_url(&result, &params.repository_url);
    let result = rewrite_license_mention(&result, &params.license);
    collapse_usage(&result)
}

/// Replace the title line and resize its `=` underline to match
pub fn rewrite_title(content: &str, app_name: &str) -> String {
    let underline = "=".repeat(app_name.chars().count());
    TITLE_RE
        .replacen(content, 1, |caps: &Captures| {
            format!("{}{}{}{}", app_name, &caps["nl"], underline, &caps["eol"])
        })
        .into_owned()
}

/// Replace the paragraph between the title block and "Requirements"
pub fn rewrite_description(content: &str, description: &str) -> String {
    DESCRIPTION_RE
        .replacen(content, 1, |caps: &Captures| {
            format!("{}\n{}\n\n{}", &caps["rule"], description.trim(), &caps["next"])
        })
        .into_owned()
}

/// Reduce the Installation section to its header
pub fn collapse_installation(content: &str) -> String {
    INSTALLATION_RE
        .replacen(content, 1, |caps: &Captures| {
            let next = &caps["next"];
            if next.is_empty() {
                caps["header"].to_string()
            } else {
                format!("{}\n{}", &caps["header"], next)
            }
        })
        .into_owned()
}

/// Point the example `git clone` command at the project repository
///
/// Left unchanged when no repository URL was given.
pub fn rewrite_clone_url(content: &str, repository_url: &str) -> String {
    let url = repository_url.trim();
    if url.is_empty() {
        return content.to_string();
    }
    CLONE_RE
        .replacen(content, 1, |caps: &Captures| format!("{}{}", &caps["cmd"], url))
        .into_owned()
}

/// Replace the `MIT` mention with the chosen license identifier
pub fn rewrite_license_mention(content: &str, license: &str) -> String {
    LICENSE_RE
        .replacen(content, 1, |_: &Captures| license.to_string())
        .into_owned()
}

/// Drop the Usage section, keeping the Deployment header that follows it
pub fn collapse_usage(content: &str) -> String {
    USAGE_RE
        .replacen(content, 1, |caps: &Captures| {
            let prefix = caps.name("prefix").map_or("", |m| m.as_str());
            format!("{}Deployment", prefix)
        })
        .into_owned()
}
