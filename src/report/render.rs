use std::collections::BTreeSet;

pub const GREETING: &str = "Hello dear Isaac Clarke!\n\nOver the past 24 hours, ";
pub const NO_CHANGES: &str = "there have been no changes in the sites entrusted to you.";
pub const CHANGES_OCCURRED: &str = "the following changes have occurred in the sites entrusted to you:\n\n";

pub const DISAPPEARED_TITLE: &str = "The following pages have disappeared:";
pub const APPEARED_TITLE: &str = "The following new pages have appeared:";
pub const CHANGED_TITLE: &str = "The following pages have changed:";
pub const NO_PAGES: &str = "no pages";

/// Render the change letter. Sections always come out in the order
/// disappeared, appeared, changed.
pub fn render_report(disappeared: &BTreeSet<String>, appeared: &BTreeSet<String>, changed: &BTreeSet<String>) -> String {
    let mut out = String::from(GREETING);

    if disappeared.is_empty() && appeared.is_empty() && changed.is_empty() {
        out.push_str(NO_CHANGES);
        return out;
    }

    out.push_str(CHANGES_OCCURRED);
    push_section(&mut out, DISAPPEARED_TITLE, disappeared);
    push_section(&mut out, APPEARED_TITLE, appeared);
    push_section(&mut out, CHANGED_TITLE, changed);
    out
}

fn push_section(out: &mut String, title: &str, urls: &BTreeSet<String>) {
    out.push_str(title);
    out.push('\n');
    if urls.is_empty() {
        out.push_str(NO_PAGES);
        out.push('\n');
    } else {
        for url in urls {
            out.push_str(url);
            out.push('\n');
        }
    }
    out.push('\n');
}
