use crate::models::Team;

/// Builds the channel path for a mention anchor.
///
/// The basename, when present, is prepended verbatim; no normalization is
/// applied to any segment.
pub fn channel_path(basename: Option<&str>, team: &Team, channel_name: &str) -> String {
    format!(
        "{}/{}/channels/{}",
        basename.unwrap_or_default(),
        team.name,
        channel_name
    )
}

/// Renders a mention anchor.
///
/// The display name is HTML-escaped (`&`, `<`, `>`, quotes): display names
/// may carry literal markup such as `<b>` and must render as text. The path
/// and channel name are emitted verbatim, escaping is owed only to the label.
pub fn mention_anchor(path: &str, channel_name: &str, display_name: &str) -> String {
    format!(
        r#"<a class="mention-link" href="{path}" data-channel-mention="{channel_name}">~{}</a>"#,
        escape_label(display_name)
    )
}

fn escape_label(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wraps rewritten message text in the top-level paragraph element.
pub fn paragraph(inner: &str) -> String {
    format!("<p>{inner}</p>")
}
