//! The author header and the pure text operations around it.

/// Header prepended to every eligible file unless overridden by config.
pub const DEFAULT_HEADER: &str = "/*\nAuthor: Ben Mezger (github.com/benmezger)\n*/\n";

/// Returns true if `content` already carries `header` anywhere in it.
pub fn is_stamped(content: &str, header: &str) -> bool {
    content.contains(header)
}

/// Builds the stamped form of `content`: header, one blank line, original text.
pub fn stamp_content(content: &str, header: &str) -> String {
    let mut stamped = String::with_capacity(header.len() + 1 + content.len());
    stamped.push_str(header);
    stamped.push('\n');
    stamped.push_str(content);
    stamped
}
