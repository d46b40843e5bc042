/// HTML tags that may open a raw HTML block and pass through unescaped.
pub const BLOCK_TAGS: &[&str] = &[
    "p",
    "dl",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ol",
    "ul",
    "del",
    "div",
    "ins",
    "pre",
    "form",
    "math",
    "table",
    "iframe",
    "script",
    "fieldset",
    "noscript",
    "blockquote",
];

/// Case-insensitive membership test against [`BLOCK_TAGS`].
pub fn is_block_tag(name: &[u8]) -> bool {
    BLOCK_TAGS
        .iter()
        .any(|tag| tag.as_bytes().eq_ignore_ascii_case(name))
}
