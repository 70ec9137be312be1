//! Base-location normalization for raw variant documents.

use once_cell::sync::Lazy;
use regex::Regex;

/// Declaration pinning relative resource references to the asset root.
pub const BASE_DECLARATION: &str = r#"<base href="./init/">"#;

static HEAD_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<head[^>]*>").expect("static head-tag pattern must compile")
});

/// Returns true if the document already carries a base-location declaration.
pub fn has_base_declaration(content: &str) -> bool {
    content.contains("<base")
}

/// Rewrites a raw document so its relative resource references resolve
/// against the fixed base location.
///
/// Deterministic, pure and idempotent: a document that already contains a
/// base declaration is returned unchanged. Otherwise the declaration is
/// inserted immediately after the head opening tag, or prepended when the
/// document has no head section at all.
///
/// Idempotence matters because both the initial load path and the remix path
/// run this transformation, and remix output may already carry a declaration
/// inherited from the prior document.
pub fn normalize(raw: &str) -> String {
    if has_base_declaration(raw) {
        return raw.to_string();
    }

    if let Some(head) = HEAD_OPEN.find(raw) {
        let mut prepared = String::with_capacity(raw.len() + BASE_DECLARATION.len());
        prepared.push_str(&raw[..head.end()]);
        prepared.push_str(BASE_DECLARATION);
        prepared.push_str(&raw[head.end()..]);
        prepared
    } else {
        format!("{BASE_DECLARATION}{raw}")
    }
}
