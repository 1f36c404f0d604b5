//! Best-effort cleanup of raw model output into a single HTML document.

pub const DOCUMENT_START: &str = "<!DOCTYPE";
pub const DOCUMENT_END: &str = "</html>";

fn strip_fence(text: &str, fence: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find(fence) {
        out.push_str(&rest[..at]);
        rest = &rest[at + fence.len()..];
        rest = rest.strip_prefix('\n').unwrap_or(rest);
    }
    out.push_str(rest);
    out
}

/// Removes code fences, then keeps the span from the first `<!DOCTYPE` to the
/// last `</html>`. Text without a start marker is returned fence-stripped.
pub fn normalize(raw: &str) -> String {
    let unfenced = strip_fence(&strip_fence(raw, "```html"), "```");
    let mut cleaned = unfenced.as_str();

    if let Some(start) = cleaned.find(DOCUMENT_START) {
        cleaned = &cleaned[start..];
        if let Some(end) = cleaned.rfind(DOCUMENT_END) {
            cleaned = &cleaned[..end + DOCUMENT_END.len()];
        }
    }
    cleaned.trim().to_string()
}

/// Whether normalized text is worth returning to a caller as a page.
pub fn looks_like_document(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let lower = text.to_ascii_lowercase();
    lower.contains("<!doctype") || lower.contains("<html")
}
