const OPEN_FENCE: &str = "```mermaid";
const CLOSE_FENCE: &str = "```";

/// Strip Mermaid code-fence markers from a model reply and trim it.
///
/// Every occurrence of the opening and closing markers is removed, not just
/// a leading/trailing pair. Removal repeats until nothing changes, so the
/// result never contains a marker even when deleting one joins the
/// surrounding backticks into a new one.
pub fn sanitize(raw: &str) -> String {
    let mut text = raw.to_string();
    loop {
        let stripped = text.replace(OPEN_FENCE, "").replace(CLOSE_FENCE, "");
        if stripped == text {
            break;
        }
        text = stripped;
    }
    text.trim().to_string()
}
