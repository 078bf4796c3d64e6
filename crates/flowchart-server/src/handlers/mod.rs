pub mod generate;
pub mod health;
pub mod history;
pub mod root;

/// Normalize a caller-supplied session id into the key used by the store.
///
/// Surrounding whitespace is ignored; a blank id means "no session".
pub fn session_key(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|id| !id.is_empty())
}
