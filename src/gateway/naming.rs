/// Derive a storage key from a client-supplied filename.
///
/// Keys have the form `<uuid-v4>_<original_filename>`. The filename is appended
/// verbatim (including the empty string) and nothing is shared between calls.
pub fn generate_key(original_filename: &str) -> String {
    format!("{}_{original_filename}", uuid::Uuid::new_v4())
}
