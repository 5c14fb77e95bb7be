//! Common utility functions shared across the codebase.

/// Converts a numeric object id into its readable four-character code.
///
/// Warcraft III object ids are four ASCII bytes packed big-endian into a
/// `u32`, e.g. `hfoo` for the Footman. Non-printable bytes are rendered as
/// `?` so that broken ids still produce a displayable code.
///
/// # Examples
///
/// ```
/// use mapcheck::utils::id_to_fourcc;
///
/// assert_eq!(id_to_fourcc(0x68666F6F), "hfoo");
/// assert_eq!(id_to_fourcc(0x52686D65), "Rhme");
/// ```
pub fn id_to_fourcc(id: u32) -> String {
    id.to_be_bytes()
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() {
                b as char
            } else {
                '?'
            }
        })
        .collect()
}

/// Parses a readable four-character code into a numeric object id.
///
/// Returns `None` unless the input is exactly four ASCII-graphic
/// characters.
///
/// # Examples
///
/// ```
/// use mapcheck::utils::fourcc_to_id;
///
/// assert_eq!(fourcc_to_id("hfoo"), Some(0x68666F6F));
/// assert_eq!(fourcc_to_id("hf"), None);
/// assert_eq!(fourcc_to_id("hfoo!"), None);
/// ```
pub fn fourcc_to_id(code: &str) -> Option<u32> {
    let bytes = code.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(|b| b.is_ascii_graphic()) {
        return None;
    }
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
