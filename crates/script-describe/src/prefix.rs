//! Longest shared prefix of two strings, used by name completion.

/// Longest prefix shared by `one` and `two`
///
/// Grows a candidate region one character at a time while both strings
/// still agree on it; the first region that fails to match (a differing
/// character or the end of either string) is dropped, and what remains is
/// returned as a slice of `one`. A zero-length region always matches, so
/// strings that differ in their first character share `""`.
pub fn max_common_prefix<'a>(one: &'a str, two: &str) -> &'a str {
    let mut two_chars = two.chars();
    let mut end = 0;
    for (at, c) in one.char_indices() {
        if two_chars.next() != Some(c) {
            break;
        }
        end = at + c.len_utf8();
    }
    &one[..end]
}
