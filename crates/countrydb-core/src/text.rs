// crates/countrydb-core/src/text.rs

/// Convert a display name into a URL-safe slug.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Spell out `@` as `at`
/// 3\) Drop everything that is not a letter, digit, whitespace, `-` or `_`
/// 4\) Lowercase, and collapse each run of whitespace/`-`/`_` into one `-`
///
/// Leading and trailing separators are removed, so slugifying an existing
/// slug returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use countrydb_core::text::slugify;
///
/// assert_eq!(slugify("France"), "france");
/// assert_eq!(slugify("  Côte d'Ivoire "), "cote-divoire");
/// assert_eq!(slugify("Bosnia & Herzegovina"), "bosnia-herzegovina");
/// assert_eq!(slugify("america-do-sul"), "america-do-sul");
/// ```
pub fn slugify(s: &str) -> String {
    let ascii = deunicode::deunicode(s).replace('@', " at ");

    let mut out = String::with_capacity(ascii.len());
    let mut pending_sep = false;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_sep = true;
        }
    }
    out
}

/// Trim a name and capitalize the first letter of every word.
///
/// Remaining letters are lowercased. A word starts after any character that
/// is neither alphanumeric nor an apostrophe, so `"AMÉRICA DEL-NORTE"`
/// becomes `"América Del-Norte"` and `"d'ivoire"` stays one word.
///
/// ```rust
/// use countrydb_core::text::title_case;
///
/// assert_eq!(title_case("  europa "), "Europa");
/// assert_eq!(title_case("AMÉRICA DEL NORTE"), "América Del Norte");
/// ```
pub fn title_case(s: &str) -> String {
    let trimmed = s.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut at_word_start = true;
    for ch in trimmed.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '\'' || ch == '’');
    }
    out
}

/// ASCII case-insensitive comparison used for ISO code lookups.
#[inline]
pub fn iso_eq(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
