//! Identifier slugs
//!
//! Combination ids are built from the display names of a magazine and a
//! photography style: `"{magazine_slug}__{photography_slug}"`.

/// Lower-case, spaces to `_`, drop `(`, `)` and `*`
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '*'))
        .collect()
}

pub fn combination_id(magazine_name: &str, photography_name: &str) -> String {
    format!("{}__{}", slugify(magazine_name), slugify(photography_name))
}

/// Readable form of a slug: underscores to spaces, each word capitalized
///
/// Only the first character of a word is uppercased, so `life_1960s` reads
/// `Life 1960s`. Letters after digits stay lowercase, unlike Python-style
/// `title()` casing which would give `Life 1960S`.
pub fn format_id(id: &str) -> String {
    id.replace('_', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
