use std::cmp::Ordering;
use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    static ref FOLD: HashMap<char, &'static str> = {
        let table: &[(&str, &'static str)] = &[
            ("àáâãäåāăą", "a"),
            ("çćĉċč", "c"),
            ("ďđ", "d"),
            ("èéêëēĕėęě", "e"),
            ("ĝğġģ", "g"),
            ("ĥħ", "h"),
            ("ìíîïĩīĭįı", "i"),
            ("ĵ", "j"),
            ("ķ", "k"),
            ("ĺļľŀł", "l"),
            ("ñńņňŉ", "n"),
            ("òóôõöøōŏő", "o"),
            ("ŕŗř", "r"),
            ("śŝşš", "s"),
            ("ţťŧ", "t"),
            ("ùúûüũūŭůűų", "u"),
            ("ŵ", "w"),
            ("ýÿŷ", "y"),
            ("źżž", "z"),
            ("æ", "ae"),
            ("œ", "oe"),
            ("ß", "ss"),
        ];
        let mut fold = HashMap::new();
        for (from, to) in table {
            for c in from.chars() {
                fold.insert(c, *to);
            }
        }
        fold
    };
}

fn primary_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match FOLD.get(&c) {
            Some(base) => key.push_str(base),
            None => key.push(c),
        }
    }
    key
}

// Unaccented sorts before accented at the same position.
fn accent_key(s: &str) -> Vec<Option<char>> {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if FOLD.contains_key(&c) { Some(c) } else { None })
        .collect()
}

// Lower case sorts before upper case at the same position.
fn case_key(s: &str) -> Vec<bool> {
    s.chars().map(char::is_uppercase).collect()
}

/// Compares two strings the way a human-facing list would order them:
/// accents only matter when the base letters are equal, and case only when
/// the accents are too.
pub fn compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}
