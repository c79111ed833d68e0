//! String comparison and formatting helpers.
//!
//! This module provides:
//! - A locale-aware collation order for grid sorting
//! - Case-insensitive substring matching for grid filtering
//! - Header label capitalization

use std::cmp::Ordering;

/// Upper-case the first character of a column id ("population" → "Population").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Case-insensitive substring test. `needle_lower` must already be lower-cased.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(needle_lower)
}

/// Compares two strings the way a user-facing collator does.
///
/// Three levels, each consulted only when the previous one ties:
/// 1. **Primary**: base letters, ignoring case and accents. Whitespace and
///    punctuation sort before digits, digits before letters.
/// 2. **Secondary**: unaccented before accented.
/// 3. **Tertiary**: lower case before upper case.
///
/// A final code-point comparison makes this a total order, so only identical
/// strings compare equal. Digits are compared as characters, never as
/// numbers: `"100" < "20"`.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a.chars().flat_map(primary_keys).cmp(b.chars().flat_map(primary_keys));

    primary
        .then_with(|| a.chars().map(is_accented).cmp(b.chars().map(is_accented)))
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

/// Primary weights of a character: (class, base letter).
fn primary_keys(c: char) -> impl Iterator<Item = (u8, char)> {
    let class = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    base_letter(c)
        .to_lowercase()
        .map(move |lower| (class, lower))
}

fn is_accented(c: char) -> bool {
    base_letter(c) != c
}

/// Strip the diacritic from Latin-1 and common Latin Extended-A letters.
fn base_letter(c: char) -> char {
    match c {
        'À'..='Å' => 'A',
        'à'..='å' => 'a',
        'Ç' => 'C',
        'ç' => 'c',
        'È'..='Ë' => 'E',
        'è'..='ë' => 'e',
        'Ì'..='Ï' => 'I',
        'ì'..='ï' => 'i',
        'Ñ' => 'N',
        'ñ' => 'n',
        'Ò'..='Ö' | 'Ø' => 'O',
        'ò'..='ö' | 'ø' => 'o',
        'Ù'..='Ü' => 'U',
        'ù'..='ü' => 'u',
        'Ý' => 'Y',
        'ý' | 'ÿ' => 'y',
        'Ā' | 'Ă' | 'Ą' => 'A',
        'ā' | 'ă' | 'ą' => 'a',
        'Ć' | 'Ĉ' | 'Ċ' | 'Č' => 'C',
        'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'Ď' => 'D',
        'ď' => 'd',
        'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'Ğ' | 'Ġ' | 'Ģ' => 'G',
        'ğ' | 'ġ' | 'ģ' => 'g',
        'Ī' | 'Į' | 'İ' => 'I',
        'ī' | 'į' | 'ı' => 'i',
        'Ł' => 'L',
        'ł' => 'l',
        'Ń' | 'Ņ' | 'Ň' => 'N',
        'ń' | 'ņ' | 'ň' => 'n',
        'Ō' | 'Ő' => 'O',
        'ō' | 'ő' => 'o',
        'Ř' => 'R',
        'ř' => 'r',
        'Ś' | 'Ş' | 'Š' => 'S',
        'ś' | 'ş' | 'š' => 's',
        'Ţ' | 'Ť' => 'T',
        'ţ' | 'ť' => 't',
        'Ū' | 'Ů' | 'Ű' => 'U',
        'ū' | 'ů' | 'ű' => 'u',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("population"), "Population");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Africa", "afr"));
        assert!(contains_ignore_case("PORTO-NOVO", "novo"));
        assert!(!contains_ignore_case("Europe", "africa"));
        assert!(contains_ignore_case("anything", ""));
    }

    #[test]
    fn test_locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("benin", "Chad"), Ordering::Less);
        assert_eq!(locale_compare("Zambia", "albania"), Ordering::Greater);
        // Same letters: lower case first
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_accents() {
        assert_eq!(locale_compare("Åland Islands", "Albania"), Ordering::Less);
        assert_eq!(locale_compare("Curaçao", "Cyprus"), Ordering::Less);
        assert_eq!(locale_compare("Cote", "Côte"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_digits_as_text() {
        assert_eq!(locale_compare("100", "20"), Ordering::Less);
        assert_eq!(locale_compare("700", "80"), Ordering::Less);
        assert_eq!(locale_compare("80", "9"), Ordering::Less);
        assert_eq!(locale_compare("9", "a"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_punctuation_first() {
        assert_eq!(locale_compare("", "a"), Ordering::Less);
        assert_eq!(locale_compare("(x)", "1"), Ordering::Less);
        assert_eq!(locale_compare("~", "0"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_total_order() {
        assert_eq!(locale_compare("Chad", "Chad"), Ordering::Equal);
        assert_ne!(locale_compare("ß", "ss"), Ordering::Equal);
    }
}
