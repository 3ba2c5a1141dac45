//! Unicode subscript and superscript code points
//!
//! Unicode only encodes sub/superscript forms for digits, a few operators
//! and a subset of Latin letters. Characters without a form map to `None`.

/// Subscript form of a character
pub fn subscript(c: char) -> Option<char> {
    let mapped = match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'h' => 'ₕ',
        'i' => 'ᵢ',
        'j' => 'ⱼ',
        'k' => 'ₖ',
        'l' => 'ₗ',
        'm' => 'ₘ',
        'n' => 'ₙ',
        'o' => 'ₒ',
        'p' => 'ₚ',
        'r' => 'ᵣ',
        's' => 'ₛ',
        't' => 'ₜ',
        'u' => 'ᵤ',
        'v' => 'ᵥ',
        'x' => 'ₓ',
        _ => return None,
    };
    Some(mapped)
}

/// Superscript form of a character
pub fn superscript(c: char) -> Option<char> {
    let mapped = match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        'a' => 'ᵃ',
        'b' => 'ᵇ',
        'c' => 'ᶜ',
        'd' => 'ᵈ',
        'e' => 'ᵉ',
        'f' => 'ᶠ',
        'g' => 'ᵍ',
        'h' => 'ʰ',
        'i' => 'ⁱ',
        'j' => 'ʲ',
        'k' => 'ᵏ',
        'l' => 'ˡ',
        'm' => 'ᵐ',
        'n' => 'ⁿ',
        'o' => 'ᵒ',
        'p' => 'ᵖ',
        'r' => 'ʳ',
        's' => 'ˢ',
        't' => 'ᵗ',
        'u' => 'ᵘ',
        'v' => 'ᵛ',
        'w' => 'ʷ',
        'x' => 'ˣ',
        'y' => 'ʸ',
        'z' => 'ᶻ',
        _ => return None,
    };
    Some(mapped)
}

/// Map every character of `text` through `map`, skipping whitespace.
///
/// Returns `None` if any character has no form, so a partially raised
/// bound is never produced. A blank bound has nothing to raise and is
/// `None` as well.
pub fn map_all(text: &str, map: fn(char) -> Option<char>) -> Option<String> {
    let raised: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(map)
        .collect::<Option<_>>()?;
    if raised.is_empty() {
        return None;
    }
    Some(raised)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(subscript('1'), Some('₁'));
        assert_eq!(superscript('2'), Some('²'));
        assert_eq!(superscript('9'), Some('⁹'));
    }

    #[test]
    fn test_missing_forms() {
        assert_eq!(subscript('y'), None);
        assert_eq!(superscript('q'), None);
        assert_eq!(subscript('A'), None);
    }

    #[test]
    fn test_map_all() {
        assert_eq!(map_all("i=1", subscript).as_deref(), Some("ᵢ₌₁"));
        assert_eq!(map_all("n + 1", superscript).as_deref(), Some("ⁿ⁺¹"));
        assert_eq!(map_all("y+1", subscript), None);
    }

    #[test]
    fn test_map_all_blank() {
        assert_eq!(map_all(" ", subscript), None);
        assert_eq!(map_all("", superscript), None);
    }
}
