// Single-byte matching for Lua patterns
// Classes follow the C locale: %a %c %d %g %l %p %s %u %w %x %z,
// uppercase letters invert the class. Also handles [set] and `.`.

/// Check if byte `c` belongs to class letter `cl` (lowercase).
/// A byte that is not a class letter matches itself literally.
#[inline(always)]
pub fn match_class(c: u8, cl: u8) -> bool {
    match cl {
        b'a' => c.is_ascii_alphabetic(),
        b'c' => c.is_ascii_control(),
        b'd' => c.is_ascii_digit(),
        b'g' => c.is_ascii_graphic(),
        b'l' => c.is_ascii_lowercase(),
        b'p' => c.is_ascii_punctuation(),
        b's' => c.is_ascii_whitespace() || c == 0x0B,
        b'u' => c.is_ascii_uppercase(),
        b'w' => c.is_ascii_alphanumeric(),
        b'x' => c.is_ascii_hexdigit(),
        b'z' => c == 0,
        _ => c == cl,
    }
}

#[inline(always)]
fn is_class_letter(cl: u8) -> bool {
    matches!(
        cl.to_ascii_lowercase(),
        b'a' | b'c' | b'd' | b'g' | b'l' | b'p' | b's' | b'u' | b'w' | b'x' | b'z'
    )
}

/// `%X` escape: class test with inversion for uppercase class letters.
#[inline(always)]
fn match_escape(c: u8, cl: u8) -> bool {
    if cl.is_ascii_uppercase() && is_class_letter(cl) {
        !match_class(c, cl.to_ascii_lowercase())
    } else {
        match_class(c, cl)
    }
}

/// Does byte `c` match the single element at `pat[pp]`?
///
/// The element is one of `.`, `%x`, `[set]` or a literal byte. Repetition
/// suffixes are not part of the element.
pub fn singlematch(c: u8, pat: &[u8], pp: usize) -> bool {
    match pat[pp] {
        b'.' => true,
        b'%' => match_escape(c, pat[pp + 1]),
        b'[' => matchset(c, pat, pp),
        lit => c == lit,
    }
}

/// Index just past the element starting at `pat[pp]`.
///
/// Callers must have validated the pattern, so sets are closed and `%` is
/// always followed by a byte.
#[inline]
pub fn element_end(pat: &[u8], pp: usize) -> usize {
    match pat[pp] {
        b'%' => pp + 2,
        b'[' => {
            let mut i = pp + 1;
            if i < pat.len() && pat[i] == b'^' {
                i += 1;
            }
            // `]` right after the opening bracket is literal
            if i < pat.len() && pat[i] == b']' {
                i += 1;
            }
            while i < pat.len() && pat[i] != b']' {
                if pat[i] == b'%' && i + 1 < pat.len() {
                    i += 1;
                }
                i += 1;
            }
            i + 1
        }
        _ => pp + 1,
    }
}

/// Match `c` against the `[set]` starting at `pat[pp]`.
fn matchset(c: u8, pat: &[u8], pp: usize) -> bool {
    let mut i = pp + 1;
    let negated = i < pat.len() && pat[i] == b'^';
    if negated {
        i += 1;
    }

    let mut matched = false;
    if i < pat.len() && pat[i] == b']' {
        matched = c == b']';
        i += 1;
    }

    while i < pat.len() && pat[i] != b']' {
        if pat[i] == b'%' && i + 1 < pat.len() {
            matched |= match_escape(c, pat[i + 1]);
            i += 2;
        } else if i + 2 < pat.len() && pat[i + 1] == b'-' && pat[i + 2] != b']' {
            matched |= pat[i] <= c && c <= pat[i + 2];
            i += 3;
        } else {
            matched |= c == pat[i];
            i += 1;
        }
    }

    matched != negated
}
