//! Fixed-width text helpers for report output

/// Right-align text in a field of given width (never truncates)
pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Left-align text in a field of given width (never truncates)
pub fn left_align(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Center text in a field of given width; odd padding goes to the right
pub fn center(s: &str, width: usize) -> String {
    format!("{:^width$}", s, width = width)
}

/// A rule line made of `fill` repeated `width` times
pub fn rule(fill: char, width: usize) -> String {
    std::iter::repeat(fill).take(width).collect()
}

/// Title-case a name: every letter following a non-letter is uppercased,
/// every other letter lowercased ("dinner for one" -> "Dinner For One").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Uppercase the first character and lowercase the rest ("date" -> "Date")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
