// Format checks shared by the library service. Each one is a pure predicate so the service
// decides which error a failing check maps to.

const ISBN_10_LEN: usize = 10;
const ISBN_13_LEN: usize = 13;
const USER_ID_LEN: usize = 12;

/// Returns true when `isbn` is a 10 or 13 digit string with a valid check digit.
///
/// ISBN-10 uses weights 10 down to 1 and must sum to a multiple of 11. The `X` check
/// digit is not accepted. ISBN-13 alternates weights 1 and 3 and must sum to a multiple
/// of 10.
pub fn is_valid_isbn(isbn: &str) -> bool {
    let digits = match to_digits(isbn) {
        Some(digits) => digits,
        None => return false,
    };
    match digits.len() {
        ISBN_10_LEN => {
            let sum: u32 = digits.iter().enumerate()
                .map(|(i, d)| d * (ISBN_10_LEN - i) as u32)
                .sum();
            sum % 11 == 0
        }
        ISBN_13_LEN => {
            let sum: u32 = digits.iter().enumerate()
                .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
                .sum();
            sum % 10 == 0
        }
        _ => false,
    }
}

/// Returns true when `user_id` is exactly twelve ASCII digits.
pub fn is_valid_user_id(user_id: &str) -> bool {
    user_id.len() == USER_ID_LEN && user_id.bytes().all(|b| b.is_ascii_digit())
}

// titles and user names only need to be present
pub fn is_non_empty(value: &str) -> bool {
    !value.is_empty()
}

/// Returns true for person names made of letters separated by single spaces, hyphens or
/// periods, e.g. `Leo Tolstoy`, `Jean-Paul Sartre` or `J.R.R. Tolkien`.
///
/// A name must start and end with a letter and may not contain digits or other symbols.
/// Two separators may not be next to each other, except that an initial's period may be
/// followed by a single space, as in `J. K. Rowling`.
pub fn is_valid_author_name(name: &str) -> bool {
    let (first, last) = match (name.chars().next(), name.chars().last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return false,
    };
    if !first.is_alphabetic() || !last.is_alphabetic() {
        return false;
    }
    let mut previous_separator: Option<char> = None;
    for c in name.chars() {
        if c.is_alphabetic() {
            previous_separator = None;
        } else if is_name_separator(c) {
            match previous_separator {
                None => {}
                Some('.') if c == ' ' => {}
                Some(_) => return false,
            }
            previous_separator = Some(c);
        } else {
            return false;
        }
    }
    true
}

fn is_name_separator(c: char) -> bool {
    c == ' ' || c == '-' || c == '.'
}

fn to_digits(value: &str) -> Option<Vec<u32>> {
    value.chars().map(|c| if c.is_ascii_digit() { c.to_digit(10) } else { None }).collect()
}
