/// Returns its argument untouched, at whatever type it was given.
pub fn peek<T>(value: T) -> T {
    value
}

/// Upper-cases the first letter of every word and lower-cases the rest.
pub fn capitalized(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }
    result
}
