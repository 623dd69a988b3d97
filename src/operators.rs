/// Concatenates `value` with itself `times` times.
///
/// Non-positive counts produce an empty string.
pub fn repeat_string(value: &str, times: i64) -> String {
    if times <= 0 {
        return String::new();
    }
    usize::try_from(times).map_or_else(|_| String::new(), |n| value.repeat(n))
}
