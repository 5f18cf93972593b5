// modgate-signals/src/repetition/mod.rs

/// Length of the longest run of one identical character.
///
/// Newlines break a run and are never counted as part of one.
pub fn longest_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<char> = None;

    for c in text.chars() {
        if c == '\n' {
            previous = None;
            current = 0;
            continue;
        }
        if previous == Some(c) {
            current += 1;
        } else {
            previous = Some(c);
            current = 1;
        }
        longest = longest.max(current);
    }
    longest
}

/// Returns `true` as soon as any character repeats `n` or more times in a row.
pub fn has_run_of(text: &str, n: usize) -> bool {
    if n == 0 {
        return true;
    }
    let mut current = 0;
    let mut previous: Option<char> = None;

    for c in text.chars() {
        if c == '\n' {
            previous = None;
            current = 0;
            continue;
        }
        if previous == Some(c) {
            current += 1;
        } else {
            previous = Some(c);
            current = 1;
        }
        if current >= n {
            return true;
        }
    }
    false
}
