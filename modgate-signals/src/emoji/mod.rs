// modgate-signals/src/emoji/mod.rs

/// Code point ranges treated as emoji.
///
/// Emoticons, misc symbols & pictographs, transport & map symbols, regional
/// indicators, misc symbols and dingbats.
pub const EMOJI_RANGES: [(u32, u32); 6] = [
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x1F1E0, 0x1F1FF),
    (0x2600, 0x26FF),
    (0x2700, 0x27BF),
];

/// Returns `true` if `c` falls inside one of the [`EMOJI_RANGES`].
pub fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES.iter().any(|&(lo, hi)| cp >= lo && cp <= hi)
}

/// Counts characters inside the emoji ranges.
pub fn count_emoji(text: &str) -> usize {
    text.chars().filter(|&c| is_emoji(c)).count()
}
