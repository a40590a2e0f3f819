//! Approximate substring matching.

/// Minimum Levenshtein distance between `pattern` and any substring of `text`.
///
/// Standard two-row dynamic programming where the first row is all zeros on
/// the text axis, so a match may start anywhere in `text`. The result is in
/// `[0, pattern.len()]`.
pub(crate) fn substring_distance(text: &[char], pattern: &[char]) -> usize {
    let m = pattern.len();
    if m == 0 {
        return 0;
    }

    // prev[j]: distance between pattern[..j] and the best substring of text
    // ending at the previous text position.
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr: Vec<usize> = vec![0; m + 1];
    let mut best = m;

    for &c in text {
        curr[0] = 0;
        for j in 1..=m {
            let cost = if c == pattern[j - 1] { 0 } else { 1 };
            let deletion = prev[j] + 1;
            let insertion = curr[j - 1] + 1;
            let substitution = prev[j - 1] + cost;
            curr[j] = deletion.min(insertion).min(substitution);
        }
        best = best.min(curr[m]);
        if best == 0 {
            break;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Lower-cased characters of `s`. No diacritic folding.
pub(crate) fn match_key(s: &str) -> Vec<char> {
    s.to_lowercase().chars().collect()
}
