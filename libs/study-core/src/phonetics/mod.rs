//! Phonetic (zhuyin) string handling: tone stripping, edit distance and
//! similarity scoring.
//!
//! A transcription is a run of syllable glyphs optionally followed by one
//! tone mark; a missing mark denotes the first tone.

pub mod lookup;
pub mod validator;

/// The four zhuyin tone marks. First tone carries no mark.
const TONE_MARKS: [char; 4] = ['ˊ', 'ˇ', 'ˋ', '˙'];

/// Strip all tone marks from a transcription.
pub fn strip_tones(s: &str) -> String {
    s.chars().filter(|c| !TONE_MARKS.contains(c)).collect()
}

/// Levenshtein distance with unit-cost insert/delete/substitute.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Tone-insensitive similarity between two transcriptions, 0.0 to 1.0.
///
/// Both inputs are tone-stripped before comparison. Two empty strings have
/// no defined similarity and score 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = strip_tones(a);
    let b = strip_tones(b);

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    1.0 - levenshtein(&a, &b) as f64 / max_len as f64
}
