use std::sync::OnceLock;

use regex::Regex;
use topup_config::key::{KeyPolicy, MAX_KEY_LEN, MIN_KEY_LEN};

use crate::types::RechargeKey;

/// Word-bounded digit run in the 12-16 band. Starts inside a longer run
/// fail the boundary check, so a 17+ digit run never matches partially.
const STRICT_PATTERN: &str = r"\b\d{12,16}\b";

fn strict_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(STRICT_PATTERN).expect("strict key pattern is valid"))
}

/// Letter glyphs OCR commonly reads in place of digits.
fn confusion_to_digit(c: char) -> char {
    match c {
        'O' | 'o' | 'D' | 'Q' => '0',
        'I' | 'l' | 'i' => '1',
        'Z' | 'z' => '2',
        'A' => '4',
        'S' | 's' => '5',
        'G' | 'b' => '6',
        'T' => '7',
        'B' => '8',
        'g' | 'q' => '9',
        other => other,
    }
}

/// Maximal ASCII digit runs of `text`, in order of occurrence.
fn digit_runs(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect()
}

/// Extracts a recharge key from recognized text under the given policy.
/// Pure function of its input; `None` when no run qualifies.
pub fn extract_key(text: &str, policy: &KeyPolicy) -> Option<RechargeKey> {
    match policy {
        KeyPolicy::Strict => extract_strict(text),
        KeyPolicy::Collapse => extract_collapsed(text),
        KeyPolicy::Fuzzy { target, near } => extract_fuzzy(text, *target, *near),
    }
}

fn extract_strict(text: &str) -> Option<RechargeKey> {
    strict_regex()
        .find(text)
        .map(|m| RechargeKey::new(m.as_str().to_string()))
}

fn extract_collapsed(text: &str) -> Option<RechargeKey> {
    let collapsed: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

    if (MIN_KEY_LEN..=MAX_KEY_LEN).contains(&collapsed.len()) {
        return Some(RechargeKey::new(collapsed));
    }

    // Collapsed text overflows the band: take the first bounded run instead
    digit_runs(text)
        .into_iter()
        .find(|run| (MIN_KEY_LEN..=MAX_KEY_LEN).contains(&run.len()))
        .map(|run| RechargeKey::new(run.to_string()))
}

fn extract_fuzzy(text: &str, target: usize, near: usize) -> Option<RechargeKey> {
    let mapped: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(confusion_to_digit)
        .collect();

    let runs = digit_runs(&mapped);

    // An exact-length run always wins
    if let Some(run) = runs.iter().find(|run| run.len() == target) {
        return Some(RechargeKey::new((*run).to_string()));
    }

    let lo = target.saturating_sub(near);
    let hi = target + near;

    // First run with the smallest distance to the target length. Kept as an
    // explicit fold: `min_by_key` returns the last minimum, which would
    // break the first-occurrence tie-break.
    let mut best: Option<&str> = None;
    for run in &runs {
        if !(lo..=hi).contains(&run.len()) {
            continue;
        }
        match best {
            Some(b) if run.len().abs_diff(target) >= b.len().abs_diff(target) => {}
            _ => best = Some(run),
        }
    }

    let mut key = best?.to_string();
    if key.len() > target {
        key.truncate(target);
    } else {
        while key.len() < target {
            key.push('0');
        }
    }

    Some(RechargeKey::new(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(text: &str) -> Option<String> {
        extract_key(text, &KeyPolicy::Strict).map(|k| k.to_string())
    }

    fn collapse(text: &str) -> Option<String> {
        extract_key(text, &KeyPolicy::Collapse).map(|k| k.to_string())
    }

    fn fuzzy(text: &str) -> Option<String> {
        extract_key(text, &KeyPolicy::fuzzy()).map(|k| k.to_string())
    }

    #[test]
    fn strict_finds_bounded_run() {
        assert_eq!(
            strict("PIN: 123456789012 thank you"),
            Some("123456789012".to_string())
        );
    }

    #[test]
    fn strict_rejects_eleven_digits_accepts_twelve() {
        assert_eq!(strict("12345678901"), None);
        assert_eq!(strict("123456789012"), Some("123456789012".to_string()));
    }

    #[test]
    fn strict_accepts_sixteen_rejects_seventeen() {
        assert_eq!(
            strict("1234567890123456"),
            Some("1234567890123456".to_string())
        );
        // A 17-digit run has no 12-16 word-bounded sub-run
        assert_eq!(strict("12345678901234567"), None);
    }

    #[test]
    fn strict_takes_first_of_multiple_runs() {
        assert_eq!(
            strict("111111111111 222222222222"),
            Some("111111111111".to_string())
        );
    }

    #[test]
    fn strict_ignores_separated_groups() {
        // Four 4-digit groups never form a bounded 12-16 run
        assert_eq!(strict("1234 5678 9012 3456"), None);
    }

    #[test]
    fn strict_empty_and_digitless_input() {
        assert_eq!(strict(""), None);
        assert_eq!(strict("no digits here"), None);
    }

    #[test]
    fn collapse_merges_spaced_groups() {
        assert_eq!(
            collapse("Card No 1234 5678 9012 3456 Exp"),
            Some("1234567890123456".to_string())
        );
    }

    #[test]
    fn collapse_rejects_eleven_total_digits() {
        assert_eq!(collapse("123 456 789 01"), None);
    }

    #[test]
    fn collapse_accepts_twelve_total_digits() {
        assert_eq!(collapse("123 456 789 012"), Some("123456789012".to_string()));
    }

    #[test]
    fn collapse_overflow_falls_back_to_first_bounded_run() {
        // 12 + 5 digits collapse to 17; the 12-run still qualifies on its own
        assert_eq!(
            collapse("123456789012 and 34567"),
            Some("123456789012".to_string())
        );
    }

    #[test]
    fn collapse_overflow_without_bounded_run_is_no_match() {
        assert_eq!(collapse("12345678901234567"), None);
    }

    #[test]
    fn collapse_empty_and_digitless_input() {
        assert_eq!(collapse(""), None);
        assert_eq!(collapse("Exp date only"), None);
    }

    #[test]
    fn fuzzy_exact_seventeen_survives_unchanged() {
        assert_eq!(
            fuzzy("12345678901234567"),
            Some("12345678901234567".to_string())
        );
    }

    #[test]
    fn fuzzy_sixteen_padded_with_one_zero() {
        assert_eq!(
            fuzzy("1234567890123456"),
            Some("12345678901234560".to_string())
        );
    }

    #[test]
    fn fuzzy_eighteen_truncated_to_first_seventeen() {
        assert_eq!(
            fuzzy("123456789012345678"),
            Some("12345678901234567".to_string())
        );
    }

    #[test]
    fn fuzzy_boundary_fifteen_in_nineteen_in() {
        assert_eq!(
            fuzzy("123456789012345"),
            Some("12345678901234500".to_string())
        );
        assert_eq!(
            fuzzy("1234567890123456789"),
            Some("12345678901234567".to_string())
        );
    }

    #[test]
    fn fuzzy_boundary_fourteen_out_twenty_out() {
        assert_eq!(fuzzy("12345678901234"), None);
        assert_eq!(fuzzy("12345678901234567890"), None);
    }

    #[test]
    fn fuzzy_maps_confused_glyphs_to_digits() {
        // I -> 1, O -> 0, S -> 5, B -> 8
        assert_eq!(
            fuzzy("I234567890123456B"),
            Some("12345678901234568".to_string())
        );
        assert_eq!(
            fuzzy("O2345678901234S67"),
            Some("02345678901234567".to_string())
        );
    }

    #[test]
    fn fuzzy_strips_punctuation_before_matching() {
        // Dashes are not alphanumeric, so the groups merge into one run
        assert_eq!(
            fuzzy("1234-5678-9012-34567"),
            Some("12345678901234567".to_string())
        );
    }

    #[test]
    fn fuzzy_unmapped_letters_split_runs() {
        // 'x' survives the confusion map and separates two runs of 8 and 9:
        // both are outside the 15-19 band
        assert_eq!(fuzzy("12345678x123456789"), None);
    }

    #[test]
    fn fuzzy_prefers_closest_length() {
        // 15-run first, 16-run second: 16 is closer to 17
        assert_eq!(
            fuzzy("123456789012345 then 1111222233334444"),
            Some("11112222333344440".to_string())
        );
    }

    #[test]
    fn fuzzy_equal_distance_takes_first_occurrence() {
        // 16 and 18 are both one off target; the earlier run wins
        assert_eq!(
            fuzzy("1111222233334444 xx 222233334444555566"),
            Some("11112222333344440".to_string())
        );
    }

    #[test]
    fn fuzzy_exact_run_beats_earlier_near_run() {
        assert_eq!(
            fuzzy("1111222233334444 xx 22223333444455556"),
            Some("22223333444455556".to_string())
        );
    }

    #[test]
    fn fuzzy_empty_and_digitless_input() {
        assert_eq!(fuzzy(""), None);
        assert_eq!(fuzzy("xyz xyz"), None);
    }
}
