
const ZERO: &str = "ぜろ";
const TEN_THOUSAND: &str = "いちまん";
const HUNDRED: &str = "ひゃく";
const THOUSAND: &str = "せん";

const UNITS: [&str; 10] = [
    "", "いち", "に", "さん", "よん", "ご", "ろく", "なな", "はち", "きゅう",
];
const TENS: [&str; 10] = [
    "",
    "じゅう",
    "にじゅう",
    "さんじゅう",
    "よんじゅう",
    "ごじゅう",
    "ろくじゅう",
    "ななじゅう",
    "はちじゅう",
    "きゅうじゅう",
];

// Sound changes at the hundreds/thousands boundary are irregular, so they are
// listed per digit instead of derived.
const HUNDREDS_IRREGULAR: [(u32, &str); 3] =
    [(3, "さんびゃく"), (6, "ろっぴゃく"), (8, "はっぴゃく")];
const THOUSANDS_IRREGULAR: [(u32, &str); 2] = [(3, "さんぜん"), (8, "はっせん")];

/// Hiragana reading of `n` as spoken, for feeding to the TTS voice.
///
/// Everything at or above 10000 collapses to いちまん; the audio set ends
/// there.
pub(crate) fn reading(n: u32) -> String {
    if n == 0 {
        return ZERO.to_owned();
    }
    if n >= 10_000 {
        return TEN_THOUSAND.to_owned();
    }
    compose(n)
}

fn compose(n: u32) -> String {
    match n {
        0 => String::new(),
        1..=9 => UNITS[n as usize].to_owned(),
        10..=99 => format!("{}{}", TENS[(n / 10) as usize], compose(n % 10)),
        100..=999 => format!(
            "{}{}",
            place(n / 100, HUNDRED, &HUNDREDS_IRREGULAR),
            compose(n % 100),
        ),
        _ => format!(
            "{}{}",
            place(n / 1000, THOUSAND, &THOUSANDS_IRREGULAR),
            compose(n % 1000),
        ),
    }
}

// 100 and 1000 are read as the bare place marker, without a leading いち.
fn place(digit: u32, marker: &str, irregular: &[(u32, &str)]) -> String {
    if let Some((_, word)) = irregular.iter().find(|(d, _)| *d == digit) {
        return (*word).to_owned();
    }
    if digit == 1 {
        return marker.to_owned();
    }
    format!("{}{marker}", UNITS[digit as usize])
}
