//! Indonesian numeral-to-words conversion for Rupiah amounts.
//!
//! `terbilang(15_000_000)` yields `"lima belas juta rupiah"`, the
//! spelled-out form required in the amount clause of the contract.

const DIGITS: [&str; 10] = [
    "", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan",
];

/// Scale words for 3-digit groups, least significant first.
const SCALES: [&str; 7] = ["", "ribu", "juta", "miliar", "triliun", "kuadriliun", "kuintiliun"];

/// Convert a whole-Rupiah amount to Indonesian words.
///
/// Zero maps to the literal zero sentence; every other amount is
/// decomposed into 3-digit groups, each spoken with its scale word,
/// and suffixed with the currency unit. All `u64` inputs terminate.
///
/// # Example
///
/// ```
/// use akta::format::terbilang;
///
/// assert_eq!(terbilang(0), "nol rupiah");
/// assert_eq!(terbilang(1000), "seribu rupiah");
/// assert_eq!(terbilang(15_000_000), "lima belas juta rupiah");
/// ```
pub fn terbilang(amount: u64) -> String {
    if amount == 0 {
        return "nol rupiah".to_string();
    }

    // Decompose into 3-digit groups, least significant first.
    let mut groups = Vec::new();
    let mut rest = amount;
    while rest > 0 {
        groups.push((rest % 1000) as u16);
        rest /= 1000;
    }

    // Speak non-empty groups most-significant-first.
    let mut parts: Vec<String> = Vec::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        // "satu ribu" contracts to "seribu" at the thousands scale only.
        if group == 1 && scale == 1 {
            parts.push("seribu".to_string());
            continue;
        }
        let mut spoken = group_words(group);
        if scale > 0 {
            spoken.push(' ');
            spoken.push_str(SCALES[scale]);
        }
        parts.push(spoken);
    }

    let mut out = parts.join(" ");
    out.push_str(" rupiah");
    out
}

/// Spoken form of one 3-digit group (1..=999).
fn group_words(n: u16) -> String {
    debug_assert!((1..=999).contains(&n));

    let mut parts: Vec<String> = Vec::new();
    let hundreds = (n / 100) as usize;
    let rest = n % 100;

    match hundreds {
        0 => {}
        1 => parts.push("seratus".to_string()),
        _ => parts.push(format!("{} ratus", DIGITS[hundreds])),
    }

    match rest {
        0 => {}
        1..=9 => parts.push(DIGITS[rest as usize].to_string()),
        10 => parts.push("sepuluh".to_string()),
        11 => parts.push("sebelas".to_string()),
        12..=19 => parts.push(format!("{} belas", DIGITS[(rest - 10) as usize])),
        _ => {
            parts.push(format!("{} puluh", DIGITS[(rest / 10) as usize]));
            let ones = rest % 10;
            if ones > 0 {
                parts.push(DIGITS[ones as usize].to_string());
            }
        }
    }

    parts.join(" ")
}
