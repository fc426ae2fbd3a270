//! Tone-marked Pinyin → Bopomofo (Zhuyin).

/// Pinyin initials, two-letter ones first so `zh` wins over `z`.
const INITIALS: &[(&str, &str)] = &[
    ("zh", "ㄓ"),
    ("ch", "ㄔ"),
    ("sh", "ㄕ"),
    ("b", "ㄅ"),
    ("p", "ㄆ"),
    ("m", "ㄇ"),
    ("f", "ㄈ"),
    ("d", "ㄉ"),
    ("t", "ㄊ"),
    ("n", "ㄋ"),
    ("l", "ㄌ"),
    ("g", "ㄍ"),
    ("k", "ㄎ"),
    ("h", "ㄏ"),
    ("j", "ㄐ"),
    ("q", "ㄑ"),
    ("x", "ㄒ"),
    ("r", "ㄖ"),
    ("z", "ㄗ"),
    ("c", "ㄘ"),
    ("s", "ㄙ"),
];

fn final_symbol(final_: &str) -> Option<&'static str> {
    let symbol = match final_ {
        // zhi, chi, shi, ri, zi, ci, si carry no written final.
        "" => "",
        "a" => "ㄚ",
        "o" => "ㄛ",
        "e" => "ㄜ",
        "ê" => "ㄝ",
        "ai" => "ㄞ",
        "ei" => "ㄟ",
        "ao" => "ㄠ",
        "ou" => "ㄡ",
        "an" => "ㄢ",
        "en" => "ㄣ",
        "ang" => "ㄤ",
        "eng" => "ㄥ",
        "er" => "ㄦ",
        "ong" => "ㄨㄥ",
        "i" => "ㄧ",
        "ia" => "ㄧㄚ",
        "io" => "ㄧㄛ",
        "ie" => "ㄧㄝ",
        "iao" => "ㄧㄠ",
        "iou" => "ㄧㄡ",
        "ian" => "ㄧㄢ",
        "in" => "ㄧㄣ",
        "iang" => "ㄧㄤ",
        "ing" => "ㄧㄥ",
        "iong" => "ㄩㄥ",
        "u" => "ㄨ",
        "ua" => "ㄨㄚ",
        "uo" => "ㄨㄛ",
        "uai" => "ㄨㄞ",
        "uei" => "ㄨㄟ",
        "uan" => "ㄨㄢ",
        "uen" => "ㄨㄣ",
        "uang" => "ㄨㄤ",
        "ueng" => "ㄨㄥ",
        "ü" => "ㄩ",
        "üe" => "ㄩㄝ",
        "üan" => "ㄩㄢ",
        "ün" => "ㄩㄣ",
        _ => return None,
    };
    Some(symbol)
}

/// Strip tone diacritics (or a trailing tone digit) from a syllable.
/// Returns the lowercase toneless syllable and its tone, 5 for neutral.
fn split_tone(syllable: &str) -> Option<(String, u8)> {
    let mut base = String::with_capacity(syllable.len());
    let mut tone = 5;
    let mut chars = syllable.chars().peekable();
    while let Some(c) = chars.next() {
        let (plain, marked) = match c.to_ascii_lowercase() {
            'ā' | 'Ā' => ('a', 1),
            'á' | 'Á' => ('a', 2),
            'ǎ' | 'Ǎ' => ('a', 3),
            'à' | 'À' => ('a', 4),
            'ē' | 'Ē' => ('e', 1),
            'é' | 'É' => ('e', 2),
            'ě' | 'Ě' => ('e', 3),
            'è' | 'È' => ('e', 4),
            'ī' | 'Ī' => ('i', 1),
            'í' | 'Í' => ('i', 2),
            'ǐ' | 'Ǐ' => ('i', 3),
            'ì' | 'Ì' => ('i', 4),
            'ō' | 'Ō' => ('o', 1),
            'ó' | 'Ó' => ('o', 2),
            'ǒ' | 'Ǒ' => ('o', 3),
            'ò' | 'Ò' => ('o', 4),
            'ū' | 'Ū' => ('u', 1),
            'ú' | 'Ú' => ('u', 2),
            'ǔ' | 'Ǔ' => ('u', 3),
            'ù' | 'Ù' => ('u', 4),
            'ǖ' | 'Ǖ' => ('ü', 1),
            'ǘ' | 'Ǘ' => ('ü', 2),
            'ǚ' | 'Ǚ' => ('ü', 3),
            'ǜ' | 'Ǜ' => ('ü', 4),
            'ü' | 'Ü' | 'v' => ('ü', 0),
            'ê' | 'Ê' => ('ê', 0),
            d @ '1'..='5' if chars.peek().is_none() => {
                tone = d as u8 - b'0';
                continue;
            }
            l if l.is_ascii_lowercase() => (l, 0),
            _ => return None,
        };
        if marked != 0 {
            tone = marked;
        }
        base.push(plain);
    }
    if base.is_empty() {
        return None;
    }
    Some((base, tone))
}

/// Rewrite the spelled final into its full form: y/w spellings expanded,
/// ü restored after j/q/x, abbreviated iu/ui/un expanded.
fn full_final(initial: Option<&str>, rest: &str) -> String {
    match initial {
        None => {
            if let Some(after) = rest.strip_prefix('y') {
                if let Some(u) = after.strip_prefix('u') {
                    format!("ü{u}")
                } else if after.starts_with('i') {
                    after.to_string()
                } else {
                    format!("i{after}")
                }
            } else if let Some(after) = rest.strip_prefix('w') {
                if after.starts_with('u') {
                    after.to_string()
                } else {
                    format!("u{after}")
                }
            } else {
                rest.to_string()
            }
        }
        Some("zh" | "ch" | "sh" | "r" | "z" | "c" | "s") if rest == "i" => String::new(),
        Some(init) => {
            let rest = match rest.strip_prefix('u') {
                Some(u) if matches!(init, "j" | "q" | "x") => format!("ü{u}"),
                _ => rest.to_string(),
            };
            match rest.as_str() {
                "iu" => "iou".to_string(),
                "ui" => "uei".to_string(),
                "un" => "uen".to_string(),
                _ => rest,
            }
        }
    }
}

/// Convert one tone-marked Pinyin syllable (`diàn`, or `dian4`) to Bopomofo.
/// Returns `None` when the syllable is not valid Pinyin.
pub fn pinyin_to_bopomofo(syllable: &str) -> Option<String> {
    let (base, tone) = split_tone(syllable)?;

    let (initial, rest) = match INITIALS.iter().find(|(p, _)| base.starts_with(p)) {
        // A bare "n"/"m" syllable has no final.
        Some((p, sym)) if base.len() > p.len() => (Some((*p, *sym)), &base[p.len()..]),
        Some(_) => return None,
        None => (None, base.as_str()),
    };
    let final_ = full_final(initial.map(|(p, _)| p), rest);

    let mut out = String::new();
    if tone == 5 {
        out.push('˙');
    }
    if let Some((_, sym)) = initial {
        out.push_str(sym);
    }
    out.push_str(final_symbol(&final_)?);
    match tone {
        2 => out.push('ˊ'),
        3 => out.push('ˇ'),
        4 => out.push('ˋ'),
        _ => {}
    }
    Some(out)
}
