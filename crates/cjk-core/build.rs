fn main() {
    // Validate embedded data at compile time; the runtime parsers rely on it.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/japanese/hepburn.toml",
        include_str!("src/japanese/hepburn.toml"),
    );

    for section in [
        "simplified_to_traditional",
        "traditional_to_japanese",
        "japanese_to_traditional",
    ] {
        validate_char_table(
            "src/normalize/variants.toml",
            include_str!("src/normalize/variants.toml"),
            section,
            true,
        );
    }
    validate_char_table(
        "src/korean/hanja.toml",
        include_str!("src/korean/hanja.toml"),
        "readings",
        true,
    );
    validate_char_table(
        "src/cantonese/jyutping.toml",
        include_str!("src/cantonese/jyutping.toml"),
        "readings",
        false,
    );
    validate_char_table(
        "src/japanese/fallback_readings.toml",
        include_str!("src/japanese/fallback_readings.toml"),
        "readings",
        false,
    );

    validate_lexicon(
        "src/japanese/lexicon.tsv",
        include_str!("src/japanese/lexicon.tsv"),
    );
}

fn validate_toml(path: &str, content: &str) -> toml::Value {
    match content.parse::<toml::Value>() {
        Ok(value) => value,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    }
}

/// Every key is one character; with `single_value`, so is every value.
fn validate_char_table(path: &str, content: &str, section: &str, single_value: bool) {
    let value = validate_toml(path, content);
    let Some(table) = value.get(section).and_then(toml::Value::as_table) else {
        panic!("{path} is missing [{section}]");
    };
    if table.is_empty() {
        panic!("{path} [{section}] is empty");
    }
    for (key, v) in table {
        if key.chars().count() != 1 {
            panic!("{path} [{section}]: key {key:?} is not a single character");
        }
        let Some(s) = v.as_str() else {
            panic!("{path} [{section}]: value for {key:?} is not a string");
        };
        if s.is_empty() || (single_value && s.chars().count() != 1) {
            panic!("{path} [{section}]: bad value {s:?} for {key:?}");
        }
    }
}

fn validate_lexicon(path: &str, content: &str) {
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 || fields[2].trim().parse::<i64>().is_err() {
            panic!("{path}:{}: expected surface<TAB>reading<TAB>cost", i + 1);
        }
    }
}
