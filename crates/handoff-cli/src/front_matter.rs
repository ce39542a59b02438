use std::collections::BTreeMap;

/// Parses an optional leading `---` front-matter block of `key: value`
/// string pairs from a role template.
///
/// This is a deliberately small YAML subset: one scalar pair per line,
/// optional single or double quotes around the value, `#` comment lines and
/// blank lines skipped, anything else ignored. A missing or unterminated
/// opening marker means the whole text is the body.
pub fn parse(text: &str) -> (BTreeMap<String, String>, String) {
    let meta = BTreeMap::new();
    let Some(rest) = text.strip_prefix("---") else {
        return (meta, text.to_owned());
    };
    let Some(rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return (meta, text.to_owned());
    };
    let Some((block, tail)) = rest.split_once("\n---") else {
        return (meta, text.to_owned());
    };
    let body = tail.split_once('\n').map(|(_, body)| body).unwrap_or("");
    (parse_block(block), body.to_owned())
}

fn parse_block(block: &str) -> BTreeMap<String, String> {
    let mut meta = BTreeMap::new();
    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            meta.insert(key.to_owned(), unquote(value.trim()).to_owned());
        }
    }
    meta
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
