use super::model::{TrackMetadata, present};

/// Format one writer credit as `"First Middle Last (PRO) [CAE] Share%"`.
///
/// Returns `None` when every name part is empty. Parts whose source cell is
/// empty are dropped along with their brackets.
pub fn format_writer(
    first: &str,
    middle: &str,
    last: &str,
    pro: &str,
    cae: &str,
    share: &str,
) -> Option<String> {
    let name: Vec<&str> = [first, middle, last]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if name.is_empty() {
        return None;
    }

    let mut parts = vec![name.join(" ")];
    push_affiliation(&mut parts, pro, cae, share);
    Some(parts.join(" "))
}

/// Format one publisher credit as `"Name (PRO) [CAE] Share%"`.
pub fn format_publisher(name: &str, pro: &str, cae: &str, share: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    let mut parts = vec![name.to_string()];
    push_affiliation(&mut parts, pro, cae, share);
    Some(parts.join(" "))
}

fn push_affiliation(parts: &mut Vec<String>, pro: &str, cae: &str, share: &str) {
    if !pro.is_empty() {
        parts.push(format!("({pro})"));
    }
    if !cae.is_empty() {
        parts.push(format!("[{cae}]"));
    }
    if !share.is_empty() {
        parts.push(format!("{share}%"));
    }
}

/// The free-text comment shared by the RIFF `ICMT` entry and the ID3 `COMM`
/// frame: `"BPM: x | Key: y | Publishers: z"`, present parts only.
pub fn comment_text(meta: &TrackMetadata) -> Option<String> {
    let parts: Vec<String> = [
        ("BPM", meta.bpm.as_str()),
        ("Key", meta.key.as_str()),
        ("Publishers", meta.publishers.as_str()),
    ]
    .into_iter()
    .filter_map(|(label, v)| present(v).map(|v| format!("{label}: {v}")))
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}

/// Split a comma-joined credit string into trimmed, non-empty names.
pub fn split_credits(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
