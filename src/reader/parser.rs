//! Section/key-value file parser.
//!
//! Parses `[section]` headers followed by `key=value` (or `key: value`)
//! entries into a [`ConfigMap`]. Comment and blank lines are skipped.
//! Keys and section names preserve case exactly.

use thiserror::Error;

use crate::models::ConfigMap;

/// Parse failure with the 1-based line it occurred on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    pub line: usize,
    pub reason: String,
}

impl ParseError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Parse configuration file contents into a [`ConfigMap`].
///
/// Duplicate keys within a section overwrite (last write wins); a repeated
/// section header reopens the existing section and merges into it.
pub fn parse_cfg(input: &str) -> Result<ConfigMap, ParseError> {
    let mut map = ConfigMap::new();
    let mut current: Option<String> = None;

    for (idx, raw) in input.lines().enumerate() {
        let lineno = idx + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(ParseError::new(
                    lineno,
                    format!("unterminated section header '{line}'"),
                ));
            }
            let name = line[1..line.len() - 1].trim();
            if name.is_empty() {
                return Err(ParseError::new(lineno, "empty section name"));
            }
            map.entry(name.to_string()).or_default();
            current = Some(name.to_string());
            continue;
        }

        // Entry line: the first '=' or ':' splits key from value.
        let Some(pos) = line.find(['=', ':']) else {
            return Err(ParseError::new(
                lineno,
                format!("expected 'key = value' or 'key: value', got '{line}'"),
            ));
        };
        let key = line[..pos].trim();
        let value = line[pos + 1..].trim();
        if key.is_empty() {
            return Err(ParseError::new(lineno, "entry has no key"));
        }

        let Some(ref section) = current else {
            return Err(ParseError::new(
                lineno,
                format!("entry '{key}' before any [section] header"),
            ));
        };
        map.entry(section.clone())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_sections_and_entries() {
        let map = parse_cfg("[server]\nport = 8080\nhost = 0.0.0.0\n\n[db]\nname = app\n")
            .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map["server"]["port"], "8080");
        assert_eq!(map["server"]["host"], "0.0.0.0");
        assert_eq!(map["db"]["name"], "app");
    }

    #[test]
    fn colon_delimiter_parses_the_same() {
        let eq = parse_cfg("[s]\nkey = value\n").unwrap();
        let colon = parse_cfg("[s]\nkey: value\n").unwrap();
        assert_eq!(eq, colon);
    }

    #[test]
    fn first_delimiter_wins() {
        let map = parse_cfg("[s]\nurl = http://example.com:8080\n").unwrap();
        assert_eq!(map["s"]["url"], "http://example.com:8080");

        let map = parse_cfg("[s]\ntime: 12=30\n").unwrap();
        assert_eq!(map["s"]["time"], "12=30");
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let map = parse_cfg("# top comment\n\n[s]\n; note\nkey = value\n   # indented\n")
            .unwrap();
        assert_eq!(map["s"].len(), 1);
        assert_eq!(map["s"]["key"], "value");
    }

    #[test]
    fn no_inline_comment_stripping() {
        let map = parse_cfg("[s]\nkey = value ; not a comment\n").unwrap();
        assert_eq!(map["s"]["key"], "value ; not a comment");
    }

    #[test]
    fn keys_preserve_case() {
        let map = parse_cfg("[s]\nMaxConnections = 10\nmaxconnections = 20\n").unwrap();
        assert_eq!(map["s"]["MaxConnections"], "10");
        assert_eq!(map["s"]["maxconnections"], "20");
        assert_eq!(map["s"].len(), 2);
    }

    #[test]
    fn duplicate_key_last_write_wins() {
        let map = parse_cfg("[s]\nkey = first\nkey = second\n").unwrap();
        assert_eq!(map["s"].len(), 1);
        assert_eq!(map["s"]["key"], "second");
    }

    #[test]
    fn duplicate_section_header_merges() {
        let map = parse_cfg("[s]\na = 1\n[t]\nx = 9\n[s]\nb = 2\na = 3\n").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["s"]["a"], "3");
        assert_eq!(map["s"]["b"], "2");
    }

    #[test]
    fn values_are_trimmed_but_interior_whitespace_kept() {
        let map = parse_cfg("[s]\n  key   =   two words  \n").unwrap();
        assert_eq!(map["s"]["key"], "two words");
    }

    #[test]
    fn empty_value_is_empty_string() {
        let map = parse_cfg("[s]\nkey =\n").unwrap();
        assert_eq!(map["s"]["key"], "");
    }

    #[test]
    fn empty_section_is_kept() {
        let map = parse_cfg("[empty]\n").unwrap();
        assert!(map["empty"].is_empty());
    }

    #[test]
    fn empty_input_is_empty_map() {
        let map = parse_cfg("").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn error_on_entry_before_section() {
        let err = parse_cfg("key = value\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.reason.contains("before any [section]"), "got: {err}");
    }

    #[test]
    fn error_on_unterminated_header() {
        let err = parse_cfg("[server\nport = 8080\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.reason.contains("unterminated"), "got: {err}");
    }

    #[test]
    fn error_on_empty_section_name() {
        let err = parse_cfg("[]\n").unwrap_err();
        assert!(err.reason.contains("empty section name"), "got: {err}");
    }

    #[test]
    fn error_on_line_without_delimiter() {
        let err = parse_cfg("[s]\njust some words\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.reason.contains("expected"), "got: {err}");
    }

    #[test]
    fn error_on_missing_key() {
        let err = parse_cfg("[s]\n= value\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.reason.contains("no key"), "got: {err}");
    }
}
