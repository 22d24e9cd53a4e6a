use serde_yaml_ng::{Mapping, Value};

const DELIMITER: &str = "---";

pub struct ParsedDocument {
    pub frontmatter: Option<Mapping>,
    pub body: String,
}

/// Split a markdown document into its YAML frontmatter and body.
///
/// Frontmatter is recognised only when the first line is `---` and a later
/// line closes it. Unterminated blocks, invalid YAML, and non-mapping YAML
/// all yield `None` with the original content untouched.
pub fn extract_frontmatter(content: &str) -> ParsedDocument {
    let unchanged = || ParsedDocument {
        frontmatter: None,
        body: content.to_string(),
    };

    let lines: Vec<&str> = content.split('\n').collect();
    if lines.first().map(|l| l.trim()) != Some(DELIMITER) {
        return unchanged();
    }

    let Some(end) = lines
        .iter()
        .skip(1)
        .position(|l| l.trim() == DELIMITER)
        .map(|i| i + 1)
    else {
        return unchanged();
    };

    let yaml = lines[1..end].join("\n");
    let frontmatter = if yaml.trim().is_empty() {
        Mapping::new()
    } else {
        match serde_yaml_ng::from_str::<Value>(&yaml) {
            Ok(Value::Mapping(map)) => map,
            Ok(Value::Null) => Mapping::new(),
            Ok(_) => return unchanged(),
            Err(e) => {
                tracing::debug!("Ignoring unparsable frontmatter: {}", e);
                return unchanged();
            }
        }
    };

    ParsedDocument {
        frontmatter: Some(frontmatter),
        body: lines[end + 1..].join("\n"),
    }
}

/// Read a frontmatter key as a string.
///
/// Scalars are rendered; sequences of scalars are joined with `,`.
pub fn string_field(map: &Mapping, key: &str) -> Option<String> {
    map.get(key).and_then(value_to_string)
}

pub fn bool_field(map: &Mapping, key: &str) -> Option<bool> {
    match map.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn has_key(map: &Mapping, key: &str) -> bool {
    map.contains_key(key)
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Sequence(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_to_string).collect();
            Some(parts.join(","))
        }
        Value::Tagged(tagged) => value_to_string(&tagged.value),
        Value::Mapping(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_valid() {
        let content = "---\nmode: agent\nmodel: GPT-4o\n---\n# Title\nBody";
        let doc = extract_frontmatter(content);
        let fm = doc.frontmatter.unwrap();
        assert_eq!(string_field(&fm, "mode").as_deref(), Some("agent"));
        assert_eq!(string_field(&fm, "model").as_deref(), Some("GPT-4o"));
        assert_eq!(doc.body, "# Title\nBody");
    }

    #[test]
    fn test_body_not_trimmed() {
        let content = "---\na: 1\n---\n\n  indented\n";
        let doc = extract_frontmatter(content);
        assert_eq!(doc.body, "\n  indented\n");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just markdown\n---\nnot frontmatter";
        let doc = extract_frontmatter(content);
        assert!(doc.frontmatter.is_none());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_unterminated() {
        let content = "---\nname: test\nNo closing delimiter";
        let doc = extract_frontmatter(content);
        assert!(doc.frontmatter.is_none());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_empty_block_is_empty_mapping() {
        let doc = extract_frontmatter("---\n\n---\nBody");
        assert!(doc.frontmatter.unwrap().is_empty());
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_invalid_yaml_keeps_content() {
        let content = "---\nkey: [unclosed\n---\nBody";
        let doc = extract_frontmatter(content);
        assert!(doc.frontmatter.is_none());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_scalar_yaml_is_not_frontmatter() {
        let content = "---\njust a sentence\n---\nBody";
        let doc = extract_frontmatter(content);
        assert!(doc.frontmatter.is_none());
    }

    #[test]
    fn test_delimiter_with_whitespace_and_crlf() {
        let content = "---  \r\napplyTo: '**/*.py'\r\n---\r\nBody";
        let doc = extract_frontmatter(content);
        let fm = doc.frontmatter.unwrap();
        assert_eq!(string_field(&fm, "applyTo").as_deref(), Some("**/*.py"));
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_string_field_rendering() {
        let doc = extract_frontmatter(
            "---\napplyTo: ['**/*.ts', '**/*.tsx']\npriority: 3\nvolatile: true\nempty:\n---\n",
        );
        let fm = doc.frontmatter.unwrap();
        assert_eq!(
            string_field(&fm, "applyTo").as_deref(),
            Some("**/*.ts,**/*.tsx")
        );
        assert_eq!(string_field(&fm, "priority").as_deref(), Some("3"));
        assert_eq!(bool_field(&fm, "volatile"), Some(true));
        assert_eq!(string_field(&fm, "empty"), None);
        assert!(has_key(&fm, "empty"));
    }
}
