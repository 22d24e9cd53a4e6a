use std::path::{Component, Path, PathBuf};

pub const INSTRUCTION_SUFFIX: &str = ".instructions.md";
pub const PROMPT_SUFFIX: &str = ".prompt.md";

pub fn is_instruction_file(path: &Path) -> bool {
    lowercase_name(path).is_some_and(|name| name.contains(INSTRUCTION_SUFFIX))
}

pub fn is_prompt_file(path: &Path) -> bool {
    lowercase_name(path).is_some_and(|name| name.contains(PROMPT_SUFFIX))
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Path relative to `base` when it lives under it, else the path unchanged.
///
/// `.` components are dropped from both sides first, since glob results
/// never carry the leading `./` a base path may have.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = without_cur_dir(path);
    let rel = path
        .strip_prefix(without_cur_dir(base))
        .ok()
        .map(Path::to_path_buf);
    rel.unwrap_or(path)
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn lowercase_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_instruction_file() {
        assert!(is_instruction_file(Path::new("generate_unit_test.instructions.md")));
        assert!(is_instruction_file(Path::new("A/Review.INSTRUCTIONS.md")));
        assert!(!is_instruction_file(Path::new("review.prompt.md")));
        assert!(!is_instruction_file(Path::new("instructions.md")));
    }

    #[test]
    fn test_is_prompt_file() {
        assert!(is_prompt_file(Path::new(".github/prompts/summarize_logic.prompt.md")));
        assert!(is_prompt_file(Path::new("Task.Prompt.md")));
        assert!(!is_prompt_file(Path::new("README.md")));
    }

    #[test]
    fn test_relative_to() {
        let base = Path::new("/repo");
        assert_eq!(
            relative_to(Path::new("/repo/docs/a.md"), base),
            Path::new("docs/a.md")
        );
        assert_eq!(relative_to(Path::new("/else/a.md"), base), Path::new("/else/a.md"));
    }

    #[test]
    fn test_relative_to_cur_dir_base() {
        assert_eq!(
            relative_to(Path::new("playbook/docs/a.md"), Path::new("./playbook")),
            Path::new("docs/a.md")
        );
        assert_eq!(
            relative_to(Path::new("./src/app.py"), Path::new(".")),
            Path::new("src/app.py")
        );
        assert_eq!(relative_to(Path::new("docs/a.md"), Path::new("")), Path::new("docs/a.md"));
    }
}
