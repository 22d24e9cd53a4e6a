use serde::{Deserialize, Serialize};

/// Glob patterns, relative to the base path, used to locate documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryPatterns {
    #[serde(default = "default_instruction_patterns")]
    pub instructions: Vec<String>,
    #[serde(default = "default_prompt_patterns")]
    pub prompts: Vec<String>,
    #[serde(default = "default_document_patterns")]
    pub documents: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for DiscoveryPatterns {
    fn default() -> Self {
        Self {
            instructions: default_instruction_patterns(),
            prompts: default_prompt_patterns(),
            documents: default_document_patterns(),
            exclude: Vec::new(),
        }
    }
}

impl DiscoveryPatterns {
    /// Replace every category's patterns with one include list.
    ///
    /// Classification still separates instructions and prompts by file name,
    /// so a shared list only narrows where files are looked for.
    pub fn with_include(mut self, include: Vec<String>) -> Self {
        if include.is_empty() {
            return self;
        }
        self.instructions = include.clone();
        self.prompts = include.clone();
        self.documents = include;
        self
    }

    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude.extend(exclude);
        self
    }
}

fn default_instruction_patterns() -> Vec<String> {
    vec![
        ".github/instructions/**/*.instructions.md".into(),
        "instructions/**/*.instructions.md".into(),
        "**/*.instructions.md".into(),
    ]
}

fn default_prompt_patterns() -> Vec<String> {
    vec![
        ".github/prompts/**/*.prompt.md".into(),
        "prompts/**/*.prompt.md".into(),
        "**/*.prompt.md".into(),
    ]
}

fn default_document_patterns() -> Vec<String> {
    vec!["docs/**/*.md".into(), "*.md".into()]
}
