mod directory;
mod frontmatter;
mod path_matched;

pub use directory::{
    INSTRUCTION_SUFFIX, PROMPT_SUFFIX, file_name, is_instruction_file, is_prompt_file,
    relative_to,
};
pub use frontmatter::{
    ParsedDocument, bool_field, extract_frontmatter, has_key, string_field,
};
pub use path_matched::{PathMatched, glob_match};
