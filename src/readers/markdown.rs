//! Markdown parsing for code block extraction.

use std::path::Path;

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

use crate::errors::{Result, TangleError};
use crate::io::FileCache;
use crate::model::CodeBlock;

/// Extracts the fenced code blocks of a markdown document, in document order.
///
/// Indented code blocks carry no info string and are skipped.
pub fn extract_code_blocks(source: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<(String, String)> = None; // (info, code)

    for event in Parser::new(source) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                current = Some((info.to_string(), String::new()));
            }

            Event::Text(text) => {
                if let Some((_, ref mut code)) = current {
                    code.push_str(&text);
                }
            }

            Event::End(TagEnd::CodeBlock) => {
                if let Some((info, code)) = current.take() {
                    blocks.push(CodeBlock::from_info(&info, code));
                }
            }

            _ => {}
        }
    }

    blocks
}

/// Reads a markdown file and extracts its code blocks.
pub fn read_code_blocks<F>(files: &F, path: &Path) -> Result<Vec<CodeBlock>>
where
    F: FileCache + ?Sized,
{
    let content = files.read(path).map_err(|source| TangleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_code_blocks(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::VirtualFS;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_simple_block() {
        let input = r#"
# Test

```js
let numbers = [1, 2, 3];
```
"#;
        let blocks = extract_code_blocks(input);

        assert_eq!(blocks, vec![CodeBlock::new("js", "", "let numbers = [1, 2, 3];\n")]);
    }

    #[test]
    fn test_extract_named_blocks_in_document_order() {
        let input = r#"
```python print2
print(2)
```

Some prose in between.

```python print1
print(1)
```
"#;
        let blocks = extract_code_blocks(input);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "print2");
        assert_eq!(blocks[1].name, "print1");
        assert_eq!(blocks[1].code, "print(1)\n");
    }

    #[test]
    fn test_skip_indented_block() {
        let input = "Paragraph.\n\n    indented code\n\n```sh\necho fenced\n```\n";
        let blocks = extract_code_blocks(input);

        assert_eq!(blocks, vec![CodeBlock::new("sh", "", "echo fenced\n")]);
    }

    #[test]
    fn test_tilde_fence_and_no_info() {
        let input = "~~~\nplain\n~~~\n";
        let blocks = extract_code_blocks(input);

        assert_eq!(blocks, vec![CodeBlock::new("", "", "plain\n")]);
    }

    #[test]
    fn test_multiline_block_kept_whole() {
        let input = "```c\n// hash_table.c\n#include \"hash_table.h\"\n```\n";
        let blocks = extract_code_blocks(input);

        assert_eq!(blocks[0].code, "// hash_table.c\n#include \"hash_table.h\"\n");
    }

    #[test]
    fn test_empty_block() {
        let blocks = extract_code_blocks("```js empty\n```\n");

        assert_eq!(blocks, vec![CodeBlock::new("js", "empty", "")]);
    }

    #[test]
    fn test_no_blocks() {
        assert!(extract_code_blocks("# Just prose\n\nNothing to tangle.\n").is_empty());
    }

    #[test]
    fn test_read_code_blocks_missing_file() {
        let files = VirtualFS::new();
        let result = read_code_blocks(&files, Path::new("missing.md"));

        assert!(matches!(result, Err(TangleError::Read { .. })));
    }
}
