use nbe_engine::{Block, BlockKind, Root};

/// One line of counts for `nbe check`.
pub fn summary(root: &Root) -> String {
    format!(
        "{}: {} categories, {} examples, {} implementations",
        root.path.display(),
        root.categories.len(),
        root.example_count(),
        root.implementations().count()
    )
}

/// Indented category / example / implementation listing.
pub fn outline(root: &Root) -> String {
    let mut lines = Vec::new();
    for category in &root.categories {
        lines.push(format!("{} ({})", category.title, category.name));
        for example in &category.examples {
            lines.push(format!("  {} ({})", example.title, example.name));
            for imp in &example.implementations {
                lines.push(format!(
                    "    {} [{}] {}",
                    imp.name, imp.language, imp.entry_file
                ));
            }
        }
    }
    lines.join("\n")
}

/// Each block as a `kind start-end` header followed by its lines.
pub fn blocks(blocks: &[Block]) -> String {
    let mut lines = Vec::new();
    for block in blocks {
        let kind = match block.kind {
            BlockKind::Empty => "empty",
            BlockKind::Code => "code",
            BlockKind::SingleLineComment => "comment",
            BlockKind::MultiLineComment => "block comment",
        };
        lines.push(format!("{kind} {}-{}", block.start_line, block.end_line));
        lines.extend(block.lines.iter().map(|line| format!("  | {line}")));
    }
    lines.join("\n")
}
