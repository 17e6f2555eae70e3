use ast_grep_language::LanguageExt;

use super::*;
pub(super) use gko_core::{NodeKind, SpecNode};

mod fixtures;

fn parse_and_extract(source: &str) -> Outline {
    parse_named("src.go", source)
}

fn parse_named(file: &str, source: &str) -> Outline {
    let root = SupportLang::Go.ast_grep(source);
    extract(&root, file)
}

/// Flattened form split into lines, for compact assertions.
fn lines(outline: &Outline) -> Vec<String> {
    outline.to_lines().lines().map(str::to_string).collect()
}

fn find_by_text<'a>(outline: &'a Outline, name: &str, text: &str) -> &'a SpecNode {
    fn search<'a>(nodes: &'a [SpecNode], name: &str, text: &str) -> Option<&'a SpecNode> {
        nodes.iter().find_map(|n| {
            if n.name == name && n.text_or_empty() == text {
                Some(n)
            } else {
                search(&n.nodes, name, text)
            }
        })
    }
    search(outline.nodes(), name, text)
        .unwrap_or_else(|| panic!("should find {name}(\"{text}\")"))
}
