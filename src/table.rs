//! Truth-table rendering.
//!
//! ```text
//! a b c │ f g
//! ──────┼────
//! 0 0 0 │ 0 1
//! 0 0 1 │ 1 0
//! ...
//! ```

use crate::enumerate::Enumeration;

fn bit(value: bool) -> char {
    if value {
        '1'
    } else {
        '0'
    }
}

/// Render `enumeration` as one row per assignment.
pub fn render_table(enumeration: &Enumeration) -> String {
    let variables: Vec<String> = enumeration.variables().iter().map(|v| v.to_string()).collect();
    let targets: Vec<String> = enumeration.targets().iter().map(|t| t.name().to_string()).collect();

    let mut lines = Vec::with_capacity(enumeration.len() + 2);
    lines.push(format!("{} │ {}", variables.join(" "), targets.join(" ")));
    lines.push(format!(
        "{}┼{}",
        "─".repeat(variables.len() * 2),
        "─".repeat(targets.len() * 2)
    ));

    for row in enumeration.rows() {
        let inputs: Vec<String> = row.inputs.iter().map(|&b| bit(b).to_string()).collect();
        let outputs: Vec<String> = row.outputs.iter().map(|&b| bit(b).to_string()).collect();
        lines.push(format!("{} │ {}", inputs.join(" "), outputs.join(" ")));
    }

    lines.join("\n")
}

/// Split `text` into pages of at most `limit` characters.
///
/// Pages break only at line boundaries. A single line longer than `limit`
/// becomes a page of its own.
pub fn paginate(text: &str, limit: usize) -> Vec<String> {
    let mut pages = Vec::new();
    let mut page = String::new();
    let mut page_len = 0;

    for line in text.lines() {
        let line_len = line.chars().count();
        let needed = if page.is_empty() { line_len } else { line_len + 1 };

        if !page.is_empty() && page_len + needed > limit {
            pages.push(std::mem::take(&mut page));
            page_len = 0;
        }

        if !page.is_empty() {
            page.push('\n');
            page_len += 1;
        }
        page.push_str(line);
        page_len += line_len;
    }

    if !page.is_empty() {
        pages.push(page);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::enumerate::enumerate;
    use crate::function::compile;
    use crate::registry::Registry;

    #[test]
    fn test_render_table() {
        let mut registry = Registry::new();
        registry.define(compile('f', "a*b").unwrap());
        registry.define(compile('g', "a+b").unwrap());
        let e = enumerate(&['f', 'g'], &registry).unwrap();

        let expected = "\
a b │ f g
────┼────
0 0 │ 0 0
0 1 │ 0 1
1 0 │ 0 1
1 1 │ 1 1";
        assert_eq!(render_table(&e), expected);
    }

    #[test]
    fn test_paginate_keeps_lines_whole() {
        let text = "aaaa\nbbbb\ncccc\ndddd";
        assert_eq!(paginate(text, 9), vec!["aaaa\nbbbb", "cccc\ndddd"]);
        assert_eq!(paginate(text, 8), vec!["aaaa", "bbbb", "cccc", "dddd"]);
        assert_eq!(paginate(text, 100), vec![text]);
    }

    #[test]
    fn test_paginate_long_line() {
        let text = "ab\nthis line is too long\ncd";
        assert_eq!(paginate(text, 5), vec!["ab", "this line is too long", "cd"]);
    }

    #[test]
    fn test_paginate_counts_chars() {
        // Box-drawing characters are multi-byte but count as one.
        let text = "──\n──";
        assert_eq!(paginate(text, 5), vec![text]);
    }

    #[test]
    fn test_paginate_empty() {
        assert!(paginate("", 10).is_empty());
    }
}
