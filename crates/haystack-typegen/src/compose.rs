//! Linearization of emitter nodes into text.

use crate::nodes::Node;

/// Indentation for one nesting level.
pub const INDENT: &str = "\t";

/// Append the output of `nodes` to `out`, in order.
///
/// A node is followed by its trailing blank lines only when it produced at
/// least one non-empty line. A node with no output leaves no trace.
pub fn compose(out: &mut Vec<String>, nodes: &[&dyn Node]) {
    for node in nodes {
        let mut lines = Vec::new();
        node.emit(&mut lines);

        if lines.iter().all(String::is_empty) {
            continue;
        }

        let blank = node.trailing_blank_lines();
        out.extend(lines);
        out.extend(std::iter::repeat_n(String::new(), blank));
    }
}

/// Compose `nodes` into newline-terminated text.
#[cfg(test)]
pub(crate) fn compose_text(nodes: &[&dyn Node]) -> String {
    let mut lines = Vec::new();
    compose(&mut lines, nodes);
    join_lines(&lines)
}

/// Render a single node without its trailing blank lines.
#[cfg(test)]
pub(crate) fn render(node: &dyn Node) -> String {
    let mut lines = Vec::new();
    node.emit(&mut lines);
    join_lines(&lines)
}

/// Compose `nodes` one level deeper than the enclosing block.
///
/// Trailing blank lines of the last node are dropped so the block closes
/// directly after it. Blank lines are not indented.
pub(crate) fn compose_nested(out: &mut Vec<String>, nodes: &[&dyn Node]) {
    let mut body = Vec::new();
    compose(&mut body, nodes);
    trim_trailing_blank_lines(&mut body);

    out.extend(body.into_iter().map(|line| {
        if line.is_empty() {
            line
        } else {
            format!("{INDENT}{line}")
        }
    }));
}

pub(crate) fn trim_trailing_blank_lines(lines: &mut Vec<String>) {
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
}

/// Newline-terminated text, one line each.
pub(crate) fn join_lines(lines: &[String]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}
