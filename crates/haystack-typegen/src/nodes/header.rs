use super::Node;

/// Allows the `namespace` blocks feature defs are grouped into.
const ESLINT_DIRECTIVE: &str = r#"/* eslint @typescript-eslint/no-namespace: "off" */"#;

/// Banner comment naming the generating tool and date, plus the lint
/// directive that allows `namespace` declarations.
#[derive(Clone, Debug)]
pub struct HeaderNode {
    tool: String,
    generated_on: String,
}

impl HeaderNode {
    pub fn new(tool: impl Into<String>, generated_on: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            generated_on: generated_on.into(),
        }
    }
}

impl Node for HeaderNode {
    fn emit(&self, out: &mut Vec<String>) {
        let tool = &self.tool;
        let date = &self.generated_on;

        out.push("/*".to_string());
        out.push(format!(" * Automatically generated by {tool} on {date}."));
        out.push(" */".to_string());
        out.push(String::new());
        out.push(ESLINT_DIRECTIVE.to_string());
    }

    fn trailing_blank_lines(&self) -> usize {
        1
    }
}
