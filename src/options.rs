use serde::{Deserialize, Serialize};
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Pretty-print the JSON output.
    pub pretty: bool,
    /// Indent width used when `pretty` is set.
    pub indent_width: usize,
    /// Fail the conversion on an assembly-time name collision instead of
    /// overwriting the earlier leaf.
    pub strict_collisions: bool,
}
impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent_width: 2,
            strict_collisions: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct ConvertOptionsBuilder {
    options: ConvertOptions,
}
impl ConvertOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn pretty(mut self, yes: bool) -> Self {
        self.options.pretty = yes;
        self
    }
    pub fn indent_width(mut self, width: usize) -> Self {
        self.options.indent_width = width;
        self
    }
    pub fn strict_collisions(mut self, yes: bool) -> Self {
        self.options.strict_collisions = yes;
        self
    }
    pub fn build(self) -> ConvertOptions {
        self.options
    }
}
