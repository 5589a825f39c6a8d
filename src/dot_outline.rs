//! Heuristic scanner for DOT graph sources.
//!
//! This derives displayable metadata (graph kind, name, node and edge
//! listings) from raw DOT text without doing real parsing; full syntax
//! handling belongs to the external rendering engines. The scanner is
//! comment- and string-aware so identifiers inside `/* */`, `//`, `#`
//! comments and quoted strings are not miscounted, and it is total: any
//! input yields an outline, never an error.

use std::fmt;

/// Top-level graph kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Graph,
    Digraph,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Graph => write!(f, "graph"),
            GraphKind::Digraph => write!(f, "digraph"),
        }
    }
}

/// One edge statement endpoint pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotEdge {
    pub from: String,
    pub to: String,
    pub directed: bool,
}

/// Shallow structural summary of a DOT source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOutline {
    pub kind: GraphKind,
    pub strict: bool,
    /// Graph name, when one appears between the kind keyword and `{`.
    pub name: Option<String>,
    /// Distinct node names in first-appearance order.
    pub nodes: Vec<String>,
    pub edges: Vec<DotEdge>,
}

impl DotOutline {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Delimiter imbalance found by [`check_delimiters`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterError {
    pub delimiter: char,
    pub position: usize,
}

impl fmt::Display for DelimiterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unbalanced '{}' at byte {}",
            self.delimiter, self.position
        )
    }
}

impl std::error::Error for DelimiterError {}

#[derive(Debug, PartialEq)]
enum Token {
    Ident(String),
    EdgeOp(bool),
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Equals,
    Semicolon,
    Comma,
}

/// Strips comments and tokenizes identifiers, quoted strings, edge
/// operators, and structural punctuation. Unrecognized bytes are skipped.
fn tokenize(source: &str) -> Vec<Token> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '#' => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                i += 2;
                while i < chars.len() {
                    if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
            }
            '"' => {
                let mut text = String::new();
                i += 1;
                while i < chars.len() && chars[i] != '"' {
                    if chars[i] == '\\' && i + 1 < chars.len() {
                        i += 1;
                    }
                    text.push(chars[i]);
                    i += 1;
                }
                i += 1; // closing quote (or end of input)
                tokens.push(Token::Ident(text));
            }
            '-' if chars.get(i + 1) == Some(&'>') => {
                tokens.push(Token::EdgeOp(true));
                i += 2;
            }
            '-' if chars.get(i + 1) == Some(&'-') => {
                tokens.push(Token::EdgeOp(false));
                i += 2;
            }
            '{' => {
                tokens.push(Token::OpenBrace);
                i += 1;
            }
            '}' => {
                tokens.push(Token::CloseBrace);
                i += 1;
            }
            '[' => {
                tokens.push(Token::OpenBracket);
                i += 1;
            }
            ']' => {
                tokens.push(Token::CloseBracket);
                i += 1;
            }
            '=' => {
                tokens.push(Token::Equals);
                i += 1;
            }
            ';' => {
                tokens.push(Token::Semicolon);
                i += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                i += 1;
            }
            c if c.is_alphanumeric() || c == '_' || c == '.' => {
                let mut text = String::new();
                while i < chars.len()
                    && (chars[i].is_alphanumeric() || chars[i] == '_' || chars[i] == '.')
                {
                    text.push(chars[i]);
                    i += 1;
                }
                tokens.push(Token::Ident(text));
            }
            _ => i += 1,
        }
    }

    tokens
}

fn is_keyword(ident: &str) -> bool {
    matches!(
        ident.to_ascii_lowercase().as_str(),
        "graph" | "digraph" | "subgraph" | "node" | "edge" | "strict"
    )
}

/// Checks that braces, brackets, and quotes balance, ignoring delimiters
/// inside comments and strings. Used by engines to reject sources that are
/// structurally broken before attempting a render.
pub fn check_delimiters(source: &str) -> Result<(), DelimiterError> {
    let bytes: Vec<char> = source.chars().collect();
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        match c {
            '/' if bytes.get(i + 1) == Some(&'/') => {
                while i < bytes.len() && bytes[i] != '\n' {
                    i += 1;
                }
                continue;
            }
            '#' => {
                while i < bytes.len() && bytes[i] != '\n' {
                    i += 1;
                }
                continue;
            }
            '/' if bytes.get(i + 1) == Some(&'*') => {
                let start = i;
                i += 2;
                let mut closed = false;
                while i < bytes.len() {
                    if bytes[i] == '*' && bytes.get(i + 1) == Some(&'/') {
                        i += 2;
                        closed = true;
                        break;
                    }
                    i += 1;
                }
                if !closed {
                    return Err(DelimiterError {
                        delimiter: '/',
                        position: start,
                    });
                }
                continue;
            }
            '"' => {
                let start = i;
                i += 1;
                let mut closed = false;
                while i < bytes.len() {
                    if bytes[i] == '\\' {
                        i += 2;
                        continue;
                    }
                    if bytes[i] == '"' {
                        i += 1;
                        closed = true;
                        break;
                    }
                    i += 1;
                }
                if !closed {
                    return Err(DelimiterError {
                        delimiter: '"',
                        position: start,
                    });
                }
                continue;
            }
            '{' | '[' => stack.push((c, i)),
            '}' => {
                if stack.pop().map(|(d, _)| d) != Some('{') {
                    return Err(DelimiterError {
                        delimiter: '}',
                        position: i,
                    });
                }
            }
            ']' => {
                if stack.pop().map(|(d, _)| d) != Some('[') {
                    return Err(DelimiterError {
                        delimiter: ']',
                        position: i,
                    });
                }
            }
            _ => {}
        }
        i += 1;
    }

    match stack.pop() {
        Some((delimiter, position)) => Err(DelimiterError {
            delimiter,
            position,
        }),
        None => Ok(()),
    }
}

/// Scans a DOT source into a [`DotOutline`].
///
/// Node collection is heuristic: edge endpoints always count, and a bare
/// identifier that starts a statement inside the graph body counts as a
/// node declaration. Attribute blocks (`[...]`) and `name=value` pairs are
/// skipped so attribute keys never masquerade as nodes.
pub fn scan(source: &str) -> DotOutline {
    let tokens = tokenize(source);
    let mut outline = DotOutline {
        kind: GraphKind::Graph,
        strict: false,
        name: None,
        nodes: Vec::new(),
        edges: Vec::new(),
    };

    // Header: [strict] (graph|digraph) [name] {
    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i] {
            Token::Ident(word) if word.eq_ignore_ascii_case("strict") => {
                outline.strict = true;
                i += 1;
            }
            Token::Ident(word) if word.eq_ignore_ascii_case("graph") => {
                outline.kind = GraphKind::Graph;
                i += 1;
                break;
            }
            Token::Ident(word) if word.eq_ignore_ascii_case("digraph") => {
                outline.kind = GraphKind::Digraph;
                i += 1;
                break;
            }
            _ => i += 1,
        }
    }
    if let Some(Token::Ident(name)) = tokens.get(i) {
        outline.name = Some(name.clone());
        i += 1;
    }

    let mut add_node = |nodes: &mut Vec<String>, name: &str| {
        if !nodes.iter().any(|n| n == name) {
            nodes.push(name.to_string());
        }
    };

    // Body: walk statements, tracking whether the previous identifier can
    // be an edge endpoint and skipping [...] attribute lists entirely.
    let mut depth = 0usize;
    let mut pending: Option<String> = None;
    while i < tokens.len() {
        match &tokens[i] {
            Token::OpenBrace => {
                depth += 1;
                pending = None;
                i += 1;
            }
            Token::CloseBrace => {
                depth = depth.saturating_sub(1);
                pending = None;
                i += 1;
            }
            Token::OpenBracket => {
                // Skip the attribute list.
                let mut bracket_depth = 1;
                i += 1;
                while i < tokens.len() && bracket_depth > 0 {
                    match tokens[i] {
                        Token::OpenBracket => bracket_depth += 1,
                        Token::CloseBracket => bracket_depth -= 1,
                        _ => {}
                    }
                    i += 1;
                }
                pending = None;
            }
            Token::Equals => {
                // name=value attribute statement; the left side was not a
                // node after all.
                pending = None;
                i += 2.min(tokens.len() - i);
            }
            Token::EdgeOp(directed) => {
                let directed = *directed;
                let from = pending.take();
                i += 1;
                let to = match tokens.get(i) {
                    Some(Token::Ident(name)) if !is_keyword(name) => Some(name.clone()),
                    _ => None,
                };
                if let (Some(from), Some(to)) = (from, to) {
                    add_node(&mut outline.nodes, &from);
                    add_node(&mut outline.nodes, &to);
                    // Chained edges (a -> b -> c) reuse the right endpoint.
                    pending = Some(to.clone());
                    outline.edges.push(DotEdge { from, to, directed });
                    i += 1;
                }
            }
            Token::Ident(name) if depth > 0 && !is_keyword(name) => {
                // A bare identifier may be a node statement or the left
                // endpoint of an edge; record the previous one as a node.
                if let Some(prev) = pending.take() {
                    add_node(&mut outline.nodes, &prev);
                }
                pending = Some(name.clone());
                i += 1;
            }
            Token::Semicolon | Token::Comma => {
                if let Some(prev) = pending.take() {
                    add_node(&mut outline.nodes, &prev);
                }
                i += 1;
            }
            _ => {
                pending = None;
                i += 1;
            }
        }
    }
    if let Some(prev) = pending {
        add_node(&mut outline.nodes, &prev);
    }

    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_minimal_graph() {
        let outline = scan("graph G {\n  \n}");
        assert_eq!(outline.kind, GraphKind::Graph);
        assert_eq!(outline.name.as_deref(), Some("G"));
        assert!(!outline.strict);
        assert_eq!(outline.node_count(), 0);
        assert_eq!(outline.edge_count(), 0);
    }

    #[test]
    fn test_scan_digraph_edges_and_nodes() {
        let source = "strict digraph Flow {\n  a -> b;\n  b -> c;\n  d;\n}";
        let outline = scan(source);
        assert_eq!(outline.kind, GraphKind::Digraph);
        assert!(outline.strict);
        assert_eq!(outline.name.as_deref(), Some("Flow"));
        assert_eq!(outline.nodes, vec!["a", "b", "c", "d"]);
        assert_eq!(outline.edge_count(), 2);
        assert!(outline.edges.iter().all(|e| e.directed));
    }

    #[test]
    fn test_scan_chained_edges() {
        let outline = scan("digraph { a -> b -> c; }");
        assert_eq!(outline.edge_count(), 2);
        assert_eq!(outline.edges[1].from, "b");
        assert_eq!(outline.edges[1].to, "c");
    }

    #[test]
    fn test_scan_ignores_comments_and_attributes() {
        let source = "graph {\n\
            // x -- y\n\
            /* p -- q */\n\
            # z -- w\n\
            a -- b [label=\"u -- v\", color=red];\n\
            rankdir=LR;\n\
        }";
        let outline = scan(source);
        assert_eq!(outline.nodes, vec!["a", "b"]);
        assert_eq!(outline.edge_count(), 1);
        assert!(!outline.edges[0].directed);
    }

    #[test]
    fn test_scan_quoted_node_names() {
        let outline = scan("graph { \"node one\" -- \"node two\"; }");
        assert_eq!(outline.nodes, vec!["node one", "node two"]);
    }

    #[test]
    fn test_scan_unnamed_graph() {
        let outline = scan("digraph { a -> b }");
        assert_eq!(outline.name, None);
        assert_eq!(outline.nodes, vec!["a", "b"]);
    }

    #[test]
    fn test_check_delimiters_balanced() {
        assert!(check_delimiters("graph G { a -- b [x=\"}\"]; /* ] */ }").is_ok());
    }

    #[test]
    fn test_check_delimiters_reports_imbalance() {
        let err = check_delimiters("graph G { a -- b").unwrap_err();
        assert_eq!(err.delimiter, '{');

        let err = check_delimiters("graph G  a -- b }").unwrap_err();
        assert_eq!(err.delimiter, '}');

        let err = check_delimiters("graph G { \"open ").unwrap_err();
        assert_eq!(err.delimiter, '"');
    }
}
