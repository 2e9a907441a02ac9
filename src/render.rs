// Serializer: configuration tree -> JavaScript initialization statement

use crate::error::{ConfigError, Result};
use crate::tree::{join_key, Tree};
use crate::RenderOptions;
use log::debug;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Marks both ends of a raw-code leaf while it travels through the JSON
/// serializer as a string. Private-use code point, never escaped by serde_json.
pub const RAW_DELIMITER: char = '\u{E000}';

/// Serialize `tree` as a JavaScript object literal body.
///
/// Raw-code leaves come out unquoted and unescaped; everything else follows
/// JSON rules with keys in insertion order.
pub fn render_body(tree: &Tree, pretty: bool) -> Result<String> {
    check_delimiters(tree, "")?;

    let marked = Marked(tree);
    let body = if pretty {
        serde_json::to_string_pretty(&marked)?
    } else {
        serde_json::to_string(&marked)?
    };

    substitute_raw_spans(&body, tree.raw_count())
}

/// Render the full `<variable> = <generator>(<body>);` statement
pub fn render_statement(tree: &Tree, options: &RenderOptions) -> Result<String> {
    let body = render_body(tree, options.pretty)?;
    debug!(
        "Rendered '{}' ({} bytes, {} raw spans, pretty: {})",
        options.variable,
        body.len(),
        tree.raw_count(),
        options.pretty
    );
    Ok(format!(
        "{}{} = {}({});",
        options.declaration.prefix(),
        options.variable,
        options.generator,
        body
    ))
}

/// Serializes a tree with raw leaves wrapped in [`RAW_DELIMITER`]
struct Marked<'a>(&'a Tree);

impl Serialize for Marked<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Tree::Bool(b) => serializer.serialize_bool(*b),
            Tree::Number(n) => n.serialize(serializer),
            Tree::String(s) => serializer.serialize_str(s),
            Tree::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&Marked(item))?;
                }
                seq.end()
            }
            Tree::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, &Marked(value))?;
                }
                map.end()
            }
            Tree::Raw(code) => {
                serializer.serialize_str(&format!("{RAW_DELIMITER}{code}{RAW_DELIMITER}"))
            }
        }
    }
}

/// Fail if any key, string or script already contains the delimiter, which
/// would make the substitution pass ambiguous.
fn check_delimiters(tree: &Tree, path: &str) -> Result<()> {
    let collision = || ConfigError::DelimiterCollision {
        path: path.to_string(),
    };
    match tree {
        Tree::String(s) | Tree::Raw(s) => {
            if s.contains(RAW_DELIMITER) {
                return Err(collision());
            }
        }
        Tree::Sequence(items) => {
            for (i, item) in items.iter().enumerate() {
                check_delimiters(item, &format!("{}[{}]", path, i))?;
            }
        }
        Tree::Mapping(entries) => {
            for (key, value) in entries {
                let child = join_key(path, key);
                if key.contains(RAW_DELIMITER) {
                    return Err(ConfigError::DelimiterCollision { path: child });
                }
                check_delimiters(value, &child)?;
            }
        }
        Tree::Bool(_) | Tree::Number(_) => {}
    }
    Ok(())
}

/// Replace every `"<D>escaped code<D>"` span with the unescaped code.
///
/// The span content is exactly what serde_json produced for the string, so
/// parsing it back as a JSON string undoes the escaping precisely.
fn substitute_raw_spans(body: &str, expected: usize) -> Result<String> {
    let open = format!("\"{RAW_DELIMITER}");
    let close = format!("{RAW_DELIMITER}\"");
    let leaked = || ConfigError::DelimiterCollision {
        path: "<body>".to_string(),
    };

    let mut output = String::with_capacity(body.len());
    let mut rest = body;
    let mut found = 0;

    while let Some(start) = rest.find(&open) {
        output.push_str(&rest[..start]);
        let inner_start = start + open.len();
        let inner_len = rest[inner_start..].find(&close).ok_or_else(leaked)?;
        let inner = &rest[inner_start..inner_start + inner_len];
        if inner.contains(RAW_DELIMITER) {
            return Err(leaked());
        }

        let code: String = serde_json::from_str(&format!("\"{}\"", inner))?;
        output.push_str(&code);
        found += 1;
        rest = &rest[inner_start + inner_len + close.len()..];
    }
    output.push_str(rest);

    if found != expected {
        return Err(leaked());
    }
    Ok(output)
}
