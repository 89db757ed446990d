//! Values and queries handed to the resolver
//!
//! A `HelpValue` stands in for "a live object" the user is holding. Values
//! arrive either as JSON (tool calls) or as source literals typed at the
//! REPL, e.g. `1//2`, `[1, 2.5]`, `r"a+b"` or `::IOStream`.

use std::fmt;

use serde_json::Value;

/// A caller-supplied value, classified by kind
#[derive(Debug, Clone, PartialEq)]
pub enum HelpValue {
    Nothing,
    Bool(bool),
    Int(i128),
    Float(f64),
    Rational(i128, i128),
    Complex(f64, f64),
    Char(char),
    Str(String),
    Symbol(String),
    Regex(String),
    Array(Vec<HelpValue>),
    Tuple(Vec<HelpValue>),
    Dict(Vec<(HelpValue, HelpValue)>),
    Set(Vec<HelpValue>),
    Range { start: i64, step: i64, stop: i64 },
    /// Anonymous function, kept as source text
    Function(String),
    /// A value known only by its type name
    Opaque(String),
}

impl HelpValue {
    /// Type name shown to users
    pub fn type_name(&self) -> String {
        match self {
            HelpValue::Nothing => "Nothing".to_string(),
            HelpValue::Bool(_) => "Bool".to_string(),
            HelpValue::Int(_) => "Int64".to_string(),
            HelpValue::Float(_) => "Float64".to_string(),
            HelpValue::Rational(..) => "Rational{Int64}".to_string(),
            HelpValue::Complex(..) => "ComplexF64".to_string(),
            HelpValue::Char(_) => "Char".to_string(),
            HelpValue::Str(_) => "String".to_string(),
            HelpValue::Symbol(_) => "Symbol".to_string(),
            HelpValue::Regex(_) => "Regex".to_string(),
            HelpValue::Array(_) => "Vector".to_string(),
            HelpValue::Tuple(_) => "Tuple".to_string(),
            HelpValue::Dict(_) => "Dict".to_string(),
            HelpValue::Set(_) => "Set".to_string(),
            HelpValue::Range { step: 1, .. } => "UnitRange{Int64}".to_string(),
            HelpValue::Range { .. } => "StepRange{Int64, Int64}".to_string(),
            HelpValue::Function(_) => "Function".to_string(),
            HelpValue::Opaque(name) => name.clone(),
        }
    }

    /// Convert a JSON argument into a value
    pub fn from_json(value: &Value) -> HelpValue {
        match value {
            Value::Null => HelpValue::Nothing,
            Value::Bool(b) => HelpValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    HelpValue::Int(i as i128)
                } else if let Some(u) = n.as_u64() {
                    HelpValue::Int(u as i128)
                } else {
                    HelpValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => HelpValue::Str(s.clone()),
            Value::Array(items) => {
                HelpValue::Array(items.iter().map(HelpValue::from_json).collect())
            }
            Value::Object(map) => HelpValue::Dict(
                map.iter()
                    .map(|(k, v)| (HelpValue::Str(k.clone()), HelpValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Parse a source literal. Returns `None` when the text is not a literal
    /// (plain words are keywords, not values).
    pub fn parse_literal(src: &str) -> Option<HelpValue> {
        let s = src.trim();
        if s.is_empty() {
            return None;
        }

        if let Some(type_name) = s.strip_prefix("::") {
            let type_name = type_name.trim();
            return type_name
                .chars()
                .next()
                .filter(|c| c.is_alphabetic())
                .map(|_| HelpValue::Opaque(type_name.to_string()));
        }

        match s {
            "nothing" => return Some(HelpValue::Nothing),
            "true" => return Some(HelpValue::Bool(true)),
            "false" => return Some(HelpValue::Bool(false)),
            "Inf" => return Some(HelpValue::Float(f64::INFINITY)),
            "-Inf" => return Some(HelpValue::Float(f64::NEG_INFINITY)),
            "NaN" => return Some(HelpValue::Float(f64::NAN)),
            _ => {}
        }

        if s.starts_with("r\"") && s.len() >= 3 && s.ends_with('"') {
            return Some(HelpValue::Regex(s[2..s.len() - 1].to_string()));
        }
        if s.starts_with('"') {
            return (s.len() >= 2 && s.ends_with('"'))
                .then(|| HelpValue::Str(s[1..s.len() - 1].to_string()));
        }
        if s.starts_with('\'') {
            return parse_char(s).map(HelpValue::Char);
        }
        if let Some(name) = s.strip_prefix(':') {
            return is_identifier(name).then(|| HelpValue::Symbol(name.to_string()));
        }
        if let Some(inner) = strip_delimited(s, "[", "]") {
            return Some(HelpValue::Array(parse_elements(inner)));
        }
        if let Some(inner) = strip_delimited(s, "Dict(", ")") {
            let entries = split_top_level(inner, ",")
                .into_iter()
                .map(|entry| match split_top_level(entry, "=>").as_slice() {
                    [k, v] => (parse_element(k), parse_element(v)),
                    _ => (parse_element(entry), HelpValue::Nothing),
                })
                .collect();
            return Some(HelpValue::Dict(entries));
        }
        if let Some(inner) = strip_delimited(s, "Set(", ")") {
            return Some(match HelpValue::parse_literal(inner) {
                Some(HelpValue::Array(items)) | Some(HelpValue::Tuple(items)) => {
                    HelpValue::Set(items)
                }
                _ => HelpValue::Set(parse_elements(inner)),
            });
        }
        if let Some(inner) = strip_delimited(s, "(", ")") {
            let parts = split_top_level(inner, ",");
            if parts.len() == 1 && !inner.trim_end().ends_with(',') {
                return HelpValue::parse_literal(inner);
            }
            return Some(HelpValue::Tuple(parts.iter().map(|p| parse_element(p)).collect()));
        }

        if s.contains("->") {
            return Some(HelpValue::Function(s.to_string()));
        }

        parse_number(s)
    }
}

impl fmt::Display for HelpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelpValue::Str(s) => write!(f, "{:?}", s),
            HelpValue::Symbol(s) => write!(f, ":{}", s),
            HelpValue::Regex(s) => write!(f, "r\"{}\"", s),
            HelpValue::Char(c) => write!(f, "'{}'", c),
            HelpValue::Function(src) => f.write_str(src),
            HelpValue::Opaque(name) => write!(f, "::{}", name),
            other => write!(f, "<{}>", other.type_name()),
        }
    }
}

/// What the user asked about: a keyword or a value
#[derive(Debug, Clone, PartialEq)]
pub enum HelpQuery {
    Keyword(String),
    Value(HelpValue),
}

impl HelpQuery {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        HelpQuery::Keyword(keyword.into())
    }

    pub fn value(value: HelpValue) -> Self {
        HelpQuery::Value(value)
    }

    /// Interpret REPL input: a literal becomes a value, anything else a keyword
    pub fn parse(input: &str) -> Self {
        match HelpValue::parse_literal(input) {
            Some(value) => HelpQuery::Value(value),
            None => HelpQuery::Keyword(input.trim().to_string()),
        }
    }
}

impl From<HelpValue> for HelpQuery {
    fn from(value: HelpValue) -> Self {
        HelpQuery::Value(value)
    }
}

impl fmt::Display for HelpQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelpQuery::Keyword(k) => f.write_str(k),
            HelpQuery::Value(v) => write!(f, "{}", v),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '!')
}

fn strip_delimited<'a>(s: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let inner = s.strip_prefix(open)?.strip_suffix(close)?;
    // `(1)+(2)` starts and ends with parens but is not one group
    let mut balanced = true;
    scan_top_level(inner, |_, _, depth| {
        if depth < 0 {
            balanced = false;
        }
    });
    balanced.then_some(inner)
}

/// Walk `s` outside of quotes, reporting each char with the bracket depth
/// after it.
fn scan_top_level(s: &str, mut visit: impl FnMut(usize, char, i32)) {
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            _ => {}
        }
        visit(i, c, depth);
    }
}

/// Split on `sep` outside brackets and quotes. Parts are trimmed and empty
/// parts (from `a, b,`) are dropped.
fn split_top_level<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    let mut cuts = Vec::new();
    let mut skip_until = 0;
    scan_top_level(s, |i, _, depth| {
        if depth == 0 && i >= skip_until && s[i..].starts_with(sep) {
            cuts.push(i);
            skip_until = i + sep.len();
        }
    });

    let mut parts = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        parts.push(s[start..cut].trim());
        start = cut + sep.len();
    }
    parts.push(s[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

fn parse_element(s: &str) -> HelpValue {
    HelpValue::parse_literal(s).unwrap_or_else(|| HelpValue::Opaque("Any".to_string()))
}

fn parse_elements(s: &str) -> Vec<HelpValue> {
    split_top_level(s, ",").into_iter().map(parse_element).collect()
}

fn parse_char(s: &str) -> Option<char> {
    let inner = s.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut chars = inner.chars();
    match (chars.next()?, chars.next(), chars.next()) {
        ('\\', Some(esc), None) => match esc {
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            '0' => Some('\0'),
            '\\' => Some('\\'),
            '\'' => Some('\''),
            _ => None,
        },
        (c, None, None) => Some(c),
        _ => None,
    }
}

fn parse_number(s: &str) -> Option<HelpValue> {
    if !s.chars().any(|c| c.is_ascii_digit()) && s != "im" {
        return None;
    }
    let cleaned = s.replace('_', "");
    let s = cleaned.as_str();

    if let Some((num, den)) = s.split_once("//") {
        let num = num.trim().parse::<i128>().ok()?;
        let den = den.trim().parse::<i128>().ok()?;
        return (den != 0).then_some(HelpValue::Rational(num, den));
    }

    if let Some(body) = s.strip_suffix("im") {
        if let Some(value) = parse_complex(body) {
            return Some(value);
        }
    }

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() == 2 || parts.len() == 3 {
        let nums: Option<Vec<i64>> = parts.iter().map(|p| p.trim().parse::<i64>().ok()).collect();
        return match nums?.as_slice() {
            [start, stop] => Some(HelpValue::Range {
                start: *start,
                step: 1,
                stop: *stop,
            }),
            [start, step, stop] => Some(HelpValue::Range {
                start: *start,
                step: *step,
                stop: *stop,
            }),
            _ => None,
        };
    }

    if let Some(hex) = s.strip_prefix("0x") {
        return i128::from_str_radix(hex, 16).ok().map(HelpValue::Int);
    }
    if let Some(bin) = s.strip_prefix("0b") {
        return i128::from_str_radix(bin, 2).ok().map(HelpValue::Int);
    }
    if let Ok(i) = s.parse::<i128>() {
        return Some(HelpValue::Int(i));
    }
    s.parse::<f64>().ok().map(HelpValue::Float)
}

fn parse_complex(body: &str) -> Option<HelpValue> {
    let body = body.trim();
    if body.is_empty() {
        return Some(HelpValue::Complex(0.0, 1.0));
    }
    let bytes = body.as_bytes();
    let split = (1..bytes.len())
        .rev()
        .find(|&i| (bytes[i] == b'+' || bytes[i] == b'-') && !matches!(bytes[i - 1], b'e' | b'E'));

    match split {
        Some(i) => {
            let re = body[..i].trim().parse::<f64>().ok()?;
            let im_part = body[i..].replace(' ', "");
            let im = match im_part.as_str() {
                "+" => 1.0,
                "-" => -1.0,
                other => other.parse::<f64>().ok()?,
            };
            Some(HelpValue::Complex(re, im))
        }
        None => body.parse::<f64>().ok().map(|im| HelpValue::Complex(0.0, im)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lit(s: &str) -> HelpValue {
        HelpValue::parse_literal(s).unwrap_or_else(|| panic!("`{}` should parse", s))
    }

    #[test]
    fn test_scalar_literals() {
        assert_eq!(lit("42"), HelpValue::Int(42));
        assert_eq!(lit("-7"), HelpValue::Int(-7));
        assert_eq!(lit("1_000"), HelpValue::Int(1000));
        assert_eq!(lit("0xff"), HelpValue::Int(255));
        assert_eq!(lit("2.5"), HelpValue::Float(2.5));
        assert_eq!(lit("1e3"), HelpValue::Float(1000.0));
        assert_eq!(lit("Inf"), HelpValue::Float(f64::INFINITY));
        assert_eq!(lit("3//4"), HelpValue::Rational(3, 4));
        assert_eq!(lit("1+2im"), HelpValue::Complex(1.0, 2.0));
        assert_eq!(lit("2.5-0.5im"), HelpValue::Complex(2.5, -0.5));
        assert_eq!(lit("3im"), HelpValue::Complex(0.0, 3.0));
        assert_eq!(lit("true"), HelpValue::Bool(true));
        assert_eq!(lit("nothing"), HelpValue::Nothing);
    }

    #[test]
    fn test_text_literals() {
        assert_eq!(lit("'x'"), HelpValue::Char('x'));
        assert_eq!(lit("'\\n'"), HelpValue::Char('\n'));
        assert_eq!(lit("\"hello\""), HelpValue::Str("hello".to_string()));
        assert_eq!(lit("r\"a+b\""), HelpValue::Regex("a+b".to_string()));
        assert_eq!(lit(":sym"), HelpValue::Symbol("sym".to_string()));
    }

    #[test]
    fn test_collection_literals() {
        assert_eq!(
            lit("[1, 2.5]"),
            HelpValue::Array(vec![HelpValue::Int(1), HelpValue::Float(2.5)])
        );
        assert_eq!(lit("[]"), HelpValue::Array(vec![]));
        assert_eq!(
            lit("(1, \"a\")"),
            HelpValue::Tuple(vec![HelpValue::Int(1), HelpValue::Str("a".to_string())])
        );
        assert_eq!(lit("(1,)"), HelpValue::Tuple(vec![HelpValue::Int(1)]));
        assert_eq!(lit("(5)"), HelpValue::Int(5));
        assert_eq!(
            lit("Dict(\"a\" => 1, \"b\" => 2)"),
            HelpValue::Dict(vec![
                (HelpValue::Str("a".to_string()), HelpValue::Int(1)),
                (HelpValue::Str("b".to_string()), HelpValue::Int(2)),
            ])
        );
        assert_eq!(
            lit("Set([1, 2])"),
            HelpValue::Set(vec![HelpValue::Int(1), HelpValue::Int(2)])
        );
        assert_eq!(
            lit("1:10"),
            HelpValue::Range {
                start: 1,
                step: 1,
                stop: 10
            }
        );
        assert_eq!(
            lit("0:2:10"),
            HelpValue::Range {
                start: 0,
                step: 2,
                stop: 10
            }
        );
    }

    #[test]
    fn test_nested_collections_split_at_top_level() {
        assert_eq!(
            lit("[[1, 2], (3, 4)]"),
            HelpValue::Array(vec![
                HelpValue::Array(vec![HelpValue::Int(1), HelpValue::Int(2)]),
                HelpValue::Tuple(vec![HelpValue::Int(3), HelpValue::Int(4)]),
            ])
        );
        assert_eq!(
            lit("[\"a,b\"]"),
            HelpValue::Array(vec![HelpValue::Str("a,b".to_string())])
        );
    }

    #[test]
    fn test_functions_and_typed_values() {
        assert_eq!(lit("x -> x + 1"), HelpValue::Function("x -> x + 1".to_string()));
        assert_eq!(lit("::IOStream"), HelpValue::Opaque("IOStream".to_string()));
        assert_eq!(HelpValue::parse_literal("::"), None);
    }

    #[test]
    fn test_words_are_not_literals() {
        for word in ["integers", "reserved", "io", "claim", "xyz-not-a-topic", "sin"] {
            assert_eq!(HelpValue::parse_literal(word), None, "{}", word);
        }
    }

    #[test]
    fn test_query_parse() {
        assert_eq!(HelpQuery::parse(" regex "), HelpQuery::keyword("regex"));
        assert_eq!(HelpQuery::parse("7"), HelpQuery::value(HelpValue::Int(7)));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(HelpValue::from_json(&json!(3)), HelpValue::Int(3));
        assert_eq!(HelpValue::from_json(&json!(3.5)), HelpValue::Float(3.5));
        assert_eq!(HelpValue::from_json(&json!(null)), HelpValue::Nothing);
        assert_eq!(
            HelpValue::from_json(&json!({"k": [true]})),
            HelpValue::Dict(vec![(
                HelpValue::Str("k".to_string()),
                HelpValue::Array(vec![HelpValue::Bool(true)])
            )])
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(HelpValue::Int(1).type_name(), "Int64");
        assert_eq!(
            HelpValue::Range {
                start: 1,
                step: 1,
                stop: 3
            }
            .type_name(),
            "UnitRange{Int64}"
        );
        assert_eq!(HelpValue::Opaque("Ptr".to_string()).type_name(), "Ptr");
    }
}
