//! Value classification: map a value (or a bare type name) to a topic keyword

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::ResolutionError;
use crate::types::HelpValue;

/// Type name → topic keyword. Type parameters and module prefixes are
/// stripped before lookup, so `Vector{Int64}` and `Base.IOStream` match.
static TYPE_KEYWORDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("Integer", "integers"),
        ("Signed", "integers"),
        ("Unsigned", "integers"),
        ("Int", "integers"),
        ("Int8", "integers"),
        ("Int16", "integers"),
        ("Int32", "integers"),
        ("Int64", "integers"),
        ("Int128", "integers"),
        ("UInt", "integers"),
        ("UInt8", "integers"),
        ("UInt16", "integers"),
        ("UInt32", "integers"),
        ("UInt64", "integers"),
        ("UInt128", "integers"),
        ("BigInt", "integers"),
        ("AbstractFloat", "floats"),
        ("Float16", "floats"),
        ("Float32", "floats"),
        ("Float64", "floats"),
        ("BigFloat", "floats"),
        ("Rational", "rationals"),
        ("Complex", "complex"),
        ("ComplexF16", "complex"),
        ("ComplexF32", "complex"),
        ("ComplexF64", "complex"),
        ("Bool", "booleans"),
        ("AbstractChar", "chars"),
        ("Char", "chars"),
        ("AbstractString", "strings"),
        ("String", "strings"),
        ("SubString", "strings"),
        ("Symbol", "symbols"),
        ("Regex", "regex"),
        ("RegexMatch", "regex"),
        ("AbstractArray", "arrays"),
        ("Array", "arrays"),
        ("Vector", "arrays"),
        ("Matrix", "arrays"),
        ("BitArray", "arrays"),
        ("BitVector", "arrays"),
        ("Tuple", "tuples"),
        ("NTuple", "tuples"),
        ("NamedTuple", "tuples"),
        ("AbstractDict", "dicts"),
        ("Dict", "dicts"),
        ("IdDict", "dicts"),
        ("Pair", "dicts"),
        ("AbstractSet", "sets"),
        ("Set", "sets"),
        ("BitSet", "sets"),
        ("AbstractRange", "ranges"),
        ("UnitRange", "ranges"),
        ("StepRange", "ranges"),
        ("StepRangeLen", "ranges"),
        ("LinRange", "ranges"),
        ("OneTo", "ranges"),
        ("Function", "functions"),
        ("DataType", "types"),
        ("UnionAll", "types"),
        ("Union", "types"),
        ("Type", "types"),
        ("Nothing", "nothing"),
        ("Missing", "nothing"),
        ("IO", "files"),
        ("IOStream", "files"),
        ("IOBuffer", "files"),
        ("IOContext", "files"),
        ("Pipe", "files"),
    ]
    .into_iter()
    .collect()
});

/// Topic keyword for a type name, if the type is recognized
pub fn classify_type_name(type_name: &str) -> Option<&'static str> {
    let base = type_name.split('{').next().unwrap_or(type_name).trim();
    let base = base.rsplit('.').next().unwrap_or(base);
    TYPE_KEYWORDS.get(base).copied()
}

/// Topic keyword for a value
pub fn classify(value: &HelpValue) -> Result<&'static str, ResolutionError> {
    let keyword = match value {
        HelpValue::Nothing => "nothing",
        HelpValue::Bool(_) => "booleans",
        HelpValue::Int(_) => "integers",
        HelpValue::Float(_) => "floats",
        HelpValue::Rational(..) => "rationals",
        HelpValue::Complex(..) => "complex",
        HelpValue::Char(_) => "chars",
        HelpValue::Str(_) => "strings",
        HelpValue::Symbol(_) => "symbols",
        HelpValue::Regex(_) => "regex",
        HelpValue::Array(_) => "arrays",
        HelpValue::Tuple(_) => "tuples",
        HelpValue::Dict(_) => "dicts",
        HelpValue::Set(_) => "sets",
        HelpValue::Range { .. } => "ranges",
        HelpValue::Function(_) => "functions",
        HelpValue::Opaque(type_name) => {
            return classify_type_name(type_name).ok_or_else(|| ResolutionError::Unclassifiable {
                type_name: type_name.clone(),
            })
        }
    };
    Ok(keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_values() {
        assert_eq!(classify(&HelpValue::Int(1)), Ok("integers"));
        assert_eq!(classify(&HelpValue::Float(1.5)), Ok("floats"));
        assert_eq!(classify(&HelpValue::Str("a".to_string())), Ok("strings"));
        assert_eq!(classify(&HelpValue::Array(vec![])), Ok("arrays"));
        assert_eq!(classify(&HelpValue::Nothing), Ok("nothing"));
    }

    #[test]
    fn test_classify_type_names() {
        assert_eq!(classify_type_name("Vector{Int64}"), Some("arrays"));
        assert_eq!(classify_type_name("Dict{String, Int}"), Some("dicts"));
        assert_eq!(classify_type_name("Base.IOStream"), Some("files"));
        assert_eq!(classify_type_name("UInt8"), Some("integers"));
        assert_eq!(classify_type_name("Ptr{Cvoid}"), None);
    }

    #[test]
    fn test_unknown_opaque_type_is_unclassifiable() {
        let err = classify(&HelpValue::Opaque("Ptr{Cvoid}".to_string())).unwrap_err();
        assert_eq!(
            err,
            ResolutionError::Unclassifiable {
                type_name: "Ptr{Cvoid}".to_string()
            }
        );
    }
}
