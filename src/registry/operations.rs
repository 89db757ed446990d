//! Authored operation tables, one per topic.
//!
//! `core` entries come from the default namespace; `extended` entries live in
//! peripheral namespaces (standard-library packages, internal modules) and
//! are only listed when the caller asks for the extended scope.

use crate::types::Category::{self, *};

pub struct TopicOperations {
    pub topic: &'static str,
    pub core: &'static [(Category, &'static [&'static str])],
    pub extended: &'static [(Category, &'static [&'static str])],
}

pub const TOPIC_OPERATIONS: &[TopicOperations] = &[
    TopicOperations {
        topic: "integers",
        core: &[
            (Macros, &["@show", "@evalpoly", "@fastmath", "@isdefined"]),
            (
                GeneralFunctions,
                &[
                    "abs", "sign", "signbit", "copysign", "flipsign", "isodd", "iseven", "iszero",
                    "isone", "gcd", "lcm", "gcdx", "factorial", "binomial", "zero", "one",
                    "typemin", "typemax", "ndigits", "digits", "powermod", "invmod", "isqrt",
                    "ispow2", "nextpow", "prevpow", "max", "min", "minmax", "clamp", "cmp",
                    "isless",
                ],
            ),
            (Arithmetic, &["+", "-", "*", "/", "^", "\\", "÷", "%", "muladd"]),
            (
                RoundingDivision,
                &["div", "rem", "mod", "divrem", "fld", "cld", "fldmod", "mod1"],
            ),
            (
                Bitwise,
                &[
                    "&", "|", "⊻", "xor", "~", "<<", ">>", ">>>", "nand", "nor", "count_ones",
                    "count_zeros", "leading_zeros", "trailing_zeros", "leading_ones",
                    "trailing_ones", "bitreverse", "bswap",
                ],
            ),
            (
                Conversion,
                &[
                    "Int", "UInt", "BigInt", "float", "string", "parse", "tryparse", "convert",
                    "bitstring", "widen", "signed", "unsigned",
                ],
            ),
        ],
        extended: &[
            (
                Arithmetic,
                &[
                    "checked_add", "checked_sub", "checked_mul", "checked_div", "checked_abs",
                    "add_with_overflow", "mul_with_overflow", "widemul",
                ],
            ),
            (Conversion, &["bin", "hex", "oct"]),
        ],
    },
    TopicOperations {
        topic: "floats",
        core: &[
            (Macros, &["@show", "@evalpoly", "@fastmath", "@isdefined"]),
            (
                GeneralFunctions,
                &[
                    "abs", "sign", "sqrt", "cbrt", "exp", "exp2", "exp10", "expm1", "log", "log2",
                    "log10", "log1p", "hypot", "isnan", "isinf", "isfinite", "isinteger", "eps",
                    "nextfloat", "prevfloat", "floatmax", "floatmin", "max", "min", "clamp",
                    "significand", "exponent", "frexp", "ldexp", "isapprox",
                ],
            ),
            (Arithmetic, &["+", "-", "*", "/", "^", "÷", "%", "fma", "muladd", "inv"]),
            (
                TrigonometricHyperbolic,
                &[
                    "sin", "cos", "tan", "sec", "csc", "cot", "asin", "acos", "atan", "asec",
                    "acsc", "acot", "sinh", "cosh", "tanh", "asinh", "acosh", "atanh", "sind",
                    "cosd", "tand", "asind", "acosd", "atand", "sinpi", "cospi", "sincos",
                    "sincospi", "deg2rad", "rad2deg",
                ],
            ),
            (
                RoundingDivision,
                &["round", "floor", "ceil", "trunc", "div", "rem", "mod", "fld", "cld", "modf"],
            ),
            (
                Conversion,
                &[
                    "Float64", "Float32", "Float16", "BigFloat", "Int", "string", "parse",
                    "tryparse", "convert", "bitstring", "rationalize",
                ],
            ),
        ],
        extended: &[
            (Macros, &["@printf", "@sprintf"]),
            (
                GeneralFunctions,
                &["gamma", "loggamma", "erf", "erfc", "mean", "median", "std", "var"],
            ),
        ],
    },
    TopicOperations {
        topic: "rationals",
        core: &[
            (Macros, &["@show"]),
            (
                GeneralFunctions,
                &[
                    "numerator", "denominator", "abs", "sign", "inv", "rationalize", "isinteger",
                    "iszero",
                ],
            ),
            (Arithmetic, &["//", "+", "-", "*", "/", "^"]),
            (
                RoundingDivision,
                &["round", "floor", "ceil", "trunc", "div", "rem", "mod"],
            ),
            (Conversion, &["Rational", "float", "Int", "convert", "string"]),
        ],
        extended: &[],
    },
    TopicOperations {
        topic: "complex",
        core: &[
            (Macros, &["@show"]),
            (
                GeneralFunctions,
                &[
                    "real", "imag", "reim", "conj", "abs", "abs2", "angle", "cis", "cispi",
                    "isreal", "sqrt", "exp", "log",
                ],
            ),
            (Arithmetic, &["+", "-", "*", "/", "^", "inv"]),
            (
                TrigonometricHyperbolic,
                &["sin", "cos", "tan", "sinh", "cosh", "tanh"],
            ),
            (Conversion, &["complex", "Complex", "ComplexF64", "string"]),
        ],
        extended: &[],
    },
    TopicOperations {
        topic: "booleans",
        core: &[
            (Macros, &["@assert"]),
            (
                GeneralFunctions,
                &["ifelse", "any", "all", "count", "isequal", "Bool"],
            ),
            (Bitwise, &["!", "&", "|", "⊻", "xor", "nand", "nor"]),
        ],
        extended: &[],
    },
    TopicOperations {
        topic: "chars",
        core: &[
            (
                GeneralFunctions,
                &[
                    "isletter", "isdigit", "isnumeric", "isspace", "ispunct", "isuppercase",
                    "islowercase", "isascii", "isxdigit", "iscntrl", "isprint",
                ],
            ),
            (
                Text,
                &["uppercase", "lowercase", "titlecase", "textwidth", "ncodeunits", "repeat"],
            ),
            (Conversion, &["Char", "Int", "codepoint", "string"]),
        ],
        extended: &[(GeneralFunctions, &["isassigned", "julia_chartransform"])],
    },
    TopicOperations {
        topic: "strings",
        core: &[
            (Macros, &["@show", "@raw_str", "@r_str", "@b_str", "@s_str"]),
            (
                GeneralFunctions,
                &[
                    "length", "isempty", "string", "repr", "print", "println", "sprint",
                    "ncodeunits", "codeunits", "isvalid", "thisind", "nextind", "prevind",
                    "textwidth", "cmp",
                ],
            ),
            (
                Text,
                &[
                    "uppercase", "lowercase", "titlecase", "uppercasefirst", "lowercasefirst",
                    "strip", "lstrip", "rstrip", "chomp", "chop", "split", "rsplit", "join",
                    "repeat", "reverse", "lpad", "rpad", "escape_string", "unescape_string",
                ],
            ),
            (
                SearchReplace,
                &[
                    "occursin", "contains", "startswith", "endswith", "findfirst", "findlast",
                    "findnext", "findprev", "replace", "match", "eachmatch", "count", "eachsplit",
                ],
            ),
            (Conversion, &["parse", "tryparse", "string", "String", "Symbol"]),
            (Iteration, &["eachindex", "collect", "enumerate"]),
        ],
        extended: &[
            (Macros, &["@printf", "@sprintf"]),
            (Text, &["normalize", "graphemes", "isequal_normalized"]),
        ],
    },
    TopicOperations {
        topic: "regex",
        core: &[
            (Macros, &["@r_str", "@s_str"]),
            (GeneralFunctions, &["Regex", "SubstitutionString", "keys", "haskey"]),
            (
                SearchReplace,
                &[
                    "match", "eachmatch", "occursin", "replace", "findfirst", "findnext",
                    "findall", "count", "split", "startswith", "endswith",
                ],
            ),
        ],
        extended: &[],
    },
    TopicOperations {
        topic: "symbols",
        core: &[
            (Macros, &["@eval", "@gensym"]),
            (GeneralFunctions, &["Symbol", "string", "gensym", "nameof"]),
            (Reflection, &["isdefined", "getfield", "eval", "QuoteNode"]),
        ],
        extended: &[(Reflection, &["Meta.parse", "Meta.quot", "isidentifier"])],
    },
    TopicOperations {
        topic: "arrays",
        core: &[
            (Macros, &["@views", "@view", "@inbounds", "@."]),
            (
                GeneralFunctions,
                &[
                    "length", "size", "ndims", "eltype", "isempty", "axes", "similar", "copy",
                    "deepcopy", "fill", "zeros", "ones", "reshape", "vec", "permutedims",
                    "transpose", "adjoint", "broadcast", "broadcast!",
                ],
            ),
            (
                Collections,
                &[
                    "push!", "pop!", "pushfirst!", "popfirst!", "append!", "prepend!", "insert!",
                    "deleteat!", "splice!", "resize!", "empty!", "sort", "sort!", "sortperm",
                    "reverse", "reverse!", "unique", "unique!", "filter", "filter!", "map",
                    "map!", "reduce", "foldl", "foldr", "sum", "prod", "maximum", "minimum",
                    "extrema", "argmax", "argmin", "findall", "findfirst", "findlast", "in",
                    "count", "any", "all", "cat", "vcat", "hcat", "first", "last", "getindex",
                    "setindex!", "view",
                ],
            ),
            (
                Iteration,
                &[
                    "enumerate", "zip", "eachindex", "pairs", "eachrow", "eachcol", "foreach",
                    "collect",
                ],
            ),
        ],
        extended: &[
            (
                Arithmetic,
                &["dot", "cross", "norm", "det", "inv", "tr", "eigen", "svd", "qr", "lu"],
            ),
            (GeneralFunctions, &["mean", "median", "std", "var", "cor", "rand", "shuffle"]),
        ],
    },
    TopicOperations {
        topic: "tuples",
        core: &[
            (
                GeneralFunctions,
                &[
                    "length", "first", "last", "getindex", "isempty", "tuple", "ntuple", "Tuple",
                    "NamedTuple", "keys", "values", "pairs", "haskey", "getfield", "merge",
                ],
            ),
            (
                Collections,
                &["reverse", "in", "sum", "prod", "maximum", "minimum"],
            ),
            (Iteration, &["enumerate", "zip", "map", "foreach", "collect"]),
        ],
        extended: &[(Collections, &["Base.tail", "Base.front"])],
    },
    TopicOperations {
        topic: "dicts",
        core: &[
            (
                GeneralFunctions,
                &["Dict", "IdDict", "length", "isempty", "copy", "empty!", "keytype", "valtype"],
            ),
            (
                Dictionaries,
                &[
                    "get", "get!", "getkey", "haskey", "keys", "values", "pairs", "delete!",
                    "pop!", "merge", "merge!", "mergewith", "mergewith!", "filter", "filter!",
                    "getindex", "setindex!", "sizehint!",
                ],
            ),
            (Iteration, &["pairs", "foreach", "map", "collect"]),
        ],
        extended: &[(GeneralFunctions, &["OrderedDict", "DefaultDict"])],
    },
    TopicOperations {
        topic: "sets",
        core: &[
            (
                GeneralFunctions,
                &["Set", "BitSet", "length", "isempty", "copy", "empty!"],
            ),
            (
                Sets,
                &[
                    "union", "union!", "intersect", "intersect!", "setdiff", "setdiff!",
                    "symdiff", "symdiff!", "issubset", "⊆", "⊇", "∪", "∩", "issetequal",
                    "isdisjoint", "in", "∈", "∉", "push!", "pop!", "delete!",
                ],
            ),
            (Iteration, &["collect", "foreach", "filter"]),
        ],
        extended: &[],
    },
    TopicOperations {
        topic: "ranges",
        core: &[
            (
                GeneralFunctions,
                &[
                    "range", "length", "first", "last", "step", "isempty", "collect", "reverse",
                    "in", "LinRange", "StepRange", "UnitRange",
                ],
            ),
            (Arithmetic, &["+", "-", "*"]),
            (
                Collections,
                &["sum", "maximum", "minimum", "findfirst", "searchsorted", "intersect"],
            ),
            (Iteration, &["enumerate", "zip", "foreach"]),
        ],
        extended: &[(
            Iteration,
            &[
                "Iterators.reverse", "Iterators.partition", "Iterators.take", "Iterators.drop",
            ],
        )],
    },
    TopicOperations {
        topic: "functions",
        core: &[
            (
                Macros,
                &["@inline", "@noinline", "@nospecialize", "@specialize", "@time", "@elapsed"],
            ),
            (
                GeneralFunctions,
                &[
                    "map", "foreach", "filter", "reduce", "mapreduce", "identity", "∘", "|>",
                    "ComposedFunction", "Returns", "invoke", "invokelatest",
                ],
            ),
            (Reflection, &["methods", "hasmethod", "applicable", "nameof"]),
        ],
        extended: &[
            (Macros, &["@code_warntype", "@which", "@edit"]),
            (Reflection, &["code_lowered", "code_typed"]),
        ],
    },
    TopicOperations {
        topic: "keywords",
        core: &[(Macros, &["@macroexpand", "@eval"])],
        extended: &[(
            Reflection,
            &["Meta.parse", "Base.iskeyword", "Base.isidentifier", "Base.isoperator"],
        )],
    },
    TopicOperations {
        topic: "types",
        core: &[
            (Macros, &["@kwdef"]),
            (
                GeneralFunctions,
                &["convert", "promote", "oftype", "typemax", "typemin", "zero", "one"],
            ),
            (
                Reflection,
                &[
                    "typeof", "isa", "supertype", "fieldnames", "fieldtypes", "fieldcount",
                    "isconcretetype", "isabstracttype", "isprimitivetype", "ismutable",
                    "isbitstype", "sizeof", "nameof", "parentmodule", "typejoin",
                    "typeintersect", "promote_type", "<:",
                ],
            ),
        ],
        extended: &[(Reflection, &["subtypes", "supertypes"])],
    },
    TopicOperations {
        topic: "nothing",
        core: &[
            (Macros, &["@something", "@coalesce"]),
            (
                GeneralFunctions,
                &[
                    "isnothing", "something", "ismissing", "coalesce", "skipmissing", "isequal",
                    "===",
                ],
            ),
        ],
        extended: &[(GeneralFunctions, &["Base.notnothing"])],
    },
    TopicOperations {
        topic: "files",
        core: &[
            (Macros, &["@__FILE__", "@__DIR__", "@__LINE__"]),
            (GeneralFunctions, &["redirect_stdout", "redirect_stderr", "countlines"]),
            (
                FileIo,
                &[
                    "open", "close", "read", "read!", "readline", "readlines", "eachline",
                    "readuntil", "readchomp", "write", "print", "println", "flush", "seek",
                    "seekstart", "seekend", "skip", "position", "eof", "isopen", "isreadable",
                    "iswritable", "IOBuffer", "take!", "readdir", "mkdir", "mkpath", "rm", "cp",
                    "mv", "touch", "isfile", "isdir", "ispath", "filesize", "stat", "mtime",
                    "basename", "dirname", "joinpath", "abspath", "normpath", "splitext",
                    "splitdir", "homedir", "pwd", "cd", "tempname", "tempdir", "mktemp",
                    "mktempdir", "walkdir", "symlink", "readlink", "chmod",
                ],
            ),
        ],
        extended: &[(
            FileIo,
            &["readdlm", "writedlm", "serialize", "deserialize", "Mmap.mmap"],
        )],
    },
];
