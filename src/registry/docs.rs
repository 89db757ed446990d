//! Built-in prose documentation, one short document per topic

pub struct TopicDoc {
    pub topic: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub see_also: &'static [&'static str],
}

pub const TOPIC_DOCS: &[TopicDoc] = &[
    TopicDoc {
        topic: "integers",
        title: "Integers",
        body: "Integers are exact whole numbers. Literals such as `42` are `Int64` on \
64-bit systems; fixed-width variants run from `Int8` to `Int128` plus unsigned \
`UInt*` types, and `BigInt` grows without bound.\n\n\
Fixed-width arithmetic wraps around on overflow instead of raising an error. \
Use `typemax`/`typemin` to see the limits, and the checked operations when \
overflow must be detected. `/` always produces a float; use `div`, `÷` or `//` \
for integer or rational results.",
        see_also: &["floats", "rationals", "ranges"],
    },
    TopicDoc {
        topic: "floats",
        title: "Floating-point numbers",
        body: "Floats approximate real numbers in binary. `2.5` and `1e3` are \
`Float64`; `Float32`, `Float16` and `BigFloat` trade precision for size or speed.\n\n\
Most decimal fractions cannot be represented exactly, so compare with \
`isapprox` (or `≈`) rather than `==`. Special values `Inf`, `-Inf` and `NaN` \
propagate through arithmetic; test for them with `isinf` and `isnan`.",
        see_also: &["integers", "complex", "rationals"],
    },
    TopicDoc {
        topic: "rationals",
        title: "Rational numbers",
        body: "Rationals are exact fractions built with `//`, e.g. `3//4`. They are \
always stored in lowest terms with a positive denominator, so `2//4 == 1//2`.\n\n\
Arithmetic between rationals stays exact; mixing in a float converts the \
result to a float. Use `numerator` and `denominator` to take one apart.",
        see_also: &["integers", "floats"],
    },
    TopicDoc {
        topic: "complex",
        title: "Complex numbers",
        body: "Complex numbers are written with the imaginary unit `im`: `1 + 2im`. \
`real`, `imag`, `abs` and `angle` give the parts and the polar form, and `cis` \
builds a number from an angle.\n\n\
Functions like `sqrt` only return complex results for complex input: \
`sqrt(-1)` is an error while `sqrt(-1 + 0im)` is `im`.",
        see_also: &["floats"],
    },
    TopicDoc {
        topic: "booleans",
        title: "Booleans",
        body: "`true` and `false` are the two `Bool` values. Conditions in `if` and \
`while` must be `Bool`; there is no implicit truthiness for numbers, strings \
or collections.\n\n\
`&&` and `||` short-circuit; `&` and `|` evaluate both sides and also work \
element-wise with broadcasting. `Bool` is a number type, so `true + true == 2`.",
        see_also: &["integers", "keywords"],
    },
    TopicDoc {
        topic: "chars",
        title: "Characters",
        body: "A `Char` holds one Unicode code point and is written in single \
quotes: `'a'`, `'π'`, `'\\n'`. Indexing a string at a valid position returns a \
`Char`.\n\n\
Predicates such as `isletter`, `isdigit` and `isspace` classify characters; \
`codepoint` gives the numeric value.",
        see_also: &["strings"],
    },
    TopicDoc {
        topic: "strings",
        title: "Strings",
        body: "Strings are immutable sequences of characters in double quotes, \
encoded as UTF-8. Interpolate with `$`: `\"x = $x\"`. Concatenate with `*` or \
`string`, repeat with `^`.\n\n\
Indices are byte offsets, not character counts, so not every integer is a \
valid index for text outside ASCII. Iterate over the string, or use \
`eachindex`, `nextind` and `prevind`, instead of counting positions by hand.",
        see_also: &["chars", "regex", "symbols"],
    },
    TopicDoc {
        topic: "regex",
        title: "Regular expressions",
        body: "Regexes are written as `r\"...\"` literals and use Perl-compatible \
syntax. `occursin` tests for a match, `match` returns the first match (or \
`nothing`), and `eachmatch` iterates over all of them.\n\n\
Captures are available by index or by name on the returned match object. In \
`replace`, refer to them with a substitution string such as `s\"\\\\1\"`.",
        see_also: &["strings"],
    },
    TopicDoc {
        topic: "symbols",
        title: "Symbols",
        body: "A `Symbol` is an interned name written `:name`. Two symbols with the \
same text are the same object, which makes comparison cheap. Symbols name \
fields, keyword arguments and variables in quoted code.",
        see_also: &["strings", "keywords"],
    },
    TopicDoc {
        topic: "arrays",
        title: "Arrays",
        body: "Arrays are mutable, indexable collections. `[1, 2, 3]` is a \
`Vector`, `[1 2; 3 4]` a `Matrix`. Indexing starts at 1 and `end` refers to \
the last index.\n\n\
Functions ending in `!` modify their argument in place (`push!`, `sort!`). \
Put a dot before an operator or after a function name to apply it element by \
element: `v .+ 1`, `sqrt.(v)`.",
        see_also: &["tuples", "ranges", "sets", "dicts"],
    },
    TopicDoc {
        topic: "tuples",
        title: "Tuples",
        body: "Tuples are fixed-length, immutable sequences: `(1, \"a\", 2.5)`. \
A one-element tuple needs a trailing comma: `(1,)`. Named tuples attach names \
to the positions: `(x = 1, y = 2)`.\n\n\
Functions return several values as a tuple, and assignments can destructure \
them: `q, r = divrem(7, 2)`.",
        see_also: &["arrays"],
    },
    TopicDoc {
        topic: "dicts",
        title: "Dictionaries",
        body: "A `Dict` maps keys to values: `Dict(\"a\" => 1, \"b\" => 2)`. Look up \
with `d[key]`, which throws if the key is missing, or with `get(d, key, \
default)`, which does not.\n\n\
Iteration order is unspecified. Collect and sort the keys when you need a \
stable order.",
        see_also: &["sets", "arrays"],
    },
    TopicDoc {
        topic: "sets",
        title: "Sets",
        body: "A `Set` is an unordered collection of unique elements: \
`Set([1, 2, 2])` has two elements. Membership tests with `in` (or `∈`) are \
fast. `union`, `intersect` and `setdiff` also accept arrays.",
        see_also: &["dicts", "arrays"],
    },
    TopicDoc {
        topic: "ranges",
        title: "Ranges",
        body: "Ranges describe arithmetic sequences without storing them: `1:10`, \
`0:2:10`, `range(0, 1; length = 5)`. They behave like read-only vectors.\n\n\
Use `collect` to materialize a range into an array when you need to modify \
the elements.",
        see_also: &["arrays", "integers"],
    },
    TopicDoc {
        topic: "functions",
        title: "Functions",
        body: "Functions are defined with `function f(x) ... end` or the short form \
`f(x) = ...`; anonymous functions are written `x -> x + 1`. A function can \
have many methods, chosen by the types of all arguments.\n\n\
Functions are values: pass them to `map`, `filter` and `reduce`, compose them \
with `∘`, or pipe a value through them with `|>`.",
        see_also: &["types", "keywords"],
    },
    TopicDoc {
        topic: "keywords",
        title: "Reserved words",
        body: "Reserved words cannot be used as variable names: `baremodule begin \
break catch const continue do else elseif end export false finally for \
function global if import let local macro module quote return struct true \
try using while`.\n\n\
`abstract type`, `mutable struct` and `primitive type` are reserved as pairs; \
the single words may still be used as names.",
        see_also: &["functions", "types", "symbols"],
    },
    TopicDoc {
        topic: "types",
        title: "Types",
        body: "Every value has a concrete type, which `typeof` reports. Types form \
a tree rooted at `Any`; abstract types such as `Number` and `AbstractString` \
group related concrete types.\n\n\
Declare your own with `struct` (immutable) or `mutable struct`. Annotations \
like `x::Int` restrict which methods apply but are rarely needed for speed.",
        see_also: &["functions", "keywords"],
    },
    TopicDoc {
        topic: "nothing",
        title: "nothing and missing",
        body: "`nothing` is the value returned by functions with nothing to \
return, and the result of failed searches such as `findfirst`. Test for it \
with `isnothing` or `=== nothing`.\n\n\
`missing` represents an absent data value and propagates through arithmetic \
(`missing + 1` is `missing`). Skip it with `skipmissing` or replace it with \
`coalesce`.",
        see_also: &["types"],
    },
    TopicDoc {
        topic: "files",
        title: "Files and I/O",
        body: "Open files with `open(path, \"r\")` or, better, the block form \
`open(path) do io ... end`, which closes the file for you. `read(path, \
String)` reads a whole file, `eachline` iterates over its lines.\n\n\
The same functions work on any `IO` stream: `stdin`, `stdout`, network \
sockets and in-memory `IOBuffer`s.",
        see_also: &["strings"],
    },
];
