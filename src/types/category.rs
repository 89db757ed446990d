//! Operation categories in display priority order

use std::fmt;


/// Category an operation is listed under.
///
/// Declaration order is the display order: macros first, general
/// functions second, domain-specific groups after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Macros,
    GeneralFunctions,
    Arithmetic,
    TrigonometricHyperbolic,
    RoundingDivision,
    Bitwise,
    Conversion,
    Text,
    SearchReplace,
    Collections,
    Sets,
    Dictionaries,
    Iteration,
    FileIo,
    Reflection,
}

impl Category {
    /// All categories in priority order
    pub const ALL: [Category; 15] = [
        Category::Macros,
        Category::GeneralFunctions,
        Category::Arithmetic,
        Category::TrigonometricHyperbolic,
        Category::RoundingDivision,
        Category::Bitwise,
        Category::Conversion,
        Category::Text,
        Category::SearchReplace,
        Category::Collections,
        Category::Sets,
        Category::Dictionaries,
        Category::Iteration,
        Category::FileIo,
        Category::Reflection,
    ];

    /// Header printed above the category's names
    pub fn label(self) -> &'static str {
        match self {
            Category::Macros => "Macros",
            Category::GeneralFunctions => "General Functions",
            Category::Arithmetic => "Arithmetic",
            Category::TrigonometricHyperbolic => "Trigonometric & Hyperbolic Operations",
            Category::RoundingDivision => "Rounding & Division",
            Category::Bitwise => "Bitwise Operations",
            Category::Conversion => "Conversion & Parsing",
            Category::Text => "Text Operations",
            Category::SearchReplace => "Search & Replace",
            Category::Collections => "Collection Operations",
            Category::Sets => "Set Operations",
            Category::Dictionaries => "Dictionary Operations",
            Category::Iteration => "Iteration",
            Category::FileIo => "File & Stream I/O",
            Category::Reflection => "Types & Reflection",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
