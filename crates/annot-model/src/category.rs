//! COG category labels and their fixed descriptions.

use std::fmt;
use std::str::FromStr;

/// A single-character COG functional category code.
///
/// The 26 letter codes carry the standard COG descriptions; the sentinel
/// `-` stands for proteins without any category annotation. Codes outside
/// the known set are representable (they occur in hand-edited listings)
/// and map to a placeholder description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryLabel(char);

/// Known code/description pairs, in listing order (`-` sorts before the
/// letters in the underlying character ordering).
pub const KNOWN_CATEGORIES: [(char, &str); 27] = [
    ('-', "Not assigned / No COG code"),
    ('A', "RNA processing and modification"),
    ('B', "Chromatin structure and dynamics"),
    ('C', "Energy production and conversion"),
    ('D', "Cell cycle control, cell division, chromosome partitioning"),
    ('E', "Amino acid transport and metabolism"),
    ('F', "Nucleotide transport and metabolism"),
    ('G', "Carbohydrate transport and metabolism"),
    ('H', "Coenzyme transport and metabolism"),
    ('I', "Lipid transport and metabolism"),
    ('J', "Translation, ribosomal structure and biogenesis"),
    ('K', "Transcription"),
    ('L', "Replication, recombination and repair"),
    ('M', "Cell wall/membrane/envelope biogenesis"),
    ('N', "Cell motility"),
    ('O', "Posttranslational modification, protein turnover, chaperones"),
    ('P', "Inorganic ion transport and metabolism"),
    ('Q', "Secondary metabolites biosynthesis, transport and catabolism"),
    ('R', "General function prediction only"),
    ('S', "Function unknown"),
    ('T', "Signal transduction mechanisms"),
    ('U', "Intracellular trafficking, secretion, and vesicular transport"),
    ('V', "Defense mechanisms"),
    ('W', "Extracellular structures"),
    ('X', "Mobilome: prophages, transposons"),
    ('Y', "Nuclear structure"),
    ('Z', "Cytoskeleton"),
];

/// Description used for codes outside [`KNOWN_CATEGORIES`].
pub const UNKNOWN_DESCRIPTION: &str = "Unknown category";

impl CategoryLabel {
    /// The sentinel label for proteins with no annotation.
    pub const UNASSIGNED: CategoryLabel = CategoryLabel('-');

    /// Wrap a raw code character. Any character is accepted; unknown codes
    /// get the placeholder description.
    pub fn new(code: char) -> Self {
        CategoryLabel(code)
    }

    /// The underlying code character.
    pub fn as_char(&self) -> char {
        self.0
    }

    /// Whether the code is one of the 27 known categories.
    pub fn is_known(&self) -> bool {
        KNOWN_CATEGORIES.iter().any(|(code, _)| *code == self.0)
    }

    /// The fixed human-readable description for this code.
    pub fn description(&self) -> &'static str {
        KNOWN_CATEGORIES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map_or(UNKNOWN_DESCRIPTION, |(_, description)| description)
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryLabel {
    type Err = String;

    /// Parse a label from a listing header. Exactly one non-whitespace
    /// character is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Ok(CategoryLabel(code)),
            _ => Err(format!("not a single-character category label: {s:?}")),
        }
    }
}
