use rand::Rng;
use std::cmp::Ordering;

/// Letters used to pad cells that no word occupies.
pub const FILLER_ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ç',
];

/// Pick a filler letter uniformly at random
pub fn random_filler(rng: &mut impl Rng) -> char {
    FILLER_ALPHABET[rng.random_range(0..FILLER_ALPHABET.len())]
}

/// Base letter for the accented Portuguese letters, used for ordering.
fn base_letter(letter: char) -> char {
    match letter {
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ç' => 'C',
        'Ñ' => 'N',
        other => other,
    }
}

/// Order words the way a Portuguese reader expects: accents are ignored on
/// the first pass and only break ties.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().map(base_letter).collect::<Vec<_>>();
    folded(a).cmp(&folded(b)).then_with(|| a.cmp(b))
}
