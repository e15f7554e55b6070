//! Bag-of-words count features for name text

use crate::error::ClassifierError;
use ndarray::Array2;
use regex::Regex;
use std::collections::BTreeMap;

/// Tokens are runs of two or more word characters
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Standard English stop-word list
pub const ENGLISH_STOP_WORDS: [&str; 318] = [
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his", "how", "however",
    "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its",
    "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly", "move",
    "much", "must", "my", "myself", "name", "namely", "neither", "never", "nevertheless", "next",
    "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of",
    "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise",
    "our", "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put",
    "rather", "re", "same", "see", "seem", "seemed", "seeming", "seems", "serious", "several",
    "she", "should", "show", "side", "since", "sincere", "six", "sixty", "so", "some", "somehow",
    "someone", "something", "sometime", "sometimes", "somewhere", "still", "such", "system",
    "take", "ten", "than", "that", "the", "their", "them", "themselves", "then", "thence",
    "there", "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they",
    "thick", "thin", "third", "this", "those", "though", "three", "through", "throughout",
    "thru", "thus", "to", "together", "too", "top", "toward", "towards", "twelve", "twenty",
    "two", "un", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "would",
    "yet", "you", "your", "yours", "yourself", "yourselves",
];

pub fn is_stop_word(token: &str) -> bool {
    ENGLISH_STOP_WORDS.contains(&token)
}

/// Count vectorizer with a sorted vocabulary
#[derive(Debug, Clone)]
pub struct BagOfWords {
    /// term -> column index
    vocabulary: BTreeMap<String, usize>,
    token_pattern: Regex,
}

impl BagOfWords {
    /// Learn the vocabulary from a batch of documents
    pub fn fit<S: AsRef<str>>(docs: &[S]) -> Result<Self, ClassifierError> {
        let token_pattern = Regex::new(TOKEN_PATTERN)?;

        let mut vocabulary: BTreeMap<String, usize> = BTreeMap::new();
        for doc in docs {
            for token in tokenize_with(&token_pattern, doc.as_ref()) {
                vocabulary.entry(token).or_insert(0);
            }
        }

        if vocabulary.is_empty() {
            return Err(ClassifierError::EmptyVocabulary);
        }

        // Column order follows the sorted terms
        for (index, slot) in vocabulary.values_mut().enumerate() {
            *slot = index;
        }

        Ok(Self {
            vocabulary,
            token_pattern,
        })
    }

    /// Term counts, one row per document; unknown terms are ignored
    pub fn transform<S: AsRef<str>>(&self, docs: &[S]) -> Array2<f64> {
        let mut counts = Array2::zeros((docs.len(), self.vocabulary.len()));
        for (row, doc) in docs.iter().enumerate() {
            for token in self.tokenize(doc.as_ref()) {
                if let Some(&col) = self.vocabulary.get(&token) {
                    counts[[row, col]] += 1.0;
                }
            }
        }
        counts
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize_with(&self.token_pattern, text)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Terms in column order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.keys().map(String::as_str)
    }
}

fn tokenize_with(pattern: &Regex, text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    pattern
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|token| !is_stop_word(token))
        .collect()
}
