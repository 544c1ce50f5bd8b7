/// Environmental topic terms.
pub const ENVIRONMENT_TERMS: &[&str] = &[
    "climate",
    "carbon",
    "emission",
    "renewable",
    "pollution",
    "environment",
    "sustainab",
    "biodiversity",
    "deforestation",
    "net zero",
    "solar",
    "recycl",
];

/// Social topic terms.
pub const SOCIAL_TERMS: &[&str] = &[
    "diversity",
    "inclusion",
    "human rights",
    "labor",
    "labour",
    "employee",
    "worker",
    "community",
    "health and safety",
    "wellbeing",
    "equality",
    "child labor",
];

/// Governance topic terms.
pub const GOVERNANCE_TERMS: &[&str] = &[
    "governance",
    "board",
    "ethic",
    "corruption",
    "bribery",
    "compliance",
    "transparency",
    "audit",
    "shareholder",
    "executive pay",
    "whistleblow",
    "fraud",
];

/// Words read as favourable in a headline.
///
/// Matched against whole words. A trailing `*` marks a stem that also
/// matches longer words.
pub const POSITIVE_TERMS: &[&str] = &[
    "award*",
    "improv*",
    "growth",
    "gain",
    "gains",
    "gained",
    "success*",
    "strong*",
    "record high",
    "committed",
    "commitment*",
    "leader*",
    "prais*",
    "upgrad*",
    "win",
    "wins",
    "winning",
    "winner*",
];

/// Words read as unfavourable in a headline. Same matching as
/// [`POSITIVE_TERMS`].
pub const NEGATIVE_TERMS: &[&str] = &[
    "lawsuit*",
    "scandal*",
    "fine",
    "fined",
    "fines",
    "declin*",
    "loss",
    "losses",
    "investigat*",
    "violat*",
    "spill*",
    "downgrad*",
    "protest*",
    "accus*",
    "penalt*",
];

fn mentions_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| haystack.contains(t))
}

fn word_matches(word: &str, pattern: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(stem) => word.starts_with(stem),
        None => word == pattern,
    }
}

fn phrase_matches(words: &[&str], term: &str) -> bool {
    let pattern: Vec<&str> = term.split_whitespace().collect();
    !pattern.is_empty()
        && words.windows(pattern.len()).any(|w| {
            w.iter()
                .zip(&pattern)
                .all(|(word, p)| word_matches(word, p))
        })
}

fn count_hits(words: &[&str], terms: &[&str]) -> usize {
    terms.iter().filter(|t| phrase_matches(words, t)).count()
}

/// Number of ESG pillars (0–3) whose term list has at least one
/// case-insensitive substring match in `text`.
///
/// ```
/// assert_eq!(esgboard_core::classify_esg("climate change and governance reform"), 2);
/// ```
#[must_use]
pub fn classify_esg(text: &str) -> u8 {
    let lower = text.to_lowercase();
    [ENVIRONMENT_TERMS, SOCIAL_TERMS, GOVERNANCE_TERMS]
        .iter()
        .map(|terms| u8::from(mentions_any(&lower, terms)))
        .sum()
}

/// Naive headline sentiment in [0, 1] for sources without a tone field.
///
/// `0.5 + 0.5 * (pos - neg) / (pos + neg)` over distinct term hits; 0.5 when
/// neither list matches.
#[must_use]
pub fn heuristic_sentiment(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let pos = count_hits(&words, POSITIVE_TERMS);
    let neg = count_hits(&words, NEGATIVE_TERMS);
    if pos + neg == 0 {
        return 0.5;
    }
    #[allow(clippy::cast_precision_loss)]
    let (p, n) = (pos as f64, neg as f64);
    0.5 + 0.5 * (p - n) / (p + n)
}
