//! String similarity used by every fuzzy match in catmatch.
//!
//! The ratio is the Ratcliff/Obershelp "gestalt" measure: find the longest
//! common block, recurse into the unmatched text on both sides, and report
//! `2 * matched / (len(a) + len(b))`. Identical strings score 1.0, strings with
//! nothing in common score 0.0.
//!
//! The cutoffs configured for catmatch (0.6 for paths and labels, 0.4 for enum
//! values) were tuned against this measure.

use smallvec::SmallVec;

type Chars = SmallVec<[char; 64]>;

/// Similarity ratio of two strings in `[0, 1]`.
///
/// Comparison is per `char` and case sensitive. Two empty strings are
/// considered identical. The measure is not symmetric: the longest-block
/// search scans `a` first, so `ratio(a, b)` and `ratio(b, a)` can differ.
///
/// # Examples
///
/// ```
/// use catmatch_core::ratio;
///
/// assert_eq!(ratio("Fietsen", "Fietsen"), 1.0);
/// assert_eq!(ratio("abc", "xyz"), 0.0);
/// assert!(ratio("condition", "Conditie") > 0.6);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Chars = a.chars().collect();
    let b: Chars = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

// Total length of all matching blocks.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_block(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }

    matched
}

// Longest common block of a[alo..ahi] and b[blo..bhi] as (start_a, start_b, len).
// Ties resolve to the earliest start in `a`, then in `b`.
fn longest_block(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo + 1;
    let mut prev = vec![0usize; width];
    let mut cur = vec![0usize; width];
    let mut best = (alo, blo, 0);

    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            cur[col] = if a[i] == b[j] { prev[col - 1] + 1 } else { 0 };
            let k = cur[col];
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    best
}

/// A scored candidate returned by [`Matcher::best`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Position of the candidate in the scanned sequence.
    pub index: usize,

    /// Similarity ratio of the candidate against the query.
    pub score: f64,
}

/// Single-best fuzzy matcher with a cutoff.
///
/// Scans candidates once and keeps the first one with the highest score, so
/// ties resolve to the earliest candidate. Candidates scoring below the cutoff
/// are never returned.
///
/// # Example
///
/// ```
/// use catmatch_core::Matcher;
///
/// let labels = ["Merk", "Kleur", "Conditie"];
/// let hit = Matcher::new(0.6).best("condition", labels).unwrap();
/// assert_eq!(hit.index, 2);
///
/// assert!(Matcher::new(0.6).best("gewicht", labels).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher {
    cutoff: f64,
    fold_case: bool,
}

impl Matcher {
    /// Creates a case sensitive matcher.
    pub fn new(cutoff: f64) -> Self {
        Self {
            cutoff,
            fold_case: false,
        }
    }

    /// Compares lowercased text when `fold_case` is set.
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Similarity of two strings under this matcher's case rules.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        if self.fold_case {
            ratio(&a.to_lowercase(), &b.to_lowercase())
        } else {
            ratio(a, b)
        }
    }

    /// Returns the best candidate at or above the cutoff.
    ///
    /// Each candidate is scored as `score(candidate, query)`, the same
    /// argument order as `difflib.get_close_matches`.
    pub fn best<'c, I>(&self, query: &str, candidates: I) -> Option<Candidate>
    where
        I: IntoIterator<Item = &'c str>,
    {
        let mut best: Option<Candidate> = None;
        for (index, candidate) in candidates.into_iter().enumerate() {
            let score = self.score(candidate, query);
            if score < self.cutoff {
                continue;
            }
            if best.map_or(true, |b| score > b.score) {
                best = Some(Candidate { index, score });
            }
        }
        best
    }
}
