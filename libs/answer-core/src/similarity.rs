//! Normalized Levenshtein similarity.

use crate::normalize::normalize;

/// Full edit-distance matrix between `rows` and `cols`.
///
/// `matrix[i][j]` is the distance between the first `i` items of `rows` and
/// the first `j` items of `cols`. Insertion, deletion and substitution all
/// cost 1.
pub(crate) fn edit_matrix<F>(rows: &[char], cols: &[char], same: F) -> Vec<Vec<usize>>
where
    F: Fn(char, char) -> bool,
{
    let m = rows.len();
    let n = cols.len();

    let mut matrix = vec![vec![0; n + 1]; m + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if same(rows[i - 1], cols[j - 1]) { 0 } else { 1 };

            matrix[i][j] = (matrix[i - 1][j] + 1) // deletion
                .min(matrix[i][j - 1] + 1) // insertion
                .min(matrix[i - 1][j - 1] + cost); // substitution
        }
    }

    matrix
}

/// Calculate Levenshtein distance between two strings, by characters.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    edit_matrix(&b_chars, &a_chars, |x, y| x == y)[b_chars.len()][a_chars.len()]
}

/// Similarity between 0.0 and 1.0 of the normalized forms of `a` and `b`.
///
/// Identical normalized forms score 1.0. If only one side normalizes to an
/// empty string the score is 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let distance = levenshtein_distance(&a, &b);
    1.0 - (distance as f64 / max_len as f64)
}
