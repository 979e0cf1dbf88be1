/// Levenshtein edit distance
///
/// d[i][0] = i, d[0][j] = j
/// d[i][j] = min(d[i-1][j-1] + cost, d[i-1][j] + 1, d[i][j-1] + 1)
///
/// where cost is 0 when a[i-1] == b[j-1] and 1 otherwise.
/// Characters are compared exactly; callers lowercase both words first.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Only the previous row of the table is needed to fill the current one.
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        current[0] = i;
        for j in 1..=b.len() {
            let substitution_cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let diagonal = previous[j - 1] + substitution_cost;
            let up = previous[j] + 1;
            let left = current[j - 1] + 1;
            current[j] = diagonal.min(up).min(left);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
