use anyhow::{bail, Result};

/// Build the first `n` rows of Pascal's triangle.
///
/// Non-positive `n` is valid input and yields an empty triangle. Each row
/// is derived only from the previous one; interior sums are exact up to
/// n = 67, beyond which they no longer fit in u64.
pub fn pascal_triangle(n: i64) -> Vec<Vec<u64>> {
    if n <= 0 {
        return Vec::new();
    }

    let mut triangle: Vec<Vec<u64>> = vec![vec![1]];
    for i in 1..n as usize {
        let prev = &triangle[i - 1];
        let mut row = Vec::with_capacity(i + 1);
        row.push(1);
        for j in 1..i {
            row.push(prev[j - 1] + prev[j]);
        }
        row.push(1);
        triangle.push(row);
    }
    triangle
}

pub fn run(args: &[String]) -> Result<()> {
    let Some(n) = args.first().and_then(|s| s.parse::<i64>().ok()) else {
        bail!("usage: logtally triangle <n>");
    };
    for row in pascal_triangle(n) {
        println!("{}", fmt_row(&row));
    }
    Ok(())
}

fn fmt_row(row: &[u64]) -> String {
    let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
    format!("[{}]", cells.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_n_yields_empty() {
        assert!(pascal_triangle(0).is_empty());
        assert!(pascal_triangle(-5).is_empty());
    }

    #[test]
    fn first_five_rows_are_exact() {
        assert_eq!(
            pascal_triangle(5),
            vec![
                vec![1],
                vec![1, 1],
                vec![1, 2, 1],
                vec![1, 3, 3, 1],
                vec![1, 4, 6, 4, 1],
            ]
        );
    }

    #[test]
    fn row_lengths_and_edges() {
        let triangle = pascal_triangle(12);
        assert_eq!(triangle.len(), 12);
        for (i, row) in triangle.iter().enumerate() {
            assert_eq!(row.len(), i + 1);
            assert_eq!(row[0], 1);
            assert_eq!(row[i], 1);
        }
    }

    #[test]
    fn interior_entries_satisfy_pascal_identity() {
        let triangle = pascal_triangle(12);
        for i in 1..triangle.len() {
            for j in 1..i {
                assert_eq!(triangle[i][j], triangle[i - 1][j - 1] + triangle[i - 1][j]);
            }
        }
    }

    #[test]
    fn rows_format_like_lists() {
        assert_eq!(fmt_row(&[1]), "[1]");
        assert_eq!(fmt_row(&[1, 4, 6, 4, 1]), "[1, 4, 6, 4, 1]");
    }
}
