use std::io::{self, Write};

use crate::blockers::MaxBlockerResult;
use crate::types::{File, Rank, Square};

/// Algebraic name of a square: file letter then rank digit, e.g. `d4`.
pub fn square_name(sq: Square) -> String {
    sq.to_string()
}

pub fn format_report(result: &MaxBlockerResult) -> String {
    format!(
        "Max relevant squares: {} at {}\nMax blocker permutations: 2^{} = {}\n",
        result.count,
        square_name(result.square),
        result.count,
        result.permutations
    )
}

pub fn write_report<W: Write>(out: &mut W, result: &MaxBlockerResult) -> io::Result<()> {
    out.write_all(format_report(result).as_bytes())
}

/// Per-square counts as a board diagram, eighth rank on top.
pub fn format_count_table(counts: &[u8; 64]) -> String {
    let mut table = String::new();
    for rank in Rank::ALL.iter().rev() {
        let row: Vec<String> = File::ALL
            .iter()
            .map(|&file| format!("{:>2}", counts[Square::from(file, *rank)]))
            .collect();
        table.push_str(&row.join(" "));
        table.push('\n');
    }
    table
}
