//! Instance reader/writer for the whitespace-separated token format of
//! spec.md §6. `#`-prefixed lines are comments and may appear between
//! blocks. Treated as an external collaborator by spec.md §1 — this module
//! never appears in the solver APIs, only at the CLI boundary.

use crate::error::{KnapsackError, Result};
use crate::instance::{Instance, Item};
use crate::real::Real;
use crate::vector::CostVector;
use std::io::{BufRead, Write};

struct Tokenizer<'a> {
    tokens: std::collections::VecDeque<&'a str>,
}

impl<'a> Tokenizer<'a> {
    fn new(lines: &'a [String]) -> Self {
        let tokens = lines
            .iter()
            .map(|l| l.as_str())
            .filter(|l| !l.trim_start().starts_with('#'))
            .flat_map(|l| l.split_whitespace())
            .collect();
        Tokenizer { tokens }
    }

    fn next(&mut self) -> Result<&'a str> {
        self.tokens
            .pop_front()
            .ok_or_else(|| KnapsackError::MalformedInput("stream ended before all tokens read".to_string()))
    }

    fn next_usize(&mut self) -> Result<usize> {
        let tok = self.next()?;
        tok.parse()
            .map_err(|_| KnapsackError::MalformedInput(format!("expected an integer, got '{tok}'")))
    }

    fn next_real(&mut self) -> Result<Real> {
        let tok = self.next()?;
        tok.parse::<f64>()
            .map(Real::new)
            .map_err(|_| KnapsackError::MalformedInput(format!("expected a real number, got '{tok}'")))
    }
}

/// Parses an instance from `n`, `p`, `k`, `p` cost rows, a weight row and a
/// capacity, per spec.md §6. `k` must equal 1 (a single capacity
/// constraint); any other value is `malformed_input`.
pub fn read_instance<R: BufRead>(reader: R) -> Result<Instance> {
    let lines: Vec<String> = reader
        .lines()
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| KnapsackError::MalformedInput(e.to_string()))?;
    let mut tok = Tokenizer::new(&lines);

    let n = tok.next_usize()?;
    let p = tok.next_usize()?;
    let k = tok.next_usize()?;
    if k != 1 {
        return Err(KnapsackError::MalformedInput(format!(
            "expected exactly one capacity constraint (k=1), got k={k}"
        )));
    }
    if n == 0 {
        return Err(KnapsackError::MalformedInput("n must be at least 1".to_string()));
    }

    let mut costs = vec![vec![Real::ZERO; n]; p];
    for row in costs.iter_mut() {
        for slot in row.iter_mut() {
            *slot = tok.next_real()?;
        }
    }

    let mut weights = vec![Real::ZERO; n];
    for w in weights.iter_mut() {
        *w = tok.next_real()?;
    }

    let capacity = tok.next_real()?;

    let items = (0..n)
        .map(|i| {
            let cost = CostVector::from_vec((0..p).map(|j| costs[j][i]).collect());
            Item::new(i, cost, weights[i])
        })
        .collect();

    Instance::new(items, capacity, p)
}

/// Serialises an instance back to the token format; round-trips with
/// `read_instance` (spec.md §8 round-trip law).
pub fn write_instance<W: Write>(inst: &Instance, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "{}", inst.size())?;
    writeln!(writer, "{}", inst.nb_objectives())?;
    writeln!(writer, "1")?;
    for j in 0..inst.nb_objectives() {
        let row: Vec<String> = (0..inst.size())
            .map(|i| inst.item(i).cost[j].value().to_string())
            .collect();
        writeln!(writer, "{}", row.join(" "))?;
    }
    let weights: Vec<String> = (0..inst.size())
        .map(|i| inst.item(i).weight.value().to_string())
        .collect();
    writeln!(writer, "{}", weights.join(" "))?;
    writeln!(writer, "{}", inst.capacity().value())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn round_trip() {
        let input = "3\n2\n1\n3 4 2\n2 3 4\n2 3 1\n4\n";
        let inst = read_instance(Cursor::new(input)).unwrap();
        assert_eq!(inst.size(), 3);
        assert_eq!(inst.nb_objectives(), 2);

        let mut buf = Vec::new();
        write_instance(&inst, &mut buf).unwrap();
        let reparsed = read_instance(Cursor::new(buf)).unwrap();
        assert_eq!(reparsed.size(), inst.size());
        assert_eq!(reparsed.capacity(), inst.capacity());
    }

    #[test]
    fn comments_between_blocks() {
        let input = "# instance\n3\n2\n# one capacity constraint\n1\n3 4 2\n2 3 4\n2 3 1\n4\n";
        let inst = read_instance(Cursor::new(input)).unwrap();
        assert_eq!(inst.size(), 3);
    }

    #[test]
    fn rejects_k_other_than_one() {
        let input = "1\n2\n2\n1\n1\n1\n1\n";
        assert!(read_instance(Cursor::new(input)).is_err());
    }

    #[test]
    fn rejects_truncated_stream() {
        let input = "3\n2\n1\n3 4\n";
        assert!(read_instance(Cursor::new(input)).is_err());
    }
}
