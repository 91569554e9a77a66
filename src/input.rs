use crate::{Instance, Pair, MAX_PAIRS};
use anyhow::{bail, Context, Result};
use itertools::Itertools;
use std::io::BufRead;

/// Reads every case: a line with the pair count, then one `a b` line per
/// pair. Blank lines are skipped.
pub fn read_instances(reader: impl BufRead) -> Result<Vec<Instance>> {
    let raw: Vec<String> = reader.lines().try_collect()?;
    let mut lines = raw
        .iter()
        .enumerate()
        .map(|(no, line)| (no + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let mut instances = Vec::new();
    while let Some((no, count)) = lines.next() {
        let n: usize = count
            .parse()
            .with_context(|| format!("line {}: bad pair count {:?}", no, count))?;
        let mut pairs = Vec::with_capacity(n.min(MAX_PAIRS));
        for _ in 0..n {
            let Some((no, line)) = lines.next() else {
                bail!(
                    "case {}: expected {} pairs, input ended after {}",
                    instances.len() + 1,
                    n,
                    pairs.len()
                );
            };
            let Some((a, b)) = line.split_whitespace().collect_tuple() else {
                bail!("line {}: expected two strings, got {:?}", no, line);
            };
            pairs.push(Pair::new(a, b));
        }
        let inst = Instance::new(pairs).with_context(|| format!("case {}", instances.len() + 1))?;
        instances.push(inst);
    }
    Ok(instances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_cases() {
        let text = "2\nab a\nb bb\n\n1\n x  x \n";
        let instances = read_instances(text.as_bytes()).unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].pairs(), &[Pair::new("ab", "a"), Pair::new("b", "bb")]);
        assert_eq!(instances[1].pairs(), &[Pair::new("x", "x")]);
    }

    #[test]
    fn keeps_non_ascii_cases() {
        let instances = read_instances("1\né é\n2\nab ab\nz z\n".as_bytes()).unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].pairs(), &[Pair::new("é", "é")]);
    }

    #[test]
    fn empty_input() {
        assert!(read_instances("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn malformed() {
        assert!(read_instances("two\n".as_bytes()).is_err());
        assert!(read_instances("2\na b\n".as_bytes()).is_err());
        assert!(read_instances("1\na b c\n".as_bytes()).is_err());
        assert!(read_instances("1\na\n".as_bytes()).is_err());
        assert!(read_instances("0\n".as_bytes()).is_err());
    }
}
