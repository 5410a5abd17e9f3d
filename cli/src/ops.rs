use anyhow::{bail, Context, Result};
use interval_set::{DisjointIntervalSet, Interval, Order};
use log::debug;
use std::path::Path;
use std::str::FromStr;

/// One operation on the set, as typed on the command line
pub enum Op<O> {
    Union(Interval<i64, O>),
    RemoveInterval(Interval<i64, O>),
    Add(i64),
    Remove(i64),
    Contains(i64),
}

impl<O: Order<i64> + Default> FromStr for Op<O> {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let Some(kind) = chars.next() else {
            bail!("empty operation");
        };
        let operand = chars.as_str().trim();
        let is_interval = operand.starts_with(['[', '(']) || operand == "O";

        Ok(match (kind, is_interval) {
            ('+', true) => Op::Union(
                operand
                    .parse()
                    .with_context(|| format!("in operation {:?}", s))?,
            ),
            ('-', true) => Op::RemoveInterval(
                operand
                    .parse()
                    .with_context(|| format!("in operation {:?}", s))?,
            ),
            ('+', false) => Op::Add(parse_value(s, operand)?),
            ('-', false) => Op::Remove(parse_value(s, operand)?),
            ('?', false) => Op::Contains(parse_value(s, operand)?),
            (_, true | false) => {
                bail!("operation {:?} must start with '+', '-' or '?'", s)
            }
        })
    }
}

impl<O: Order<i64>> PartialEq for Op<O> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Op::Union(a), Op::Union(b))
            | (Op::RemoveInterval(a), Op::RemoveInterval(b)) => a == b,
            (Op::Add(a), Op::Add(b))
            | (Op::Remove(a), Op::Remove(b))
            | (Op::Contains(a), Op::Contains(b)) => a == b,
            (
                Op::Union(_)
                | Op::RemoveInterval(_)
                | Op::Add(_)
                | Op::Remove(_)
                | Op::Contains(_),
                _,
            ) => false,
        }
    }
}

impl<O> std::fmt::Display for Op<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Op::Union(intv) => write!(f, "+{}", intv),
            Op::RemoveInterval(intv) => write!(f, "-{}", intv),
            Op::Add(v) => write!(f, "+{}", v),
            Op::Remove(v) => write!(f, "-{}", v),
            Op::Contains(v) => write!(f, "?{}", v),
        }
    }
}

impl<O> std::fmt::Debug for Op<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

fn parse_value(op: &str, operand: &str) -> Result<i64> {
    operand
        .parse()
        .with_context(|| format!("invalid value in operation {:?}", op))
}

impl<O: Order<i64>> Op<O> {
    /// Apply the operation.  Returns a line to display, if any.
    pub fn apply(
        self,
        set: &mut DisjointIntervalSet<i64, O>,
    ) -> Result<Option<String>> {
        debug!("apply {}", self);
        match self {
            Op::Union(intv) => set.union(intv)?,
            Op::RemoveInterval(intv) => set.remove_interval(&intv)?,
            Op::Add(v) => set.add(v),
            Op::Remove(v) => set.remove(&v),
            Op::Contains(v) => {
                return Ok(Some(format!("?{} {}", v, set.contains(&v))));
            }
        }
        Ok(None)
    }
}

/// Parse all operations
pub fn parse_ops<O, S>(ops: impl IntoIterator<Item = S>) -> Result<Vec<Op<O>>>
where
    O: Order<i64> + Default,
    S: AsRef<str>,
{
    ops.into_iter().map(|op| op.as_ref().parse()).collect()
}

/// Read operations from a file.  Each line contains zero or more
/// operations, separated with spaces and quoted like in a shell.  Anything
/// after a '#' is ignored.
pub fn read_script<O: Order<i64> + Default>(path: &Path) -> Result<Vec<Op<O>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    parse_script(&content)
}

pub fn parse_script<O: Order<i64> + Default>(content: &str) -> Result<Vec<Op<O>>> {
    let mut result = Vec::new();
    for (num, line) in content.lines().enumerate() {
        let line = line.split_once('#').map_or(line, |(before, _)| before);
        let Some(words) = shlex::split(line) else {
            bail!("line {}: unbalanced quotes", num + 1);
        };
        result.extend(
            parse_ops(words).with_context(|| format!("line {}", num + 1))?,
        );
    }
    Ok(result)
}
