//! Hand-off of grouped summaries to whatever draws them.

use std::fmt;
use std::hash::Hash;

use yansi::Color::{Blue, Green};

use crate::error::Result;
use crate::format::F64Formatter;
use crate::stats::{write_summary, GroupedSummaries};

/// A consumer of per-group summaries (a chart, a table, a report...).
pub trait SummaryRenderer<K> {
    fn render(&mut self, summaries: &GroupedSummaries<K>) -> Result<()>;
}

#[derive(Debug)]
/// A plain text listing of grouped summaries, one line per group.
pub struct SummaryTable<'a, K> {
    summaries: &'a GroupedSummaries<K>,
    precision: Option<usize>, // If None, then human friendly display will be used
}

impl<'a, K> SummaryTable<'a, K> {
    /// `precision` is an Option with the number of decimals to display.  If
    /// "None" is used, human units will be used, with an heuristic based on the
    /// range of all the summarized values.
    pub fn new(summaries: &'a GroupedSummaries<K>, precision: Option<usize>) -> Self {
        Self {
            summaries,
            precision,
        }
    }
}

impl<'a, K: fmt::Display + Eq + Hash + Clone> fmt::Display for SummaryTable<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (min, max) = match self.summaries.range() {
            Some(range) => range,
            None => return writeln!(f, "No data"),
        };
        let formatter = match self.precision {
            None => F64Formatter::new_with_range(min..max),
            Some(n) => F64Formatter::new(n),
        };
        writeln!(
            f,
            "Groups = {groups}; Samples = {samples}",
            groups = Blue.paint(self.summaries.len().to_string()),
            samples = Blue.paint(self.summaries.total_samples().to_string()),
        )?;
        let labels: Vec<String> = self.summaries.keys().map(|k| k.to_string()).collect();
        let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        for (label, (_, summary)) in labels.iter().zip(self.summaries.iter()) {
            write!(
                f,
                "[{}] ",
                Green.paint(format!("{:width$}", label, width = width))
            )?;
            write_summary(f, summary, &formatter)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders summaries as a `SummaryTable` into any `fmt::Write` sink.
pub struct TextRenderer<W> {
    out: W,
    precision: Option<usize>,
}

impl<W: fmt::Write> TextRenderer<W> {
    pub fn new(out: W, precision: Option<usize>) -> Self {
        Self { out, precision }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W, K> SummaryRenderer<K> for TextRenderer<W>
where
    W: fmt::Write,
    K: fmt::Display + Eq + Hash + Clone,
{
    fn render(&mut self, summaries: &GroupedSummaries<K>) -> Result<()> {
        write!(self.out, "{}", SummaryTable::new(summaries, self.precision))?;
        Ok(())
    }
}
