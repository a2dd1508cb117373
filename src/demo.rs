//! Scripted demonstration of the trie.
//!
//! A [`DemoScript`] is an ordered list of titled query batches. Running it
//! against a trie produces outcomes only; writing them is left to a
//! [`Reporter`](crate::report::Reporter).

use std::io::Write;

use tracing::info;

use crate::data_structures::hua_trie::HuaTrie;
use crate::error::HuaResult;
use crate::report::{Outcome, Reporter};

/// The kind of query a section runs, with its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Exact lookups
    Search(Vec<String>),
    /// Prefix existence checks
    StartsWith(Vec<String>),
    /// Prefix enumerations
    Prefixes(Vec<String>),
}

impl Query {
    fn inputs(&self) -> &[String] {
        match self {
            Self::Search(inputs) | Self::StartsWith(inputs) | Self::Prefixes(inputs) => inputs,
        }
    }
}

/// A titled batch of queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSection {
    /// Heading printed before the outcomes
    pub title: String,
    /// Queries to run
    pub query: Query,
}

impl DemoSection {
    fn new(title: &str, query: Query) -> Self {
        Self {
            title: title.to_string(),
            query,
        }
    }
}

/// Outcomes of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    /// Section heading
    pub title: String,
    /// One outcome per query input, in order
    pub outcomes: Vec<Outcome>,
}

/// An ordered list of sections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemoScript {
    /// Sections, run in order
    pub sections: Vec<DemoSection>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl DemoScript {
    /// The standard walkthrough: general lookups, prefix listings, then
    /// short, hyphenated, numeric, mixed case and unusual words, and finally
    /// two words that are expected to be missing.
    pub fn standard() -> Self {
        let sections = vec![
            DemoSection::new(
                "Searching for words in the Trie:",
                Query::Search(owned(&[
                    "prefix",
                    "data",
                    "hello",
                    "do",
                    "workplace",
                    "there",
                    "pneumonia",
                    "word2vec",
                    "iPhone",
                    "a-frame",
                    "abc",
                    "xyz",
                ])),
            ),
            DemoSection::new(
                "Finding words with given prefixes:",
                Query::Prefixes(owned(&["pre", "pro", "work", "i", "e"])),
            ),
            DemoSection::new(
                "Searching for short words:",
                Query::Search(owned(&["a", "an", "by"])),
            ),
            DemoSection::new(
                "Searching for hyphenated words:",
                Query::Search(owned(&["e-mail", "t-shirt"])),
            ),
            DemoSection::new(
                "Searching for words with numbers:",
                Query::Search(owned(&["24hours", "2day"])),
            ),
            DemoSection::new(
                "Searching for mixed case words:",
                Query::Search(owned(&["JavaScript", "PowerPoint"])),
            ),
            DemoSection::new(
                "Searching for special case words:",
                Query::Search(owned(&[
                    "psychology",
                    "pterodactyl",
                    "xylophone",
                    "yacht",
                    "eBay",
                    "iPad",
                    "x-ray",
                ])),
            ),
            DemoSection::new(
                "Searching for words that are not in the Trie:",
                Query::Search(owned(&["abc", "xyz"])),
            ),
        ];

        Self { sections }
    }

    /// Number of queries across all sections.
    pub fn query_count(&self) -> usize {
        self.sections.iter().map(|s| s.query.inputs().len()).sum()
    }
}

/// Runs one query batch.
pub fn run_query(trie: &HuaTrie, query: &Query, sort_matches: bool) -> Vec<Outcome> {
    match query {
        Query::Search(words) => words.iter().map(|w| Outcome::search(trie, w)).collect(),
        Query::StartsWith(prefixes) => prefixes
            .iter()
            .map(|p| Outcome::prefix_check(trie, p))
            .collect(),
        Query::Prefixes(prefixes) => prefixes
            .iter()
            .map(|p| Outcome::prefix_matches(trie, p, sort_matches))
            .collect(),
    }
}

/// Runs every section of `script` against `trie`.
pub fn run_script(trie: &HuaTrie, script: &DemoScript, sort_matches: bool) -> Vec<SectionReport> {
    let reports: Vec<SectionReport> = script
        .sections
        .iter()
        .map(|section| SectionReport {
            title: section.title.clone(),
            outcomes: run_query(trie, &section.query, sort_matches),
        })
        .collect();

    let hits = reports
        .iter()
        .flat_map(|r| r.outcomes.iter())
        .filter(|o| o.is_hit())
        .count();
    info!(
        sections = reports.len(),
        queries = script.query_count(),
        hits,
        "Demo script finished"
    );

    reports
}

/// Writes section reports through `reporter`.
pub fn write_reports<W: Write>(
    reporter: &mut Reporter<W>,
    reports: &[SectionReport],
) -> HuaResult<()> {
    for report in reports {
        reporter.heading(&report.title)?;
        for outcome in &report.outcomes {
            reporter.outcome(outcome)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_standard_script_shape() {
        let script = DemoScript::standard();
        assert_eq!(script.sections.len(), 8);
        assert_eq!(script.query_count(), 12 + 5 + 3 + 2 + 2 + 2 + 7 + 2);
    }

    #[test]
    fn test_run_script_on_small_dictionary() {
        let trie: HuaTrie = ["prefix", "data", "do", "e-mail", "24hours", "JavaScript", "eBay"]
            .into_iter()
            .collect();

        let reports = run_script(&trie, &DemoScript::standard(), true);
        assert_eq!(reports.len(), 8);

        let general = &reports[0].outcomes;
        assert_eq!(
            general[0],
            Outcome::Search {
                word: "prefix".to_string(),
                found: true
            }
        );
        assert!(!general[2].is_hit()); // hello

        let prefixes = &reports[1].outcomes;
        assert_eq!(
            prefixes[4],
            Outcome::PrefixMatches {
                prefix: "e".to_string(),
                words: vec!["e-mail".to_string(), "eBay".to_string()],
            }
        );

        let missing = &reports[7].outcomes;
        assert!(missing.iter().all(|o| !o.is_hit()));
    }

    #[test]
    fn test_starts_with_query() {
        let trie: HuaTrie = ["work", "workplace"].into_iter().collect();
        let outcomes = run_query(&trie, &Query::StartsWith(owned(&["wor", "x"])), false);

        assert!(outcomes[0].is_hit());
        assert!(!outcomes[1].is_hit());
    }

    #[test]
    fn test_write_reports_text() {
        let trie: HuaTrie = ["a"].into_iter().collect();
        let script = DemoScript {
            sections: vec![DemoSection::new(
                "Searching for short words:",
                Query::Search(owned(&["a", "an"])),
            )],
        };

        let reports = run_script(&trie, &script, true);
        let mut reporter = Reporter::new(Vec::new(), OutputFormat::Text);
        write_reports(&mut reporter, &reports).unwrap();
        let out = String::from_utf8(reporter.finish().unwrap()).unwrap();

        assert_eq!(
            out,
            "\nSearching for short words:\nWord 'a' found in the Trie.\nWord 'an' not found in the Trie.\n"
        );
    }
}
