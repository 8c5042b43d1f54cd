//! Source selection as made on the control surface.
//!

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Which feeds to keep.
///
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum SourceFilter {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl SourceFilter {
    /// An empty selection means everything, like an untouched checklist.
    ///
    pub fn from_selection<I, S>(selection: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = selection.into_iter().map(Into::into).collect();
        if set.is_empty() {
            SourceFilter::All
        } else {
            SourceFilter::Only(set)
        }
    }

    #[inline]
    pub fn matches(&self, source: &str) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Only(set) => set.contains(source),
        }
    }
}

impl Display for SourceFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFilter::All => write!(f, "all"),
            SourceFilter::Only(set) => {
                let list: Vec<&str> = set.iter().map(String::as_str).collect();
                write!(f, "{}", list.join(","))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(vec![], "AIS", true)]
    #[case(vec!["AIS"], "AIS", true)]
    #[case(vec!["AIS", "RADAR"], "RADAR", true)]
    #[case(vec!["AIS"], "RADAR", false)]
    fn test_source_filter(#[case] sel: Vec<&str>, #[case] src: &str, #[case] res: bool) {
        assert_eq!(res, SourceFilter::from_selection(sel).matches(src));
    }

    #[test]
    fn test_source_filter_display() {
        assert_eq!("all", SourceFilter::All.to_string());
        assert_eq!(
            "AIS,RADAR",
            SourceFilter::from_selection(["RADAR", "AIS"]).to_string()
        );
    }
}
