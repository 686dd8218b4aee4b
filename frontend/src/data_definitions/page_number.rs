//! Validated page number for list-view query parameters.

use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use common::list_const::FIRST_PAGE;
use serde::{Deserialize, Serialize};

/// A 1-based page number as carried in the `page` query parameter.
///
/// Parsing never fails: anything that is not a positive integer resolves
/// to the first page, so a mangled URL still renders the list instead of
/// falling through to a router error.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u64);

impl PageNumber {
    pub fn new(page: u64) -> Self {
        PageNumber(page.max(FIRST_PAGE))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_first(self) -> bool {
        self.0 == FIRST_PAGE
    }

    pub fn previous(self) -> Self {
        PageNumber::new(self.0.saturating_sub(1))
    }

    pub fn next(self) -> Self {
        PageNumber(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        PageNumber(FIRST_PAGE)
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageNumber {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let page = s
            .parse::<u64>()
            .ok()
            .filter(|page| *page >= FIRST_PAGE)
            .unwrap_or(FIRST_PAGE);
        Ok(PageNumber(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> PageNumber {
        s.parse().expect("parsing is infallible")
    }

    #[test]
    fn default_is_first_page() {
        assert_eq!(PageNumber::default().get(), 1);
        assert!(PageNumber::default().is_first());
    }

    #[test]
    fn numeric_input_parses() {
        assert_eq!(parse("1").get(), 1);
        assert_eq!(parse("42").get(), 42);
    }

    #[test]
    fn malformed_input_falls_back_to_first_page() {
        assert_eq!(parse("").get(), 1);
        assert_eq!(parse("abc").get(), 1);
        assert_eq!(parse("-2").get(), 1);
        assert_eq!(parse("1.5").get(), 1);
    }

    #[test]
    fn zero_is_clamped_to_first_page() {
        assert_eq!(parse("0").get(), 1);
        assert_eq!(PageNumber::new(0).get(), 1);
    }

    #[test]
    fn previous_saturates_at_first_page() {
        assert_eq!(PageNumber::new(3).previous().get(), 2);
        assert_eq!(PageNumber::default().previous().get(), 1);
    }

    #[test]
    fn next_saturates_at_the_largest_page() {
        assert_eq!(PageNumber::new(3).next().get(), 4);
        let last = PageNumber::new(u64::MAX);
        assert_eq!(last.next(), last);
        assert!(last.next().get() >= 1);
    }

    #[test]
    fn display_round_trips() {
        let page = PageNumber::new(7);
        assert_eq!(page.to_string(), "7");
        assert_eq!(parse(&page.to_string()), page);
    }
}
