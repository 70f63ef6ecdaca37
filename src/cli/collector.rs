//! Selection collectors
//!
//! A collector hands the pipeline a validated [`Selection`], or `None` when
//! there is nothing more to analyze. Input validation lives here; the core
//! never sees raw user input.
//!
//! - [`ArgsCollector`] yields the selection given on the command line once.
//! - [`PromptCollector`] shows numbered menus and re-asks a question until the
//!   answer is a number in range.

use crate::types::selection::{ALL, SELECTABLE_DAYS, SELECTABLE_MONTHS};
use crate::types::{month_name, weekday_name, DayFilter, MonthFilter, Result, Selection};
use std::io::{BufRead, Write};

/// Source of analysis selections
pub trait SelectionCollector {
    /// Next validated selection, or `None` when input is exhausted
    fn collect(&mut self) -> Result<Option<Selection>>;
}

/// Outcome of reading one menu answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAnswer {
    /// A number within the menu range
    Choice(usize),
    /// Unusable answer; the message tells the user what to type
    Retry(String),
}

/// Validate a menu answer against the inclusive range `low..=high`
pub fn parse_menu_answer(line: &str, low: usize, high: usize) -> MenuAnswer {
    match line.trim().parse::<usize>() {
        Ok(choice) if (low..=high).contains(&choice) => MenuAnswer::Choice(choice),
        _ => MenuAnswer::Retry(format!("Please type a number between {}-{}.", low, high)),
    }
}

/// Whether an answer means "yes" (`y` or `yes`, any case)
pub fn is_affirmative(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Yields a single pre-validated selection
#[derive(Debug, Clone)]
pub struct ArgsCollector {
    selection: Option<Selection>,
}

impl ArgsCollector {
    pub fn new(selection: Selection) -> Self {
        ArgsCollector {
            selection: Some(selection),
        }
    }
}

impl SelectionCollector for ArgsCollector {
    fn collect(&mut self) -> Result<Option<Selection>> {
        Ok(self.selection.take())
    }
}

/// Menu-driven collector over any line-based input
///
/// Cities are numbered from 1; months and days are numbered from 0, where
/// 0 selects "all".
pub struct PromptCollector<R, W> {
    input: R,
    output: W,
    cities: Vec<String>,
}

impl<R: BufRead, W: Write> PromptCollector<R, W> {
    pub fn new(input: R, output: W, cities: Vec<String>) -> Self {
        PromptCollector {
            input,
            output,
            cities,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Show a menu and read answers until one is in range
    fn ask(&mut self, question: &str, options: &[&str], first: usize) -> Result<Option<usize>> {
        for (offset, option) in options.iter().enumerate() {
            writeln!(self.output, "{}> {}", first + offset, option)?;
        }
        let last = first + options.len().saturating_sub(1);

        loop {
            write!(self.output, "{} ", question)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_menu_answer(&line, first, last) {
                MenuAnswer::Choice(choice) => {
                    let picked = options[choice - first];
                    writeln!(self.output, "Thank you. You requested: {}\n", picked)?;
                    return Ok(Some(choice - first));
                }
                MenuAnswer::Retry(message) => writeln!(self.output, "{}\n", message)?,
            }
        }
    }

    /// Ask a yes/no question; end of input counts as "no"
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .map(|line| is_affirmative(&line))
            .unwrap_or(false))
    }

    /// Writer the prompts go to
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

impl<R: BufRead, W: Write> SelectionCollector for PromptCollector<R, W> {
    fn collect(&mut self) -> Result<Option<Selection>> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!\n")?;
        if self.cities.is_empty() {
            return Ok(None);
        }

        let cities = self.cities.clone();
        let city_options: Vec<&str> = cities.iter().map(String::as_str).collect();
        let Some(city) = self.ask("Which city to analyze?", &city_options, 1)? else {
            return Ok(None);
        };

        let month_options: Vec<&str> = std::iter::once(ALL)
            .chain(SELECTABLE_MONTHS.iter().map(|m| month_name(*m)))
            .collect();
        let Some(month) = self.ask("Which month to analyze?", &month_options, 0)? else {
            return Ok(None);
        };

        let day_options: Vec<&str> = std::iter::once(ALL)
            .chain(SELECTABLE_DAYS.iter().map(|d| weekday_name(*d)))
            .collect();
        let Some(day) = self.ask("Which day to analyze?", &day_options, 0)? else {
            return Ok(None);
        };

        let month = match month {
            0 => MonthFilter::All,
            n => MonthFilter::Only(SELECTABLE_MONTHS[n - 1]),
        };
        let day = match day {
            0 => DayFilter::All,
            n => DayFilter::Only(SELECTABLE_DAYS[n - 1]),
        };

        Ok(Some(Selection::new(cities[city].clone(), month, day)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Month, Weekday};
    use rstest::rstest;
    use std::io::Cursor;

    fn cities() -> Vec<String> {
        vec![
            "Chicago".to_string(),
            "New York City".to_string(),
            "Washington".to_string(),
        ]
    }

    fn collector(input: &str) -> PromptCollector<Cursor<Vec<u8>>, Vec<u8>> {
        PromptCollector::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), cities())
    }

    #[rstest]
    #[case("2", 1, 3, MenuAnswer::Choice(2))]
    #[case(" 3 \n", 1, 3, MenuAnswer::Choice(3))]
    #[case("0", 0, 6, MenuAnswer::Choice(0))]
    #[case("4", 1, 3, MenuAnswer::Retry("Please type a number between 1-3.".to_string()))]
    #[case("0", 1, 3, MenuAnswer::Retry("Please type a number between 1-3.".to_string()))]
    #[case("-1", 0, 7, MenuAnswer::Retry("Please type a number between 0-7.".to_string()))]
    #[case("June", 0, 6, MenuAnswer::Retry("Please type a number between 0-6.".to_string()))]
    fn test_parse_menu_answer(
        #[case] line: &str,
        #[case] low: usize,
        #[case] high: usize,
        #[case] expected: MenuAnswer,
    ) {
        assert_eq!(parse_menu_answer(line, low, high), expected);
    }

    #[rstest]
    #[case("y", true)]
    #[case("YES\n", true)]
    #[case("Yes", true)]
    #[case("n", false)]
    #[case("", false)]
    #[case("yeah", false)]
    fn test_is_affirmative(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_affirmative(line), expected);
    }

    #[test]
    fn test_prompt_collects_selection() {
        let mut collector = collector("1\n3\n5\n");

        let selection = collector.collect().unwrap().unwrap();

        assert_eq!(selection.city, "Chicago");
        assert_eq!(selection.month, MonthFilter::Only(Month::March));
        assert_eq!(selection.day, DayFilter::Only(Weekday::Fri));
    }

    #[test]
    fn test_prompt_zero_means_all() {
        let mut collector = collector("3\n0\n0\n");

        let selection = collector.collect().unwrap().unwrap();

        assert_eq!(selection.city, "Washington");
        assert_eq!(selection.month, MonthFilter::All);
        assert_eq!(selection.day, DayFilter::All);
    }

    #[test]
    fn test_prompt_retries_until_valid() {
        let mut collector = collector("abc\n9\n2\n7\n6\n8\n7\n");

        let selection = collector.collect().unwrap().unwrap();

        assert_eq!(selection.city, "New York City");
        assert_eq!(selection.month, MonthFilter::Only(Month::June));
        assert_eq!(selection.day, DayFilter::Only(Weekday::Sun));

        let transcript = String::from_utf8(collector.output().clone()).unwrap();
        assert_eq!(transcript.matches("Please type a number between 1-3.").count(), 2);
        assert_eq!(transcript.matches("Please type a number between 0-6.").count(), 1);
        assert_eq!(transcript.matches("Please type a number between 0-7.").count(), 1);
    }

    #[test]
    fn test_prompt_end_of_input() {
        let mut collector = collector("1\n");
        assert_eq!(collector.collect().unwrap(), None);
    }

    #[test]
    fn test_confirm() {
        let mut collector = collector("y\nno\n");
        assert!(collector.confirm("More?").unwrap());
        assert!(!collector.confirm("More?").unwrap());
        assert!(!collector.confirm("More?").unwrap());
    }

    #[test]
    fn test_args_collector_yields_once() {
        let selection = Selection::parse("Chicago", "all", "Monday").unwrap();
        let mut collector = ArgsCollector::new(selection.clone());

        assert_eq!(collector.collect().unwrap(), Some(selection));
        assert_eq!(collector.collect().unwrap(), None);
    }
}
