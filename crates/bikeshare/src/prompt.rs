use std::io::{BufRead, Write};
use std::str::FromStr;

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::formatting::separator;
use bikeshare_core::models::{
    City, DayFilter, FilterSelection, InvalidChoice, MonthFilter, ShowRawData,
};
use tracing::debug;

const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
const CITY_PROMPT: &str =
    "Please enter the city you want data for. Options are: Chicago(c), New York City(n) or Washington(w):";
const MONTH_PROMPT: &str =
    "Please enter the month you want data for. Options are: jan, feb, mar, apr, may, jun or all:";
const DAY_PROMPT: &str =
    "Please enter the day you want data for. Options are: mon, tue, wed, thu, fri, sat, sun or all:";
const RAW_DATA_PROMPT: &str =
    "Do you want to see 5 rows of raw data before the statistics are calculated? yes or no? ";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.";

// ── Prompter ──────────────────────────────────────────────────────────────────

/// Line-oriented question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer prompts go to; reporters share it.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask for city, month, day and the raw-data flag, in that order.
    ///
    /// Each question is repeated until the answer is valid.
    pub fn get_filters(&mut self) -> Result<FilterSelection> {
        writeln!(self.output, "{}", GREETING)?;

        let city: City = self.ask(CITY_PROMPT)?;
        let month: MonthFilter = self.ask(MONTH_PROMPT)?;
        let day: DayFilter = self.ask(DAY_PROMPT)?;
        let ShowRawData(show_raw) = self.ask(RAW_DATA_PROMPT)?;

        writeln!(self.output, "{}", separator())?;

        let selection = FilterSelection {
            city,
            month,
            day,
            show_raw,
        };
        debug!(?selection, "Filters collected");
        Ok(selection)
    }

    /// `true` only when the answer is `yes` (any case). End of input counts
    /// as "no".
    pub fn ask_restart(&mut self) -> Result<bool> {
        match self.read_answer(RESTART_PROMPT) {
            Ok(answer) => Ok(answer.to_lowercase() == "yes"),
            Err(BikeshareError::InputClosed) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Ask `question` until the answer parses as `T`.
    ///
    /// Non-empty invalid answers are echoed back with an error line; empty
    /// answers just repeat the question.
    pub fn ask<T>(&mut self, question: &str) -> Result<T>
    where
        T: FromStr<Err = InvalidChoice>,
    {
        loop {
            let answer = self.read_answer(question)?;
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(invalid) => {
                    debug!("Rejected answer {:?}", answer);
                    if !answer.is_empty() {
                        writeln!(self.output, "{}", invalid)?;
                    }
                }
            }
        }
    }

    /// Print `question`, then read one line without its line terminator.
    fn read_answer(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
