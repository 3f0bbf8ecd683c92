//! Interactive prompts. Input and output are injected so a whole session
//! can be scripted from a byte buffer.

use crate::errors::{AppError, AppResult};
use crate::models::{City, DayFilter, Filters, MonthFilter};
use crate::ui::messages::{info, rule};
use std::io::{BufRead, Write};

/// Texts of one interactive question.
pub struct Question {
    pub prompt: &'static str,
    pub retry: &'static str,
    pub guidance: &'static str,
}

pub const CITY_QUESTION: Question = Question {
    prompt: "Would you like to see data for Chicago, New york city or Washington? ",
    retry: "What is the name of city you'd like to know about? ",
    guidance: "Make sure you've chosen from: Chicago, New york city or Washington.",
};

pub const MONTH_QUESTION: Question = Question {
    prompt: "Which month? January - February - March - April - May - June or All to apply no filter. ",
    retry: "What is the month you'd like to know about? ",
    guidance: "Make sure you've chosen from: January, February, March, April, May, June or All to apply no filter.",
};

pub const DAY_QUESTION: Question = Question {
    prompt: "Which day? Monday - Tuesday - Wednesday - Thursday - Friday - Saturday - Sunday or All to apply no filter. ",
    retry: "What is the day you'd like to know about? ",
    guidance: "Make sure you've chosen from: Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday or All to apply no filter.",
};

pub const ROWS_QUESTION: &str = "Would you like to see the row data? Yes or No. ";
pub const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Per-question state: ask until an answer validates.
#[derive(Debug)]
enum PromptState<T> {
    AwaitingInput { retry: bool },
    Rejected,
    Validated(T),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and read one line. `None` once input is exhausted.
    pub fn read_answer(&mut self, question: &str) -> AppResult<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask `q` until `parse` accepts the answer. There is no retry limit;
    /// only the end of input stops the loop, with `AppError::InputClosed`.
    pub fn ask<T>(&mut self, q: &Question, parse: impl Fn(&str) -> Option<T>) -> AppResult<T> {
        let mut state = PromptState::AwaitingInput { retry: false };

        loop {
            state = match state {
                PromptState::AwaitingInput { retry } => {
                    let text = if retry { q.retry } else { q.prompt };
                    let answer = self.read_answer(text)?.ok_or(AppError::InputClosed)?;
                    match parse(&answer) {
                        Some(v) => PromptState::Validated(v),
                        None => {
                            log::debug!("rejected answer {answer:?}");
                            PromptState::Rejected
                        }
                    }
                }
                PromptState::Rejected => {
                    writeln!(self.output, "{}", q.guidance)?;
                    PromptState::AwaitingInput { retry: true }
                }
                PromptState::Validated(v) => return Ok(v),
            };
        }
    }

    /// True only for a "yes" answer (any case). End of input counts as no.
    pub fn confirm(&mut self, question: &str) -> AppResult<bool> {
        Ok(self
            .read_answer(question)?
            .is_some_and(|a| a.eq_ignore_ascii_case("yes")))
    }
}

/// Collect the city, month and day selection for one session pass.
pub fn get_filters<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> AppResult<Filters> {
    info(p.output(), "Hello! Let's explore some US bike share data!")?;

    let city = p.ask(&CITY_QUESTION, |s| City::from_key(s).ok())?;
    let month = p.ask(&MONTH_QUESTION, MonthFilter::from_input)?;
    let day = p.ask(&DAY_QUESTION, DayFilter::from_input)?;

    rule(p.output())?;
    Ok(Filters::new(city, month, day))
}
