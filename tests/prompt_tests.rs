mod common;
use bikeshare::cli::prompt::{CITY_QUESTION, MONTH_QUESTION, Prompter, get_filters};
use bikeshare::errors::AppError;
use bikeshare::models::{City, DayFilter, MonthFilter};
use chrono::Weekday;
use common::strip_ansi;

fn output_of<R: std::io::BufRead>(p: Prompter<R, Vec<u8>>) -> String {
    strip_ansi(&String::from_utf8(p.into_output()).expect("utf8"))
}

#[test]
fn test_filters_case_insensitive() {
    let mut p = Prompter::new("  New York CITY \nJune\nSUNDAY\n".as_bytes(), Vec::new());
    let filters = get_filters(&mut p).expect("filters");

    assert_eq!(filters.city, City::NewYorkCity);
    assert_eq!(filters.month, MonthFilter::Month(6));
    assert_eq!(filters.day, DayFilter::Day(Weekday::Sun));

    let out = output_of(p);
    assert!(out.contains("Hello! Let's explore some US bike share data!"));
    assert!(out.trim_end().ends_with(&"-".repeat(40)));
}

#[test]
fn test_rejected_input_is_retried_with_guidance() {
    let script = "boston\n\nparis\nwashington\njuly\nALL\nfunday\nall\n";
    let mut p = Prompter::new(script.as_bytes(), Vec::new());
    let filters = get_filters(&mut p).expect("filters");

    assert_eq!(filters.city, City::Washington);
    assert_eq!(filters.month, MonthFilter::All);
    assert_eq!(filters.day, DayFilter::All);

    let out = output_of(p);
    assert_eq!(out.matches(CITY_QUESTION.guidance).count(), 3);
    assert_eq!(out.matches(CITY_QUESTION.retry).count(), 3);
    assert_eq!(out.matches(CITY_QUESTION.prompt).count(), 1);
    assert_eq!(out.matches(MONTH_QUESTION.guidance).count(), 1);
    assert!(out.contains("What is the day you'd like to know about?"));
}

#[test]
fn test_closed_input_stops_asking() {
    let mut p = Prompter::new("chicago\nsomeday\n".as_bytes(), Vec::new());
    let err = get_filters(&mut p).unwrap_err();
    assert!(matches!(err, AppError::InputClosed));
}

#[test]
fn test_confirm_accepts_only_yes() {
    let mut p = Prompter::new("YES\ny\nno\n yes \n".as_bytes(), Vec::new());

    assert!(p.confirm("? ").expect("answer"));
    assert!(!p.confirm("? ").expect("answer"));
    assert!(!p.confirm("? ").expect("answer"));
    assert!(p.confirm("? ").expect("answer"));
    // end of input
    assert!(!p.confirm("? ").expect("answer"));
}

#[test]
fn test_enumerations_parse() {
    assert_eq!(MonthFilter::from_input("March"), Some(MonthFilter::Month(3)));
    assert_eq!(MonthFilter::from_input("july"), None);
    assert_eq!(MonthFilter::Month(2).name(), "february");
    assert_eq!(DayFilter::from_input("Wednesday"), Some(DayFilter::Day(Weekday::Wed)));
    assert_eq!(DayFilter::Day(Weekday::Sun).ordinal(), Some(7));
    assert_eq!(DayFilter::All.ordinal(), None);
    assert!(matches!(City::from_key("Miami"), Err(AppError::UnknownSource(_))));
    assert_eq!(City::from_key("WASHINGTON").expect("city").file_name(), "washington.csv");
}
