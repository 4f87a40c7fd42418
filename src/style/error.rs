use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    EmptyBreakpointName,
    DuplicateBreakpoint(String),
    InvalidWidthRange {
        breakpoint_name: String,
        min_width: u32,
        max_width: u32,
    },
    InvalidWidth(String),
    UnknownBreakpoint {
        selector: String,
        breakpoint_name: String,
    },
    EmptySelector,
    EmptyPropertyName {
        selector: String,
    },
    Syntax(String),
}

impl Error for ConfigurationError {}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigurationError::*;

        match self {
            EmptyBreakpointName => write!(f, "Breakpoint names must not be empty."),
            DuplicateBreakpoint(breakpoint_name) => write!(
                f,
                "Breakpoint \"{}\" is already registered.",
                breakpoint_name
            ),
            InvalidWidthRange {
                breakpoint_name,
                min_width,
                max_width,
            } => write!(
                f,
                "Breakpoint \"{}\" has an empty range ({}px is larger than {}px).",
                breakpoint_name, min_width, max_width
            ),
            InvalidWidth(width) => write!(f, "\"{}\" is not a valid width.", width),
            UnknownBreakpoint {
                selector,
                breakpoint_name,
            } => write!(
                f,
                "Rule for {} references unknown breakpoint \"{}\".",
                selector, breakpoint_name
            ),
            EmptySelector => write!(f, "Style rules need a non-empty selector."),
            EmptyPropertyName { selector } => {
                write!(f, "Rule for {} declares a property without a name.", selector)
            }
            Syntax(message) => write!(f, "Malformed stylesheet:\n{}", message),
        }
    }
}
