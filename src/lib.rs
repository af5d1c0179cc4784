#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[cfg(not(feature = "std"))]
mod std;

#[cfg(feature = "derive")]
use serde::Deserialize;

mod help;

use std::collections::HashMap;
use std::fmt;
use std::string::String;
use std::vec::Vec;

pub use crate::help::Output;
#[cfg(feature = "std")]
pub use crate::help::Stdout;

#[cfg(feature = "debug")]
use log::debug;

#[cfg(not(feature = "debug"))]
macro_rules! debug {
    ($($arg:tt)+) => {};
}

const HELP_NAME: &str = "-help";
const HELP_ALIAS: &str = "--help";

// program name + at least one argument
const MINIMAL_ARGS_COUNT: usize = 2;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum SchemaError {
    Empty,
    InvalidOption,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Empty => f.write_str("Empty supported options was passed."),
            SchemaError::InvalidOption => f.write_str("Invalid parser supported options was passed."),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SchemaError {}

#[derive(PartialEq, Clone, Debug)]
pub enum ParseError {
    UnknownArgument(String),
    MissingValue(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownArgument(arg) => write!(f, "Unknown argument: {}", arg),
            ParseError::MissingValue(arg) => write!(f, "Argument must have value. Argument name: {}", arg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[derive(PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "derive", derive(Deserialize))]
pub struct OptionSpec<'a> {
    // unique key (per Schema) to identify this option, matched as typed e.g -c
    pub name: &'a str,
    // second spelling we'll also match e.g --command
    #[cfg_attr(feature = "derive", serde(default, borrow))]
    pub alias: Option<&'a str>,
    // info about this option, shown in help
    #[cfg_attr(feature = "derive", serde(default))]
    pub description: &'a str,
    // whether the option has to be followed by a value
    #[cfg_attr(feature = "derive", serde(default))]
    pub requires_value: bool,
}

impl<'a> OptionSpec<'a> {
    // an empty alias is the same as no alias
    pub(crate) fn visible_alias(&self) -> Option<&'a str> {
        self.alias.filter(|a| !a.is_empty())
    }

    fn matches(&self, token: &str) -> bool {
        self.name == token || self.visible_alias() == Some(token)
    }
}

/// Options recognized by an [`ArgumentParser`] plus usage examples printed at the end of the help.
#[derive(PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "derive", derive(Deserialize))]
pub struct Schema<'a> {
    #[cfg_attr(feature = "derive", serde(borrow))]
    pub options: Vec<OptionSpec<'a>>,
    #[cfg_attr(feature = "derive", serde(default, borrow))]
    pub examples: Vec<&'a str>,
}

/// Matched options keyed by the exact token that was typed, `-c` and `--command` are separate keys.
/// Options given without a value map to an empty string.
pub type ParsedOptions = HashMap<String, String>;

pub trait IntoStr {
    fn into(&self) -> &str;
}

impl IntoStr for &str {
    fn into(&self) -> &str {
        self
    }
}

impl IntoStr for String {
    fn into(&self) -> &str {
        self.as_str()
    }
}

impl IntoStr for &String {
    fn into(&self) -> &str {
        self.as_str()
    }
}

// "-x" and "--xy" both qualify: anything dash-prefixed with at least one more character
fn is_key(arg: &str) -> bool {
    arg.starts_with('-') && arg.len() > 1
}

#[derive(Debug)]
pub struct ArgumentParser<'a> {
    schema: Schema<'a>,
}

impl<'a> ArgumentParser<'a> {
    pub fn new(schema: Schema<'a>) -> Result<Self, SchemaError> {
        if schema.options.is_empty() {
            debug!("rejecting schema without options");
            return Err(SchemaError::Empty);
        }
        if schema.options.iter().any(|o| o.name.is_empty()) {
            debug!("rejecting schema with unnamed option");
            return Err(SchemaError::InvalidOption);
        }
        Ok(ArgumentParser { schema })
    }

    pub fn schema(&self) -> &Schema<'a> {
        &self.schema
    }

    pub fn generate_help(&self) -> String {
        help::generate_help(&self.schema)
    }

    /// Parses `args` (program name first), printing help to stdout when no arguments are given or the
    /// only argument is `-help`/`--help`.
    #[cfg(feature = "std")]
    pub fn process_arguments<S: IntoStr, T: IntoIterator<Item = S>>(&self, args: T) -> Result<ParsedOptions, ParseError> {
        self.process_arguments_with(args, &mut Stdout)
    }

    /// Same as [`ArgumentParser::process_arguments`] but help is written to `out`.
    ///
    /// A lone `-help`/`--help` prints the help and is then parsed like any other option, so unless the
    /// schema registers it the call still fails with [`ParseError::UnknownArgument`].
    pub fn process_arguments_with<S, T, O>(&self, args: T, out: &mut O) -> Result<ParsedOptions, ParseError>
    where
        S: IntoStr,
        T: IntoIterator<Item = S>,
        O: Output + ?Sized,
    {
        let owned: Vec<S> = args.into_iter().collect();
        let args: Vec<&str> = owned.iter().map(IntoStr::into).collect();
        debug!("parsing args {:?}", args);
        if args.len() < MINIMAL_ARGS_COUNT {
            debug!("no arguments given, showing help");
            out.write_help(&self.generate_help());
            return Ok(ParsedOptions::new());
        }
        if args.len() == MINIMAL_ARGS_COUNT && (args[1] == HELP_NAME || args[1] == HELP_ALIAS) {
            debug!("help requested, showing help and carrying on");
            out.write_help(&self.generate_help());
        }

        let mut options = ParsedOptions::new();
        let mut args = args.into_iter().skip(1).peekable();
        while let Some(arg) = args.next() {
            if arg.is_empty() {
                continue;
            }
            if !is_key(arg) {
                debug!("ignoring stray value {}", arg);
                continue;
            }
            // consuming it here stops the value from being visited again
            let value = args.next_if(|next| !is_key(next));
            let opt = match self.find(arg) {
                Some(opt) => opt,
                None => {
                    debug!("no option matches {}", arg);
                    return Err(ParseError::UnknownArgument(String::from(arg)));
                }
            };
            if opt.requires_value && value.is_none() {
                debug!("{} is missing its value", arg);
                return Err(ParseError::MissingValue(String::from(arg)));
            }
            debug!("found option {} with value {:?}", arg, value);
            options.insert(String::from(arg), String::from(value.unwrap_or("")));
        }
        Ok(options)
    }

    // first match in schema order wins, aliases aren't checked for uniqueness
    fn find(&self, token: &str) -> Option<&OptionSpec<'a>> {
        self.schema.options.iter().find(|o| o.matches(token))
    }
}
