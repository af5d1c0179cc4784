use crate::{OptionSpec, Schema, String};

pub(crate) const HELP_HEADER: &str = "=============Usage=============";

/// Destination for rendered help text.
pub trait Output {
    fn write_help(&mut self, help: &str);
}

impl Output for String {
    fn write_help(&mut self, help: &str) {
        self.push_str(help);
    }
}

/// Writes help to the process standard output.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdout;

#[cfg(feature = "std")]
impl Output for Stdout {
    fn write_help(&mut self, help: &str) {
        print!("{}", help);
    }
}

/*
  Format:
     =============Usage=============
     ${name}  ${alias} - ${description}

     ${example}
*/
pub(crate) fn generate_help(schema: &Schema) -> String {
    let mut help = String::with_capacity(HELP_HEADER.len() + 1);
    help.push_str(HELP_HEADER);
    help.push('\n');
    help = schema.options.iter().fold(help, |mut out, opt| {
        push_option(&mut out, opt);
        out
    });
    if !schema.examples.is_empty() {
        help.push('\n');
        for example in &schema.examples {
            help.push_str(example);
            help.push('\n');
        }
    }
    help
}

fn push_option(out: &mut String, opt: &OptionSpec) {
    let alias = opt.visible_alias();
    let size = opt.name.len() + alias.map_or(0, |s| s.len() + 2) + opt.description.len() + 4;
    out.reserve(size);
    out.push_str(opt.name);
    if let Some(alias) = alias {
        out.push_str("  ");
        out.push_str(alias);
    }
    if !opt.description.is_empty() {
        out.push_str(" - ");
        out.push_str(opt.description);
    }
    out.push('\n');
}
