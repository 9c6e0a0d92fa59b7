//! Interactive line-based form.
//!
//! Each input line is one command. `name`, `fields` and `types` take the
//! rest of the line verbatim; `create` generates from the current state.

use crate::form::FormState;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use udesigner_core::{ArityPolicy, DeclarationKind};

const PROMPT: &str = "udesigner> ";

const HELP: &str = "\
commands:
  name <text>              set the declaration name
  fields <a,b,...>         set the property titles
  types <t1,t2,...>        set the property types
  kind <struct|enum|function>
  struct | enum | function select a declaration kind
  clear                    clear the selection
  trim on|off              trim whitespace around list entries
  strict on|off            reject mismatched field/type lists
  create                   generate the declaration
  show                     print the current inputs
  help                     print this message
  quit                     exit
";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the declaration name.
    Name(String),
    /// Set the field list text.
    Fields(String),
    /// Set the type list text.
    Types(String),
    /// Select a declaration kind.
    Select(DeclarationKind),
    /// Clear the selection.
    Clear,
    /// Toggle whitespace trimming.
    Trim(bool),
    /// Toggle strict arity checking.
    Strict(bool),
    /// Generate from the current inputs.
    Create,
    /// Print the current inputs.
    Show,
    /// Print usage.
    Help,
    /// End the session.
    Quit,
}

/// Error returned for an unparseable command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command '{0}' (try 'help')")]
pub struct UnknownCommand(pub String);

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim() {
        "on" | "true" | "yes" => Some(true),
        "off" | "false" | "no" => Some(false),
        _ => None,
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };
        let unknown = || UnknownCommand(line.trim().to_owned());

        match word {
            "name" => Ok(Self::Name(rest.to_owned())),
            "fields" => Ok(Self::Fields(rest.to_owned())),
            "types" => Ok(Self::Types(rest.to_owned())),
            "kind" => rest.parse().map(Self::Select).map_err(|_| unknown()),
            "clear" => Ok(Self::Clear),
            "trim" => parse_switch(rest).map(Self::Trim).ok_or_else(unknown),
            "strict" => parse_switch(rest).map(Self::Strict).ok_or_else(unknown),
            "create" => Ok(Self::Create),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => other.parse().map(Self::Select).map_err(|_| unknown()),
        }
    }
}

/// Interactive form reading commands from `R` and writing to `W`.
pub struct Shell<R, W> {
    input: R,
    output: W,
    form: FormState,
    prompt: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over the given form.
    pub fn new(input: R, output: W, form: FormState) -> Self {
        Self {
            input,
            output,
            form,
            prompt: true,
        }
    }

    /// Disables the prompt, e.g. when input is piped.
    #[must_use]
    pub fn without_prompt(mut self) -> Self {
        self.prompt = false;
        self
    }

    /// Returns the form state.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Runs until `quit` or end of input and returns the final form state.
    ///
    /// # Errors
    /// Returns an IO error if reading input or writing output fails.
    pub fn run(mut self) -> io::Result<FormState> {
        writeln!(self.output, "UDESIGNER")?;
        let mut line = String::new();

        loop {
            if self.prompt {
                write!(self.output, "{PROMPT}")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let text = line.trim_end_matches(['\r', '\n']);
            if text.trim().is_empty() {
                continue;
            }

            match text.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(err) => writeln!(self.output, "error: {err}")?,
            }
        }

        self.output.flush()?;
        Ok(self.form)
    }

    /// Applies one command to the form.
    ///
    /// # Errors
    /// Returns an IO error if writing output fails.
    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        tracing::trace!(?command, "shell command");

        match command {
            Command::Name(name) => self.form.set_name(name),
            Command::Fields(fields) => self.form.set_fields(fields),
            Command::Types(types) => self.form.set_types(types),
            Command::Select(kind) => self.form.select(kind),
            Command::Clear => self.form.clear_selection(),
            Command::Trim(on) => self.form.set_trim(on),
            Command::Strict(on) => self.form.set_policy(if on {
                ArityPolicy::Strict
            } else {
                ArityPolicy::Truncate
            }),
            Command::Create => match self.form.create() {
                Ok(Some(text)) => write!(self.output, "{text}")?,
                Ok(None) => writeln!(self.output, "no declaration kind selected")?,
                Err(err) => writeln!(self.output, "error: {err}")?,
            },
            Command::Show => self.show()?,
            Command::Help => write!(self.output, "{HELP}")?,
            Command::Quit => {}
        }

        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        let kind = self
            .form
            .kind()
            .map_or_else(|| "none".to_owned(), |kind| kind.to_string());
        writeln!(self.output, "Name> {}", self.form.name())?;
        writeln!(self.output, "Property Titles> {}", self.form.fields())?;
        writeln!(self.output, "Property Types> {}", self.form.types())?;
        writeln!(self.output, "Kind> {kind}")?;
        writeln!(
            self.output,
            "Options> trim={} strict={}",
            self.form.trim(),
            self.form.policy() == ArityPolicy::Strict
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (String, FormState) {
        let mut out = Vec::new();
        let form = Shell::new(script.as_bytes(), &mut out, FormState::new())
            .without_prompt()
            .run()
            .expect("shell failed");
        (String::from_utf8(out).expect("non-utf8 output"), form)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("name FStats".parse::<Command>(), Ok(Command::Name("FStats".into())));
        assert_eq!("fields a, b".parse::<Command>(), Ok(Command::Fields("a, b".into())));
        assert_eq!("kind enum".parse::<Command>(), Ok(Command::Select(DeclarationKind::Enum)));
        assert_eq!("UFUNCTION".parse::<Command>(), Ok(Command::Select(DeclarationKind::Function)));
        assert_eq!("strict on".parse::<Command>(), Ok(Command::Strict(true)));
        assert_eq!("name".parse::<Command>(), Ok(Command::Name(String::new())));
        assert!("trim maybe".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_leading_and_tab_whitespace() {
        assert_eq!(" name X".parse::<Command>(), Ok(Command::Name("X".into())));
        assert_eq!("name\tX".parse::<Command>(), Ok(Command::Name("X".into())));
        assert_eq!("\tcreate ".parse::<Command>(), Ok(Command::Create));
        assert_eq!("  kind\tstruct".parse::<Command>(), Ok(Command::Select(DeclarationKind::Struct)));
        assert!("frobnicate".parse::<Command>().is_err());
    }

    #[test]
    fn test_shell_generates_struct() {
        let (out, form) = run_script("name FStats\nfields Health\ntypes int32\nstruct\ncreate\n");
        assert!(out.starts_with("UDESIGNER\n"));
        assert!(out.contains("struct FStats\n"));
        assert!(out.contains("\tint32 Health;\n"));
        assert!(form.output().is_some());
    }

    #[test]
    fn test_shell_create_without_kind() {
        let (out, form) = run_script("name X\ncreate\n");
        assert!(out.contains("no declaration kind selected"));
        assert_eq!(form.output(), None);
    }

    #[test]
    fn test_shell_strict_reports_mismatch() {
        let (out, _) = run_script("name S\nfields a,b\ntypes int32\nstrict on\nstruct\ncreate\n");
        assert!(out.contains("error: request error: arity mismatch"));
    }

    #[test]
    fn test_shell_unknown_command_continues() {
        let (out, _) = run_script("bogus\nname E\nfields A\nenum\ncreate\nquit\ncreate\n");
        assert!(out.contains("error: unknown command 'bogus'"));
        assert_eq!(out.matches("UENUM(BlueprintType)").count(), 1);
    }

    #[test]
    fn test_shell_show() {
        let (out, _) = run_script("name N\nfunction\nshow\n");
        assert!(out.contains("Name> N\n"));
        assert!(out.contains("Kind> UFUNCTION\n"));
        assert!(out.contains("Options> trim=false strict=false\n"));
    }
}
