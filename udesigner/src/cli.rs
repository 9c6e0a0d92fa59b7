//! Command-line interface.

use crate::form::FormState;
use crate::shell::Shell;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use udesigner_core::{ArityPolicy, DeclarationKind, Toggles};

#[derive(Parser, Debug)]
#[command(
    name = "udesigner",
    version,
    about = "Generate Unreal USTRUCT, UENUM and UFUNCTION declarations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one declaration and print it
    Generate(GenerateArgs),
    /// Fill in the form interactively
    Form(OptionArgs),
}

/// Options shared by both commands.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OptionArgs {
    /// Reject mismatched field/type lists instead of dropping surplus entries
    #[arg(long)]
    pub strict: bool,

    /// Trim whitespace around each list entry
    #[arg(long)]
    pub trim: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Declaration name
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Property titles, separated with commas
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub fields: String,

    /// Property types, separated with commas (first is the return type for functions)
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub types: String,

    /// Declaration kind
    #[arg(short, long, value_enum, conflicts_with_all = ["is_enum", "is_function", "is_struct"])]
    pub kind: Option<KindArg>,

    /// Generate a UENUM (takes priority over --function and --struct)
    #[arg(long = "enum")]
    pub is_enum: bool,

    /// Generate a UFUNCTION (takes priority over --struct)
    #[arg(long = "function")]
    pub is_function: bool,

    /// Generate a USTRUCT
    #[arg(long = "struct")]
    pub is_struct: bool,

    /// Write the declaration to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub options: OptionArgs,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Struct,
    Enum,
    Function,
}

impl From<KindArg> for DeclarationKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Struct => Self::Struct,
            KindArg::Enum => Self::Enum,
            KindArg::Function => Self::Function,
        }
    }
}

impl OptionArgs {
    fn policy(self) -> ArityPolicy {
        if self.strict {
            ArityPolicy::Strict
        } else {
            ArityPolicy::Truncate
        }
    }

    fn form(self) -> FormState {
        let mut form = FormState::new();
        form.set_policy(self.policy());
        form.set_trim(self.trim);
        form
    }
}

impl GenerateArgs {
    fn toggles(&self) -> Toggles {
        Toggles {
            is_enum: self.is_enum,
            is_function: self.is_function,
            is_struct: self.is_struct,
        }
    }

    fn form(&self) -> FormState {
        let mut form = self.options.form();
        form.set_name(self.name.as_str());
        form.set_fields(self.fields.as_str());
        form.set_types(self.types.as_str());
        match self.kind {
            Some(kind) => form.select(kind.into()),
            None => form.select_toggles(self.toggles()),
        }
        form
    }
}

/// Runs a parsed command line.
///
/// # Errors
/// Returns an error if generation is rejected or output cannot be written.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => run_generate(&args),
        Commands::Form(options) => run_form(options),
    }
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let mut form = args.form();

    let Some(request) = form.request() else {
        tracing::warn!("no declaration kind selected; nothing generated");
        return Ok(());
    };

    if let Some(path) = &args.output {
        udesigner_codegen::write_to_file(&request, form.policy(), path)
            .with_context(|| format!("Failed to write declaration to {}", path.display()))?;
        return Ok(());
    }

    if let Some(text) = form
        .create()
        .with_context(|| format!("Failed to generate {} '{}'", request.kind, request.name))?
    {
        print!("{text}");
    }
    Ok(())
}

fn run_form(options: OptionArgs) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let shell = Shell::new(stdin.lock(), io::stdout().lock(), options.form());
    let shell = if interactive { shell } else { shell.without_prompt() };

    let form = shell.run().context("Form session failed")?;
    tracing::debug!(has_output = form.output().is_some(), "form session ended");
    Ok(())
}
