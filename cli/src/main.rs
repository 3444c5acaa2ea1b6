use bumpalo::Bump;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tally::render_error_to;
use tally_core::{
    Error,
    api::{EvaluatorOptions, ParseOptions},
    evaluator::Evaluator,
    parser,
};

/// Tally - evaluate a single arithmetic expression
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Evaluate an arithmetic expression", long_about = None)]
struct Args {
    /// Print the parsed AST (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Render errors as full reports instead of a caret line
    #[arg(long)]
    pretty: bool,

    /// Maximum nesting depth through `(` and `^`
    #[arg(long, default_value_t = ParseOptions::default().max_depth)]
    max_depth: usize,

    /// Expression to evaluate (if not provided, reads one line from stdin)
    #[arg(allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn report(error: &Error, input: &str, pretty: bool, err: &mut dyn Write) -> io::Result<()> {
    if pretty {
        render_error_to(error, input, err)
    } else {
        writeln!(err, "{}", error.render_caret(input))
    }
}

fn interpret_input(
    input: &str,
    args: &Args,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<bool> {
    let arena = Bump::new();

    // Parse
    let options = ParseOptions {
        max_depth: args.max_depth,
    };
    let ast = match parser::parse_with_options(&arena, input, options) {
        Ok(ast) => ast,
        Err(e) => {
            report(&e, input, args.pretty, err)?;
            return Ok(false);
        }
    };

    if args.debug_parse {
        writeln!(out, "=== Parsed AST ===")?;
        writeln!(out, "{}", ast.expr)?;
    }

    // Evaluate
    let mut evaluator = Evaluator::new(EvaluatorOptions {
        max_depth: args.max_depth,
    });
    match evaluator.eval(ast.expr) {
        Ok(value) => {
            writeln!(out, "ans = {value}")?;
            Ok(true)
        }
        Err(e) => {
            report(&e, input, args.pretty, err)?;
            Ok(false)
        }
    }
}

/// Read one line, prompting only when a person is typing.
fn read_input(stdin: &mut dyn BufRead, out: &mut dyn Write, prompt: bool) -> io::Result<String> {
    if prompt {
        write!(out, "> ")?;
        out.flush()?;
    }

    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Where the expression comes from, decided by the positional words.
#[derive(Debug, PartialEq)]
enum Invocation {
    ReadLine,
    Expression(String),
}

fn invocation(words: &[String]) -> Result<Invocation, Error> {
    match words {
        [] => Ok(Invocation::ReadLine),
        [expression] => Ok(Invocation::Expression(expression.clone())),
        _ => Err(Error::bad_arguments()),
    }
}

/// Run one invocation; `Ok(false)` means the exit status should be failure.
fn run(
    args: &Args,
    stdin: &mut dyn BufRead,
    prompt: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<bool> {
    let input = match invocation(&args.expression) {
        Ok(Invocation::ReadLine) => read_input(stdin, out, prompt)?,
        Ok(Invocation::Expression(expression)) => expression,
        Err(e) => {
            report(&e, "", args.pretty, err)?;
            return Ok(false);
        }
    };
    tracing::debug!(input = %input, "read expression");

    interpret_input(&input, args, out, err)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use TALLY_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("TALLY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let is_interactive = atty::is(atty::Stream::Stdin);
    let succeeded = run(
        &args,
        &mut io::stdin().lock(),
        is_interactive,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .into_diagnostic()?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
