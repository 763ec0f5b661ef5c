use std::{
    env, fs,
    io::{self, Read},
    process,
};

use lumen::{
    FrontendError, ParseOutcome,
    ast::{dump_tree, humanize},
    diagnostics::{Diagnostic, FailFast},
    parse_batch, parse_source,
    syntax::{SourceFile, tokenize},
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Format,
    Tree,
    Tokens,
}

fn main() {
    init_tracing();

    let mut args: Vec<String> = env::args().skip(1).collect();
    if args
        .iter()
        .any(|arg| arg == "-h" || arg == "--help" || arg == "help")
    {
        print_help();
        return;
    }

    let json = take_flag(&mut args, "--json");
    let collect = take_flag(&mut args, "--collect");
    let Some(output) = extract_output(&mut args) else {
        process::exit(2);
    };
    if let Some(unknown) = args.iter().find(|arg| arg.starts_with("--")) {
        eprintln!("Error: unknown flag `{unknown}`.");
        print_help();
        process::exit(2);
    }

    let sources = match load_sources(&args) {
        Ok(sources) => sources,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let ok = match output {
        Output::Tokens => print_tokens(&sources, json),
        Output::Format | Output::Tree => {
            let outcomes = if collect {
                parse_batch(&sources)
            } else {
                sources
                    .iter()
                    .map(|source| ParseOutcome {
                        source: source.clone(),
                        result: parse_source(source, FailFast),
                        diagnostics: Vec::new(),
                    })
                    .collect()
            };
            print_outcomes(&outcomes, output, json)
        }
    };

    if !ok {
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lumen=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let present = args.iter().any(|arg| arg == flag);
    if present {
        args.retain(|arg| arg != flag);
    }
    present
}

fn extract_output(args: &mut Vec<String>) -> Option<Output> {
    let mut output = Output::Format;
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--output" {
            if i + 1 >= args.len() {
                eprintln!("Usage: lumen --output <format|tree|tokens> [file ...]");
                return None;
            }
            let value = args.remove(i + 1);
            args.remove(i);
            output = match value.as_str() {
                "format" => Output::Format,
                "tree" => Output::Tree,
                "tokens" => Output::Tokens,
                other => {
                    eprintln!("Error: unknown output `{other}`; expected format, tree or tokens.");
                    return None;
                }
            };
            continue;
        }
        i += 1;
    }
    Some(output)
}

fn load_sources(paths: &[String]) -> io::Result<Vec<SourceFile>> {
    if paths.is_empty() {
        let mut contents = String::new();
        io::stdin().read_to_string(&mut contents)?;
        return Ok(vec![SourceFile::named(contents, "<stdin>")]);
    }
    paths
        .iter()
        .map(|path| {
            fs::read_to_string(path)
                .map(|contents| SourceFile::named(contents, path.as_str()))
                .map_err(|err| io::Error::new(err.kind(), format!("{path}: {err}")))
        })
        .collect()
}

fn print_tokens(sources: &[SourceFile], json: bool) -> bool {
    let mut ok = true;
    for source in sources {
        match tokenize(source) {
            Ok(tokens) if json => match serde_json::to_string_pretty(&tokens) {
                Ok(text) => println!("{text}"),
                Err(err) => {
                    eprintln!("Error: could not serialize tokens: {err}");
                    ok = false;
                }
            },
            Ok(tokens) => {
                for token in &tokens {
                    println!("{token}");
                }
            }
            Err(err) => {
                eprintln!("{}: {err}", source.url().unwrap_or("<unknown>"));
                ok = false;
            }
        }
    }
    ok
}

fn print_outcomes(outcomes: &[ParseOutcome], output: Output, json: bool) -> bool {
    let mut ok = true;
    for outcome in outcomes {
        for diagnostic in &outcome.diagnostics {
            print_diagnostic(diagnostic, json);
            ok = false;
        }
        match &outcome.result {
            Ok(root) => {
                let text = match output {
                    Output::Tree => dump_tree(root),
                    _ => humanize(root),
                };
                println!("{text}");
            }
            Err(FrontendError::Lex(err)) => {
                eprintln!("{}: {err}", outcome.source.url().unwrap_or("<unknown>"));
                ok = false;
            }
            Err(FrontendError::Parse(err)) => {
                print_diagnostic(err.diagnostic(), json);
                ok = false;
            }
        }
    }
    ok
}

fn print_diagnostic(diagnostic: &Diagnostic, json: bool) {
    if !json {
        eprintln!("{}\n", diagnostic.render());
        return;
    }
    match serde_json::to_string(&diagnostic.to_record()) {
        Ok(line) => eprintln!("{line}"),
        Err(err) => eprintln!("Error: could not serialize diagnostic: {err}"),
    }
}

fn print_help() {
    println!(
        "\
Lumen front end

Usage:
  lumen [flags] [file ...]

Reads standard input when no file is given.

Flags:
  --output <mode>    format (default): re-render the parsed source
                     tree: dump the syntax tree
                     tokens: list the lexed tokens
  --json             Print tokens and diagnostics as JSON
  --collect          Keep parsing after recoverable errors and report them all
  -h, --help         Show this help

Environment:
  RUST_LOG           Log filter (default: lumen=warn)"
    );
}
