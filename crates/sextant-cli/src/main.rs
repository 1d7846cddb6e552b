//! Sextant CLI

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::Report;
use sextant_algebra::{normalize, Term};
use sextant_ast::Expr;
use sextant_types::{infer, TypeEnv};

#[derive(Parser)]
#[command(name = "sextant")]
#[command(author = "Katie the Clawdius Prime")]
#[command(version = "0.1.0")]
#[command(about = "Type inference and algebraic simplification for a small expression language")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Infer types for the demonstration expressions
    Infer {
        /// Print the built-in signatures first
        #[arg(long)]
        verbose: bool,
    },
    /// Normalize the demonstration algebraic terms
    Simplify,
}

fn main() -> ExitCode {
    // Install miette's fancy error handler for prettier diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Infer { verbose } => cmd_infer(verbose),
        Command::Simplify => cmd_simplify(),
    }
}

fn cmd_infer(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env = TypeEnv::with_builtins();

    if verbose {
        println!("Built-ins:");
        for name in ["pair", "zero", "succ", "pred", "times"] {
            if let Some(scheme) = env.lookup(name) {
                println!("  {} : {}", name, scheme);
            }
        }
        println!();
    }

    for expr in samples() {
        match infer(&expr, &env) {
            Ok(ty) => println!("{} : {}", expr, ty),
            Err(error) => {
                println!("{} : no type", expr);
                // Use miette's Report for pretty error display
                let report = Report::msg(error.to_string());
                eprintln!("{:?}", report);
            }
        }
    }

    Ok(())
}

fn cmd_simplify() -> Result<(), Box<dyn std::error::Error>> {
    for term in algebra_samples() {
        let normalized = normalize(term.clone());
        println!("{}", term);
        println!("  => {}", normalized);
    }
    Ok(())
}

/// The demonstration expressions: classic successes first, then the
/// classic failures.
fn samples() -> Vec<Expr> {
    vec![
        // letrec fact = ... in (fact 5)
        Expr::letrec_in(
            Expr::binding(
                "fact",
                Expr::lambda(
                    "n",
                    Expr::cond(
                        Expr::apply(Expr::name("zero"), Expr::name("n")),
                        Expr::int(1),
                        Expr::apply(
                            Expr::apply(Expr::name("times"), Expr::name("n")),
                            Expr::apply(
                                Expr::name("fact"),
                                Expr::apply(Expr::name("pred"), Expr::name("n")),
                            ),
                        ),
                    ),
                ),
            ),
            Expr::apply(Expr::name("fact"), Expr::int(5)),
        ),
        // let id = fun x -> x in pair (id true) (id 4): id at two types
        Expr::let_in(
            Expr::binding("id", Expr::lambda("x", Expr::name("x"))),
            Expr::apply(
                Expr::apply(
                    Expr::name("pair"),
                    Expr::apply(Expr::name("id"), Expr::bool(true)),
                ),
                Expr::apply(Expr::name("id"), Expr::int(4)),
            ),
        ),
        // Function composition
        Expr::lambda(
            "f",
            Expr::lambda(
                "g",
                Expr::lambda(
                    "arg",
                    Expr::apply(
                        Expr::name("g"),
                        Expr::apply(Expr::name("f"), Expr::name("arg")),
                    ),
                ),
            ),
        ),
        // let g = fun f -> 5 in g g: fine, g ignores its argument
        Expr::let_in(
            Expr::binding("g", Expr::lambda("f", Expr::int(5))),
            Expr::apply(Expr::name("g"), Expr::name("g")),
        ),
        // A case consuming a sum value
        Expr::apply(
            Expr::case(
                Expr::lambda("x", Expr::int(1)),
                Expr::lambda("y", Expr::int(2)),
            ),
            Expr::sum(Expr::int(3), Expr::bool(true)),
        ),
        // Destructuring let over a pair
        Expr::let_in(
            Expr::assign(
                Expr::prod(Expr::name("a"), Expr::name("b")),
                Expr::prod(Expr::int(1), Expr::bool(true)),
            ),
            Expr::prod(Expr::name("b"), Expr::name("a")),
        ),
        // fun x -> (x true, x 1): parameters are monomorphic
        Expr::lambda(
            "x",
            Expr::prod(
                Expr::apply(Expr::name("x"), Expr::bool(true)),
                Expr::apply(Expr::name("x"), Expr::int(1)),
            ),
        ),
        // pair (x 3) (x true): x is unbound
        Expr::apply(
            Expr::apply(
                Expr::name("pair"),
                Expr::apply(Expr::name("x"), Expr::int(3)),
            ),
            Expr::apply(Expr::name("x"), Expr::bool(true)),
        ),
        // fun f -> f f: the occurs check fires
        Expr::lambda("f", Expr::apply(Expr::name("f"), Expr::name("f"))),
    ]
}

/// The demonstration terms for the normalizer.
fn algebra_samples() -> Vec<Term> {
    vec![
        // (x * 1) + 0
        Term::add(Term::mul(Term::name("x"), Term::int(1)), Term::int(0)),
        // 2 * (x + y)
        Term::mul(Term::int(2), Term::add(Term::name("x"), Term::name("y"))),
        // b * a
        Term::mul(Term::name("b"), Term::name("a")),
        // 1*x*z*y + 1 + 2 + y*z*b + 0 + (x + a)*(x + y + b)
        Term::add(
            Term::add(
                Term::add(
                    Term::add(
                        Term::add(
                            Term::mul(
                                Term::mul(
                                    Term::int(1),
                                    Term::mul(Term::name("x"), Term::name("z")),
                                ),
                                Term::name("y"),
                            ),
                            Term::int(1),
                        ),
                        Term::int(2),
                    ),
                    Term::mul(
                        Term::mul(Term::name("y"), Term::name("z")),
                        Term::name("b"),
                    ),
                ),
                Term::int(0),
            ),
            Term::mul(
                Term::add(Term::name("x"), Term::name("a")),
                Term::add(
                    Term::add(Term::name("x"), Term::name("y")),
                    Term::name("b"),
                ),
            ),
        ),
    ]
}
