use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};

use fixture_utils::{
    Arith, DivZeroPolicy, FixtureConfig, IntSeq, OverflowPolicy, diff_array, print_array,
    run_demo, sum_array,
};

/// Array and arithmetic fixture utilities
#[derive(Parser, Debug, Clone)]
#[clap(version)]
struct Cli {
    /// Path to a TOML config file
    #[clap(short = 'C', long, global = true)]
    config: Option<PathBuf>,
    /// Integer overflow policy, overrides the config
    #[clap(long, value_enum, global = true)]
    overflow: Option<OverflowPolicy>,
    /// Division by zero policy, overrides the config
    #[clap(long, value_enum, global = true)]
    div_zero: Option<DivZeroPolicy>,
    /// Defaults to `demo`
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print labeled results of the four arithmetic operations
    #[clap(allow_negative_numbers = true)]
    Demo {
        #[clap(long)]
        x: Option<i32>,
        #[clap(long)]
        y: Option<i32>,
    },
    /// Print the values separated by spaces
    #[clap(allow_negative_numbers = true)]
    Print(SeqArgs),
    /// Print the sum of the values
    #[clap(allow_negative_numbers = true)]
    Sum(SeqArgs),
    /// Print the difference between the sums of two sequences
    #[clap(allow_negative_numbers = true)]
    Diff {
        /// Comma separated left-hand values
        #[clap(long, value_delimiter = ',', allow_hyphen_values = true)]
        lhs: Vec<i32>,
        /// Comma separated right-hand values
        #[clap(long, value_delimiter = ',', allow_hyphen_values = true)]
        rhs: Vec<i32>,
        /// Only use the first N left-hand values
        #[clap(long)]
        lhs_len: Option<usize>,
        /// Only use the first N right-hand values
        #[clap(long)]
        rhs_len: Option<usize>,
    },
    /// Apply one arithmetic operation
    #[clap(allow_negative_numbers = true)]
    Calc {
        #[clap(value_enum)]
        op: CalcOp,
        a: i32,
        b: i32,
    },
}

#[derive(Args, Debug, Clone)]
struct SeqArgs {
    /// Only use the first N values
    #[clap(long)]
    len: Option<usize>,
    values: Vec<i32>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum CalcOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl CalcOp {
    fn name(self) -> &'static str {
        match self {
            CalcOp::Add => "add",
            CalcOp::Subtract => "subtract",
            CalcOp::Multiply => "multiply",
            CalcOp::Divide => "divide",
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Cli::parse();
    if let Err(e) = main_internal(args) {
        eprintln!("Error: {:?}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn main_internal(args: Cli) -> anyhow::Result<()> {
    log::debug!("parsed arguments: {args:#?}");
    let config =
        FixtureConfig::load_or_default(args.config.as_deref()).context("failed to load config")?;
    let mut arith = config.arith();
    if let Some(overflow) = args.overflow {
        arith.overflow = overflow;
    }
    if let Some(div_zero) = args.div_zero {
        arith.div_zero = div_zero;
    }
    log::debug!("evaluating with {arith:?}");

    let command = args.command.unwrap_or(Command::Demo { x: None, y: None });
    match command {
        Command::Demo { x, y } => {
            let x = x.unwrap_or(config.demo.x);
            let y = y.unwrap_or(config.demo.y);
            let stdout = std::io::stdout();
            run_demo(&mut stdout.lock(), x, y, &arith).context("demo failed")?;
        }
        Command::Print(seq_args) => {
            let seq = IntSeq::with_len(&seq_args.values, seq_args.len)
                .context("invalid sequence")?;
            print_array(seq).context("failed to print sequence")?;
        }
        Command::Sum(seq_args) => {
            let seq = IntSeq::with_len(&seq_args.values, seq_args.len)
                .context("invalid sequence")?;
            let sum = sum_array(seq, arith.overflow).context("failed to sum sequence")?;
            println!("{sum}");
        }
        Command::Diff {
            lhs,
            rhs,
            lhs_len,
            rhs_len,
        } => {
            let lhs = IntSeq::with_len(&lhs, lhs_len).context("invalid left-hand sequence")?;
            let rhs = IntSeq::with_len(&rhs, rhs_len).context("invalid right-hand sequence")?;
            let diff = diff_array(lhs, rhs, arith.overflow).context("failed to diff sequences")?;
            println!("{diff}");
        }
        Command::Calc { op, a, b } => calc(&arith, op, a, b)?,
    }
    Ok(())
}

fn calc(arith: &Arith, op: CalcOp, a: i32, b: i32) -> anyhow::Result<()> {
    let result = match op {
        CalcOp::Add => arith.add(a, b).map(|v| v.to_string()),
        CalcOp::Subtract => arith.subtract(a, b).map(|v| v.to_string()),
        CalcOp::Multiply => arith.multiply(a, b).map(|v| v.to_string()),
        CalcOp::Divide => arith
            .divide_reporting(&mut std::io::stdout(), a, b)
            .map(|v| format!("{v:.2}")),
    };
    let result = result.with_context(|| format!("failed to {} {a} and {b}", op.name()))?;
    println!("{result}");
    Ok(())
}
