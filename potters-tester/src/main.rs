mod fairness;
mod policy;
mod reports;
mod simulation;

use anyhow::{Context, Result, bail};
use clap::Parser;
use potters_game::{MemoryScores, QuestionBank};

use crate::fairness::{FairnessConfig, run_fairness};
use crate::policy::AnswerStrategy;
use crate::simulation::{SessionReport, SimulationConfig, run_session};

#[derive(Debug, Parser)]
#[command(name = "potters-tester", version = "0.1.0")]
#[command(about = "Automated QA for Potters Quiz - headless playthroughs and shuffle fairness sweeps")]
struct Args {
    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Iterations per strategy and seed (each offsets the seed)
    #[arg(long, default_value_t = 10)]
    iterations: u64,

    /// Strategies to run (comma-separated: oracle,first,random,hesitant)
    #[arg(long, default_value = "oracle,first,random,hesitant")]
    strategies: String,

    /// Arm the per-question countdown for every strategy
    #[arg(long)]
    timed: bool,

    /// Also run the shuffle fairness sweep
    #[arg(long)]
    fairness: bool,

    /// Samples for the fairness sweep
    #[arg(long, default_value_t = 20_000)]
    fairness_samples: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json"])]
    report: String,
}

fn split_csv(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

fn load_bank() -> Result<QuestionBank> {
    let bank = QuestionBank::from_json(include_str!(
        "../../potters-web/static/assets/data/questions.json"
    ))
    .context("embedded question data should parse")?;
    bank.validate()
        .context("embedded question data should validate")?;
    Ok(bank)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let bank = load_bank()?;

    let seeds: Vec<u64> = split_csv(&args.seeds)
        .into_iter()
        .map(|part| part.parse().with_context(|| format!("bad seed '{part}'")))
        .collect::<Result<_>>()?;
    let strategies: Vec<AnswerStrategy> = split_csv(&args.strategies)
        .into_iter()
        .map(|part| part.parse().map_err(anyhow::Error::msg))
        .collect::<Result<_>>()?;
    if seeds.is_empty() || strategies.is_empty() {
        bail!("nothing to run: need at least one seed and one strategy");
    }

    let mut reports: Vec<SessionReport> = Vec::new();
    for &strategy in &strategies {
        // One store per strategy, so record counts track its own progress.
        let store = MemoryScores::new();
        for &seed in &seeds {
            for iteration in 0..args.iterations {
                let config = SimulationConfig::new(strategy, seed.wrapping_add(iteration))
                    .with_timer(args.timed || strategy.needs_timer());
                let report = run_session(&bank, config, &store).with_context(|| {
                    format!("strategy '{strategy}' seed {seed} iteration {iteration}")
                })?;
                log::debug!(
                    "{strategy} seed {} scored {}/{}",
                    report.seed,
                    report.score,
                    report.total
                );
                reports.push(report);
            }
        }
    }

    let fairness_report = args
        .fairness
        .then(|| run_fairness(&bank, FairnessConfig::new(args.fairness_samples, seeds[0])));

    let aggregates = reports::aggregate(&reports);
    match args.report.as_str() {
        "json" => reports::print_json(&aggregates, fairness_report.as_ref())?,
        _ => reports::print_console(&aggregates, fairness_report.as_ref()),
    }

    if let Some(report) = fairness_report
        && !report.passed
    {
        bail!("shuffle fairness sweep exceeded tolerance");
    }
    Ok(())
}
