//! Bedtime calculation command.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use betterrest_core::{
    estimate_bedtime, BedtimeOutcome, ClockStyle, CoffeeIntake, Config, LinearSleepModel,
    SleepAmount, WakeTime,
};

#[derive(Args)]
pub struct CalculateArgs {
    /// When do you want to wake up? (HH:MM, 24-hour)
    #[arg(long)]
    wake: Option<WakeTime>,
    /// How much sleep would you like? (hours, 2-12 in 0.25 steps)
    #[arg(long)]
    sleep: Option<SleepAmount>,
    /// Daily coffee intake (cups, 0-20)
    #[arg(long)]
    coffee: Option<CoffeeIntake>,
    /// Model artifact to use instead of the configured one
    #[arg(long)]
    model: Option<PathBuf>,
    /// Clock style for the result (12h or 24h)
    #[arg(long)]
    clock: Option<ClockStyle>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct CalculationReport {
    wake_time: WakeTime,
    sleep_amount: SleepAmount,
    coffee_intake: CoffeeIntake,
    #[serde(flatten)]
    outcome: BedtimeOutcome,
}

pub fn run(args: CalculateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let wake = args.wake.unwrap_or(config.defaults.wake_time);
    let sleep = args.sleep.unwrap_or(config.defaults.sleep_amount);
    let coffee = args.coffee.unwrap_or(config.defaults.coffee_intake);
    let clock = args.clock.unwrap_or(config.display.clock);

    let model = match &args.model {
        Some(path) => LinearSleepModel::load(path),
        None => config.model.load_model(),
    };
    let result = model
        .inspect_err(|e| tracing::warn!(reason = e.reason(), "sleep model unavailable"))
        .and_then(|model| estimate_bedtime(&model, wake, sleep, coffee));
    let outcome = BedtimeOutcome::from_result(&result, clock);

    if args.json {
        let report = CalculationReport {
            wake_time: wake,
            sleep_amount: sleep,
            coffee_intake: coffee,
            outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if outcome.success {
        println!("Wake up at {} after {} with {}", wake, sleep, coffee);
        println!("{}", outcome.title);
        println!("  {}", outcome.message);
    }

    result.map(|_| ()).map_err(Into::into)
}
