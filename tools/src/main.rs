//! staffing-runner: command-line driver for the Erlang C staffing calculator.
//!
//! Usage:
//!   staffing-runner --calls 100 --aht 5.0 --sl 80 --secs 20 --shrinkage 0.30
//!   staffing-runner --calls 100 --aht 5.0 --compare
//!   staffing-runner --profile hourly.json --sl 80 --secs 20 --db report.db
//!   staffing-runner --ipc-mode
//!
//! Flags: --config <json>, --json (machine-readable output),
//! --show-stored (dump this run's rows from the report store).

mod store;

use anyhow::Result;
use staffing_core::{
    config::CalculatorConfig,
    scenario::{fte_delta, PeriodForecast, PeriodStaffing, SlaComparison},
    StaffingCalculator, StaffingRequest, StaffingResult,
};
use std::env;
use std::io::{self, BufRead, Write};
use store::ReportStore;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Calculate(StaffingRequest),
    Compare {
        calls_per_hour: f64,
        aht_minutes:    f64,
        #[serde(default)]
        shrinkage_pct:  Option<f64>,
    },
    Profile {
        periods:                  Vec<PeriodForecast>,
        target_service_level_pct: f64,
        target_seconds:           f64,
        #[serde(default)]
        shrinkage_pct:            Option<f64>,
    },
    Quit,
}

struct Run<'a> {
    id:         String,
    store:      &'a ReportStore,
    calculator: &'a StaffingCalculator,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match flag_value(&args, "--config") {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };
    let calls = parse_arg(&args, "--calls", 100.0f64);
    let aht = parse_arg(&args, "--aht", 5.0f64);
    let target_pct = parse_arg(&args, "--sl", 80.0f64);
    let target_secs = parse_arg(&args, "--secs", 20.0f64);
    let shrinkage = parse_arg(&args, "--shrinkage", config.default_shrinkage_pct);
    let compare = args.iter().any(|a| a == "--compare");
    let json = args.iter().any(|a| a == "--json");
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let db = flag_value(&args, "--db").unwrap_or(":memory:");
    let profile = flag_value(&args, "--profile");
    let show_stored = args.iter().any(|a| a == "--show-stored");

    let calculator = StaffingCalculator::new(config)?;
    let store = ReportStore::open(db)?;
    store.migrate()?;

    let run = Run {
        id: uuid::Uuid::new_v4().to_string(),
        store: &store,
        calculator: &calculator,
    };
    store.insert_run(&run.id, env!("CARGO_PKG_VERSION"), &chrono::Utc::now().to_rfc3339())?;
    log::info!("run {} started (db={db})", run.id);

    if ipc_mode {
        return run_ipc_loop(&run);
    }

    if let Some(path) = profile {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let periods: Vec<PeriodForecast> = serde_json::from_str(&content)?;
        let rows = calculator.calculate_profile(&periods, target_pct, target_secs, shrinkage)?;
        run.record_profile(&rows)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            print_profile(&rows, target_pct, target_secs);
        }
        return run.finish(show_stored);
    }

    let result = calculator.calculate(calls, aht, target_pct, target_secs, shrinkage)?;
    run.store.insert_result(&run.id, "scenario", &result)?;
    let comparisons = if compare {
        let comparisons = calculator.compare_service_levels(calls, aht, shrinkage)?;
        run.record_comparisons(&comparisons)?;
        comparisons
    } else {
        Vec::new()
    };

    if json {
        let out = serde_json::json!({ "result": result, "comparisons": comparisons });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_summary(&result);
        if compare {
            print_comparison(&comparisons);
        }
    }
    run.finish(show_stored)
}

impl Run<'_> {
    fn finish(&self, show_stored: bool) -> Result<()> {
        log::info!("run {} stored {} results", self.id, self.store.result_count(&self.id)?);
        if show_stored {
            let rows = self.store.results_for_run(&self.id)?;
            println!();
            println!("=== STORED RESULTS (run {}) ===", self.id);
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Ok(())
    }

    fn record_comparisons(&self, comparisons: &[SlaComparison]) -> Result<()> {
        for c in comparisons {
            self.store.insert_result(&self.id, &c.name, &c.result)?;
        }
        Ok(())
    }

    fn record_profile(&self, rows: &[PeriodStaffing]) -> Result<()> {
        for row in rows {
            self.store.insert_result(&self.id, &row.label, &row.result)?;
        }
        Ok(())
    }

    fn handle(&self, cmd: IpcCommand) -> Result<serde_json::Value> {
        let default_shrinkage = self.calculator.config().default_shrinkage_pct;
        let value = match cmd {
            IpcCommand::Calculate(request) => {
                let result = self.calculator.calculate_request(&request)?;
                self.store.insert_result(&self.id, "ipc", &result)?;
                serde_json::to_value(result)?
            }
            IpcCommand::Compare { calls_per_hour, aht_minutes, shrinkage_pct } => {
                let comparisons = self.calculator.compare_service_levels(
                    calls_per_hour,
                    aht_minutes,
                    shrinkage_pct.unwrap_or(default_shrinkage),
                )?;
                self.record_comparisons(&comparisons)?;
                serde_json::to_value(comparisons)?
            }
            IpcCommand::Profile {
                periods,
                target_service_level_pct,
                target_seconds,
                shrinkage_pct,
            } => {
                let rows = self.calculator.calculate_profile(
                    &periods,
                    target_service_level_pct,
                    target_seconds,
                    shrinkage_pct.unwrap_or(default_shrinkage),
                )?;
                self.record_profile(&rows)?;
                serde_json::to_value(rows)?
            }
            IpcCommand::Quit => serde_json::Value::Null,
        };
        Ok(value)
    }
}

fn run_ipc_loop(run: &Run<'_>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };
        if matches!(cmd, IpcCommand::Quit) {
            break;
        }

        let response = match run.handle(cmd) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("ipc command failed: {e}");
                serde_json::json!({ "error": e.to_string() })
            }
        };
        writeln!(stdout, "{}", response)?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(result: &StaffingResult) {
    println!("=== SCENARIO ===");
    println!("  call volume:    {} calls/hour", result.calls_per_hour);
    println!("  handle time:    {} minutes", result.aht_minutes);
    println!(
        "  target:         {}% in {} seconds",
        result.target.target_pct(),
        result.target.target_seconds()
    );
    println!("  shrinkage:      {:.1}%", result.shrinkage_display_pct());
    println!();
    println!("=== RESULT ===");
    println!("  agents (on phones):   {}", result.required_agents);
    println!("  FTE (with shrinkage): {}", result.required_fte);
    println!("  service level:        {:.2}%", result.service_level_pct());
    println!("  occupancy:            {:.2}%", result.occupancy_pct());
    println!("  traffic intensity:    {:.2} Erlangs", result.traffic_intensity);
}

fn print_comparison(comparisons: &[SlaComparison]) {
    println!();
    println!("=== SERVICE LEVEL COMPARISON ===");
    println!("  {:<8} {:>7} {:>6} {:>11} {:>10}", "SLA", "Agents", "FTE", "Actual SL", "Occupancy");
    for c in comparisons {
        println!(
            "  {:<8} {:>7} {:>6} {:>10.1}% {:>9.1}%",
            c.name,
            c.result.required_agents,
            c.result.required_fte,
            c.result.service_level_pct(),
            c.result.occupancy_pct()
        );
    }
    if let Some(delta) = fte_delta(comparisons, "80/20", "90/30") {
        println!();
        println!(
            "  Moving from 80/20 to 90/30 requires {} additional FTE ({:.1}% increase)",
            delta.extra_fte, delta.pct_increase
        );
    }
}

fn print_profile(rows: &[PeriodStaffing], target_pct: f64, target_secs: f64) {
    println!("=== STAFFING PROFILE ({target_pct}% in {target_secs}s) ===");
    println!("  {:<12} {:>9} {:>7} {:>6} {:>11}", "Period", "Calls/h", "Agents", "FTE", "Actual SL");
    for row in rows {
        println!(
            "  {:<12} {:>9.1} {:>7} {:>6} {:>10.1}%",
            row.label,
            row.result.calls_per_hour,
            row.result.required_agents,
            row.result.required_fte,
            row.result.service_level_pct()
        );
    }
    let peak_fte = rows.iter().map(|r| r.result.required_fte).max().unwrap_or(0);
    println!();
    println!("  peak FTE: {peak_fte}");
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
