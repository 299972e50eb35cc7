//! raddim interactive front-end
//!
//! This binary is a terminal stand-in for the browser UI: it holds the
//! editable form state, drives the dimensioning session, and prints the
//! result, comparison, and map datasets the graphical surfaces would
//! render.
//!
//! # Usage
//!
//! ```bash
//! raddim -c config/raddim.yaml
//! raddim -e submit
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use raddim_common::logging::{init_logging, LogLevel};
use raddim_common::RaddimConfig;
use raddim_session::{
    CalculationClient, DimensioningSession, RawFormInput, SimulationRecord,
};

/// raddim - Radio-Network Dimensioning Front-End
#[derive(Parser, Debug)]
#[command(name = "raddim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (YAML); defaults apply when omitted
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config_file: Option<String>,

    /// Execute a single command and exit instead of entering the prompt
    #[arg(short = 'e', long = "exec", value_name = "COMMAND")]
    exec: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging(LogLevel::Warn);

    let args = Args::parse();

    println!("raddim - Radio-Network Dimensioning Front-End");
    println!("=============================================");

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config_file {
        Some(path) => RaddimConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => RaddimConfig::default(),
    };
    info!(
        "Calculation service: {}, map center: {}",
        config.service.base_url, config.map.center
    );

    let client = CalculationClient::new(&config.service)
        .context("Failed to create calculation client")?;
    let mut session = DimensioningSession::new(client, config.map.center);
    let mut form = session.form_input();

    if let Some(command) = &args.exec {
        return execute_command(&mut session, &mut form, command).await;
    }

    interactive_mode(&mut session, &mut form).await
}

async fn interactive_mode(
    session: &mut DimensioningSession,
    form: &mut RawFormInput,
) -> Result<()> {
    println!("Type 'help' for the command list.");
    let stdin = io::stdin();
    loop {
        print!("raddim> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }
        if let Err(e) = execute_command(session, form, line).await {
            eprintln!("ERROR: {e:#}");
        }
    }
    Ok(())
}

async fn execute_command(
    session: &mut DimensioningSession,
    form: &mut RawFormInput,
    command: &str,
) -> Result<()> {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("help") => print_help(),
        Some("show") => print_state(session, form),
        Some("set") => {
            let field = parts.next().context("Usage: set <field> <value>")?;
            let value = parts.next().context("Usage: set <field> <value>")?;
            set_field(form, field, value)?;
            println!("{field} = {value}");
        }
        Some("submit") => match session.submit_form(form).await {
            Ok(record) => {
                // Successful values persist as the editable baseline
                *form = session.form_input();
                print_record(&record);
            }
            Err(e) => eprintln!("Calculation failed: {e}"),
        },
        Some("history") => print_history(session),
        Some("compare") => print_comparison(session),
        Some("map") => print_map(session),
        Some(other) => bail!("Unknown command: {other}. Type 'help' for the command list."),
        None => {}
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  show               Current parameters and latest result");
    println!("  set <field> <val>  Edit a form field (e.g. 'set tx_power 46')");
    println!("  submit             Run a calculation with the current form");
    println!("  history            List completed simulations");
    println!("  compare            Chart rows for all simulations");
    println!("  map                Coverage overlay for the latest simulation");
    println!("  exit               Leave the prompt");
    println!();
    println!("Fields: propagation_model environment tx_power rx_sensitivity");
    println!("        frequency h_bs h_ue user_density area_km2 bandwidth");
}

/// Applies one `set` edit to the pending form input.
fn set_field(form: &mut RawFormInput, field: &str, value: &str) -> Result<()> {
    let slot = match field {
        "propagation_model" => &mut form.propagation_model,
        "environment" => &mut form.environment,
        "tx_power" => &mut form.tx_power,
        "rx_sensitivity" => &mut form.rx_sensitivity,
        "frequency" => &mut form.frequency,
        "h_bs" => &mut form.h_bs,
        "h_ue" => &mut form.h_ue,
        "user_density" => &mut form.user_density,
        "area_km2" => &mut form.area_km2,
        "bandwidth" => &mut form.bandwidth,
        _ => bail!("Unknown field: {field}"),
    };
    *slot = value.to_string();
    Ok(())
}

fn print_state(session: &DimensioningSession, form: &RawFormInput) {
    println!("Parameters:");
    println!("  propagation_model: {}", form.propagation_model);
    println!("  environment:       {}", form.environment);
    println!("  tx_power:          {} dBm", form.tx_power);
    println!("  rx_sensitivity:    {} dBm", form.rx_sensitivity);
    println!("  frequency:         {} MHz", form.frequency);
    println!("  h_bs:              {} m", form.h_bs);
    println!("  h_ue:              {} m", form.h_ue);
    println!("  user_density:      {} /km2", form.user_density);
    println!("  area_km2:          {} km2", form.area_km2);
    println!("  bandwidth:         {} MHz", form.bandwidth);

    if let Some(result) = session.last_result() {
        println!("Latest result: radius {} km, {} sites", result.radius_km, result.num_sites);
    }
    if let Some(error) = session.last_error() {
        println!("Last error: {error}");
    }
    if session.in_progress() {
        println!("A calculation is in progress.");
    }
}

fn print_record(record: &SimulationRecord) {
    let kpis = record.kpis();
    println!("Cell radius:    {} km", record.result.radius_km);
    println!("Required sites: {}", record.result.num_sites);
    println!("Coverage:       {:.2} km2", kpis.coverage_km2);
    println!("Throughput:     {:.2} Mbps", kpis.throughput_mbps);
    println!(
        "Parameters:     {} / {} / {} MHz / {} dBm / {} km2 / {} per km2",
        record.parameters.propagation_model,
        record.parameters.environment,
        record.parameters.frequency_mhz,
        record.parameters.tx_power_dbm,
        record.parameters.area_km2,
        record.parameters.user_density_per_km2
    );
}

fn print_history(session: &DimensioningSession) {
    let records = session.history();
    if records.is_empty() {
        println!("No simulations yet.");
        return;
    }
    for record in &records {
        println!(
            "  [{}] radius {} km, {} sites",
            record.id, record.result.radius_km, record.result.num_sites
        );
    }
}

fn print_comparison(session: &DimensioningSession) {
    let rows = session.comparison();
    if rows.is_empty() {
        println!("No simulations yet.");
        return;
    }
    println!(
        "{:<16} {:>10} {:>8} {:>14} {:>16}",
        "label", "radius_km", "sites", "coverage_km2", "throughput_mbps"
    );
    for row in &rows {
        println!(
            "{:<16} {:>10} {:>8} {:>14.2} {:>16.2}",
            row.label, row.radius_km, row.num_sites, row.coverage_km2, row.throughput_mbps
        );
    }
}

fn print_map(session: &DimensioningSession) {
    let overlay = session.map_overlay();
    println!("Center: {}", overlay.center);
    println!("Radius: {} m", overlay.radius_m);
    println!("Popup:  {}", overlay.popup_text);
}
