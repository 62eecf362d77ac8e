use clap::{Parser, Subcommand};
use gravsim_core::{Preset, Scenario, World};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gravsim")]
#[command(about = "gravsim - Newtonian n-body gravity with body fusion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print body states
    Run {
        /// Path to a TOML scenario file
        #[arg(long, conflicts_with = "preset")]
        scenario: Option<PathBuf>,
        /// Built-in scenario (three-body, binary-suns, twin-suns)
        #[arg(long, default_value_t = Preset::ThreeBody)]
        preset: Preset,
        /// Number of ticks to simulate
        #[arg(long, default_value_t = 100)]
        ticks: u64,
        /// Print body states every N ticks
        #[arg(long, default_value_t = 10)]
        every: u64,
    },
    /// Print a built-in scenario as TOML
    Preset {
        preset: Preset,
    },
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            scenario,
            preset,
            ticks,
            every,
        } => run(scenario, preset, ticks, every),
        Commands::Preset { preset } => print_preset(preset),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(
    scenario: Option<PathBuf>,
    preset: Preset,
    ticks: u64,
    every: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = match scenario {
        Some(path) => Scenario::load(&path)?,
        None => Scenario::preset(preset),
    };
    let mut world = scenario.build_world()?;
    tracing::info!(bodies = world.len(), ticks, "starting simulation");

    print_bodies(&world);
    for _ in 0..ticks {
        let report = world.tick()?;
        for fusion in &report.fusions {
            println!(
                "tick {}: body {} absorbed body {} (mass {})",
                report.tick, fusion.survivor, fusion.absorbed, fusion.absorbed_mass
            );
        }
        if every > 0 && report.tick % every == 0 {
            print_bodies(&world);
        }
    }

    tracing::info!(
        active = world.active_bodies().count(),
        total_mass = world.total_mass(),
        "simulation finished"
    );
    Ok(())
}

fn print_bodies(world: &World) {
    println!("tick {}", world.tick_count());
    for snapshot in world.snapshots().iter().filter(|s| s.visible) {
        println!(
            "  {} mass = {} pos = {} vel = {} size = {:.2}",
            snapshot.id, snapshot.mass, snapshot.position, snapshot.velocity, snapshot.display_size
        );
    }
}

fn print_preset(preset: Preset) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", Scenario::preset(preset).to_toml_string()?);
    Ok(())
}
