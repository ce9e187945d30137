//! Command line access to a game master: lookups, CP math, request resolution
//! and engine parameter export.
//!
//! Usage:
//!   gm-interface --game-master GAME_MASTER.json summary
//!   gm-interface --game-master GAME_MASTER.json infer dragonite 2500
//!   gm-interface --game-master GAME_MASTER.json --pvp resolve requests.ron

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gm_interface::pokemon::DEFAULT_LEVEL;
use gm_interface::species::SpeciesSummary;
use gm_interface::{
    combat_power, infer_level_and_ivs, EngineParameters, GameMaster, GameMasterResult, Interface,
    Ivs, PokemonRequest,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "gm-interface", version, about = "Game master lookups and request building")]
struct Cli {
    /// Game master JSON dump, or a snapshot written by `snapshot`
    #[arg(long, short = 'g', env = "GAME_MASTER")]
    game_master: PathBuf,

    /// Resolve moves against the PvP (combat) move table
    #[arg(long, global = true)]
    pvp: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print table sizes
    Summary,

    /// Show one species
    Species { name: String },

    /// Show one move as JSON
    Moves { name: String },

    /// Compute the CP of a species at a level and IVs
    Cp {
        name: String,
        #[arg(long, default_value_t = DEFAULT_LEVEL)]
        level: f64,
        #[arg(long, default_value_t = Ivs::MAX_VALUE)]
        atkiv: u8,
        #[arg(long, default_value_t = Ivs::MAX_VALUE)]
        defiv: u8,
        #[arg(long, default_value_t = Ivs::MAX_VALUE)]
        stmiv: u8,
    },

    /// Infer a level and IVs from a target CP
    Infer { name: String, cp: u32 },

    /// Resolve a RON list of creature requests into engine records
    Resolve { requests: PathBuf },

    /// Print the engine parameters the store exports
    Export,

    /// Write a compact snapshot of the loaded store
    Snapshot { out: PathBuf },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_game_master(path: &Path) -> GameMasterResult<GameMaster> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        GameMaster::from_file(path)
    } else {
        let bytes = fs::read(path)?;
        tracing::info!("Loaded snapshot {} ({} bytes)", path.display(), bytes.len());
        GameMaster::from_snapshot(&bytes)
    }
}

fn print_json<T: Serialize>(value: &T) -> GameMasterResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> GameMasterResult<()> {
    let game_master = load_game_master(&cli.game_master)?;
    let interface = Interface::new(&game_master);

    match cli.command {
        Commands::Summary => {
            println!("Pokemon:          {}", game_master.pokemon().len());
            println!("PvE moves:        {}", game_master.pve_moves().len());
            println!("PvP moves:        {}", game_master.pvp_moves().len());
            println!("CP multipliers:   {}", game_master.cp_multipliers().len());
            println!("Weathers:         {}", game_master.weather_settings().len());
            println!("Friendship tiers: {}", game_master.friendship_tiers().len());
            println!("PvE settings:     {}", game_master.pve_battle_settings().len());
            println!("PvP settings:     {}", game_master.pvp_battle_settings().len());
        }
        Commands::Species { name } => {
            let species = game_master.search_pokemon(name.as_str())?;
            println!("{}", SpeciesSummary::new(species, game_master.cp_multipliers()));
        }
        Commands::Moves { name } => {
            let record = if cli.pvp {
                game_master.search_move_pvp(name.as_str())?
            } else {
                game_master.search_move_pve(name.as_str())?
            };
            print_json(record)?;
        }
        Commands::Cp {
            name,
            level,
            atkiv,
            defiv,
            stmiv,
        } => {
            let species = game_master.search_pokemon(name.as_str())?;
            let cpm = game_master.search_cpm(level)?;
            let ivs = Ivs::new(atkiv, defiv, stmiv)?;
            println!("{}", combat_power(&species.base_stats, cpm, ivs));
        }
        Commands::Infer { name, cp } => {
            let species = game_master.search_pokemon(name.as_str())?;
            match infer_level_and_ivs(&species.base_stats, cp, game_master.cp_multipliers()) {
                Some(found) => {
                    println!(
                        "level {} IVs {}/{}/{} -> CP {}{}",
                        found.level(),
                        found.ivs.attack,
                        found.ivs.defense,
                        found.ivs.stamina,
                        found.cp,
                        if found.is_exact(cp) { "" } else { " (closest below)" }
                    );
                }
                None => println!("No level and IVs give {} a CP at or below {}", species.name, cp),
            }
        }
        Commands::Resolve { requests } => {
            let content = fs::read_to_string(&requests)?;
            let requests: Vec<PokemonRequest> = ron::from_str(&content)?;
            let records = requests
                .into_iter()
                .map(|mut request| {
                    request.pvp |= cli.pvp;
                    interface.resolve_request(&request)
                })
                .collect::<GameMasterResult<Vec<_>>>()?;
            print_json(&records)?;
        }
        Commands::Export => {
            let mut parameters = EngineParameters::new();
            interface.apply(&mut parameters)?;
            print_json(&parameters)?;
        }
        Commands::Snapshot { out } => {
            let bytes = game_master.to_snapshot()?;
            fs::write(&out, &bytes)?;
            tracing::info!("Wrote snapshot {} ({} bytes)", out.display(), bytes.len());
        }
    }
    Ok(())
}
