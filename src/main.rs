#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_abilities::{
    init_logging, print_board, AbilityShape, Board, Scenario, Ship, Simulation, StandardMask,
    BOARD_SIZE, DEMO_FLEET, DEMO_SCENARIOS, FLEET_SIZE, SHIP_LENGTH,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log at debug level unless ABILITY_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum ShapeArg {
    Cone,
    Cross,
    Diamond,
}

#[cfg(feature = "std")]
impl From<ShapeArg> for AbilityShape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Cone => AbilityShape::Cone,
            ShapeArg::Cross => AbilityShape::Cross,
            ShapeArg::Diamond => AbilityShape::Diamond,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Apply cone, cross and diamond to the demonstration fleet in turn.
    Demo,
    /// Apply one ability at a chosen origin.
    Apply {
        #[arg(long, value_enum)]
        shape: ShapeArg,
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
        #[arg(long, help = "Apply to an empty board", conflicts_with = "random_fleet")]
        no_fleet: bool,
        #[arg(long, help = "Place a random fleet instead of the demonstration one")]
        random_fleet: bool,
        #[arg(
            long,
            requires = "random_fleet",
            help = "Fix RNG seed for the random fleet (e.g., --seed 12345)"
        )]
        seed: Option<u64>,
        #[arg(long, help = "Print the board as JSON")]
        json: bool,
    },
    /// Print an ability mask.
    Mask {
        #[arg(long, value_enum)]
        shape: ShapeArg,
    },
}

#[cfg(feature = "std")]
fn random_fleet(seed: Option<u64>) -> anyhow::Result<Vec<Ship>> {
    let mut rng = if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    (0..FLEET_SIZE)
        .map(|_| {
            Ship::random(&mut rng, SHIP_LENGTH)
                .ok_or_else(|| anyhow::anyhow!("ship of length {} does not fit", SHIP_LENGTH))
        })
        .collect()
}

#[cfg(feature = "std")]
fn check_origin(row: usize, col: usize) -> anyhow::Result<()> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        anyhow::bail!(
            "origin ({}, {}) is off the {}x{} board",
            row,
            col,
            BOARD_SIZE,
            BOARD_SIZE
        );
    }
    Ok(())
}

#[cfg(feature = "std")]
fn print_json(scenario: Scenario, board: &Board) -> anyhow::Result<()> {
    let result = json!({
        "shape": scenario.shape,
        "origin": [scenario.origin_row, scenario.origin_col],
        "board": board.to_grid(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    match cli.command {
        Commands::Demo => {
            let mut sim = Simulation::demo();
            println!("Ships placed (N). Board ready.");
            for scenario in DEMO_SCENARIOS {
                print_board(sim.run(scenario));
            }
        }
        Commands::Apply {
            shape,
            row,
            col,
            no_fleet,
            random_fleet: random,
            seed,
            json,
        } => {
            check_origin(row, col)?;
            let fleet = if no_fleet {
                Vec::new()
            } else if random {
                random_fleet(seed)?
            } else {
                DEMO_FLEET.to_vec()
            };
            let scenario = Scenario::new(shape.into(), row, col);
            let mut sim = Simulation::new(&fleet);
            let board = sim.run(scenario);
            if json {
                print_json(scenario, board)?;
            } else {
                print_board(board);
            }
        }
        Commands::Mask { shape } => {
            let mask: StandardMask = AbilityShape::from(shape).build();
            print!("{:?}", mask);
        }
    }
    Ok(())
}
