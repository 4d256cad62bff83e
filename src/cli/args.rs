// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug, Clone, PartialEq)]
/// tournament-loader - Load and check tournament input data
pub struct Args {
    /// directory containing countries.csv, poule_phase_games.csv and final_phase_games.csv
    #[argh(option)]
    pub input: Option<String>,

    /// output directory, created if missing (default: current working directory)
    #[argh(option)]
    pub output: Option<String>,

    /// allow downstream consumers to overwrite existing outputs: true/false, yes/no or 1/0 (default: false)
    #[argh(option)]
    pub overwrite: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// print the run summary as JSON instead of text
    #[argh(switch)]
    pub json: bool,
}
