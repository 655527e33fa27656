use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Ant colony solver for capacitated vehicle routing")]
pub struct ProgramArguments {
    #[arg(short, long, help = "configuration name (file stem in the params directory) or path")]
    pub config: Option<String>,

    #[arg(long, env = "ACO_PARAMS_DIR", help = "directory holding configuration documents")]
    pub params_dir: Option<String>,

    #[arg(long, env = "ACO_RESULTS_DIR", help = "directory to store the best results")]
    pub results_dir: Option<String>,

    #[arg(long, env = "ACO_SEED", help = "rng seed")]
    pub seed: Option<u64>,

    #[arg(long, help = "override numberOfIterations from the configuration")]
    pub iterations: Option<usize>,

    #[arg(long, help = "write the best-so-far history to this CSV file")]
    pub history: Option<String>,

    #[arg(long, help = "do not persist the result", default_value = "false")]
    pub no_save: bool,

    #[arg(long, help = "list available configurations and exit", default_value = "false")]
    pub list: bool,

    #[arg(
        long,
        value_name = "CLIENTS",
        help = "write a random configuration with this many clients to the params directory and exit"
    )]
    pub generate: Option<usize>,

    #[arg(long, default_value = "3", help = "vehicle count for --generate")]
    pub vehicles: usize,
}
