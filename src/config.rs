pub mod constant {
    pub(crate) const DEFAULT_ITERATIONS: usize = 1000;
    pub(crate) const DEFAULT_ALPHA: f64 = 1.0;
    pub(crate) const DEFAULT_BETA: f64 = 1.0;
    pub(crate) const DEFAULT_RHO: f64 = 0.5;
    pub(crate) const INITIAL_PHEROMONE: f64 = 1.0;
    pub(crate) const SEED: u64 = 12345;
    pub(crate) const PARAMS_DIR: &str = "params";
    pub(crate) const RESULTS_DIR: &str = "results";
    pub(crate) const RESULT_SUFFIX: &str = ".result.json";
}

pub(crate) fn default_iterations() -> usize {
    constant::DEFAULT_ITERATIONS
}

pub(crate) fn default_alpha() -> f64 {
    constant::DEFAULT_ALPHA
}

pub(crate) fn default_beta() -> f64 {
    constant::DEFAULT_BETA
}

pub(crate) fn default_rho() -> f64 {
    constant::DEFAULT_RHO
}
