use jiff::SignedDuration;

#[derive(Clone, Debug)]
pub struct SolverParams {
    /// The search stops as soon as any of these is met.
    pub terminations: Vec<Termination>,

    /// Seeds tie-breaking in construction, same seed and budget give the same solution.
    pub seed: u64,

    /// Threads scanning neighbourhoods in parallel.
    pub search_threads: Threads,

    /// Guided local search weight, as a fraction of the average arc cost of the first
    /// local optimum.
    pub gls_lambda_factor: f64,
}

#[derive(Clone, Debug)]
pub enum Termination {
    Duration(SignedDuration),
    /// Guided local search restarts.
    Iterations(usize),
    IterationsWithoutImprovement(usize),
}

#[derive(Clone, Debug)]
pub enum Threads {
    Single,
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => (*num).max(1),
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            terminations: vec![Termination::Duration(SignedDuration::from_secs(10))],
            seed: 0,
            search_threads: Threads::Single,
            gls_lambda_factor: 0.1,
        }
    }
}

impl SolverParams {
    pub fn time_limit(&self) -> Option<SignedDuration> {
        self.terminations
            .iter()
            .filter_map(|termination| match termination {
                Termination::Duration(duration) => Some(*duration),
                _ => None,
            })
            .min()
    }
}
