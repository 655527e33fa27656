use aco_vrp::solver::ant_colony::search;

fn main() -> anyhow::Result<()> {
    search::run()
}
