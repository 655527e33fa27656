pub mod ant_colony;
