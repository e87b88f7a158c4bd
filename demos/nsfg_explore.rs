use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    nsfg::example_apps::run_explore(std::env::args().skip(1))
}
