use std::io::{self, Write};

use anyhow::Context;
use blocker_counter::blockers::{find_max, relevant_counts, table_size};
use blocker_counter::error::ConfigError;
use blocker_counter::report::{format_count_table, write_report};
use blocker_counter::types::{Direction, DirectionSet, Slider};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "blocker-counter", about = "Worst-case blocker configurations for a sliding piece")]
pub struct Options {
    /// Preset direction set: rook, bishop or queen.
    #[structopt(short, long, default_value = "queen")]
    slider: Slider,
    /// Custom step as dx,dy. Repeat for each direction; overrides --slider.
    #[structopt(long = "step", allow_hyphen_values = true, number_of_values = 1)]
    steps: Vec<Direction>,
    /// Also print the per-square counts and the total table size.
    #[structopt(short, long)]
    table: bool,
}

impl Options {

    fn direction_set(&self) -> Result<DirectionSet, ConfigError> {
        if self.steps.is_empty() {
            Ok(DirectionSet::from(self.slider))
        } else {
            DirectionSet::new(&self.steps)
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let dirs = self.direction_set().with_context(|| "Invalid direction set.")?;
        let result = find_max(&dirs);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_report(&mut out, &result).with_context(|| "Failed to write report.")?;

        if self.table {
            writeln!(out)?;
            write!(out, "{}", format_count_table(&relevant_counts(&dirs)))?;
            writeln!(out, "Table size: {} entries", table_size(&dirs))?;
        }
        Ok(())
    }

}

fn main() -> anyhow::Result<()> {
    Options::from_args().run()
}
