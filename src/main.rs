use std::error::Error;
use std::io;

use crate::collision::{Collision, LoadError};

mod collision;
mod prompt;
mod report;

const DATA_FILE: &str = "collisions.csv";

fn main() {
    let dataset = match collision::load_csv(DATA_FILE) {
        Ok(dataset) => dataset,
        Err(LoadError::FileNotFound(path)) => {
            println!("The file '{path}' was not found.");
            return;
        }
        Err(LoadError::EmptyData) => {
            println!("No data was found in the file.");
            return;
        }
        Err(err) => {
            println!("An error occurred: {err}");
            return;
        }
    };

    match run(&dataset) {
        Ok(report) => println!("{report}"),
        Err(err) => println!("An error occurred: {err}"),
    }
}

fn run(dataset: &[Collision]) -> Result<String, Box<dyn Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let (dimension, direction) = prompt::prompt_selection(&mut stdin.lock(), &mut stdout)?;
    let value = report::aggregate(dataset, dimension, direction)?;
    Ok(format!(
        "\nThe {} {} is {value}\n",
        direction.label(),
        dimension.label()
    ))
}
