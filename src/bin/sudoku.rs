//! Sudoku front-end for the exact cover solver.
//!
//! Usage:
//!
//! ```bash
//! sudoku display <file>        # print the formatted 9×9 grid
//! sudoku format <file>         # rewrite the file with the formatted grid
//! sudoku solve <file> [out]    # solve; optionally write the solution to `out`
//! ```

use exact_cover::sudoku::Sudoku;
use std::{env, error, fs, process};

const USAGE: &str = "usage: sudoku <display|format|solve> <file> [out]";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn error::Error>> {
    let args: Vec<String> = env::args().collect();

    let (verb, file, out) = match args.as_slice() {
        [_, verb, file] => (verb.as_str(), file, None),
        [_, verb, file, out] if verb == "solve" => (verb.as_str(), file, Some(out)),
        _ => return Err(USAGE.into()),
    };

    let puzzle: Sudoku = fs::read_to_string(file)?.parse()?;

    match verb {
        "display" => println!("{puzzle}"),
        "format" => fs::write(file, format!("{puzzle}\n"))?,
        "solve" => {
            let solution = puzzle.solve()?;

            println!("{puzzle}");
            println!();
            println!("{solution}");

            if let Some(out) = out {
                fs::write(out, format!("{solution}\n"))?;
            }
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}
