//! Interactive engine loop
//!
//! Reads one command per line from stdin, dispatches it, and prints the
//! result. Failures surface as `err {message}.` lines and never stop
//! the loop.

mod command;
mod engine;
mod raster;

use command::Command;
use std::io::{self, BufRead};

fn main() -> anyhow::Result<()> {
    println!("{}", engine::info_text());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => match engine::dispatch(command) {
                Ok(dispatch) => {
                    if !dispatch.output.is_empty() {
                        println!("{}", dispatch.output);
                    }
                    if dispatch.quit {
                        break;
                    }
                }
                Err(error) => println!("err {:#}.", error),
            },
            Err(error) => println!("err {}.", error),
        }
    }
    Ok(())
}
