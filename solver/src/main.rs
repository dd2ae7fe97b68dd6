use std::io::Read;
use std::process::ExitCode;

use onet::{BoardBuilder, ConnectError};
use tracing_subscriber::EnvFilter;
use unordered_pair::UnorderedPair;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // board picture on stdin, one row per line; `.` marks a cleared cell
    let mut picture = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut picture) {
        eprintln!("failed to read board: {}", e);
        return ExitCode::FAILURE;
    }

    let board = match BoardBuilder::from_picture(&picture).build() {
        Ok(board) => board,
        Err(reasons) => {
            eprintln!("invalid board: {:?}", reasons);
            return ExitCode::FAILURE;
        }
    };

    print!("{}", board);
    match board.hint() {
        Ok(hint) => {
            let UnorderedPair(a, b) = hint.pair;
            println!("{} and {} connect ({}): {}", a, b, hint.path.shape(), hint.path);
            ExitCode::SUCCESS
        }
        Err(ConnectError::NoPairsRemain) => {
            println!("no pairs remain");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
