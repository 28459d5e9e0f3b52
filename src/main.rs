use clap::Parser;
use readplot::cli::{Args, PlotKind};
use readplot::commands;

fn main() {
    let args = Args::parse();

    let result = match args.plot {
        Some(PlotKind::Depth) => commands::depth::run(&args),
        Some(PlotKind::Insert) => commands::insert::run(&args),
        None => commands::summary::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
