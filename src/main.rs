use clap::{App, Arg};
use std::path::Path;
use triptych::build::build_gallery;
use triptych::config::Config;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        let mut source = err.source();
        while let Some(err) = source {
            eprintln!("Caused by: {}", err);
            source = err.source();
        }
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = App::new("triptych")
        .about("Builds a static gallery page from an illustrated micro-fiction feed")
        .arg(
            Arg::with_name("project")
                .short("p")
                .long("project")
                .help("Directory from which the project file search starts")
                .takes_value(true)
                .default_value("."),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .help("Directory into which the gallery is written")
                .takes_value(true)
                .required(true),
        )
        .get_matches();

    // Both arguments always have values: `output` is required and `project`
    // has a default.
    let project = Path::new(matches.value_of("project").unwrap()).canonicalize()?;
    let output = Path::new(matches.value_of("output").unwrap());

    let config = Config::from_directory(&project, output)?;
    build_gallery(config)?;
    Ok(())
}
