use clap::{App, Arg};
use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use std::path::PathBuf;

struct Args {
    input_file: PathBuf,
    output: PathBuf,
    draw_target_line: bool,
}

fn main() -> Result<(), Report> {
    color_eyre::install()?;

    // logs go to stderr, so that stdout only has the progress lines
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    wsbench_plot::comparison_chart(
        &args.input_file,
        &args.output,
        args.draw_target_line,
    )
    .wrap_err_with(|| {
        format!("generate chart from {}", args.input_file.display())
    })?;
    Ok(())
}

fn parse_args() -> Args {
    let matches = App::new("wsbench_plot")
        .version("0.1")
        .about("Generates a comparison chart from WebSocket benchmark results.")
        .arg(
            Arg::with_name("input_file")
                .value_name("INPUT_FILE")
                .help("path to the comparison JSON file (e.g. results/comparison-2026-02-01.json)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("OUTPUT")
                .help("output path for the chart; default: results/comparison-chart.png")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("no_target_line")
                .long("no-target-line")
                .help("don't show the target rate line on the chart"),
        )
        .get_matches();

    // parse arguments
    let input_file = PathBuf::from(
        matches
            .value_of("input_file")
            .expect("input file should be set"),
    );
    let output = PathBuf::from(
        matches
            .value_of("output")
            .unwrap_or(wsbench_plot::DEFAULT_OUTPUT),
    );
    let draw_target_line = !matches.is_present("no_target_line");

    tracing::debug!("input file: {}", input_file.display());
    tracing::debug!("output: {}", output.display());
    tracing::debug!("target line: {:?}", draw_target_line);

    Args {
        input_file,
        output,
        draw_target_line,
    }
}
