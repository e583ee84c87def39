use std::{io::BufWriter, path::PathBuf};

use anyhow::{bail, Context};
use clap::{command, value_parser, Arg, ArgAction};
use log::warn;
use sitemeta::{collect::collect_index, config, Config};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args([
            Arg::new("content_dir")
                .help("Directory path of content sources")
                .value_parser(value_parser!(PathBuf))
                .env("SITEMETA_CONTENT_DIR")
                .default_value("content"),
            Arg::new("template_key")
                .long("template-key")
                .help("Metadata key selecting the template")
                .env("SITEMETA_TEMPLATE_KEY")
                .default_value(config::DEFAULT_TEMPLATE_KEY),
            Arg::new("output_key")
                .long("output-key")
                .help("Metadata key holding the output path")
                .env("SITEMETA_OUTPUT_KEY")
                .default_value(config::DEFAULT_OUTPUT_KEY),
            Arg::new("title_key")
                .long("title-key")
                .help("Metadata key holding the title")
                .env("SITEMETA_TITLE_KEY")
                .default_value(config::DEFAULT_TITLE_KEY),
            Arg::new("date_key")
                .long("date-key")
                .help("Metadata key holding the date of blog entries")
                .env("SITEMETA_DATE_KEY")
                .default_value(config::DEFAULT_DATE_KEY),
            Arg::new("extension")
                .long("extension")
                .help("Extension of output files")
                .env("SITEMETA_EXTENSION")
                .default_value(config::DEFAULT_OUTPUT_EXTENSION),
            Arg::new("strict")
                .long("strict")
                .help("Fail when a record has no template or output")
                .action(ArgAction::SetTrue),
        ])
        .get_matches();

    let content_dir: &PathBuf = matches.get_one("content_dir").unwrap();
    if !content_dir.is_dir() {
        bail!("content_dir must be a directory.");
    }
    let arg = |name: &str| -> String { matches.get_one::<String>(name).unwrap().clone() };

    let config = Config::new(content_dir)
        .with_template_key(arg("template_key"))
        .with_output_key(arg("output_key"))
        .with_title_key(arg("title_key"))
        .with_date_key(arg("date_key"))
        .with_output_extension(arg("extension"));

    let index = collect_index(&config)
        .with_context(|| format!("while collecting {:?}", config.content_root))?;

    let mut incomplete = 0;
    for record in &index {
        let missing = record.missing_required(&config);
        if !missing.is_empty() {
            warn!("{}: missing {}", record.basename(), missing.join(", "));
            incomplete += 1;
        }
    }
    if incomplete > 0 && matches.get_flag("strict") {
        bail!("{incomplete} record(s) lack required metadata");
    }

    let writer = BufWriter::new(std::io::stdout().lock());
    serde_json::to_writer_pretty(writer, &index)?;
    println!();

    Ok(())
}
