use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::Parser;
use recordtype_md::batch::process_source;
use recordtype_md::parser::{DirSource, ZipSource};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Batch-convert Appian recordTypeHaul XML exports (directory or zip) to markdown",
    long_about = None
)]
struct Cli {
    /// Directory containing recordTypeHaul XML files, or a .zip archive of them
    #[arg(value_name = "INPUT_DIR_OR_ZIP")]
    input: Utf8PathBuf,

    /// Directory to write markdown outputs. Defaults to the input directory
    /// (directory mode) or the current directory (zip mode).
    #[arg(short = 'o', long = "output_dir")]
    output_dir: Option<Utf8PathBuf>,

    /// Only convert entries under this folder inside the zip archive
    #[arg(short = 'f', long = "folder")]
    folder: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let is_zip = cli
        .input
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("zip"));

    let summary = if is_zip {
        let out_dir = cli.output_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let file = std::fs::File::open(cli.input.as_std_path())
            .with_context(|| format!("Open {}", cli.input))?;
        let reader = std::io::BufReader::new(file);
        let source = match cli.folder {
            Some(folder) => ZipSource::with_folder(reader, folder)?,
            None => ZipSource::new(reader)?,
        };
        process_source(source, &out_dir)?
    } else {
        if !cli.input.is_dir() {
            bail!("Input is not a directory or .zip archive: {}", cli.input);
        }
        if cli.folder.is_some() {
            bail!("--folder only applies to zip inputs");
        }
        let out_dir = cli.output_dir.unwrap_or_else(|| cli.input.clone());
        process_source(DirSource::new(&cli.input), &out_dir)?
    };

    if !summary.any_succeeded() {
        bail!("No record type XML converted from {}", cli.input);
    }
    Ok(())
}
