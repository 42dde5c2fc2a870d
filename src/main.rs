use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use recordtype_md::parser::extract_record_type;
use recordtype_md::render::render;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert one Appian recordTypeHaul XML export to markdown",
    long_about = None
)]
struct Cli {
    /// Path to an Appian recordTypeHaul XML file
    #[arg(value_name = "INPUT_XML")]
    xml: Utf8PathBuf,

    /// Output markdown path. Defaults to <input>.md next to the input.
    #[arg(short = 'o', long = "out")]
    out: Option<Utf8PathBuf>,

    /// Markdown H1 title. Defaults to '<Record Type Name> Record Type Context Reference'.
    #[arg(long)]
    title: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = std::fs::read_to_string(cli.xml.as_std_path())
        .with_context(|| format!("Failed to read {}", cli.xml))?;
    let record_type = extract_record_type(&text, cli.xml.as_str())?;

    let md = render(std::slice::from_ref(&record_type), cli.title.as_deref());

    let out_path = cli.out.unwrap_or_else(|| cli.xml.with_extension("md"));
    std::fs::write(out_path.as_std_path(), md)
        .with_context(|| format!("Failed to write {}", out_path))?;

    println!("{}", out_path);
    Ok(())
}
