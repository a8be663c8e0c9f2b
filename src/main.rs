//! CLI entry point for xprconv

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{Level, debug};
use xprconv::{
    Banner, DEFAULT_FILESET, FilesetSelector, HdlFamily, OutputFormat, ProjectFile, extract,
    write_output,
};

#[derive(Parser, Debug)]
#[command(name = "xprconv")]
#[command(about = "Parse a Vivado project file and convert it to a file format used by other tools")]
#[command(after_help = "Example:\n  xprconv --no-verilog --no-sv --type toml --fileset sources_4 input.xpr vhdl_ls.toml")]
#[command(version)]
struct Args {
    /// Vivado project file (.xpr)
    input_xpr: PathBuf,

    /// Output file (default: standard output)
    output_file: Option<PathBuf>,

    /// Exclude VHDL files (.vhd, .vhdl)
    #[arg(long = "no-vhdl")]
    no_vhdl: bool,

    /// Exclude Verilog files (.v)
    #[arg(long = "no-verilog")]
    no_verilog: bool,

    /// Exclude SystemVerilog files (.sv)
    #[arg(long = "no-sv")]
    no_sv: bool,

    /// Also accept files with this extension (can be used multiple times)
    #[arg(long = "extra-ext", value_name = "EXT")]
    extra_ext: Vec<String>,

    /// Project fileset to parse
    #[arg(long = "fileset", default_value = DEFAULT_FILESET)]
    fileset: String,

    /// Type of the output file
    #[arg(short = 't', long = "type", value_name = "FORMAT", default_value = "toml")]
    output_type: OutputFormat,

    /// Log debug details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn selector(&self) -> FilesetSelector {
        let families = [
            (HdlFamily::Vhdl, self.no_vhdl),
            (HdlFamily::Verilog, self.no_verilog),
            (HdlFamily::SystemVerilog, self.no_sv),
        ];

        let selector = families
            .into_iter()
            .filter(|&(_, excluded)| !excluded)
            .fold(FilesetSelector::new(&self.fileset), |sel, (family, _)| {
                sel.with_family(family)
            });

        self.extra_ext
            .iter()
            .fold(selector, |sel, ext| sel.with_extension(ext))
    }
}

fn main() {
    let args = Args::parse();

    // stdout may carry the generated document, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    if let Err(e) = run(&args) {
        eprintln!("xprconv: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> xprconv::Result<()> {
    let project = ProjectFile::open(&args.input_xpr)?;
    let selector = args.selector();
    debug!("accepted extensions: {:?}", selector.accepted_extensions);

    let records = extract(&project, &selector)?;
    let banner = Banner::now();

    // Open the sink only once extraction succeeded so a failed run leaves
    // any existing output file untouched.
    match args.output_file {
        Some(ref path) => {
            let file = File::create(path)?;
            let mut out = BufWriter::new(file);
            write_output(args.output_type, &records, &banner, &mut out)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_output(args.output_type, &records, &banner, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
