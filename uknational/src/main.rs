use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use translit_core::{RuleTable, Transliterator, Trie};
use uknational::UkNationalConfig;

#[derive(Parser)]
#[command(name = "uknational")]
#[command(about = "Ukrainian national Cyrillic to Latin transliteration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config (override rules, normalization, apostrophes)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use a compiled trie instead of the built-in table
    #[arg(long, global = true)]
    trie: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "translit_core=trace"
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Text to transliterate; reads stdin when omitted
    input: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive REPL mode
    Repl,
    /// Transliterate a file or stdin
    Convert {
        /// Input file path (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the built-in rule table
    Dump {
        #[arg(long, value_enum, default_value_t = DumpFormat::Toml)]
        format: DumpFormat,
    },
    /// Build a trie and write it as a bincode artifact
    Compile {
        /// Output artifact path
        #[arg(short, long)]
        output: PathBuf,
        /// TOML rule table to compile instead of the built-in one
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Show statistics of a compiled trie
    Inspect {
        artifact: PathBuf,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum DumpFormat {
    Json,
    Toml,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<UkNationalConfig> {
    match path {
        Some(p) => UkNationalConfig::load_toml(p)
            .with_context(|| format!("failed to load config {}", p.display())),
        None => Ok(UkNationalConfig::default()),
    }
}

fn build_transliterator(cli: &Cli) -> Result<Transliterator> {
    let config = load_config(cli.config.as_deref())?;

    if let Some(path) = &cli.trie {
        let trie = Trie::load(path)
            .with_context(|| format!("failed to load trie {}", path.display()))?;
        info!(path = %path.display(), rules = trie.rule_count(), "loaded compiled trie");
        if !config.base.rules.is_empty() || config.keep_apostrophe {
            warn!("table options in config are ignored for a compiled trie");
        }
        return Ok(Transliterator::with_config(Arc::new(trie), config.into_base()));
    }

    Ok(uknational::to_latin_with_config(&config)?)
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    let reader: Box<dyn Read> = match path {
        Some(p) => Box::new(File::open(p).with_context(|| format!("failed to open {}", p.display()))?),
        None => Box::new(io::stdin().lock()),
    };
    Ok(reader)
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match path {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("failed to create {}", p.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    Ok(writer)
}

fn convert(t: &Transliterator, input: Box<dyn Read>, mut output: Box<dyn Write>) -> Result<()> {
    if t.config().normalize_nfc {
        // Normalization needs whole characters, so go line by line.
        let mut reader = BufReader::new(input);
        let mut line = Vec::new();
        while reader.read_until(b'\n', &mut line)? > 0 {
            output.write_all(&t.transliterate_line(&line))?;
            line.clear();
        }
    } else {
        let n = io::copy(&mut t.reader(input), &mut output)?;
        debug!(bytes = n, "stream converted");
    }
    output.flush()?;
    Ok(())
}

fn run_repl(t: &Transliterator) -> Result<()> {
    println!("uknational - type Ukrainian text and press Enter");
    println!("Example: Київ -> Kyiv");
    println!("Ctrl-D to exit.");

    let mut stdin = io::stdin().lock();
    let mut line = Vec::new();
    loop {
        line.clear();
        if stdin.read_until(b'\n', &mut line).context("error reading stdin")? == 0 {
            break;
        }
        let raw = String::from_utf8_lossy(&line);
        let input = raw.trim();
        if input.is_empty() {
            continue;
        }
        println!("  → {}", t.transliterate(input));
    }
    Ok(())
}

fn dump(format: DumpFormat) -> Result<()> {
    let table = uknational::rule_table();
    let text = match format {
        DumpFormat::Json => serde_json::to_string_pretty(&table)?,
        DumpFormat::Toml => table.to_toml_string()?,
    };
    println!("{}", text);
    Ok(())
}

fn compile(cli: &Cli, output: &Path, table: Option<&Path>) -> Result<()> {
    let trie = match table {
        Some(p) => {
            let table = RuleTable::load_toml(p)
                .with_context(|| format!("failed to load rule table {}", p.display()))?;
            Arc::new(table.build_trie()?)
        }
        None => {
            let config = load_config(cli.config.as_deref())?;
            uknational::to_latin_with_config(&config)?.trie().clone()
        }
    };
    trie.save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "compiled {} rules ({} nodes) -> {}",
        trie.rule_count(),
        trie.node_count(),
        output.display()
    );
    Ok(())
}

fn inspect(artifact: &Path) -> Result<()> {
    let trie = Trie::load(artifact)
        .with_context(|| format!("failed to load trie {}", artifact.display()))?;
    let stats = serde_json::json!({
        "rules": trie.rule_count(),
        "nodes": trie.node_count(),
        "max_depth": trie.max_depth(),
    });
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match &cli.command {
        Some(Commands::Repl) => run_repl(&build_transliterator(&cli)?),
        Some(Commands::Convert { input, output }) => {
            let t = build_transliterator(&cli)?;
            convert(&t, open_input(input.as_deref())?, open_output(output.as_deref())?)
        }
        Some(Commands::Dump { format }) => dump(*format),
        Some(Commands::Compile { output, table }) => compile(&cli, output, table.as_deref()),
        Some(Commands::Inspect { artifact }) => inspect(artifact),
        None => {
            let t = build_transliterator(&cli)?;
            match &cli.input {
                Some(text) => {
                    println!("{}", t.transliterate(text));
                    Ok(())
                }
                None => convert(&t, open_input(None)?, open_output(None)?),
            }
        }
    }
}
