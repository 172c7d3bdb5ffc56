mod render;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use nbe_config::resolve_source;
use nbe_engine::{Languages, Root, io, load_examples, parsing::parse_source};
use relative_path::RelativePath;

#[derive(Parser)]
#[command(name = "nbe", version, about = "Load and inspect the examples tree")]
struct Cli {
    /// Examples root (overrides nbe.toml; default "examples")
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Log loader progress
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the whole tree and report what was found
    Check,

    /// Print the loaded tree
    Tree {
        /// Dump the full tree, blocks included, as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Print the blocks of one implementation, e.g. `messaging/pub-sub/go`
    Show { path: String },

    /// Split a single source file into blocks
    Blocks {
        file: PathBuf,

        /// Language identifier (default: the file's parent directory name)
        #[arg(short, long)]
        lang: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Check => {
            let root = load(cli.source)?;
            println!("{}", render::summary(&root));
        }
        Command::Tree { yaml } => {
            let root = load(cli.source)?;
            if yaml {
                print!("{}", serde_yaml::to_string(&root)?);
            } else {
                println!("{}", render::outline(&root));
            }
        }
        Command::Show { path } => {
            let root = load(cli.source)?;
            let Some(implementation) = root.find(RelativePath::new(&path)) else {
                bail!("no implementation at {path} (expected category/example/implementation)");
            };
            println!("{}", render::blocks(&implementation.blocks));
        }
        Command::Blocks { file, lang } => {
            let lang = match lang {
                Some(lang) => lang,
                None => parent_dir_name(&file)?,
            };
            let language = Languages::global().resolve(&lang);
            let bytes =
                std::fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            let blocks = parse_source(language.comment_family(), &String::from_utf8_lossy(&bytes))
                .with_context(|| format!("parsing {} as {language}", file.display()))?;
            println!("{}", render::blocks(&blocks));
        }
    }
    Ok(())
}

fn load(flag: Option<PathBuf>) -> Result<Root> {
    let cwd = std::env::current_dir().context("reading the working directory")?;
    let source = resolve_source(flag, &cwd).context("loading nbe.toml")?;
    log::debug!("Examples root {} (from {})", source.path.display(), source.origin);

    io::validate_examples_dir(&source.path)
        .with_context(|| format!("examples root from {} is invalid", source.origin))?;
    load_examples(&source.path).with_context(|| format!("loading {}", source.path.display()))
}

fn parent_dir_name(file: &Path) -> Result<String> {
    file.parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .with_context(|| format!("cannot infer a language for {}, pass --lang", file.display()))
}
