use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "treeviz", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sketch a tree, then walk it looking for a value, writing one frame per step.
    Search(SearchArgs),
    /// Render the complete tree as a single frame.
    Sketch(SketchArgs),
}

#[derive(Args, Debug)]
struct TreeArgs {
    /// Tree JSON (`{ "value": .., "left": {..}, "right": {..} }`).
    #[arg(long, conflicts_with = "values", required_unless_present = "values")]
    tree: Option<PathBuf>,

    /// Comma-separated values inserted into an ordered tree, e.g. `m,f,t,c`.
    #[arg(long, value_delimiter = ',')]
    values: Option<Vec<String>>,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Options JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Frame file base name.
    #[arg(long)]
    base_name: Option<String>,

    /// Frame file extension (defaults to the format's extension).
    #[arg(long)]
    ext: Option<String>,

    /// Identical copies written per frame.
    #[arg(long)]
    dup: Option<u32>,

    /// Counter value before the first frame.
    #[arg(long)]
    start: Option<u64>,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// Write the ordered frame list as JSON.
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SearchArgs {
    #[command(flatten)]
    tree: TreeArgs,

    #[command(flatten)]
    out: OutputArgs,

    /// Traversal algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Dfs)]
    algorithm: AlgorithmChoice,

    /// Label to search for.
    #[arg(long)]
    find: Option<String>,

    /// Do not render the full tree before searching.
    #[arg(long, default_value_t = false)]
    no_sketch: bool,
}

#[derive(Parser, Debug)]
struct SketchArgs {
    #[command(flatten)]
    tree: TreeArgs,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmChoice {
    Dfs,
    Bfs,
    Ordered,
    Sketch,
}

impl From<AlgorithmChoice> for treeviz::Algorithm {
    fn from(c: AlgorithmChoice) -> Self {
        match c {
            AlgorithmChoice::Dfs => Self::DepthFirst,
            AlgorithmChoice::Bfs => Self::BreadthFirst,
            AlgorithmChoice::Ordered => Self::Ordered,
            AlgorithmChoice::Sketch => Self::Sketch,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Svg,
    Dot,
}

impl From<FormatChoice> for treeviz::OutputFormat {
    fn from(c: FormatChoice) -> Self {
        match c {
            FormatChoice::Png => Self::Png,
            FormatChoice::Svg => Self::Svg,
            FormatChoice::Dot => Self::Dot,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Search(args) => cmd_search(args),
        Command::Sketch(args) => cmd_sketch(args),
    }
}

fn load_tree(args: &TreeArgs) -> anyhow::Result<treeviz::BinaryTree> {
    let tree = match (&args.tree, &args.values) {
        (Some(path), _) => treeviz::BinaryTree::from_path(path)?,
        (None, Some(values)) => treeviz::BinaryTree::bst_from_values(
            values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()),
        ),
        (None, None) => anyhow::bail!("either --tree or --values is required"),
    };
    if tree.is_empty() {
        anyhow::bail!("tree is empty");
    }
    Ok(tree)
}

fn build_opts(args: &OutputArgs) -> anyhow::Result<treeviz::VisualizerOpts> {
    let mut opts = match &args.config {
        Some(path) => treeviz::VisualizerOpts::from_path(path)?,
        None => treeviz::VisualizerOpts::default(),
    };

    if let Some(format) = args.format {
        opts.format = format.into();
        if args.ext.is_none() {
            opts.sequencer.extension = opts.format.default_extension().to_owned();
        }
    }
    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
        let mut dir = dir.to_string_lossy().into_owned();
        if !dir.ends_with(std::path::MAIN_SEPARATOR) && !dir.ends_with('/') {
            dir.push(std::path::MAIN_SEPARATOR);
        }
        opts.sequencer.dir = dir;
    }
    if let Some(base) = &args.base_name {
        opts.sequencer.base_name = base.clone();
    }
    if let Some(ext) = &args.ext {
        opts.sequencer.extension = ext.clone();
    }
    if let Some(dup) = args.dup {
        opts.sequencer.duplicate_frames = dup;
    }
    if let Some(start) = args.start {
        opts.sequencer.start_count = start;
    }
    opts.validate()?;
    Ok(opts)
}

fn finish(viz: &treeviz::Visualizer, args: &OutputArgs) -> anyhow::Result<()> {
    if let Some(path) = &args.manifest {
        viz.write_manifest(path)?;
        eprintln!("wrote {}", path.display());
    }
    if let (Some(first), Some(last)) = (viz.frames().first(), viz.frames().last()) {
        eprintln!("wrote {} .. {}", first.display(), last.display());
    }
    eprintln!("frame count: {}", viz.frame_count());
    Ok(())
}

fn cmd_search(args: SearchArgs) -> anyhow::Result<()> {
    let tree = load_tree(&args.tree)?;
    let root = tree.root().context("tree has no root")?;
    let mut viz = treeviz::Visualizer::with_default_engine(build_opts(&args.out)?)?;

    if !args.no_sketch {
        viz.sketch(root)?;
    }
    let found = viz.search(root, args.algorithm.into(), args.find.as_deref())?;
    match &args.find {
        Some(target) if found => println!("found {target}"),
        Some(target) => println!("not found {target}"),
        None => {}
    }

    finish(&viz, &args.out)
}

fn cmd_sketch(args: SketchArgs) -> anyhow::Result<()> {
    let tree = load_tree(&args.tree)?;
    let root = tree.root().context("tree has no root")?;
    let mut viz = treeviz::Visualizer::with_default_engine(build_opts(&args.out)?)?;
    viz.sketch(root)?;
    finish(&viz, &args.out)
}
