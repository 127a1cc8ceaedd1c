use std::path::PathBuf;

use anyhow::Context;
use greedy_misp::dataset::{read_graph, DatasetInstance, DEFAULT_ROOT};
use greedy_misp::{experiment, solve, HeuristicConfig};

#[derive(Debug, Default)]
struct Options {
    nodes: Option<usize>,
    density: Option<f64>,
    instance: Option<String>,
    k: Option<usize>,
    seed: Option<u64>,
    root: Option<PathBuf>,
    batch: Option<PathBuf>,
    detailed: bool,
}

#[derive(Debug, PartialEq)]
enum Mode {
    File(PathBuf),
    Dataset(DatasetInstance, PathBuf),
    Batch(PathBuf),
}

/// Parses the command line. `Ok(None)` means help was requested.
fn parse_options(args: &[String]) -> Result<Option<Options>, String> {
    fn parse<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
        value
            .parse()
            .map_err(|_| format!("invalid value {value:?} for {flag}"))
    }

    let mut opts = Options::default();
    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--help" | "-h" => return Ok(None),
            "--detailed" => {
                opts.detailed = true;
                i += 1;
                continue;
            }
            _ => {}
        }
        let value = args
            .get(i + 1)
            .ok_or_else(|| format!("missing value for {flag}"))?;
        match flag {
            "-n" => opts.nodes = Some(parse(flag, value)?),
            "-d" => opts.density = Some(parse(flag, value)?),
            "-i" => opts.instance = Some(value.clone()),
            "-k" => opts.k = Some(parse(flag, value)?),
            "--seed" => opts.seed = Some(parse(flag, value)?),
            "--root" => opts.root = Some(PathBuf::from(value)),
            "--batch" => opts.batch = Some(PathBuf::from(value)),
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 2;
    }
    Ok(Some(opts))
}

/// Picks the run mode, rejecting flags that would be ignored by it.
fn resolve_mode(opts: &Options) -> Result<Mode, String> {
    if opts.detailed && opts.batch.is_none() {
        return Err("--detailed only applies with --batch".to_string());
    }
    if let Some(root) = &opts.batch {
        if opts.nodes.is_some() || opts.density.is_some() || opts.instance.is_some() {
            return Err("--batch cannot be combined with -n, -d or -i".to_string());
        }
        if opts.root.is_some() {
            return Err("--batch takes the dataset root itself; drop --root".to_string());
        }
        return Ok(Mode::Batch(root.clone()));
    }

    match (opts.nodes, &opts.instance) {
        (Some(n), Some(instance)) => {
            let density = opts.density.ok_or("-n requires -d")?;
            let instance = instance
                .parse()
                .map_err(|_| format!("invalid instance number {instance:?}"))?;
            let dataset = DatasetInstance::new(n, density, instance).map_err(|e| e.to_string())?;
            let root = opts.root.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
            Ok(Mode::Dataset(dataset, root))
        }
        (Some(_), None) => Err("-n requires -i <instance>".to_string()),
        (None, Some(path)) => {
            if opts.density.is_some() {
                return Err("-d only applies with -n".to_string());
            }
            if opts.root.is_some() {
                return Err("--root only applies with -n".to_string());
            }
            Ok(Mode::File(PathBuf::from(path)))
        }
        (None, None) => Err("expected -i or --batch".to_string()),
    }
}

fn build_config(opts: &Options) -> greedy_misp::Result<HeuristicConfig> {
    let mut config = match opts.k {
        Some(k) => HeuristicConfig::top_k(k)?,
        None => {
            if opts.seed.is_some() {
                log::warn!("--seed has no effect without -k");
            }
            HeuristicConfig::deterministic()
        }
    };
    config.seed = opts.seed;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let opts = match parse_options(&args) {
        Ok(Some(opts)) => opts,
        Ok(None) => usage_and_exit(0),
        Err(msg) => {
            eprintln!("{msg}");
            usage_and_exit(1);
        }
    };
    let mode = resolve_mode(&opts).unwrap_or_else(|msg| {
        eprintln!("{msg}");
        usage_and_exit(1)
    });
    let config = build_config(&opts)?;

    match mode {
        Mode::File(path) => {
            let graph = read_graph(&path)
                .with_context(|| format!("could not read graph {}", path.display()))?;
            println!("{}", solve(&graph, &config)?);
        }
        Mode::Dataset(instance, root) => {
            let graph = instance.load(&root).with_context(|| {
                format!("could not read graph {}", instance.path(&root).display())
            })?;
            println!("{}", solve(&graph, &config)?);
        }
        Mode::Batch(root) => {
            let reports = experiment::run_root(&root, &config)
                .with_context(|| format!("could not scan {}", root.display()))?;
            for (i, report) in reports.iter().enumerate() {
                let mut title = report.title.clone();
                if let Some(k) = opts.k {
                    title.push_str(&format!(" K={k}"));
                }
                if i > 0 {
                    println!();
                }
                if opts.detailed {
                    print!("{}", experiment::render_detailed(&title, &report.summaries));
                } else {
                    print!("{}", experiment::render(&title, &report.summaries));
                }
            }
        }
    }
    Ok(())
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  greedy_misp -i <graph-file> [-k K] [--seed SEED]\n  greedy_misp -n <nodes> -d <density> -i <instance> [-k K] [--root DIR] [--seed SEED]\n  greedy_misp --batch <root> [--detailed] [-k K] [--seed SEED]\n\nOptions:\n  -i FILE|INSTANCE   Graph file, or instance number when -n is given\n  -n N               Dataset node count (1000, 2000 or 3000)\n  -d D               Dataset edge density, one decimal place\n  -k K               Sample among the K lowest-density candidates (default: deterministic)\n  --root DIR         Dataset root (default: {DEFAULT_ROOT})\n  --batch DIR        Run every new_<n>_dataset below DIR (or DIR itself) and summarize by density\n  --detailed         With --batch: add spread, range and 0.1 -> 0.9 change\n  --seed SEED        Seed for the randomized policy (default: OS entropy)\n"
    );
    std::process::exit(code)
}
