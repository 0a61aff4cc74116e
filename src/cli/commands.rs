//! Command dispatch: builds a tree from the effective settings and runs
//! the requested passes over it.

use tracing::{debug, instrument};

use crate::arena::TreeArena;
use crate::cli::args::{Cli, Commands, Order};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::generator::{OsEntropy, SeededValues, TreeGenerator, ValueSource};
use crate::render::{format_lines, format_sequence, TreeRender};
use crate::traverse;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = effective_settings(cli)?;
    match &cli.command {
        Some(Commands::Tree) => _tree(&settings),
        Some(Commands::Traverse { order, mirror }) => _traverse(&settings, *order, *mirror),
        Some(Commands::Demo) => _demo(&settings),
        Some(Commands::Info) => _info(&settings),
        // Completions are emitted in main before dispatch
        Some(Commands::Completion { .. }) | None => Ok(()),
    }
}

/// Layered config with CLI flags on top.
fn effective_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load()?;
    if let Some(nodes) = cli.nodes {
        settings.nodes = nodes;
    }
    if let Some(modulus) = cli.modulus {
        settings.modulus = modulus;
    }
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn build_tree(settings: &Settings) -> CliResult<TreeArena> {
    let source: Box<dyn ValueSource> = match settings.seed {
        Some(seed) => Box::new(SeededValues::new(seed)),
        None => Box::new(OsEntropy),
    };
    let mut generator = TreeGenerator::new(source);
    let tree = generator.generate(settings.nodes, settings.modulus)?;
    if generator.degraded() {
        output::warning("entropy unavailable, node values degraded to 0");
    }
    Ok(tree)
}

#[instrument]
fn _tree(settings: &Settings) -> CliResult<()> {
    let tree = build_tree(settings)?;
    output::info(&tree.to_tree_string());
    Ok(())
}

#[instrument]
fn _traverse(settings: &Settings, order: Order, mirrored: bool) -> CliResult<()> {
    let mut tree = build_tree(settings)?;
    if mirrored {
        traverse::mirror(&mut tree);
    }
    let rendered = match order {
        Order::Level => format_lines(&traverse::level_order(&tree)),
        Order::LevelQlen => format_lines(&traverse::level_order_qlen(&tree)),
        Order::Pre => format_sequence(&traverse::pre_order(&tree)),
        Order::PreIter => format_sequence(&traverse::pre_order_iterative(&tree)),
        Order::MorrisPre => format_sequence(&traverse::morris_pre_order(&mut tree)),
        Order::In => format_sequence(&traverse::in_order(&tree)),
        Order::MorrisIn => format_sequence(&traverse::morris_in_order(&mut tree)),
        Order::LeftView => format_sequence(&traverse::left_view(&tree)),
        Order::TopView => format_sequence(&traverse::top_view(&mut tree)),
        Order::Zigzag => format_lines(&traverse::zigzag(&tree)),
        Order::Spiral => format_lines(&traverse::spiral(&tree)),
        Order::Rspiral => format_lines(&traverse::rspiral(&tree)),
    };
    output::info(&rendered);
    Ok(())
}

/// Every pass over one generated tree, the way the original demo ran.
#[instrument]
fn _demo(settings: &Settings) -> CliResult<()> {
    let mut tree = build_tree(settings)?;
    output::header(&format!(
        "generated {} nodes, height {}",
        tree.len(),
        tree.height()
    ));
    output::info(&tree.to_tree_string());

    output::header("level order");
    output::info(&format_lines(&traverse::level_order(&tree)));

    output::header("level order using queue length");
    output::info(&format_lines(&traverse::level_order_qlen(&tree)));

    output::header("zigzag order");
    output::info(&format_lines(&traverse::zigzag(&tree)));

    output::header("spiral order");
    output::info(&format_lines(&traverse::spiral(&tree)));

    output::header("rspiral order");
    output::info(&format_lines(&traverse::rspiral(&tree)));

    output::header("pre order");
    output::info(&format_sequence(&traverse::pre_order(&tree)));

    output::header("iterative pre order");
    output::info(&format_sequence(&traverse::pre_order_iterative(&tree)));

    output::header("in order");
    output::info(&format_sequence(&traverse::in_order(&tree)));

    output::header("Morris pre order");
    output::info(&format_sequence(&traverse::morris_pre_order(&mut tree)));

    output::header("Morris in order");
    output::info(&format_sequence(&traverse::morris_in_order(&mut tree)));

    output::header("left view");
    output::info(&format_sequence(&traverse::left_view(&tree)));

    output::header("top view");
    output::info(&format_sequence(&traverse::top_view(&mut tree)));

    output::header("mirrored level order");
    traverse::mirror(&mut tree);
    output::info(&format_lines(&traverse::level_order(&tree)));
    traverse::mirror(&mut tree);

    output::header("post order teardown");
    let freed = tree.teardown();
    output::info(&format_sequence(&freed));
    output::info(&format!("freed {} nodes", freed.len()));
    Ok(())
}

#[instrument]
fn _info(settings: &Settings) -> CliResult<()> {
    output::header("effective settings");
    output::info(&settings.to_toml());
    let source = match settings.seed {
        Some(seed) => format!("seeded ({})", seed),
        None => "OS entropy".to_string(),
    };
    output::info(&format!("value source: {}", source));
    Ok(())
}
