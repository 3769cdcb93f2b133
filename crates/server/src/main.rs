use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use chisel_engine::paint::DyeColor;
use chisel_engine::world::UpdateFlags;
use chisel_engine::world::World;
use chisel_engine::world::block::BlockState;
use chisel_engine::world::catalog::BlockCatalog;
use chisel_engine::world::item::ItemStack;
use chisel_engine::world::position::{BlockPos, Direction};
use chisel_server::block::minecraft_catalog;
use chisel_server::config::ServerConfig;
use chisel_server::interaction::{Actor, InteractionResult, ToolContext, on_left_click_block};
use chisel_server::tools::{self, brush};

/// Handheld block tools for Minecraft 1.21.11.
#[derive(Parser, Debug)]
#[command(name = "chisel", version, about)]
struct Args {
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run a scripted demo world and log every tool outcome.
    #[arg(long, default_value_t = false)]
    demo: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = ServerConfig::load(args.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("Chisel -- handheld block tools");

    let catalog = Arc::new(minecraft_catalog().context("building block catalog")?);
    let ctx = ToolContext::standard(&catalog, &config.paint).context("building tool tables")?;

    tracing::info!(
        "Ready: {} blocks, {} families ({} blocks), {} paint categories",
        catalog.block_count(),
        ctx.variants.ring_count(),
        ctx.variants.registered_block_count(),
        ctx.palette.category_count()
    );

    if args.demo {
        run_demo(catalog, &ctx)?;
    }
    Ok(())
}

fn state_of(catalog: &BlockCatalog, name: &str, props: &[(&str, &str)]) -> Result<BlockState> {
    let ty = catalog
        .by_name(name)
        .with_context(|| format!("unknown block {}", name))?;
    props.iter().try_fold(catalog.default_state(ty), |s, (k, v)| {
        catalog
            .with_value(s, k, v)
            .with_context(|| format!("{} has no {}={}", name, k, v))
    })
}

fn log_click(world: &World, pos: BlockPos, result: InteractionResult) {
    let message = match result {
        InteractionResult::Consumed(Some(m)) => m.text,
        _ => "",
    };
    tracing::info!(
        "({}, {}, {}) is now {} {}",
        pos.x,
        pos.y,
        pos.z,
        world.catalog().describe(world.get_block(pos)),
        message
    );
}

fn run_demo(catalog: Arc<BlockCatalog>, ctx: &ToolContext) -> Result<()> {
    tracing::info!("Chisel demo");

    let world = World::new(Arc::clone(&catalog));
    let planks = BlockPos::new(0, 64, 0);
    let slab = BlockPos::new(2, 65, 0);
    let bed_head = BlockPos::new(4, 64, 0);
    let shulker = BlockPos::new(6, 64, 0);

    world.set_block(planks, state_of(&catalog, "oak_planks", &[])?, UpdateFlags::DEFAULT);
    world.set_block(slab, state_of(&catalog, "stone_slab", &[("type", "top")])?, UpdateFlags::DEFAULT);
    world.set_block(
        bed_head,
        state_of(&catalog, "white_bed", &[("facing", "east"), ("part", "head")])?,
        UpdateFlags::DEFAULT,
    );
    world.set_block(
        bed_head.relative(Direction::West),
        state_of(&catalog, "white_bed", &[("facing", "east"), ("part", "foot")])?,
        UpdateFlags::DEFAULT,
    );
    world.set_block(shulker, state_of(&catalog, "shulker_box", &[])?, UpdateFlags::DEFAULT);
    world.with_block_entity(shulker, |e| {
        e.set_custom_name(Some("Demo Box".into()));
        e.set_item(0, ItemStack::new("minecraft:diamond", 3));
    });

    let mut player = Actor::new("Builder");

    // ── Hammer ──────────────────────────────────────────────────────────
    player.main_hand = tools::construction_hammer();
    for _ in 0..4 {
        let result = on_left_click_block(ctx, &world, &mut player, planks);
        log_click(&world, planks, result);
    }
    player.sneaking = true;
    let result = on_left_click_block(ctx, &world, &mut player, planks);
    log_click(&world, planks, result);
    player.sneaking = false;

    let result = on_left_click_block(ctx, &world, &mut player, slab);
    log_click(&world, slab.below(), result);

    // ── Brush ───────────────────────────────────────────────────────────
    player.main_hand = tools::paint_brush();
    let result = on_left_click_block(ctx, &world, &mut player, bed_head);
    log_click(&world, bed_head, result);

    let grid = [tools::paint_brush(), tools::paint_bucket(DyeColor::Magenta)];
    player.main_hand = ctx
        .recipe
        .assemble(&grid)
        .context("brush charging recipe did not match")?;
    for line in brush::tooltip(&player.main_hand, ctx.recipe.brush_capacity) {
        tracing::info!("  {}", line);
    }

    for pos in [bed_head, shulker, planks] {
        let result = on_left_click_block(ctx, &world, &mut player, pos);
        log_click(&world, pos, result);
    }
    if let Some(entity) = world.block_entity(shulker) {
        tracing::info!(
            "Shulker kept name {:?} and {} stacks",
            entity.custom_name(),
            entity.items().iter().filter(|s| !s.is_empty()).count()
        );
    }

    tracing::info!(
        "Demo finished: {} writes, {} drops, brush has {} uses",
        world.take_changes().len(),
        world.take_drops().len(),
        brush::paint_uses(&player.main_hand)
    );
    Ok(())
}
