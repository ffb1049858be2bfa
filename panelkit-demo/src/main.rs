//! Panelkit demo: lay out a sprite sheet as a panel and write it to a PNG.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use panelkit::layout::Align;
use panelkit::{
    AtlasLoader, BitmapControl, Control, DecorationCache, Direction, Insets, Layout, PanelConfig,
    Size, Theme,
};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &cli.config {
        Some(path) => PanelConfig::from_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => PanelConfig::default(),
    }
    .with_env();
    config.search_dirs.extend(cli.resources.iter().cloned());

    let loader = AtlasLoader::from_config(&config);
    let cache = DecorationCache::new(Theme::load(&config, &loader));

    let tags: Vec<&str> = cli.tags.iter().map(String::as_str).collect();
    let images = loader
        .collect(&cli.sheet, &tags)
        .with_context(|| format!("Failed to load sheet {}", cli.sheet))?;
    if images.is_empty() {
        bail!("no entries in {} match tags {:?}", cli.sheet, cli.tags);
    }
    tracing::info!(sheet = %cli.sheet, count = images.len(), "Loaded images");

    let mut layout: Layout<'_, Control> = Layout::new(&cache);
    let root = layout.add_group(Direction::Vertical, Size::ZERO);
    for chunk in images.into_vec().chunks(cli.columns.max(1)) {
        let row = layout.add_group(Direction::Horizontal, Size::ZERO);
        for entry in chunk {
            let control = BitmapControl::new([entry.image.clone()])?;
            let id = layout.add_item(control.into());
            layout.place(row, id, Align::Center, cli.decoration.as_deref(), Insets::all(2));
        }
        layout.place(root, row, Align::Left, None, Insets::ZERO);
    }

    let panel = layout.render(root);
    panel
        .save_png(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    tracing::info!(
        output = %cli.output.display(),
        width = panel.size().width,
        height = panel.size().height,
        "Wrote panel"
    );
    Ok(())
}
