use tracing::info;

use crate::app::AppContext;
use crate::cli::RemoveArgs;
use crate::errors::CliError;
use crate::ui::receipt;

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let (mut store, path) = ctx.open_store_for_update(false)?;
    let removed = store.remove_at(args.ordinal).map_err(CliError::from)?;
    store.save(&path)?;
    info!(ordinal = args.ordinal, path = %path.display(), "removed car");

    if !ctx.quiet() {
        let ui = ctx.ui(false, None)?;
        let summary = format!("{} {} ({})", removed.brand, removed.model, removed.registration);
        println!(
            "{}",
            receipt(
                &ui,
                "Removed car",
                &[
                    ("Car number", &args.ordinal.to_string()),
                    ("Car", &summary),
                    ("Remaining", &store.len().to_string()),
                ],
            )
        );
    }
    Ok(())
}
