use std::io;

use tracing::info;

use crate::app::AppContext;
use crate::helpers::confirm_save_before_exit;
use crate::menu::{Menu, MenuExit};
use crate::ui::format::cars;
use crate::ui::warning;

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let (mut store, report, path) = ctx.open_store_lenient()?;
    if !ctx.quiet() {
        match report {
            Some(report) => println!("Loaded {} from {}.", cars(report.loaded), path.display()),
            None => println!(
                "Unable to open {} for reading; starting with an empty list.",
                path.display()
            ),
        }
    }

    let stdin = io::stdin();
    let exit = Menu::new(&mut store, &path, stdin.lock(), io::stdout()).run()?;
    info!(?exit, "menu closed");

    if store.is_dirty() {
        let ui = ctx.ui(false, None)?;
        if ui.is_interactive() && exit == MenuExit::Chosen && confirm_save_before_exit(store.len())? {
            store.save(&path)?;
            println!("Saved {} to {}.", cars(store.len()), path.display());
        } else if !ctx.quiet() {
            eprintln!("{}", warning(&ui, "unsaved changes were discarded"));
        }
    }

    println!("Thank you for using carbase!");
    Ok(())
}
