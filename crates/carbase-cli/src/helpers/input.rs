//! Terminal prompts backed by dialoguer.

use dialoguer::Confirm;

/// Ask whether unsaved changes should be written before leaving the menu.
pub fn confirm_save_before_exit(count: usize) -> anyhow::Result<bool> {
    Confirm::new()
        .with_prompt(format!(
            "You have unsaved changes ({} cars in memory). Save before exit?",
            count
        ))
        .default(true)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}
