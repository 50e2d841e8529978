use forge_config::ForgeConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (`.env` included) and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ForgeConfig> {
    let mut config = ForgeConfig::load_with_dotenv()?;
    apply_flag_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_flag_overrides(config: &mut ForgeConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
}
