use forge_config::ForgeConfig;

/// Emit warnings for config that will make later commands fail or misbehave.
pub fn warn_unconfigured(config: &ForgeConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ForgeConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.analysis.is_configured() && has_env_prefix(&env_keys, "TEAMFORGE_ANALYSIS") {
        warnings.push(
            "Analysis API key is empty while TEAMFORGE_ANALYSIS* env vars exist. Use double underscores (example: TEAMFORGE_ANALYSIS__API_KEY)."
                .to_string(),
        );
    }

    if config.general.selection_seed.is_some() {
        warnings.push(
            "general.selection_seed is set; team selection is reproducible, not random.".to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
