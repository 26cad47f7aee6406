use care_config::{ApiConfig, CareConfig, GeneralConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &CareConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CareConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let api_default = ApiConfig::default();
    let general_default = GeneralConfig::default();

    let mut warnings = Vec::new();

    if config.api.base_url == api_default.base_url
        && config.api.timeout_secs == api_default.timeout_secs
        && has_single_underscore_key(&env_keys, "CARECTL_API")
    {
        warnings.push(
            "API config appears default while CARECTL_API_* env vars exist. Use double underscores (example: CARECTL_API__BASE_URL)."
                .to_string(),
        );
    }

    if config.general.default_limit == general_default.default_limit
        && config.general.default_sort_order == general_default.default_sort_order
        && has_single_underscore_key(&env_keys, "CARECTL_GENERAL")
    {
        warnings.push(
            "General config appears default while CARECTL_GENERAL_* env vars exist. Use double underscores (example: CARECTL_GENERAL__DEFAULT_LIMIT)."
                .to_string(),
        );
    }

    warnings
}

/// `CARECTL_API_BASE_URL` style keys: the section prefix followed by one `_`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
