//! Integration tests for config layering.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use care_config::CareConfig;
use care_core::enums::SortOrder;
use figment::Jail;
use std::path::Path;

#[test]
fn local_toml_is_read() {
    Jail::expect_with(|jail| {
        jail.create_dir(".carectl")?;
        jail.create_file(
            ".carectl/config.toml",
            r#"
[api]
base_url = "https://api.clinic.example"
timeout_secs = 5

[general]
default_limit = 25
default_sort_order = "asc"
"#,
        )?;

        let config = CareConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.api.base_url, "https://api.clinic.example");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.general.default_limit, 25);
        assert_eq!(config.general.default_sort_order, SortOrder::Asc);
        Ok(())
    });
}

#[test]
fn env_beats_local_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".carectl")?;
        jail.create_file(
            ".carectl/config.toml",
            "[api]\nbase_url = \"https://from-file.example\"\n",
        )?;
        jail.set_env("CARECTL_API__BASE_URL", "https://from-env.example");
        jail.set_env("CARECTL_API__TOKEN", "tok-123");

        let config = CareConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.api.base_url, "https://from-env.example");
        assert_eq!(config.api.token, "tok-123");
        Ok(())
    });
}

#[test]
fn local_beats_global() {
    Jail::expect_with(|jail| {
        jail.create_file("global.toml", "[general]\ndefault_limit = 50\n[api]\ntimeout_secs = 9\n")?;
        jail.create_file("local.toml", "[general]\ndefault_limit = 15\n")?;

        let config: CareConfig =
            CareConfig::figment_with(Some(Path::new("global.toml")), Path::new("local.toml"))
                .extract()?;
        assert_eq!(config.general.default_limit, 15);
        assert_eq!(config.api.timeout_secs, 9);
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.set_env("CARECTL_API__BASE_URL", "ftp://nope");
        let result = CareConfig::load();
        assert!(result.is_err());
        Ok(())
    });
}
