//! Source precedence, using figment::Jail for a sandboxed cwd and env.

use figment::Jail;
use godb_config::{ConfigError, GodbConfig};

/// Keep the developer's own `~/.config/godb` out of the picture.
fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().join("xdg");
    jail.set_env("XDG_CONFIG_HOME", dir.display());
}

#[test]
fn defaults_without_sources() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        let config = GodbConfig::load().expect("config loads");
        assert_eq!(config, GodbConfig::default());
        Ok(())
    });
}

#[test]
fn local_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            "godb.toml",
            r#"
[source]
name = "GO mirror"

[log]
level = "debug"
"#,
        )?;

        let config = GodbConfig::load().expect("config loads");
        assert_eq!(config.source.name, "GO mirror");
        assert_eq!(
            config.source.url,
            "http://current.geneontology.org/ontology/go-basic.obo"
        );
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.ontology.id_prefix, "GO");
        Ok(())
    });
}

#[test]
fn env_beats_local_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file("godb.toml", "[ontology]\nid_prefix = \"GO\"\n")?;
        jail.set_env("GODB_ONTOLOGY__ID_PREFIX", "PO");

        let config = GodbConfig::load().expect("config loads");
        assert_eq!(config.ontology.id_prefix, "PO");
        assert!(config.ontology.id_pattern().unwrap().matches("PO:0000001"));
        Ok(())
    });
}

#[test]
fn user_file_is_lowest_file_layer() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir("xdg/godb")?;
        jail.create_file(
            "xdg/godb/config.toml",
            "[source]\nname = \"from user\"\nurl = \"file:///srv/go.obo\"\n",
        )?;
        jail.create_file("godb.toml", "[source]\nname = \"from project\"\n")?;

        let config = GodbConfig::load().expect("config loads");
        assert_eq!(config.source.name, "from project");
        assert_eq!(config.source.url, "file:///srv/go.obo");
        Ok(())
    });
}

#[test]
fn invalid_prefix_fails_load() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("GODB_ONTOLOGY__ID_PREFIX", "GO:");

        let err = GodbConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn log_filter_variable_is_not_a_setting() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("GODB_LOG", "godb=trace");
        jail.set_env("GODB_LOG__LEVEL", "warn");

        let config = GodbConfig::load().expect("config loads");
        assert_eq!(config.log.level, "warn");
        Ok(())
    });
}
