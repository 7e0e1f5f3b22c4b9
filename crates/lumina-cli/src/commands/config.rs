//! Config command - print the resolved scene configuration

use super::ConfigSource;
use anyhow::{bail, Context, Result};
use lumina_core::SceneConfig;

pub fn run(source: ConfigSource, format: &str) -> Result<()> {
    let config = source.load()?;
    print!("{}", render(&config, format)?);
    Ok(())
}

fn render(config: &SceneConfig, format: &str) -> Result<String> {
    match format {
        "toml" => config
            .to_toml_string()
            .context("Failed to serialize config as TOML"),
        "json" => {
            let mut out = serde_json::to_string_pretty(config)
                .context("Failed to serialize config as JSON")?;
            out.push('\n');
            Ok(out)
        }
        other => bail!("unknown format '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_core::DeviceClass;

    #[test]
    fn toml_output_reloads() {
        let config = SceneConfig::mobile();
        let text = render(&config, "toml").unwrap();
        let back = SceneConfig::from_toml_str(&text, DeviceClass::Desktop).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn json_output() {
        let text = render(&SceneConfig::desktop(), "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["particle_count"], 2500);
        assert_eq!(value["palette"]["gold"], "#FCD34D");
        assert_eq!(value["integration"], "frame_independent");
    }

    #[test]
    fn unknown_format() {
        assert!(render(&SceneConfig::desktop(), "yaml").is_err());
    }
}
