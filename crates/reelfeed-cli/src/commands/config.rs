use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_rec_config::{Config, CredentialStore, PathManager};

use crate::output::Output;
use crate::ConfigAction;

pub fn run(action: ConfigAction, output: &Output) -> Result<()> {
    let paths = PathManager::default();

    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default(&paths.config_file())
                .map_err(|e| eyre!("Failed to load config: {}", e))?;

            if output.is_human() {
                output.info(format!("Config file: {}", paths.config_file().display()));
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| eyre!("Failed to render config: {}", e))?;
                output.info(rendered);
            } else {
                let value = serde_json::to_value(&config)
                    .map_err(|e| eyre!("Failed to encode config: {}", e))?;
                output.json(&value);
            }
            Ok(())
        }
        ConfigAction::Init => {
            let path = paths.config_file();
            if path.exists() {
                return Err(eyre!("Config file already exists at {}", path.display()));
            }
            Config::default()
                .save_to_file(&path)
                .map_err(|e| eyre!("Failed to write config: {}", e))?;
            output.success(format!("Wrote default config to {}", path.display()));
            Ok(())
        }
        ConfigAction::SetToken => {
            let token = dialoguer::Password::new()
                .with_prompt("API token")
                .interact()
                .map_err(|e| eyre!("Failed to read token: {}", e))?;

            let mut store = CredentialStore::new(paths.credentials_file());
            store
                .load()
                .map_err(|e| eyre!("Failed to load credentials: {}", e))?;
            store.set_api_token(token);
            store
                .save()
                .map_err(|e| eyre!("Failed to save credentials: {}", e))?;
            output.success("API token saved");
            Ok(())
        }
    }
}
