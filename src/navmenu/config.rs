use crate::error::{MenuError, Result};
use crate::link::Link;
use crate::link_container::LinkContainer;
use crate::menu::Menu;
use navmenu_templates::Templates;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILENAME: &str = "templates.json";

const DEFAULT_LINK_TEMPLATE: &str = "<a href=\"%url%\"%attributes%>%name%</a>";
const DEFAULT_LINK_CONTAINER_TEMPLATE: &str = "<li%attributes%>%link%</li>";
const DEFAULT_MENU_TEMPLATE: &str = "<ul%attributes%>%linksContainers%</ul>";

/// Templates used to render menus, stored in templates.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuConfig {
    /// Raw template contents by kind (e.g. "link", "menu")
    #[serde(default = "default_templates")]
    pub templates: BTreeMap<String, String>,
}

fn default_templates() -> BTreeMap<String, String> {
    BTreeMap::from([
        (Link::KIND.to_string(), DEFAULT_LINK_TEMPLATE.to_string()),
        (
            LinkContainer::KIND.to_string(),
            DEFAULT_LINK_CONTAINER_TEMPLATE.to_string(),
        ),
        (Menu::KIND.to_string(), DEFAULT_MENU_TEMPLATE.to_string()),
    ])
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            templates: default_templates(),
        }
    }
}

impl MenuConfig {
    /// Load config from the given directory, or return defaults if not found.
    ///
    /// Fails with [`MenuError::InvalidTemplate`] if a stored template has no placeholder.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no templates config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MenuError::Io)?;
        let config: MenuConfig =
            serde_json::from_str(&content).map_err(MenuError::Serialization)?;
        config.templates()?;
        debug!(
            path = %config_path.display(),
            count = config.templates.len(),
            "loaded templates config"
        );
        Ok(config)
    }

    /// Save config to the given directory. Nothing is written if any template is invalid.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        self.templates()?;
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MenuError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MenuError::Serialization)?;
        fs::write(config_path, content).map_err(MenuError::Io)?;
        Ok(())
    }

    /// Replaces the template of the given kind. Checked by [`MenuConfig::templates`]
    /// and [`MenuConfig::save`].
    pub fn set_template(&mut self, kind: &str, content: &str) {
        self.templates.insert(kind.to_string(), content.to_string());
    }

    /// Builds the template provider, failing on the first invalid template.
    pub fn templates(&self) -> Result<Templates> {
        Ok(Templates::try_from(self.templates.clone())?)
    }
}
