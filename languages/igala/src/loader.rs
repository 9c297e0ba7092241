use std::path::Path;

use lexis_core::dictionary::LoadError;

use crate::dictionary::IgalaDictionary;

pub struct IgalaLoader;

impl IgalaLoader {
    /// Load embedded dictionary data
    pub fn load_embedded() -> Result<IgalaDictionary, LoadError> {
        let json = include_str!("../data/igala_eng.json");
        tracing::info!("Loading embedded Igala dictionary...");
        let dict = IgalaDictionary::from_json(json)?;
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Load dictionary from file path (`.json` or `.tsv`)
    pub fn load_from_file(path: &Path) -> Result<IgalaDictionary, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading Igala dictionary from file: {}", path.display());
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let dict = match extension.as_deref() {
            Some("json") => IgalaDictionary::from_json(&content)?,
            Some("tsv") => IgalaDictionary::from_tsv(path.display().to_string(), &content)?,
            _ => {
                return Err(LoadError::InvalidFormat(format!(
                    "unsupported dictionary file {} (expected one of: {})",
                    path.display(),
                    Self::supported_formats().join(", ")
                )));
            }
        };

        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    pub fn supported_formats() -> Vec<String> {
        vec!["json".to_string(), "tsv".to_string()]
    }

    /// Merge two dictionaries (later entries override earlier ones)
    pub fn merge(base: IgalaDictionary, additional: IgalaDictionary) -> IgalaDictionary {
        base.merge(additional)
    }
}
