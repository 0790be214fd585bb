use crate::config::{CONFIG_FILE, Config};
use crate::store::ResultStore;
use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }

    pub fn store(&self) -> ResultStore {
        ResultStore::new(&self.data_dir)
    }
}
