use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: String,
    pub config_path: String,
    pub config_exists: bool,
    pub base_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    pub color: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub config_path: String,
    pub overwritten: bool,
}
