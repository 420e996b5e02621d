use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct NetworkConfig {
    pub name: String,
    pub node_url: String,
    pub symbol: String,
    pub block_explorer: String,
}
