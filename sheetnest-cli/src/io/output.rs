use crate::config::NestConfig;
use serde::{Deserialize, Serialize};
use sheetnest::io::ext_repr::{ExtNestInstance, ExtNestSolution};

/// Everything written to `sol_{stem}.json`: the request, its solution and the config used
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NestOutput {
    #[serde(flatten)]
    pub instance: ExtNestInstance,
    pub solution: ExtNestSolution,
    pub config: NestConfig,
}
