//! Generate-then-search pipeline.

use log::info;
use rand::Rng;
use serde::Serialize;

use crate::environment::{Environment, EnvironmentConfig, EnvironmentGenerator};
use crate::error::Result;
use crate::render::Renderer;
use crate::search::{CollectSearch, SearchResult};

/// One generated environment and the search run on it.
#[derive(Clone, Debug, Serialize)]
pub struct Episode {
    /// Generated environment
    pub environment: Environment,
    /// Search outcome (empty path when nothing qualifies)
    pub result: SearchResult,
}

impl Episode {
    /// Whether the search found a qualifying path
    pub fn solved(&self) -> bool {
        self.result.success
    }
}

/// Generate an environment once, then search it.
///
/// Configuration and generation errors propagate. An unsolvable environment
/// is not an error: the episode carries an empty path.
pub fn run_episode<G, R>(
    config: &EnvironmentConfig,
    rng: &mut G,
    renderer: &mut R,
) -> Result<Episode>
where
    G: Rng,
    R: Renderer + ?Sized,
{
    let generator = EnvironmentGenerator::new(config.clone())?;
    let environment = generator.generate_with_rng(rng)?;

    let result = CollectSearch::for_environment(&environment).run(renderer);
    if result.success {
        info!(
            "[Pipeline] path found: {} steps, {}/{} collected, {} states expanded",
            result.steps(),
            result.collected,
            result.total,
            result.states_expanded
        );
    } else {
        info!(
            "[Pipeline] no path after {} states ({:?})",
            result.states_expanded, result.failure_reason
        );
    }

    Ok(Episode {
        environment,
        result,
    })
}
