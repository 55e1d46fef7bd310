//! Random secret generation

use crate::core::{Code, GameConfig};
use rand::Rng;
use rand::seq::index::sample;

/// Draw a secret for `config`
///
/// With duplicates allowed every position is drawn independently; otherwise
/// positions are filled by sampling colors without replacement. Expects a
/// validated configuration.
pub fn generate_secret<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Code {
    let pegs: Vec<u8> = if config.duplicates_allowed {
        (0..config.code_length)
            .map(|_| rng.random_range(0..config.num_colors) as u8)
            .collect()
    } else {
        sample(rng, config.num_colors, config.code_length)
            .iter()
            .map(|i| i as u8)
            .collect()
    };
    Code::from_pegs(pegs)
}
