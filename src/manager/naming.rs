//! Random destination names for copy/move when the client supplies none.

use rand::seq::IndexedRandom;
use std::path::Path;
use tokio::fs;

const ADJECTIVES: &[&str] = &[
    "amber", "ancient", "bold", "bright", "calm", "clear", "crimson", "eager", "gentle", "golden",
    "hidden", "little", "misty", "quiet", "rapid", "silent", "silver", "vivid", "wild", "young",
];

const NOUNS: &[&str] = &[
    "brook", "canyon", "cloud", "dawn", "dusk", "forest", "garden", "harbor", "hill", "island",
    "meadow", "moon", "ocean", "prairie", "ridge", "river", "star", "storm", "sun", "valley",
];

const MAX_DRAWS: usize = 10;

/// Draw an `adjective_noun` name.
fn random_name() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES.choose(&mut rng).unwrap_or(&ADJECTIVES[0]);
    let noun = NOUNS.choose(&mut rng).unwrap_or(&NOUNS[0]);
    format!("{adjective}_{noun}")
}

async fn taken(dir: &Path, name: &str) -> bool {
    fs::try_exists(dir.join(name)).await.unwrap_or(false)
}

/// Generate a directory name that does not yet exist under `dir`. Draws up
/// to ten random names, then numbers the last draw (`_1`, `_2`, ...) until a
/// free name is found.
pub async fn unique_name(dir: &Path) -> String {
    let mut last = String::new();
    for _ in 0..MAX_DRAWS {
        last = random_name();
        if !taken(dir, &last).await {
            return last;
        }
    }

    let mut counter = 1u32;
    loop {
        let numbered = format!("{last}_{counter}");
        if !taken(dir, &numbered).await {
            return numbered;
        }
        counter += 1;
    }
}
